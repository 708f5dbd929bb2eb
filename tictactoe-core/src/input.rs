//! Debounced button latches shared between the GPIO interrupt and the poll loop.
//!
//! Each latch holds a pending flag and the timestamp of the last accepted edge.
//! The interrupt is the only writer of the timestamp and the only setter of the
//! flag; the poll loop only clears the flag. Both fields are atomics, so no lock
//! is needed on either side.

use core::sync::atomic::{
    AtomicBool,
    AtomicU32,
    Ordering,
};

use crate::config::DEBOUNCE_WINDOW_US;

/// Logical buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Places a mark, or counts a restart press once the game is over.
    PlaceConfirm,
    MoveCursor,
}

/// Presses drained from the latches in one poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvents {
    pub place_confirm: bool,
    pub move_cursor: bool,
}

impl InputEvents {
    pub const fn any(&self) -> bool {
        self.place_confirm || self.move_cursor
    }
}

/// Edge latch for a single button.
pub struct ButtonLatch {
    pending: AtomicBool,
    last_accepted_us: AtomicU32,
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonLatch {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
            last_accepted_us: AtomicU32::new(0),
        }
    }

    /// Interrupt side. Accepts the edge if more than the debounce window has
    /// passed since the last accepted one. `now_us` is a free-running
    /// microsecond counter; wrap-around is handled.
    pub fn record_edge(&self, now_us: u32) -> bool {
        let last = self.last_accepted_us.load(Ordering::Relaxed);
        if now_us.wrapping_sub(last) <= DEBOUNCE_WINDOW_US {
            return false;
        }
        self.last_accepted_us.store(now_us, Ordering::Relaxed);
        self.pending.store(true, Ordering::Release);
        true
    }

    /// Poll side. Returns whether a press was pending and clears it.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::Acquire)
    }
}

/// Latches for both buttons. Lives in a `static` on the firmware side.
pub struct InputLatches {
    place_confirm: ButtonLatch,
    move_cursor: ButtonLatch,
}

impl Default for InputLatches {
    fn default() -> Self {
        Self::new()
    }
}

impl InputLatches {
    pub const fn new() -> Self {
        Self {
            place_confirm: ButtonLatch::new(),
            move_cursor: ButtonLatch::new(),
        }
    }

    pub const fn latch(&self, button: Button) -> &ButtonLatch {
        match button {
            Button::PlaceConfirm => &self.place_confirm,
            Button::MoveCursor => &self.move_cursor,
        }
    }

    /// Called from the edge interrupt.
    pub fn record(&self, button: Button, now_us: u32) -> bool {
        self.latch(button).record_edge(now_us)
    }

    /// Drains both flags. Every pending press is reported exactly once.
    pub fn drain(&self) -> InputEvents {
        InputEvents {
            place_confirm: self.place_confirm.take(),
            move_cursor: self.move_cursor.take(),
        }
    }
}
