//! Timing and gameplay constants.

use embassy_time::Duration;

/// Minimum time between accepted edges on one button, in microseconds.
pub const DEBOUNCE_WINDOW_US: u32 = 200_000;

/// Pause between poll cycles. Also the input-to-feedback latency bound.
pub const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// How long the reject indicator stays lit after an invalid move,
/// tone included.
pub const REJECT_FLASH: Duration = Duration::from_millis(700);

/// Confirm presses needed after a game ends to start a new one.
pub const RESTART_PRESSES: u8 = 2;

/// Display canvas.
pub const SCREEN_W: i32 = 128;
pub const SCREEN_H: i32 = 64;
