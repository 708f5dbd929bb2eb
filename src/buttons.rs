//! Place/confirm (A) and move-cursor (B) buttons.
//!
//! Both pins are pulled up and raise a GPIO interrupt on the falling edge.
//! The handler timestamps the edge and hands it to the debounce latches; the
//! poll loop drains the latches once per cycle.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Instant;
use esp_hal::{
    gpio::{
        Event,
        Input,
        InputConfig,
        Io,
        Pull,
    },
    handler,
};
use tictactoe_core::{
    Button,
    InputLatches,
};

use crate::ButtonResources;

static LATCHES: InputLatches = InputLatches::new();

static PINS: Mutex<RefCell<Option<ButtonPins>>> = Mutex::new(RefCell::new(None));

struct ButtonPins {
    a: Input<'static>,
    b: Input<'static>,
}

/// Owns the GPIO interrupt for the two buttons.
pub struct Buttons {
    _io: Io<'static>,
}

impl From<ButtonResources<'static>> for Buttons {
    fn from(res: ButtonResources<'static>) -> Self {
        let mut io = Io::new(res.io);
        io.set_interrupt_handler(on_edge);

        let pull_up = InputConfig::default().with_pull(Pull::Up);
        let mut a = Input::new(res.a, pull_up);
        let mut b = Input::new(res.b, pull_up);

        critical_section::with(|cs| {
            a.listen(Event::FallingEdge);
            b.listen(Event::FallingEdge);
            PINS.borrow_ref_mut(cs).replace(ButtonPins { a, b });
        });

        Self { _io: io }
    }
}

impl Buttons {
    /// Latches filled by the interrupt handler.
    pub fn latches(&self) -> &'static InputLatches {
        &LATCHES
    }
}

#[handler]
fn on_edge() {
    // Free-running microsecond counter; the latches compare with wrapping
    // arithmetic, so truncation is fine.
    let now_us = Instant::now().as_micros() as u32;

    critical_section::with(|cs| {
        let mut pins = PINS.borrow_ref_mut(cs);
        let Some(pins) = pins.as_mut() else {
            return;
        };

        for (button, pin) in [
            (Button::PlaceConfirm, &mut pins.a),
            (Button::MoveCursor, &mut pins.b),
        ] {
            if pin.is_interrupt_set() {
                pin.clear_interrupt();
                LATCHES.record(button, now_us);
            }
        }
    });
}
