//! Passive buzzer driven by toggling a GPIO at the tone frequency.

use embassy_time::{
    Instant,
    Ticker,
    Timer,
};
use esp_hal::gpio::{
    Level,
    Output,
    OutputConfig,
};
use tictactoe_core::Tone;

use crate::BuzzerResources;

/// Controls the buzzer pin.
pub struct Buzzer {
    pin: Output<'static>,
}

impl From<BuzzerResources<'static>> for Buzzer {
    fn from(res: BuzzerResources<'static>) -> Self {
        Self {
            pin: Output::new(res.pin, Level::Low, OutputConfig::default()),
        }
    }
}

impl Buzzer {
    /// Play a square wave for the tone's duration, then leave the pin low.
    /// A zero frequency is a rest.
    pub async fn tone(&mut self, tone: Tone) {
        let Some(half_period) = tone.half_period() else {
            Timer::after(tone.duration).await;
            return;
        };

        let mut ticker = Ticker::every(half_period);
        let end = Instant::now() + tone.duration;
        while Instant::now() < end {
            self.pin.toggle();
            ticker.next().await;
        }
        self.pin.set_low();
    }
}
