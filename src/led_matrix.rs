//! WS2812 5×5 LED matrix driver using the RMT peripheral.
//!
//! The 25 LEDs are one chain. Frames are pushed in chain order, row-major
//! from the top-left pixel.

extern crate alloc;

use defmt::error;
use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::{
    Blocking,
    gpio::Level,
    rmt::{
        PulseCode,
        Tx,
    },
};
use palette::Srgb;
use tictactoe_core::{
    MatrixFrame,
    outcome::BLANK_FRAME,
};

/// WS2812 matrix driver.
///
/// Keeps the last frame in memory; [`show`](LedMatrix::show) replaces it and
/// flushes to hardware.
pub struct LedMatrix<'a> {
    channel: Option<esp_hal::rmt::Channel<'a, Blocking, Tx>>,
    framebuffer: MatrixFrame,
}

impl<'a> LedMatrix<'a> {
    pub const fn new(channel: esp_hal::rmt::Channel<'a, Blocking, Tx>) -> Self {
        Self {
            channel: Some(channel),
            framebuffer: BLANK_FRAME,
        }
    }

    /// Replace the whole frame and push it out.
    pub async fn show(&mut self, frame: &MatrixFrame) {
        self.framebuffer = *frame;
        self.update().await;
    }

    /// Flush the framebuffer to the physical LEDs.
    pub async fn update(&mut self) {
        let Some(channel) = self.channel.take() else {
            error!("RMT channel lost during previous transmission");
            return;
        };

        let pulses = self
            .framebuffer
            .iter()
            .flat_map(|color: &Srgb<u8>| {
                // WS2812 expects GRB byte order
                [
                    Self::byte_to_pulses(color.green),
                    Self::byte_to_pulses(color.red),
                    Self::byte_to_pulses(color.blue),
                ]
                .into_iter()
                .flatten()
            })
            .chain(core::iter::once(PulseCode::end_marker()))
            .collect::<alloc::vec::Vec<_>>();

        let transaction = match channel.transmit(&pulses) {
            Ok(t) => t,
            Err(e) => {
                error!("RMT transmit failed: {}", e);
                return;
            }
        };

        self.channel = Some(match transaction.wait() {
            Ok(ch) => ch,
            Err((err, ch)) => {
                error!("RMT transaction failed: {}", err);
                ch
            }
        });

        // WS2812 latch/reset time
        Timer::after(Duration::from_micros(50)).await;
    }

    // ── Internal helpers ────────────────────────────────────────────────

    /// WS2812 bit timing at 40 MHz RMT clock.
    const fn bit_to_pulse(bit: bool) -> PulseCode {
        if bit {
            // '1': 0.8 µs high (32 ticks), 0.45 µs low (18 ticks)
            PulseCode::new(Level::High, 32, Level::Low, 18)
        } else {
            // '0': 0.4 µs high (16 ticks), 0.85 µs low (34 ticks)
            PulseCode::new(Level::High, 16, Level::Low, 34)
        }
    }

    fn byte_to_pulses(byte: u8) -> [PulseCode; 8] {
        let mut pulses = [PulseCode::default(); 8];
        for (i, pulse) in pulses.iter_mut().enumerate() {
            *pulse = Self::bit_to_pulse((byte >> (7 - i)) & 1 != 0);
        }
        pulses
    }
}
