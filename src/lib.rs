//! # tictactoe-badge
//!
//! Board support for the tic-tac-toe badge (ESP32-S3).
//!
//! Wraps every peripheral the game talks to:
//! - **Display**: 128×64 SSD1306 OLED over I2C
//! - **Buttons**: two push-buttons on falling-edge GPIO interrupts, debounced
//!   into [`tictactoe_core::InputLatches`]
//! - **LED matrix**: 5×5 WS2812 addressable RGB LEDs via RMT
//! - **Indicators**: blue / green / red outcome lamps
//! - **Buzzer**: square-wave tones by GPIO toggling
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let peripherals = tictactoe_badge::init();
//! let resources = tictactoe_badge::split_resources!(peripherals);
//!
//! let display: tictactoe_badge::Display = resources.display.into();
//! let buttons: tictactoe_badge::Buttons = resources.buttons.into();
//! let matrix: tictactoe_badge::LedMatrix = resources.matrix.into();
//! ```

#![no_std]

mod buttons;
mod buzzer;
mod display;
mod indicators;
mod led_matrix;
mod outputs;

pub use buttons::Buttons;
pub use buzzer::Buzzer;
pub use display::Display;
use esp_hal::{
    Blocking,
    assign_resources,
    clock::{
        Clock,
        CpuClock,
    },
    gpio::{
        Level,
        Output,
        OutputConfig,
    },
    rmt::{
        Rmt,
        Tx,
        TxChannelConfig,
        TxChannelCreator as _,
    },
    rom,
    time::Rate,
};
pub use indicators::Indicators;
pub use led_matrix::LedMatrix;
pub use outputs::BoardOutputs;

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        display: DisplayResources<'d> {
            sda: GPIO14,
            scl: GPIO15,
            i2c: I2C0,
        },
        buttons: ButtonResources<'d> {
            a: GPIO5,
            b: GPIO6,
            io: IO_MUX,
        },
        matrix: MatrixResources<'d> {
            power: GPIO17,
            io: GPIO7,
            rmt: RMT,
        },
        indicators: IndicatorResources<'d> {
            blue: GPIO12,
            green: GPIO11,
            red: GPIO13,
        },
        buzzer: BuzzerResources<'d> {
            pin: GPIO21,
        }
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// Minimal CPU clock switcher for ESP32-S3.
///
/// Steps through an intermediate frequency before reaching the target,
/// which is required by the hardware.
fn set_cpu_clock(cpu_clock_speed: CpuClock) {
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .sysclk_conf()
        .modify(|_, w| unsafe { w.soc_clk_sel().bits(1) });
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .cpu_per_conf()
        .modify(|_, w| unsafe {
            let _ = w.pll_freq_sel().set_bit();
            w.cpuperiod_sel().bits(match cpu_clock_speed {
                CpuClock::_80MHz => 0,
                CpuClock::_160MHz => 1,
                CpuClock::_240MHz => 2,
                _ => panic!("Unsupported CPU clock speed"),
            })
        });

    rom::ets_update_cpu_frequency_rom(cpu_clock_speed.frequency().as_mhz());
}

/// Initialise the board and return the raw peripheral set.
///
/// Call this once at the top of `main`, then use [`split_resources!`] to
/// break the peripherals into typed resource groups.
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    set_cpu_clock(CpuClock::_160MHz);
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}

// ── Resource → peripheral conversions ───────────────────────────────────────

impl From<esp_hal::peripherals::Peripherals> for Resources<'_> {
    fn from(peripherals: esp_hal::peripherals::Peripherals) -> Self {
        split_resources!(peripherals)
    }
}

impl<'a> From<MatrixResources<'a>> for esp_hal::rmt::Channel<'a, Blocking, Tx> {
    fn from(res: MatrixResources<'a>) -> Self {
        // The matrix supply switch has to stay on for the lifetime of the program.
        core::mem::forget(Output::new(res.power, Level::High, OutputConfig::default()));
        let rmt = Rmt::new(res.rmt, Rate::from_mhz(40)).unwrap();
        let tx_config = TxChannelConfig::default().with_clk_divider(1);
        rmt.channel0.configure_tx(res.io, tx_config).unwrap()
    }
}

impl<'a> From<MatrixResources<'a>> for LedMatrix<'a> {
    fn from(res: MatrixResources<'a>) -> Self {
        LedMatrix::new(res.into())
    }
}
