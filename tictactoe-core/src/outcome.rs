//! Outcome → output asset table: matrix bitmap, colour, tone and indicator lamp.

use embassy_time::Duration;
use palette::Srgb;

use crate::board::Player;
use crate::session::GamePhase;

/// Pixels on the 5×5 matrix.
pub const MATRIX_PIXELS: usize = 25;

/// One full matrix frame, in chain order.
pub type MatrixFrame = [Srgb<u8>; MATRIX_PIXELS];

pub const OFF: Srgb<u8> = Srgb::new(0, 0, 0);

/// Row-major 5×5 bitmap; index 0 is the first pixel on the chain.
pub type Symbol = [bool; MATRIX_PIXELS];

const fn symbol(rows: [u8; 5]) -> Symbol {
    let mut out = [false; MATRIX_PIXELS];
    let mut row = 0;
    while row < 5 {
        let mut col = 0;
        while col < 5 {
            out[row * 5 + col] = rows[row] & (0b1_0000 >> col) != 0;
            col += 1;
        }
        row += 1;
    }
    out
}

pub const SYMBOL_X: Symbol = symbol([0b10001, 0b01010, 0b00100, 0b01010, 0b10001]);
pub const SYMBOL_O: Symbol = symbol([0b01110, 0b10001, 0b10001, 0b10001, 0b01110]);
pub const SYMBOL_DRAW: Symbol = symbol([0b00100, 0b01010, 0b10001, 0b10001, 0b10001]);

/// Paints `symbol` in `color` on an otherwise dark frame.
pub fn frame(symbol: &Symbol, color: Srgb<u8>) -> MatrixFrame {
    let mut out = [OFF; MATRIX_PIXELS];
    for (pixel, &lit) in out.iter_mut().zip(symbol) {
        if lit {
            *pixel = color;
        }
    }
    out
}

pub const BLANK_FRAME: MatrixFrame = [OFF; MATRIX_PIXELS];

/// Discrete indicator lamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    Blue,
    Green,
    /// Draw lamp, also flashed on an invalid move.
    Red,
}

impl Indicator {
    pub const ALL: [Indicator; 3] = [Indicator::Blue, Indicator::Green, Indicator::Red];
}

/// A square-wave tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    pub freq_hz: u32,
    pub duration: Duration,
}

impl Tone {
    pub const fn new(freq_hz: u32, duration_ms: u64) -> Self {
        Self {
            freq_hz,
            duration: Duration::from_millis(duration_ms),
        }
    }

    /// Time between pin toggles, or `None` for a rest (0 Hz). Never shorter
    /// than 1 µs.
    pub fn half_period(&self) -> Option<Duration> {
        if self.freq_hz == 0 {
            return None;
        }
        Some(Duration::from_micros((500_000 / u64::from(self.freq_hz)).max(1)))
    }
}

/// Short low buzz for a placement on a taken cell.
pub const REJECT_TONE: Tone = Tone::new(200, 300);

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
}

impl Outcome {
    pub const fn from_phase(phase: GamePhase) -> Option<Self> {
        match phase {
            GamePhase::InProgress => None,
            GamePhase::WonBy(Player::X) => Some(Outcome::XWins),
            GamePhase::WonBy(Player::O) => Some(Outcome::OWins),
            GamePhase::Drawn => Some(Outcome::Draw),
        }
    }

    pub fn assets(self) -> &'static OutcomeAssets {
        &OUTCOME_ASSETS[self as usize]
    }
}

/// Everything the outputs show for one outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeAssets {
    pub symbol: Symbol,
    pub color: Srgb<u8>,
    pub tone: Tone,
    pub indicator: Indicator,
}

impl OutcomeAssets {
    pub fn frame(&self) -> MatrixFrame {
        frame(&self.symbol, self.color)
    }
}

/// Indexed by `Outcome as usize`.
static OUTCOME_ASSETS: [OutcomeAssets; 3] = [
    OutcomeAssets {
        symbol: SYMBOL_X,
        color: Srgb::new(0, 0, 200),
        tone: Tone::new(1000, 600),
        indicator: Indicator::Blue,
    },
    OutcomeAssets {
        symbol: SYMBOL_O,
        color: Srgb::new(0, 200, 0),
        tone: Tone::new(700, 600),
        indicator: Indicator::Green,
    },
    OutcomeAssets {
        symbol: SYMBOL_DRAW,
        color: Srgb::new(200, 0, 0),
        tone: Tone::new(500, 600),
        indicator: Indicator::Red,
    },
];
