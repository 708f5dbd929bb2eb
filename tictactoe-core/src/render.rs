//! Rendering the session onto the display, the LED matrix, the indicator
//! lamps and the buzzer.
//!
//! The display is redrawn in full every cycle. The other outputs only change
//! when a step reports something: terminal-state entry, a rejected move or a
//! reset.
//!
//! Board orientation: column maps to x, row maps to y. Cell `(row, col)` has
//! its top-left pixel at `(col * CELL_W, row * CELL_H)`.

use embassy_time::Duration;
use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::FONT_6X10,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{
        Line,
        PrimitiveStyle,
        Rectangle,
    },
    text::{
        Baseline,
        Text,
    },
};

use crate::board::{
    Cell,
    SIZE,
};
use crate::config::{
    REJECT_FLASH,
    SCREEN_H,
    SCREEN_W,
};
use crate::outcome::{
    BLANK_FRAME,
    Indicator,
    MatrixFrame,
    Outcome,
    REJECT_TONE,
    Tone,
};
use crate::session::{
    GameSession,
    PlaceOutcome,
    StepReport,
};

// ── Board geometry ──────────────────────────────────────────────────────────
pub const CELL_W: i32 = 40;
pub const CELL_H: i32 = 20;

const CURSOR_INSET: i32 = 2;
const CURSOR_SIZE: Size = Size::new(36, 16);
const GLYPH_OFFSET: Point = Point::new(17, 5);

/// Top-left pixel of a board cell.
pub const fn cell_origin(row: usize, col: usize) -> Point {
    Point::new(col as i32 * CELL_W, row as i32 * CELL_H)
}

/// Draws grid, cursor outline and every placed mark. Clears first; the
/// caller flushes.
pub fn draw_board<D>(session: &GameSession, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    for i in 1..SIZE as i32 {
        let y = i * CELL_H;
        Line::new(Point::new(0, y), Point::new(SCREEN_W - 1, y))
            .into_styled(stroke)
            .draw(target)?;
        let x = i * CELL_W;
        Line::new(Point::new(x, 0), Point::new(x, SCREEN_H - 1))
            .into_styled(stroke)
            .draw(target)?;
    }

    let cursor = session.cursor();
    Rectangle::new(
        cell_origin(cursor.row, cursor.col) + Point::new(CURSOR_INSET, CURSOR_INSET),
        CURSOR_SIZE,
    )
    .into_styled(stroke)
    .draw(target)?;

    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    for (row, col, cell) in session.board().cells() {
        let Cell::Occupied(player) = cell else {
            continue;
        };
        let mut buf = [0u8; 4];
        let glyph = player.symbol().encode_utf8(&mut buf);
        Text::with_baseline(glyph, cell_origin(row, col) + GLYPH_OFFSET, style, Baseline::Top)
            .draw(target)?;
    }

    Ok(())
}

/// A display that buffers a full frame and sends it on [`flush`](Screen::flush).
pub trait Screen: DrawTarget<Color = BinaryColor> {
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Non-display outputs. Methods that take time are async and return once the
/// hardware is done.
#[allow(async_fn_in_trait)]
pub trait FeedbackOutputs {
    fn set_indicator(&mut self, indicator: Indicator, on: bool);

    /// Pushes one frame to the LED matrix.
    async fn show_frame(&mut self, frame: &MatrixFrame);

    async fn play_tone(&mut self, tone: Tone);

    async fn pause(&mut self, duration: Duration);
}

/// All lamps off, matrix blank.
pub async fn clear_feedback<F: FeedbackOutputs>(outputs: &mut F) {
    for indicator in Indicator::ALL {
        outputs.set_indicator(indicator, false);
    }
    outputs.show_frame(&BLANK_FRAME).await;
}

/// Drives lamps, matrix and buzzer for what `report` says just happened.
pub async fn present_feedback<F: FeedbackOutputs>(
    session: &GameSession,
    report: &StepReport,
    outputs: &mut F,
) {
    if report.was_reset() {
        clear_feedback(outputs).await;
        return;
    }

    match report.place {
        Some(PlaceOutcome::Won(_) | PlaceOutcome::Drawn) => {
            if let Some(outcome) = Outcome::from_phase(session.phase()) {
                announce_outcome(outcome, outputs).await;
            }
        }
        Some(PlaceOutcome::Rejected) => flash_reject(outputs).await,
        _ => {}
    }
}

async fn announce_outcome<F: FeedbackOutputs>(outcome: Outcome, outputs: &mut F) {
    let assets = outcome.assets();
    outputs.set_indicator(assets.indicator, true);
    outputs.show_frame(&assets.frame()).await;
    outputs.play_tone(assets.tone).await;
}

async fn flash_reject<F: FeedbackOutputs>(outputs: &mut F) {
    outputs.set_indicator(Indicator::Red, true);
    outputs.play_tone(REJECT_TONE).await;
    let rest = REJECT_FLASH
        .checked_sub(REJECT_TONE.duration)
        .unwrap_or(Duration::from_ticks(0));
    outputs.pause(rest).await;
    outputs.set_indicator(Indicator::Red, false);
}
