//! One iteration of the poll loop: drain input, step the session, render.
//!
//! Pacing (the sleep between cycles) belongs to the caller.

use crate::input::InputLatches;
use crate::render::{
    FeedbackOutputs,
    Screen,
    clear_feedback,
    draw_board,
    present_feedback,
};
use crate::session::{
    GameSession,
    StepReport,
};

/// What a cycle did, plus whether the board frame reached the display.
#[derive(Debug)]
pub struct Cycle<E> {
    pub report: StepReport,
    pub draw: Result<(), E>,
}

/// Blanks the feedback outputs and puts the session's board on screen.
/// Call once before the first [`run_cycle`].
pub async fn start<D, F>(
    session: &GameSession,
    screen: &mut D,
    outputs: &mut F,
) -> Result<(), D::Error>
where
    D: Screen,
    F: FeedbackOutputs,
{
    clear_feedback(outputs).await;
    draw_board(session, screen).and_then(|()| screen.flush())
}

/// Runs one poll cycle. The board is drawn and flushed every cycle whether
/// or not anything changed, before lamps, matrix and buzzer react to the
/// report.
pub async fn run_cycle<D, F>(
    session: &mut GameSession,
    latches: &InputLatches,
    screen: &mut D,
    outputs: &mut F,
) -> Cycle<D::Error>
where
    D: Screen,
    F: FeedbackOutputs,
{
    let events = latches.drain();
    let report = session.step(events);
    let draw = draw_board(session, screen).and_then(|()| screen.flush());
    present_feedback(session, &report, outputs).await;
    Cycle { report, draw }
}
