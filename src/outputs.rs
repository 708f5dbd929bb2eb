//! The board's non-display outputs behind the game's feedback interface.

use embassy_time::{
    Duration,
    Timer,
};
use tictactoe_core::{
    FeedbackOutputs,
    Indicator,
    MatrixFrame,
    Tone,
};

use crate::{
    Buzzer,
    Indicators,
    LedMatrix,
};

/// LED matrix, indicator lamps and buzzer, driven together by the game loop.
pub struct BoardOutputs<'a> {
    pub matrix: LedMatrix<'a>,
    pub indicators: Indicators,
    pub buzzer: Buzzer,
}

impl FeedbackOutputs for BoardOutputs<'_> {
    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        self.indicators.set(indicator, on);
    }

    async fn show_frame(&mut self, frame: &MatrixFrame) {
        self.matrix.show(frame).await;
    }

    async fn play_tone(&mut self, tone: Tone) {
        self.buzzer.tone(tone).await;
    }

    async fn pause(&mut self, duration: Duration) {
        Timer::after(duration).await;
    }
}
