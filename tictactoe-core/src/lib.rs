//! # tictactoe-core
//!
//! Hardware-independent part of the tic-tac-toe badge:
//! - **board**: 3×3 board, win and draw detection
//! - **session**: the game state machine (placement, cursor, restart counting)
//! - **input**: debounced per-button latches shared with the edge interrupt
//! - **outcome**: outcome → matrix symbol, colour, tone and indicator table
//! - **render**: board drawing with `embedded-graphics` and the feedback sequence
//! - **driver**: one poll-loop cycle tying the above together
//!
//! The firmware crate supplies the display, LED matrix, lamps and buzzer.

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod config;
pub mod driver;
pub mod input;
pub mod outcome;
pub mod render;
pub mod session;

pub use board::{
    Board,
    Cell,
    Player,
};
pub use driver::{
    Cycle,
    run_cycle,
    start,
};
pub use input::{
    Button,
    InputEvents,
    InputLatches,
};
pub use outcome::{
    Indicator,
    MatrixFrame,
    Outcome,
    Tone,
};
pub use render::{
    FeedbackOutputs,
    Screen,
    clear_feedback,
    draw_board,
};
pub use session::{
    ConfirmOutcome,
    Cursor,
    GamePhase,
    GameSession,
    PlaceOutcome,
    StepReport,
};
