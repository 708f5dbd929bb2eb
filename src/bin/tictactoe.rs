//! Two-player tic-tac-toe on the badge.
//!
//! - B moves the cursor across the 3×3 grid
//! - A places the current player's mark under the cursor
//! - A win or draw lights the matching lamp, shows a symbol on the LED matrix
//!   and plays a tone
//! - Two presses of A after the game ends start a new one

#![no_std]
#![no_main]

use defmt::{
    debug,
    error,
    info,
    warn,
};
use embassy_executor::Spawner;
use embassy_time::Timer;
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
#[allow(clippy::wildcard_imports)]
use tictactoe_badge::*;
use tictactoe_core::{
    ConfirmOutcome,
    GameSession,
    PlaceOutcome,
    StepReport,
    config::{
        POLL_INTERVAL,
        RESTART_PRESSES,
    },
    run_cycle,
    start,
};

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

fn log_report(session: &GameSession, report: &StepReport) {
    match report.place {
        Some(PlaceOutcome::Placed(player)) => {
            debug!("{} placed, {} to move", player, session.current_player());
        }
        Some(PlaceOutcome::Won(player)) => {
            info!("Player {} wins! Press A twice to play again", player.symbol());
        }
        Some(PlaceOutcome::Drawn) => info!("Draw! Press A twice to play again"),
        Some(PlaceOutcome::Rejected) => warn!("Cell already taken, pick another"),
        Some(PlaceOutcome::Ignored) | None => {}
    }

    match report.confirm {
        Some(ConfirmOutcome::Counted(n)) => info!("restart press {}/{}", n, RESTART_PRESSES),
        Some(ConfirmOutcome::Reset) => info!("Board reset"),
        Some(ConfirmOutcome::Ignored) | None => {}
    }

    if report.cursor_moved {
        let cursor = session.cursor();
        debug!("cursor at row {} col {}", cursor.row, cursor.col);
    }
}

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let peripherals = tictactoe_badge::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 16 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let mut display: Display = resources.display.into();
    let mut outputs = BoardOutputs {
        matrix: resources.matrix.into(),
        indicators: resources.indicators.into(),
        buzzer: resources.buzzer.into(),
    };
    let buttons: Buttons = resources.buttons.into();
    let latches = buttons.latches();

    let mut session = GameSession::new();
    if let Err(e) = start(&session, &mut display, &mut outputs).await {
        error!("display update failed: {}", defmt::Debug2Format(&e));
    }
    info!("Tic-tac-toe ready, {} to move", session.current_player().symbol());

    loop {
        let cycle = run_cycle(&mut session, latches, &mut display, &mut outputs).await;
        if let Err(e) = cycle.draw {
            error!("display update failed: {}", defmt::Debug2Format(&e));
        }
        log_report(&session, &cycle.report);

        Timer::after(POLL_INTERVAL).await;
    }
}
