//! Game session state machine.

use crate::board::{
    Board,
    Player,
    SIZE,
};
use crate::config::RESTART_PRESSES;
use crate::input::InputEvents;

/// Cursor over the board. Always in range; moves wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    pub col: usize,
    pub row: usize,
}

impl Cursor {
    pub const ORIGIN: Self = Self { col: 0, row: 0 };

    /// Next cell in raster order (left to right, top to bottom, wrapping).
    pub const fn advance(self) -> Self {
        let col = (self.col + 1) % SIZE;
        let row = if col == 0 { (self.row + 1) % SIZE } else { self.row };
        Self { col, row }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GamePhase {
    InProgress,
    WonBy(Player),
    Drawn,
}

impl GamePhase {
    pub const fn is_over(self) -> bool {
        !matches!(self, GamePhase::InProgress)
    }
}

/// Result of a placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaceOutcome {
    /// Mark placed, game continues with the other player.
    Placed(Player),
    Won(Player),
    Drawn,
    /// Target cell already taken; nothing changed.
    Rejected,
    /// Game is over; placements do nothing.
    Ignored,
}

/// Result of a confirm press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfirmOutcome {
    /// Game still in progress; confirm is a no-op.
    Ignored,
    /// Press counted towards a restart; carries the running count.
    Counted(u8),
    Reset,
}

/// What one poll cycle did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepReport {
    pub place: Option<PlaceOutcome>,
    pub confirm: Option<ConfirmOutcome>,
    pub cursor_moved: bool,
}

impl StepReport {
    pub fn was_reset(&self) -> bool {
        self.confirm == Some(ConfirmOutcome::Reset)
    }
}

/// The single game session owned by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    cursor: Cursor,
    current: Player,
    phase: GamePhase,
    restart_presses: u8,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            cursor: Cursor::ORIGIN,
            current: Player::X,
            phase: GamePhase::InProgress,
            restart_presses: 0,
        }
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub const fn current_player(&self) -> Player {
        self.current
    }

    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    pub const fn restart_presses(&self) -> u8 {
        self.restart_presses
    }

    /// Places the current player's mark at `cursor`.
    pub fn try_place(&mut self, cursor: Cursor) -> PlaceOutcome {
        if self.phase.is_over() {
            return PlaceOutcome::Ignored;
        }
        let player = self.current;
        if !self.board.place(cursor.row, cursor.col, player) {
            return PlaceOutcome::Rejected;
        }

        if let Some(winner) = self.board.winner() {
            self.phase = GamePhase::WonBy(winner);
            return PlaceOutcome::Won(winner);
        }
        if self.board.is_draw() {
            self.phase = GamePhase::Drawn;
            return PlaceOutcome::Drawn;
        }

        self.current = player.opponent();
        PlaceOutcome::Placed(player)
    }

    /// Advances the cursor. Returns `false`, leaving it in place, once the
    /// game is over.
    pub fn move_cursor(&mut self) -> bool {
        if self.phase.is_over() {
            return false;
        }
        self.cursor = self.cursor.advance();
        true
    }

    /// Counts a confirm press while the game is over; the second one resets.
    pub fn confirm_on_game_over(&mut self) -> ConfirmOutcome {
        if !self.phase.is_over() {
            return ConfirmOutcome::Ignored;
        }
        self.restart_presses += 1;
        if self.restart_presses >= RESTART_PRESSES {
            self.reset();
            return ConfirmOutcome::Reset;
        }
        ConfirmOutcome::Counted(self.restart_presses)
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.cursor = Cursor::ORIGIN;
        self.current = Player::X;
        self.phase = GamePhase::InProgress;
        self.restart_presses = 0;
    }

    /// Applies one poll cycle's drained events: at most one place/confirm,
    /// then at most one cursor move.
    ///
    /// The place/confirm button places while the game runs and counts restart
    /// presses once it is over. Cursor moves are dropped while the game is
    /// over, including when the placement in this same cycle ended it.
    pub fn step(&mut self, events: InputEvents) -> StepReport {
        let mut report = StepReport::default();
        if !events.any() {
            return report;
        }

        if events.place_confirm {
            if self.phase.is_over() {
                report.confirm = Some(self.confirm_on_game_over());
            } else {
                report.place = Some(self.try_place(self.cursor));
            }
        }

        if events.move_cursor {
            report.cursor_moved = self.move_cursor();
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn at(row: usize, col: usize) -> Cursor {
        Cursor { col, row }
    }

    fn place_all(session: &mut GameSession, moves: &[(usize, usize)]) -> PlaceOutcome {
        let mut last = PlaceOutcome::Ignored;
        for &(row, col) in moves {
            last = session.try_place(at(row, col));
        }
        last
    }

    fn assert_fresh(session: &GameSession) {
        assert_eq!(*session.board(), Board::new());
        assert_eq!(session.cursor(), Cursor::ORIGIN);
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.phase(), GamePhase::InProgress);
        assert_eq!(session.restart_presses(), 0);
    }

    #[test]
    fn test_new_session_is_fresh() {
        assert_fresh(&GameSession::new());
    }

    #[test]
    fn test_place_flips_one_cell_and_toggles_player() {
        let mut session = GameSession::new();
        let before = *session.board();

        assert_eq!(session.try_place(at(1, 2)), PlaceOutcome::Placed(Player::X));

        let changed = before
            .cells()
            .zip(session.board().cells())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 1);
        assert_eq!(session.board().get(1, 2), Cell::Occupied(Player::X));
        assert_eq!(session.current_player(), Player::O);
    }

    #[test]
    fn test_cursor_cycles_raster_order() {
        let mut session = GameSession::new();
        let mut seen = [[false; SIZE]; SIZE];
        for i in 0..9 {
            let c = session.cursor();
            assert_eq!((c.row, c.col), (i / 3, i % 3));
            assert!(!seen[c.row][c.col]);
            seen[c.row][c.col] = true;
            session.move_cursor();
        }
        assert_eq!(session.cursor(), Cursor::ORIGIN);
    }

    #[test]
    fn test_move_cursor_ignored_when_over() {
        let mut session = GameSession::new();
        place_all(&mut session, &[(0, 0), (1, 0), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(session.phase(), GamePhase::WonBy(Player::X));

        let cursor = session.cursor();
        assert!(!session.move_cursor());
        assert_eq!(session.cursor(), cursor);

        session.reset();
        assert!(session.move_cursor());
        assert_eq!(session.cursor(), at(0, 1));
    }

    #[test]
    fn test_mark_counts_stay_balanced() {
        let mut session = GameSession::new();
        // Repeats are rejected; the game ends in an O row win.
        let moves = [
            (1, 1),
            (0, 0),
            (1, 1),
            (2, 2),
            (0, 0),
            (0, 2),
            (1, 0),
            (0, 1),
        ];
        let mut last = PlaceOutcome::Ignored;
        for (row, col) in moves {
            let mover = session.current_player();
            let (x_before, o_before) = session.board().counts();
            last = session.try_place(at(row, col));

            let (x, o) = session.board().counts();
            assert!(x == o || x == o + 1, "x={x} o={o} after {last:?}");
            if last == PlaceOutcome::Rejected {
                assert_eq!((x, o), (x_before, o_before));
                assert_eq!(session.current_player(), mover);
            } else if (x_before, o_before) == (0, 0) {
                assert_eq!(mover, Player::X);
                assert_eq!((x, o), (1, 0));
            }
        }
        assert_eq!(last, PlaceOutcome::Won(Player::O));
        assert_eq!(session.board().counts(), (3, 3));
    }

    #[test]
    fn test_row_win_for_x() {
        let mut session = GameSession::new();
        let outcome = place_all(&mut session, &[(0, 0), (1, 0), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(outcome, PlaceOutcome::Won(Player::X));
        assert_eq!(session.phase(), GamePhase::WonBy(Player::X));
        assert_eq!(session.board().winner(), Some(Player::X));
    }

    #[test]
    fn test_winning_move_does_not_toggle_player() {
        let mut session = GameSession::new();
        place_all(&mut session, &[(0, 0), (1, 0), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(session.current_player(), Player::X);
    }

    #[test]
    fn test_full_board_without_line_draws() {
        let mut session = GameSession::new();
        // X O X / X O O / O X X
        let outcome = place_all(
            &mut session,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(outcome, PlaceOutcome::Drawn);
        assert_eq!(session.phase(), GamePhase::Drawn);
        assert_eq!(session.board().winner(), None);
    }

    #[test]
    fn test_place_on_opponent_cell_is_rejected() {
        let mut session = GameSession::new();
        session.try_place(at(1, 1));
        let board = *session.board();

        assert_eq!(session.try_place(at(1, 1)), PlaceOutcome::Rejected);
        assert_eq!(*session.board(), board);
        assert_eq!(session.current_player(), Player::O);
        assert_eq!(session.phase(), GamePhase::InProgress);
    }

    #[test]
    fn test_place_after_game_over_is_ignored() {
        let mut session = GameSession::new();
        place_all(&mut session, &[(0, 0), (1, 0), (0, 1), (2, 2), (0, 2)]);
        let board = *session.board();
        assert_eq!(session.try_place(at(2, 0)), PlaceOutcome::Ignored);
        assert_eq!(*session.board(), board);
    }

    #[test]
    fn test_two_confirms_reset_after_win() {
        let mut session = GameSession::new();
        place_all(&mut session, &[(0, 0), (1, 0), (0, 1), (2, 2), (0, 2)]);

        assert_eq!(session.confirm_on_game_over(), ConfirmOutcome::Counted(1));
        assert_eq!(session.restart_presses(), 1);
        assert_eq!(session.phase(), GamePhase::WonBy(Player::X));

        assert_eq!(session.confirm_on_game_over(), ConfirmOutcome::Reset);
        assert_fresh(&session);
    }

    #[test]
    fn test_confirm_while_in_progress_is_noop() {
        let mut session = GameSession::new();
        session.try_place(at(0, 0));
        assert_eq!(session.confirm_on_game_over(), ConfirmOutcome::Ignored);
        assert_eq!(session.restart_presses(), 0);
        assert_eq!(session.board().get(0, 0), Cell::Occupied(Player::X));
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut session = GameSession::new();
        session.move_cursor();
        session.move_cursor();
        session.move_cursor();
        session.move_cursor();
        place_all(&mut session, &[(0, 0), (2, 1)]);
        session.reset();
        assert_fresh(&session);

        place_all(
            &mut session,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        session.confirm_on_game_over();
        session.reset();
        assert_fresh(&session);
    }

    #[test]
    fn test_step_routes_button_by_phase() {
        let mut session = GameSession::new();
        let report = session.step(InputEvents {
            place_confirm: true,
            move_cursor: true,
        });
        assert_eq!(report.place, Some(PlaceOutcome::Placed(Player::X)));
        assert_eq!(report.confirm, None);
        assert!(report.cursor_moved);
        assert_eq!(session.cursor(), at(0, 1));
        assert_eq!(session.board().get(0, 0), Cell::Occupied(Player::X));
    }

    #[test]
    fn test_step_drops_cursor_move_when_game_ends() {
        let mut session = GameSession::new();
        place_all(&mut session, &[(0, 0), (1, 0), (0, 1), (2, 2)]);
        session.move_cursor();
        session.move_cursor();

        let report = session.step(InputEvents {
            place_confirm: true,
            move_cursor: true,
        });
        assert_eq!(report.place, Some(PlaceOutcome::Won(Player::X)));
        assert!(!report.cursor_moved);
        assert_eq!(session.cursor(), at(0, 2));
    }

    #[test]
    fn test_step_counts_confirms_when_over() {
        let mut session = GameSession::new();
        place_all(&mut session, &[(0, 0), (1, 0), (0, 1), (2, 2), (0, 2)]);
        let press = InputEvents {
            place_confirm: true,
            move_cursor: false,
        };

        let first = session.step(press);
        assert_eq!(first.confirm, Some(ConfirmOutcome::Counted(1)));
        assert_eq!(first.place, None);

        let second = session.step(press);
        assert!(second.was_reset());
        assert_fresh(&session);
    }

    #[test]
    fn test_empty_step_changes_nothing() {
        let mut session = GameSession::new();
        session.try_place(at(2, 2));
        let before = session.clone();
        assert_eq!(session.step(InputEvents::default()), StepReport::default());
        assert_eq!(session, before);
    }
}
