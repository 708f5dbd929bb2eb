//! The 3×3 board and line detection.

/// Board side length. The board is always 3×3.
pub const SIZE: usize = 3;

/// One of the two players. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Player {
    X,
    O,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Glyph drawn on the display for this player's cells.
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

/// Every line that wins, in evaluation order: rows, columns, main diagonal,
/// anti-diagonal. Entries are `(row, col)`.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Board cells indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    pub const fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Puts `player` on an empty cell. Returns `false` and leaves the board
    /// untouched if the cell is already taken.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        let cell = &mut self.cells[row][col];
        if *cell != Cell::Empty {
            return false;
        }
        *cell = Cell::Occupied(player);
        true
    }

    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
    }

    /// Iterates `(row, col, cell)` in raster order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, line)| line.iter().enumerate().map(move |(col, &c)| (row, col, c)))
    }

    /// Number of X and O marks, in that order.
    pub fn counts(&self) -> (usize, usize) {
        self.cells().fold((0, 0), |(x, o), (_, _, cell)| match cell {
            Cell::Occupied(Player::X) => (x + 1, o),
            Cell::Occupied(Player::O) => (x, o + 1),
            Cell::Empty => (x, o),
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, _, cell)| cell != Cell::Empty)
    }

    /// Occupant of the first uniform, non-empty line.
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            let first = self.get(a.0, a.1);
            match first {
                Cell::Occupied(player) if first == self.get(b.0, b.1) && first == self.get(c.0, c.1) => {
                    Some(player)
                }
                _ => None,
            }
        })
    }

    /// Full board with no winning line. Win is checked first.
    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && self.is_full()
    }
}
