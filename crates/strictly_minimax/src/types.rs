//! Core domain types for tic-tac-toe.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of squares on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by player X.
    X,
    /// Marked by player O.
    O,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character symbol used by the compact board notation.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            '.' | '_' | '-' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A move target: the (row, column) of the square to mark.
///
/// Construction does not check bounds; the rules reject actions that fall
/// off the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Action {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major board index, or `None` if the action is off the board.
    pub fn index(self) -> Option<usize> {
        (self.row < BOARD_SIZE && self.col < BOARD_SIZE).then(|| self.row * BOARD_SIZE + self.col)
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }
}

impl FromStr for Action {
    type Err = EngineError;

    /// Parses `row,col`, e.g. `1,2`.
    #[instrument(level = "trace")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: &str| EngineError::Parse {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| parse_err("expected `row,col`"))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| parse_err("row is not a number"))?;
        let col = col
            .trim()
            .parse()
            .map_err(|_| parse_err("column is not a number"))?;

        Ok(Self::new(row, col))
    }
}

/// Number of marks each player has on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarkCounts {
    /// Squares marked by X.
    pub x: usize,
    /// Squares marked by O.
    pub o: usize,
}

impl MarkCounts {
    /// Total marks on the board.
    pub fn total(&self) -> usize {
        self.x + self.o
    }

    /// True when the counts can arise from X-first alternating play.
    pub fn is_balanced(&self) -> bool {
        self.x == self.o || self.x == self.o + 1
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every rule that changes the board returns a new
/// one and leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from three rows, top to bottom.
    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (row, line) in rows.iter().enumerate() {
            cells[row * BOARD_SIZE..(row + 1) * BOARD_SIZE].copy_from_slice(line);
        }
        Self { cells }
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if either coordinate is not in `0..3`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        Action::new(row, col)
            .index()
            .map(|index| self.cells[index])
            .ok_or(EngineError::OutOfBounds { row, col })
    }

    /// Counts the marks of each player.
    pub fn count_marks(&self) -> MarkCounts {
        self.cells
            .iter()
            .fold(MarkCounts::default(), |mut counts, cell| {
                match cell {
                    Cell::X => counts.x += 1,
                    Cell::O => counts.o += 1,
                    Cell::Empty => {}
                }
                counts
            })
    }

    /// Returns true if at least one square is empty.
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_empty())
    }

    /// Returns all squares in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Empty squares in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Action> + '_ {
        self.empty_indices().map(Action::from_index)
    }

    pub(crate) fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    pub(crate) fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Copy of this board with `player`'s mark at `index`.
    pub(crate) fn with_mark(&self, index: usize, player: Player) -> Self {
        let mut next = *self;
        next.cells[index] = player.into();
        next
    }

    /// Formats the board as a human-readable grid.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = match self.cells[row * BOARD_SIZE + col] {
                    Cell::Empty => ' ',
                    cell => cell.symbol(),
                };
                result.push(' ');
                result.push(symbol);
                result.push(' ');
                if col < BOARD_SIZE - 1 {
                    result.push('|');
                }
            }
            if row < BOARD_SIZE - 1 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Compact notation, e.g. `XOX/XOO/OX.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 && index % BOARD_SIZE == 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parses nine cell symbols (`X`, `O`, and `.`, `_` or `-` for empty).
    /// Whitespace, `/` and `|` are ignored.
    #[instrument(level = "trace")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: String| EngineError::Parse {
            input: s.to_string(),
            reason,
        };

        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut filled = 0;
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '/' && *c != '|') {
            let cell =
                Cell::from_symbol(c).ok_or_else(|| parse_err(format!("unknown symbol {c:?}")))?;
            if filled == CELL_COUNT {
                return Err(parse_err(format!("more than {CELL_COUNT} cells")));
            }
            cells[filled] = cell;
            filled += 1;
        }

        if filled < CELL_COUNT {
            return Err(parse_err(format!("expected {CELL_COUNT} cells, found {filled}")));
        }

        Ok(Self { cells })
    }
}
