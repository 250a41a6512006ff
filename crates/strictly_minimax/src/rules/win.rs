//! Win detection logic for tic-tac-toe.

use crate::types::{Action, Board, Player};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight lines of three squares.
///
/// Variants are declared in detection order: rows, then columns, then
/// diagonals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Line {
    /// Row 0.
    #[display("top row")]
    TopRow,
    /// Row 1.
    #[display("middle row")]
    MiddleRow,
    /// Row 2.
    #[display("bottom row")]
    BottomRow,
    /// Column 0.
    #[display("left column")]
    LeftColumn,
    /// Column 1.
    #[display("middle column")]
    MiddleColumn,
    /// Column 2.
    #[display("right column")]
    RightColumn,
    /// (0,0) to (2,2).
    #[display("main diagonal")]
    MainDiagonal,
    /// (0,2) to (2,0).
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Row-major indices of the three squares.
    pub fn indices(self) -> [usize; 3] {
        match self {
            Line::TopRow => [0, 1, 2],
            Line::MiddleRow => [3, 4, 5],
            Line::BottomRow => [6, 7, 8],
            Line::LeftColumn => [0, 3, 6],
            Line::MiddleColumn => [1, 4, 7],
            Line::RightColumn => [2, 5, 8],
            Line::MainDiagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        }
    }

    /// The three squares as actions.
    pub fn actions(self) -> [Action; 3] {
        self.indices().map(Action::from_index)
    }
}

/// First completed line in detection order, without a span.
pub(crate) fn completed_line(board: &Board) -> Option<(Line, Player)> {
    Line::iter().find_map(|line| {
        let [a, b, c] = line.indices();
        let cell = board.get(a);
        match cell.player() {
            Some(player) if cell == board.get(b) && cell == board.get(c) => Some((line, player)),
            _ => None,
        }
    })
}

/// Returns the first completed line and the player who owns it.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
    completed_line(board)
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn winner(board: &Board) -> Option<Player> {
    completed_line(board).map(|(_, player)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board), Some((Line::TopRow, Player::X)));
    }

    #[test]
    fn test_winner_middle_column() {
        let board: Board = "XOX/XOO/.OX".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Line::MiddleColumn, Player::O)));
    }

    #[test]
    fn test_winner_diagonals() {
        let board: Board = "O.X/.OX/X.O".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Line::MainDiagonal, Player::O)));

        let board: Board = "O.X/.X./XO.".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Line::AntiDiagonal, Player::X)));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./O../O..".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_detection_order_is_fixed() {
        // Unreachable position with two completed lines.
        let board: Board = "OXX/OXX/O.X".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Line::LeftColumn, Player::O)));

        let board: Board = "XXX/X../X..".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Line::TopRow, Player::X)));
    }

    #[test]
    fn test_line_actions() {
        assert_eq!(
            Line::AntiDiagonal.actions(),
            [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)]
        );
        assert_eq!(Line::iter().count(), 8);
    }
}
