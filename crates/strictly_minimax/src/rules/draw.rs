//! Draw detection logic for tic-tac-toe.

use super::win::completed_line;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn is_full(board: &Board) -> bool {
    !board.has_empty_cell()
}

/// Checks if the game ended without a winner.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn is_draw(board: &Board) -> bool {
    !board.has_empty_cell() && completed_line(board).is_none()
}
