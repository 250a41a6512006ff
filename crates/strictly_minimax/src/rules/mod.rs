//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values: whose turn it is, which squares
//! may be played, what a move produces and when the game is over. No rule
//! mutates its input; transitions return a fresh board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, winner, winning_line};

use crate::error::{EngineError, IllegalActionReason, InvalidStateReason};
use crate::outcome::Outcome;
use crate::types::{Action, Board, MarkCounts, Player};
use tracing::{debug, instrument, warn};
use win::completed_line;

/// Mark counts of `board`, or `InvalidState` if they break alternation.
pub(crate) fn balanced_counts(board: &Board) -> Result<MarkCounts, EngineError> {
    let counts = board.count_marks();
    if counts.is_balanced() {
        Ok(counts)
    } else {
        warn!(x = counts.x, o = counts.o, "Board consistency violated");
        Err(EngineError::InvalidState(InvalidStateReason::Unbalanced {
            x: counts.x,
            o: counts.o,
        }))
    }
}

/// X moves whenever both players have placed the same number of marks.
pub(crate) fn mover_for(counts: MarkCounts) -> Player {
    if counts.x == counts.o {
        Player::X
    } else {
        Player::O
    }
}

/// Utility of a terminal board, `None` while the game is still running.
pub(crate) fn terminal_utility(board: &Board) -> Option<i8> {
    match completed_line(board) {
        Some((_, Player::X)) => Some(1),
        Some((_, Player::O)) => Some(-1),
        None if !board.has_empty_cell() => Some(0),
        None => None,
    }
}

/// Returns the player whose turn it is, or `None` once the game is over.
///
/// # Errors
///
/// Returns [`EngineError::InvalidState`] if the mark counts cannot arise
/// from alternating play.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn current_mover(board: &Board) -> Result<Option<Player>, EngineError> {
    let counts = balanced_counts(board)?;
    if is_terminal(board) {
        return Ok(None);
    }
    Ok(Some(mover_for(counts)))
}

/// Returns every playable square in row-major order.
///
/// The list is empty for a terminal board.
///
/// # Errors
///
/// Returns [`EngineError::InvalidState`] for an unbalanced board.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn legal_actions(board: &Board) -> Result<Vec<Action>, EngineError> {
    balanced_counts(board)?;
    if is_terminal(board) {
        return Ok(Vec::new());
    }
    Ok(board.empty_cells().collect())
}

/// Places the current mover's mark at `action`, returning the new board.
///
/// # Errors
///
/// Returns [`EngineError::IllegalAction`] if the game is over, the action is
/// off the board, or the square is taken (checked in that order), and
/// [`EngineError::InvalidState`] for an unbalanced board.
#[instrument(skip(board), fields(board = %board))]
pub fn apply_action(board: &Board, action: Action) -> Result<Board, EngineError> {
    let counts = balanced_counts(board)?;

    let illegal = |reason: IllegalActionReason| {
        debug!(%reason, "Rejected action");
        EngineError::IllegalAction { action, reason }
    };

    if is_terminal(board) {
        return Err(illegal(IllegalActionReason::GameOver));
    }
    let index = action
        .index()
        .ok_or_else(|| illegal(IllegalActionReason::OutOfBounds))?;
    if let Some(owner) = board.get(index).player() {
        return Err(illegal(IllegalActionReason::Occupied(owner)));
    }

    let mover = mover_for(counts);
    let next = board.with_mark(index, mover);
    debug!(%mover, next = %next, "Applied action");
    Ok(next)
}

/// Returns true once a line is complete or the board is full.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Payoff of a finished game from X's point of view: +1, -1 or 0.
///
/// # Errors
///
/// Returns [`EngineError::InvalidState`] if the game is not over.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn utility(board: &Board) -> Result<i8, EngineError> {
    terminal_utility(board).ok_or(EngineError::InvalidState(InvalidStateReason::NotTerminal))
}

/// Returns how the game ended, or `None` while it is still running.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(player) = winner(board) {
        return Some(Outcome::Winner(player));
    }
    is_draw(board).then_some(Outcome::Draw)
}
