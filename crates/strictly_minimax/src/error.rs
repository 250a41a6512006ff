//! Error types for the tic-tac-toe engine.

use crate::types::{Action, Player};

/// Error returned by board queries, rules and search.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// A coordinate outside the 3x3 grid was used to address a cell.
    #[display("cell ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The action cannot be applied to the board.
    #[display("illegal action {action}: {reason}")]
    IllegalAction {
        /// The rejected action.
        action: Action,
        /// Why it was rejected.
        reason: IllegalActionReason,
    },

    /// The operation is not defined for this board.
    #[display("invalid state: {_0}")]
    InvalidState(InvalidStateReason),

    /// Text could not be read as a board or an action.
    #[display("cannot parse {input:?}: {reason}")]
    Parse {
        /// The offending text.
        input: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl std::error::Error for EngineError {}

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalActionReason {
    /// The board already has a winner or is full.
    #[display("the game is already over")]
    GameOver,
    /// The target square is off the board.
    #[display("the square is off the board")]
    OutOfBounds,
    /// The target square is already marked.
    #[display("the square is already taken by {_0}")]
    Occupied(Player),
}

/// Why a board is not valid for the requested operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidStateReason {
    /// Utility was requested for a game still in progress.
    #[display("the board is not terminal")]
    NotTerminal,
    /// The mark counts cannot arise from X-first alternating play.
    #[display("{x} X marks against {o} O marks is not reachable")]
    Unbalanced {
        /// Marks placed by X.
        x: usize,
        /// Marks placed by O.
        o: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EngineError::IllegalAction {
            action: Action::new(1, 1),
            reason: IllegalActionReason::Occupied(Player::O),
        };
        assert_eq!(
            err.to_string(),
            "illegal action (1, 1): the square is already taken by O"
        );

        let err = EngineError::InvalidState(InvalidStateReason::Unbalanced { x: 1, o: 3 });
        assert_eq!(
            err.to_string(),
            "invalid state: 1 X marks against 3 O marks is not reachable"
        );

        let err = EngineError::OutOfBounds { row: 4, col: 0 };
        assert_eq!(err.to_string(), "cell (4, 0) is outside the 3x3 board");
    }
}
