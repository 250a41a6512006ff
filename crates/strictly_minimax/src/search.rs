//! Exhaustive minimax search for tic-tac-toe.
//!
//! X maximizes utility and O minimizes it. Every line of play is explored to
//! the end of the game; there is no pruning, no depth limit and no cache, so
//! the value returned is the exact game-theoretic value of the position.
//!
//! Ties between equally good actions go to the first one in row-major order.

use crate::error::{EngineError, InvalidStateReason};
use crate::rules::{balanced_counts, mover_for, terminal_utility};
use crate::types::{Action, Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of searching a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Optimal action for the side to move, `None` on a terminal board.
    pub best: Option<Action>,
    /// Game-theoretic value of the position from X's point of view.
    pub value: i8,
    /// Value of each legal action, in row-major order.
    pub action_values: Vec<(Action, i8)>,
    /// Positions visited, the root's children included.
    pub nodes: u64,
}

/// Full-depth minimax searcher. The only state is a node counter.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    /// Creates a searcher with a zeroed node counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited since construction.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Value of `board` with X to move. Callers check balance first.
    fn max_value(&mut self, board: Board) -> i8 {
        self.nodes += 1;
        if let Some(value) = terminal_utility(&board) {
            return value;
        }
        let mut best = i8::MIN;
        for index in board.empty_indices() {
            best = best.max(self.min_value(board.with_mark(index, Player::X)));
        }
        best
    }

    /// Value of `board` with O to move.
    fn min_value(&mut self, board: Board) -> i8 {
        self.nodes += 1;
        if let Some(value) = terminal_utility(&board) {
            return value;
        }
        let mut best = i8::MAX;
        for index in board.empty_indices() {
            best = best.min(self.max_value(board.with_mark(index, Player::O)));
        }
        best
    }

    /// Scores every legal action and picks the best one for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidState`] for an unbalanced board.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn analyze(&mut self, board: &Board) -> Result<SearchReport, EngineError> {
        let counts = balanced_counts(board)?;
        let start = self.nodes;

        if let Some(value) = terminal_utility(board) {
            debug!(value, "Board is terminal, nothing to search");
            return Ok(SearchReport {
                best: None,
                value,
                action_values: Vec::new(),
                nodes: 0,
            });
        }

        let mover = mover_for(counts);
        let mut action_values = Vec::with_capacity(board.empty_indices().count());
        let mut best: Option<(Action, i8)> = None;

        for index in board.empty_indices() {
            let action = Action::from_index(index);
            let child = board.with_mark(index, mover);
            let value = match mover {
                Player::X => self.min_value(child),
                Player::O => self.max_value(child),
            };
            action_values.push((action, value));

            let improves = match (mover, best) {
                (_, None) => true,
                (Player::X, Some((_, current))) => value > current,
                (Player::O, Some((_, current))) => value < current,
            };
            if improves {
                best = Some((action, value));
            }
        }

        let nodes = self.nodes - start;
        // A live board has an empty cell, so the loop scored at least one action.
        let Some((action, value)) = best else {
            return Err(EngineError::InvalidState(InvalidStateReason::NotTerminal));
        };
        debug!(%mover, best = %action, value, nodes, "Search finished");

        Ok(SearchReport {
            best: Some(action),
            value,
            action_values,
            nodes,
        })
    }
}

/// Optimal action for the side to move, `None` if the game is over.
///
/// Ties go to the first action in row-major order.
///
/// # Errors
///
/// Returns [`EngineError::InvalidState`] for an unbalanced board.
#[instrument(skip(board), fields(board = %board))]
pub fn best_action(board: &Board) -> Result<Option<Action>, EngineError> {
    Ok(Minimax::new().analyze(board)?.best)
}

/// Exact value of `board` from X's point of view under optimal play.
///
/// # Errors
///
/// Returns [`EngineError::InvalidState`] for an unbalanced board.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Result<i8, EngineError> {
    let counts = balanced_counts(board)?;
    let mut search = Minimax::new();
    let value = match mover_for(counts) {
        Player::X => search.max_value(*board),
        Player::O => search.min_value(*board),
    };
    debug!(value, nodes = search.nodes(), "Evaluated position");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_board_has_no_action() {
        assert_eq!(best_action(&board("XXX/OO./...")), Ok(None));
        assert_eq!(best_action(&board("XOX/OXX/OXO")), Ok(None));
    }

    #[test]
    fn test_empty_board_picks_top_left() {
        assert_eq!(best_action(&Board::new()), Ok(Some(Action::new(0, 0))));
    }

    #[test]
    fn test_empty_board_every_action_draws() {
        let report = Minimax::new().analyze(&Board::new()).unwrap();
        assert_eq!(report.value, 0);
        assert_eq!(report.action_values.len(), 9);
        assert!(report.action_values.iter().all(|(_, v)| *v == 0));
        assert!(report.nodes > 0);
    }

    #[test]
    fn test_x_takes_the_win() {
        // X to move; (0,2) completes the top row.
        assert_eq!(
            best_action(&board("XX./OO./...")),
            Ok(Some(Action::new(0, 2)))
        );
    }

    #[test]
    fn test_o_blocks_the_threat() {
        // X threatens the left column; O must take (2,0).
        assert_eq!(
            best_action(&board("X../XO./...")),
            Ok(Some(Action::new(2, 0)))
        );
    }

    #[test]
    fn test_o_prefers_winning_to_blocking() {
        // O can win on the middle row or block X's top row; winning is -1.
        assert_eq!(
            best_action(&board("XX./OO./X..")),
            Ok(Some(Action::new(1, 2)))
        );
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate(&Board::new()), Ok(0));
        assert_eq!(evaluate(&board("XX./OO./...")), Ok(1));
        assert_eq!(evaluate(&board("XOX/XOO/.OX")), Ok(-1));
    }

    #[test]
    fn test_unbalanced_board_is_rejected() {
        assert!(matches!(
            best_action(&board("OOO/.../...")),
            Err(EngineError::InvalidState(_))
        ));
    }

    #[test]
    fn test_evaluate_checks_balance_before_searching() {
        let expected = Err(EngineError::InvalidState(InvalidStateReason::Unbalanced {
            x: 0,
            o: 2,
        }));
        assert_eq!(evaluate(&board("OO./.../...")), expected);
        assert!(evaluate(&board("XX./.../...")).is_err());
    }

    #[test]
    fn test_evaluate_searches_for_the_side_to_move() {
        // O to move and wins at (1,2); with X to move, X would win at (0,2).
        assert_eq!(evaluate(&board("XX./OO./X..")), Ok(-1));
        let mut search = Minimax::new();
        assert_eq!(search.min_value(board("XX./OO./X..")), -1);
        assert_eq!(search.max_value(board("XX./OO./X..")), 1);
    }

    #[test]
    fn test_analyze_last_empty_cell() {
        let report = Minimax::new().analyze(&board("XOX/XOO/OX.")).unwrap();
        assert_eq!(report.best, Some(Action::new(2, 2)));
        assert_eq!(report.value, 0);
        assert_eq!(report.action_values, vec![(Action::new(2, 2), 0)]);
        assert_eq!(report.nodes, 1);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let start = board("X../.O./...");
        let copy = start;
        best_action(&start).unwrap();
        assert_eq!(start, copy);
    }
}
