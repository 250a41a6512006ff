//! A game in progress: the current board plus the actions that produced it.

use crate::error::EngineError;
use crate::outcome::Outcome;
use crate::rules::{apply_action, is_terminal, outcome};
use crate::search::best_action;
use crate::types::{Action, Board, Player};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Game record built only through legal actions from the empty board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Game {
    /// The current board.
    board: Board,
    /// Actions played so far, oldest first.
    history: Vec<Action>,
}

impl Game {
    /// Creates a new game on the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays `actions` from the empty board.
    ///
    /// # Errors
    ///
    /// Returns the first [`EngineError::IllegalAction`] encountered.
    #[instrument(skip(actions), fields(moves = actions.len()))]
    pub fn replay(actions: &[Action]) -> Result<Self, EngineError> {
        let mut game = Self::new();
        for action in actions {
            game.play(*action)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Player to move, `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        if self.is_over() {
            None
        } else if self.history.len() % 2 == 0 {
            Some(Player::X)
        } else {
            Some(Player::O)
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        is_terminal(&self.board)
    }

    /// Returns how the game ended, if it has.
    pub fn outcome(&self) -> Option<Outcome> {
        outcome(&self.board)
    }

    /// Plays `action` for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IllegalAction`] and leaves the game unchanged if
    /// the action is not legal.
    #[instrument(skip(self), fields(ply = self.history.len()))]
    pub fn play(&mut self, action: Action) -> Result<&Board, EngineError> {
        self.board = apply_action(&self.board, action)?;
        self.history.push(action);
        Ok(&self.board)
    }

    /// Plays the engine's choice for the side to move.
    ///
    /// Returns the action played, or `None` if the game was already over.
    ///
    /// # Errors
    ///
    /// Propagates search and rule errors; neither occurs for a game built
    /// through [`Game::play`].
    #[instrument(skip(self), fields(ply = self.history.len()))]
    pub fn play_best(&mut self) -> Result<Option<Action>, EngineError> {
        let Some(action) = best_action(&self.board)? else {
            return Ok(None);
        };
        self.play(action)?;
        debug!(%action, board = %self.board, "Engine moved");
        Ok(Some(action))
    }

    /// Lets the engine play both sides until the game ends.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Game::play_best`].
    #[instrument(skip(self), fields(ply = self.history.len()))]
    pub fn self_play(mut self) -> Result<Self, EngineError> {
        while self.play_best()?.is_some() {}
        info!(
            outcome = ?self.outcome(),
            moves = self.history.len(),
            "Self-play finished"
        );
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.board(), &Board::new());
        assert!(game.history().is_empty());
        assert_eq!(game.to_move(), Some(Player::X));
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_play_records_history() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        game.play(Action::new(0, 0)).unwrap();
        assert_eq!(game.history(), &[Action::new(1, 1), Action::new(0, 0)]);
        assert_eq!(game.to_move(), Some(Player::X));
    }

    #[test]
    fn test_illegal_play_leaves_game_unchanged() {
        let mut game = Game::replay(&[Action::new(1, 1)]).unwrap();
        let before = game.clone();
        assert!(game.play(Action::new(1, 1)).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_replay_to_win() {
        let game = Game::replay(&[
            Action::new(0, 0),
            Action::new(1, 0),
            Action::new(0, 1),
            Action::new(1, 1),
            Action::new(0, 2),
        ])
        .unwrap();
        assert!(game.is_over());
        assert_eq!(game.to_move(), None);
        assert_eq!(game.outcome(), Some(Outcome::Winner(Player::X)));
    }

    #[test]
    fn test_replay_past_end_fails() {
        let result = Game::replay(&[
            Action::new(0, 0),
            Action::new(1, 0),
            Action::new(0, 1),
            Action::new(1, 1),
            Action::new(0, 2),
            Action::new(2, 2),
        ]);
        assert!(matches!(result, Err(EngineError::IllegalAction { .. })));
    }

    #[test]
    fn test_play_best_on_finished_game() {
        let mut game = Game::replay(&[
            Action::new(0, 0),
            Action::new(1, 0),
            Action::new(0, 1),
            Action::new(1, 1),
            Action::new(0, 2),
        ])
        .unwrap();
        assert_eq!(game.play_best(), Ok(None));
        assert_eq!(game.history().len(), 5);
    }
}
