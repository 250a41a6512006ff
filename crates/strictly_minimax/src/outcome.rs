//! Outcome of a finished game.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Player won the game.
    #[display("Player {_0} wins")]
    Winner(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Payoff from X's point of view: +1 win, -1 loss, 0 draw.
    pub fn utility(&self) -> i8 {
        match self {
            Outcome::Winner(Player::X) => 1,
            Outcome::Winner(Player::O) => -1,
            Outcome::Draw => 0,
        }
    }
}
