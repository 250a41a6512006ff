//! Strictly Minimax - exact-search tic-tac-toe engine
//!
//! Boards are immutable values; rules are pure functions over them; the
//! search explores the whole game tree to find the optimal move.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Cell`], [`Action`] and their queries
//! - **Rules**: turn order, legal actions, transitions, winner and utility
//! - **Search**: full-depth minimax with row-major tie-breaking
//! - **Game**: a history-keeping record for drivers
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Action, Board, apply_action, best_action};
//!
//! # fn example() -> Result<(), strictly_minimax::EngineError> {
//! let board = Board::new();
//! let action = best_action(&board)?.expect("the empty board has moves");
//! assert_eq!(action, Action::new(0, 0));
//! let next = apply_action(&board, action)?;
//! assert_eq!(next.count_marks().x, 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod game;
mod outcome;
mod rules;
mod search;
mod types;

// Crate-level exports - Board model
pub use types::{Action, BOARD_SIZE, Board, CELL_COUNT, Cell, MarkCounts, Player};

// Crate-level exports - Errors
pub use error::{EngineError, IllegalActionReason, InvalidStateReason};

// Crate-level exports - Rules
pub use outcome::Outcome;
pub use rules::{
    Line, apply_action, current_mover, is_draw, is_full, is_terminal, legal_actions, outcome,
    utility, winner, winning_line,
};

// Crate-level exports - Search
pub use search::{Minimax, SearchReport, best_action, evaluate};

// Crate-level exports - Game record
pub use game::Game;
