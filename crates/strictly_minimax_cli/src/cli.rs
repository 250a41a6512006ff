//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::{Action, Board};

/// Strictly Minimax - exact-search tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Exact minimax search for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tracing filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info,strictly_minimax=debug")]
    pub log_filter: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Let the engine play both sides to the end of the game
    Selfplay {
        /// Path to self-play configuration file
        #[arg(short, long, default_value = "selfplay.toml")]
        config: std::path::PathBuf,

        /// Opening actions as `row,col` pairs (overrides the config file)
        #[arg(long, num_args = 1..)]
        opening: Option<Vec<Action>>,

        /// Print the finished game record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the engine's move for a board, e.g. `XO./.X./...`
    Best {
        /// Board in compact notation (X, O, and . for empty; rows split by /)
        board: Board,
    },

    /// Print the minimax value of every legal move
    Analyze {
        /// Board in compact notation (X, O, and . for empty; rows split by /)
        board: Board,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selfplay_opening() {
        let cli = Cli::try_parse_from(["strictly_minimax", "selfplay", "--opening", "0,0", "1,1"])
            .unwrap();
        match cli.command {
            Command::Selfplay { opening, json, .. } => {
                assert_eq!(opening, Some(vec![Action::new(0, 0), Action::new(1, 1)]));
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_board_argument() {
        let cli = Cli::try_parse_from(["strictly_minimax", "best", "XO./.X./..."]).unwrap();
        match cli.command {
            Command::Best { board } => assert_eq!(board.to_string(), "XO./.X./..."),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_board() {
        assert!(Cli::try_parse_from(["strictly_minimax", "analyze", "XOZ"]).is_err());
    }
}
