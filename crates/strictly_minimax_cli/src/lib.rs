//! Headless driver for the strictly_minimax engine.
//!
//! Provides the `strictly_minimax` binary: engine-vs-engine self-play,
//! best-move lookup and full move analysis for boards given on the command
//! line. There is no interactive play.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod commands;
mod config;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Commands
pub use commands::{analyze, best, selfplay};

// Crate-level exports - Configuration
pub use config::{ConfigError, SelfPlayConfig};
