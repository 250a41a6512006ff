//! Self-play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::Action;
use tracing::{debug, info, instrument};

/// Configuration for an engine-vs-engine game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Actions played before the engine takes over, oldest first.
    #[serde(default)]
    opening: Vec<Action>,

    /// Print the board after every move.
    #[serde(default = "default_show_boards")]
    show_boards: bool,
}

#[instrument]
fn default_show_boards() -> bool {
    true
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            opening: Vec::new(),
            show_boards: default_show_boards(),
        }
    }
}

impl SelfPlayConfig {
    /// Creates a configuration.
    #[instrument(skip(opening), fields(opening_len = opening.len()))]
    pub fn new(opening: Vec<Action>, show_boards: bool) -> Self {
        Self {
            opening,
            show_boards,
        }
    }

    /// Replaces the opening.
    #[instrument(skip(self, opening), fields(opening_len = opening.len()))]
    pub fn with_opening(mut self, opening: Vec<Action>) -> Self {
        self.opening = opening;
        self
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            opening_len = config.opening.len(),
            show_boards = config.show_boards,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
