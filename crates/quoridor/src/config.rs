//! Match configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who sits in a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum SeatKind {
    /// The shortest-path bot.
    #[display("greedy")]
    Greedy,
    /// Moves typed on stdin.
    #[display("human")]
    Human,
}

/// One seat at the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Name shown in the legend and logs.
    name: String,

    /// Source of moves for this seat.
    #[serde(default = "default_kind")]
    kind: SeatKind,
}

impl SeatConfig {
    /// Creates a seat.
    pub fn new(name: impl Into<String>, kind: SeatKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Configuration for a single match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Player One, starting on row 1.
    #[serde(default = "default_player_one")]
    player_one: SeatConfig,

    /// Player Two, starting on row 9.
    #[serde(default = "default_player_two")]
    player_two: SeatConfig,

    /// Plies before the match is called off.
    #[serde(default = "default_max_turns")]
    max_turns: u32,

    /// Print the board after every move.
    #[serde(default = "default_show_board")]
    show_board: bool,

    /// Rejected moves a seat may submit in a row before the match aborts.
    #[serde(default = "default_max_retries")]
    max_retries: u32,
}

#[instrument]
fn default_kind() -> SeatKind {
    SeatKind::Greedy
}

#[instrument]
fn default_player_one() -> SeatConfig {
    SeatConfig::new("One", SeatKind::Greedy)
}

#[instrument]
fn default_player_two() -> SeatConfig {
    SeatConfig::new("Two", SeatKind::Greedy)
}

#[instrument]
fn default_max_turns() -> u32 {
    200
}

#[instrument]
fn default_show_board() -> bool {
    true
}

#[instrument]
fn default_max_retries() -> u32 {
    3
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            max_turns: default_max_turns(),
            show_board: default_show_board(),
            max_retries: default_max_retries(),
        }
    }
}

impl MatchConfig {
    /// Creates a configuration for two seats with default limits.
    pub fn new(player_one: SeatConfig, player_two: SeatConfig) -> Self {
        Self {
            player_one,
            player_two,
            ..Self::default()
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_one = %config.player_one.name,
            player_two = %config.player_two.name,
            max_turns = config.max_turns,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Overrides the ply limit.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Turns board printing on or off.
    pub fn with_show_board(mut self, show_board: bool) -> Self {
        self.show_board = show_board;
        self
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
