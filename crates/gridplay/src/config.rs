//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use gridplay_snake::Grid;
use gridplay_tictactoe::Side;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Configuration for both games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Turn-game settings.
    #[serde(default)]
    tictactoe: TicTacToeConfig,

    /// Snake settings.
    #[serde(default)]
    snake: SnakeConfig,
}

/// Turn-game settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct TicTacToeConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Markers in a row needed to win.
    #[serde(default = "default_run_length")]
    run_length: usize,

    /// Side that opens every round.
    #[serde(default = "default_first_side")]
    first_side: Side,

    /// Side played by the opponent policy.
    #[serde(default = "default_policy_side")]
    policy_side: Side,

    /// Policy RNG seed; entropy when absent.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

fn default_board_size() -> usize {
    3
}

fn default_run_length() -> usize {
    3
}

fn default_first_side() -> Side {
    Side::X
}

fn default_policy_side() -> Side {
    Side::O
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            run_length: default_run_length(),
            first_side: default_first_side(),
            policy_side: default_policy_side(),
            seed: None,
        }
    }
}

/// Tick interval presets for the snake.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SnakeSpeed {
    /// 500 ms per tick.
    Slowest,
    /// 400 ms per tick.
    Slow,
    /// 300 ms per tick.
    #[default]
    Normal,
    /// 200 ms per tick.
    Brisk,
    /// 150 ms per tick.
    Fast,
    /// 100 ms per tick.
    Fastest,
}

impl SnakeSpeed {
    /// Time between ticks.
    pub fn interval(self) -> Duration {
        let millis = match self {
            SnakeSpeed::Slowest => 500,
            SnakeSpeed::Slow => 400,
            SnakeSpeed::Normal => 300,
            SnakeSpeed::Brisk => 200,
            SnakeSpeed::Fast => 150,
            SnakeSpeed::Fastest => 100,
        };
        Duration::from_millis(millis)
    }
}

/// Snake settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct SnakeConfig {
    /// Side length of the grid.
    #[serde(default = "default_grid_size")]
    grid_size: usize,

    /// Tick interval preset.
    #[serde(default)]
    speed: SnakeSpeed,

    /// Score awarded per food eaten.
    #[serde(default = "default_food_points")]
    food_points: u32,

    /// Food RNG seed; entropy when absent.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

fn default_grid_size() -> usize {
    12
}

fn default_food_points() -> u32 {
    10
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            speed: SnakeSpeed::default(),
            food_points: default_food_points(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on malformed TOML or inconsistent values.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file can't be read, parsed, or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            board_size = config.tictactoe.board_size,
            grid_size = config.snake.grid_size,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks that every value can form a round.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the first offending value.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ttt = &self.tictactoe;
        if ttt.board_size == 0 {
            warn!("Rejecting empty board");
            return Err(ConfigError::new("tictactoe.board_size must be at least 1".to_string()));
        }
        if ttt.run_length == 0 || ttt.run_length > ttt.board_size {
            warn!(run_length = ttt.run_length, "Rejecting run length");
            return Err(ConfigError::new(format!(
                "tictactoe.run_length must be between 1 and {}, got {}",
                ttt.board_size, ttt.run_length
            )));
        }
        if self.snake.grid_size < Grid::MIN_SIZE {
            warn!(grid_size = self.snake.grid_size, "Rejecting snake grid");
            return Err(ConfigError::new(format!(
                "snake.grid_size must be at least {}, got {}",
                Grid::MIN_SIZE,
                self.snake.grid_size
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
