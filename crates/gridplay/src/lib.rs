//! Session controllers for gridplay games.
//!
//! Each session owns one round and its cross-round tallies, validates every
//! input through the game crates, and hands hosts serializable views. The
//! snake session is passive; [`SnakeDriver`] ticks it on a timer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod driver;
mod error;
mod scoreboard;
mod session;
mod view;

pub use config::{ConfigError, GameConfig, SnakeConfig, SnakeSpeed, TicTacToeConfig};
pub use driver::{SnakeCommand, SnakeDriver, SnakeEvent};
pub use error::{ErrorKind, SessionError};
pub use scoreboard::{ScoreBoard, ScoreBucket, ScoreTally, SnakeRecords};
pub use session::{GameMode, SnakeSession, TicTacToeSession};
pub use view::{RoundView, SnakeView};
