//! Session controllers.
//!
//! A session owns the current round and its tallies. Every operation runs to
//! completion before returning, and a rejected operation leaves the round as
//! it was.

mod snake;
mod tictactoe;

pub use snake::SnakeSession;
pub use tictactoe::TicTacToeSession;

use serde::{Deserialize, Serialize};

/// Who controls the two turn-game sides.
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
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Both sides enter moves.
    #[default]
    TwoHuman,
    /// The configured policy side is played by the opponent policy.
    #[serde(rename = "vs-policy")]
    #[strum(serialize = "vs-policy")]
    #[value(name = "vs-policy")]
    HumanVsPolicy,
}
