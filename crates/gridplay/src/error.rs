//! Session-level errors.

use derive_more::{Display, From};
use gridplay_snake::SnakeError;
use gridplay_tictactoe::{DimensionError, MoveError};
use serde::{Deserialize, Serialize};

/// Error category a host reports to the user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum ErrorKind {
    /// The target lies outside the grid.
    OutOfBounds,
    /// The cell is taken or it is the other side's turn.
    IllegalMove,
    /// The round reached a terminal state.
    RoundAlreadyOver,
    /// The configured dimensions cannot form a round.
    InvalidSetup,
}

/// Error returned by session controllers.
///
/// Wraps the per-game errors so controllers propagate them with `?`. A
/// rejected operation leaves the session's round untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum SessionError {
    /// Turn-game move rejected.
    #[display("{}", _0)]
    Move(MoveError),

    /// Snake operation rejected.
    #[display("{}", _0)]
    Snake(SnakeError),

    /// Board dimensions rejected.
    #[display("{}", _0)]
    Dimensions(DimensionError),
}

impl SessionError {
    /// Categorizes the error for host messaging.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::Move(MoveError::OutOfBounds(_)) => ErrorKind::OutOfBounds,
            SessionError::Move(MoveError::RoundAlreadyOver) => ErrorKind::RoundAlreadyOver,
            SessionError::Move(
                MoveError::CellOccupied(_)
                | MoveError::NotYourTurn(_)
                | MoveError::InvariantViolation(_),
            ) => ErrorKind::IllegalMove,
            SessionError::Snake(SnakeError::OutOfBounds(_)) => ErrorKind::OutOfBounds,
            SessionError::Snake(SnakeError::RoundAlreadyOver) => ErrorKind::RoundAlreadyOver,
            SessionError::Snake(SnakeError::GridTooSmall(_)) => ErrorKind::InvalidSetup,
            SessionError::Dimensions(_) => ErrorKind::InvalidSetup,
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(e) => Some(e),
            SessionError::Snake(e) => Some(e),
            SessionError::Dimensions(e) => Some(e),
        }
    }
}
