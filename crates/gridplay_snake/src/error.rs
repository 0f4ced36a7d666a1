//! Snake errors.

use super::Point;

/// Error raised by snake operations.
///
/// A rejected operation never changes the round it was offered to.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SnakeError {
    /// The point lies outside the grid.
    #[display("Point {} is outside the grid", _0)]
    OutOfBounds(Point),

    /// The round already crashed.
    #[display("Round is already over")]
    RoundAlreadyOver,

    /// The grid cannot hold a snake and its food.
    #[display("Grid size {} is too small (minimum 2)", _0)]
    GridTooSmall(usize),
}

impl std::error::Error for SnakeError {}
