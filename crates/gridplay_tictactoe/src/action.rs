//! First-class move types.
//!
//! Moves are domain events, not side effects. They carry the mover's intent
//! and are validated before the board changes.

use super::{Coord, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A side placing its marker on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The target cell.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(side: Side, coord: Coord) -> Self {
        Self { side, coord }
    }

    /// Returns the side making this move.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns the target cell.
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.coord)
    }
}

/// Error raised when validating or applying a move.
///
/// A rejected move never changes the round it was offered to.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the grid.
    #[display("Cell {} is outside the board", _0)]
    OutOfBounds(Coord),

    /// The target cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The mover is not the side to move.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Side),

    /// The round already reached a terminal state.
    #[display("Round is already over")]
    RoundAlreadyOver,

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// Returns true for the illegal-move family (occupied cell or wrong side).
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, MoveError::CellOccupied(_) | MoveError::NotYourTurn(_))
    }
}

impl std::error::Error for MoveError {}
