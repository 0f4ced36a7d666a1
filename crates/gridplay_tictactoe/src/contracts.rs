//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, RoundInvariants};
use super::typestate::RoundInProgress;
use super::Cell;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the target cell lies on the grid.
pub struct CellInBounds;

impl CellInBounds {
    /// Rejects coordinates off the grid.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &RoundInProgress) -> Result<(), MoveError> {
        if round.board().contains(mov.coord) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds(mov.coord))
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied cells.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &RoundInProgress) -> Result<(), MoveError> {
        if round.board().is_empty(mov.coord) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.coord))
        }
    }
}

/// Precondition: the mover is the side to move.
pub struct SidesTurn;

impl SidesTurn {
    /// Rejects moves out of turn.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &RoundInProgress) -> Result<(), MoveError> {
        if mov.side == round.to_move() {
            Ok(())
        } else {
            Err(MoveError::NotYourTurn(mov.side))
        }
    }
}

/// Composite precondition, checked in order: bounds, emptiness, turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &RoundInProgress) -> Result<(), MoveError> {
        CellInBounds::check(mov, round)?;
        CellIsEmpty::check(mov, round)?;
        SidesTurn::check(mov, round)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions: exactly one cell was filled, no filled cell changed, and
/// every [`RoundInvariants`] member holds.
pub struct MoveContract;

impl Contract<RoundInProgress, Move> for MoveContract {
    fn pre(round: &RoundInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, round)
    }

    fn post(before: &RoundInProgress, after: &RoundInProgress) -> Result<(), MoveError> {
        let kept = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .all(|(b, a)| *b == Cell::Empty || b == a);
        if !kept || after.board().filled() != before.board().filled() + 1 {
            warn!("Board did not grow by exactly one marker");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: board must grow by exactly one marker".to_string(),
            ));
        }

        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Round invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
