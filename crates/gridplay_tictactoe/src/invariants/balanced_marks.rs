//! Balanced marks invariant: the opener leads by at most one marker.

use super::super::RoundInProgress;
use super::Invariant;

/// Invariant: the opening side has as many markers as the other side, or one
/// more.
pub struct BalancedMarksInvariant;

impl Invariant<RoundInProgress> for BalancedMarksInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let first = round.first_side();
        let opener = round.board().count(first);
        let other = round.board().count(first.opponent());
        opener == other || opener == other + 1
    }

    fn description() -> &'static str {
        "Opening side leads by at most one marker"
    }
}
