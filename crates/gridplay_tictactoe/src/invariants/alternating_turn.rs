//! Alternating turn invariant: sides take strict turns from the opener.

use super::super::RoundInProgress;
use super::Invariant;

/// Invariant: the history alternates sides starting with the opener, and the
/// side to move is the one after the last recorded move.
pub struct AlternatingTurnInvariant;

impl Invariant<RoundInProgress> for AlternatingTurnInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let mut expected = round.first_side();
        for action in round.history() {
            if action.side != expected {
                return false;
            }
            expected = expected.opponent();
        }
        round.to_move() == expected
    }

    fn description() -> &'static str {
        "Sides alternate strictly, starting with the opening side"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Move, RoundResult, RoundSetup, Side};

    #[test]
    fn test_fresh_round_holds() {
        assert!(AlternatingTurnInvariant::holds(
            &RoundSetup::new().start(Side::X)
        ));
    }

    #[test]
    fn test_detects_skipped_turn() {
        let round = RoundSetup::new().start(Side::X);
        let Ok(RoundResult::InProgress(mut round)) =
            round.make_move(Move::new(Side::X, Coord::new(0, 0)))
        else {
            panic!("Expected in-progress round");
        };
        round.to_move = Side::X;
        assert!(!AlternatingTurnInvariant::holds(&round));
    }
}
