//! History consistency invariant: history matches occupied cells.

use super::super::{Cell, RoundInProgress};
use super::Invariant;

/// Invariant: every recorded move occupies its own cell with its own side,
/// and no cell is filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<RoundInProgress> for HistoryConsistentInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let board = round.board();
        round.history().len() == board.filled()
            && round
                .history()
                .iter()
                .all(|m| board.get(m.coord) == Some(Cell::Occupied(m.side)))
    }

    fn description() -> &'static str {
        "History matches the occupied cells"
    }
}
