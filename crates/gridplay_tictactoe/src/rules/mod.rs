//! Game rules for K-in-a-row grids.
//!
//! Pure functions that evaluate a board. Rules are kept apart from board
//! storage so the turn engine, the contracts, and the opponent policies all
//! judge positions the same way.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_lines};

use super::{Board, Coord, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Terminal verdict for a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// A side completed a line.
    Won {
        /// The winning side.
        side: Side,
        /// Cells of the first completed line, in line order.
        line: Vec<Coord>,
    },
    /// The board is full with no completed line.
    Drawn,
}

impl Verdict {
    /// Returns true for `Won` and `Drawn`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::InProgress)
    }
}

/// Evaluates a board: win first, then draw, otherwise in progress.
#[instrument(skip(board), fields(size = board.size(), filled = board.filled()))]
pub fn evaluate(board: &Board) -> Verdict {
    if let Some((side, line)) = check_winner(board) {
        return Verdict::Won { side, line };
    }
    if is_full(board) {
        return Verdict::Drawn;
    }
    Verdict::InProgress
}
