//! Opponent policies for policy-controlled sides.

use super::rules::check_winner;
use super::{Board, Coord, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Decision procedure for a side not controlled by a human.
pub trait OpponentPolicy: Send {
    /// Picks a cell for `side` on `board`, or `None` when no cell is empty.
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<Coord>;

    /// Returns the policy's display name.
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn OpponentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OpponentPolicy({})", self.name())
    }
}

/// First empty cell (row-major) that wins immediately for `side`.
#[instrument(skip(board))]
pub fn winning_move(board: &Board, side: Side) -> Option<Coord> {
    board.empty_cells().into_iter().find(|coord| {
        board
            .place(*coord, side)
            .ok()
            .and_then(|next| check_winner(&next))
            .is_some_and(|(winner, _)| winner == side)
    })
}

/// One-ply greedy heuristic: win now, else block, else random.
///
/// It looks a single move ahead and can lose to optimal play.
pub struct GreedyPolicy<R = StdRng> {
    rng: R,
}

impl GreedyPolicy<StdRng> {
    /// Creates a policy whose random tier replays identically for `seed`.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a policy seeded from OS entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> GreedyPolicy<R> {
    /// Creates a policy drawing random moves from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> OpponentPolicy for GreedyPolicy<R> {
    #[instrument(skip(self, board), fields(policy = "greedy"))]
    fn choose_move(&mut self, board: &Board, side: Side) -> Option<Coord> {
        if let Some(coord) = winning_move(board, side) {
            debug!(%coord, "Playing winning move");
            return Some(coord);
        }

        if let Some(coord) = winning_move(board, side.opponent()) {
            debug!(%coord, "Blocking opponent");
            return Some(coord);
        }

        let coord = board.empty_cells().choose(&mut self.rng).copied();
        debug!(?coord, "Playing random move");
        coord
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}

/// Picks the first empty cell in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl OpponentPolicy for FirstAvailable {
    #[instrument(skip(self, board), fields(policy = "first_available"))]
    fn choose_move(&mut self, board: &Board, _side: Side) -> Option<Coord> {
        board.empty_cells().into_iter().next()
    }

    fn name(&self) -> &str {
        "FirstAvailable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_win_over_block() {
        // O can win at (1,2); X threatens (0,2). Winning comes first.
        let board = Board::from_rows(&["XX_", "OO_", "X__"], 3).unwrap();
        let mut policy = GreedyPolicy::seeded(1);
        assert_eq!(
            policy.choose_move(&board, Side::O),
            Some(Coord::new(1, 2))
        );
    }

    #[test]
    fn test_blocks_when_no_win() {
        let board = Board::from_rows(&["XX_", "_O_", "___"], 3).unwrap();
        let mut policy = GreedyPolicy::seeded(1);
        assert_eq!(
            policy.choose_move(&board, Side::O),
            Some(Coord::new(0, 2))
        );
    }

    #[test]
    fn test_first_winning_cell_in_scan_order() {
        // O wins at (0,2) via the column and at (2,0) via the row; row-major picks (0,2).
        let board = Board::from_rows(&["XX_", "X_O", "_OO"], 3).unwrap();
        assert_eq!(winning_move(&board, Side::O), Some(Coord::new(0, 2)));
    }

    #[test]
    fn test_random_tier_is_replayable() {
        let board = Board::from_rows(&["X__", "___", "___"], 3).unwrap();
        let first = GreedyPolicy::seeded(99).choose_move(&board, Side::O);
        let second = GreedyPolicy::seeded(99).choose_move(&board, Side::O);
        assert_eq!(first, second);
        assert!(first.is_some_and(|c| board.is_empty(c)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_rows(&["XOX", "XOO", "OXX"], 3).unwrap();
        assert_eq!(GreedyPolicy::seeded(0).choose_move(&board, Side::O), None);
        assert_eq!(FirstAvailable.choose_move(&board, Side::O), None);
    }

    #[test]
    fn test_first_available() {
        let board = Board::from_rows(&["XO_", "___", "___"], 3).unwrap();
        assert_eq!(
            FirstAvailable.choose_move(&board, Side::X),
            Some(Coord::new(0, 2))
        );
    }
}
