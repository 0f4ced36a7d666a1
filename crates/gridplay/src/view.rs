//! Read-only projections handed to hosts.
//!
//! Hosts render views and never touch rounds directly.

use super::scoreboard::{ScoreTally, SnakeRecords};
use super::session::GameMode;
use gridplay_snake::{Grid, Heading, SnakeRound, SnakeStatus};
use gridplay_tictactoe::{AnyRound, Board, Coord, Move, RoundStatus, Side};
use serde::{Deserialize, Serialize};

/// Snapshot of a turn-game round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    /// Board contents.
    pub board: Board,
    /// Side to move or terminal result.
    pub status: RoundStatus,
    /// Cells of the completed line; empty unless won.
    pub winning_cells: Vec<Coord>,
    /// Moves applied so far, in order.
    pub history: Vec<Move>,
    /// Who controls each side.
    pub mode: GameMode,
    /// Session tally at the time of the snapshot.
    pub score: ScoreTally,
}

impl RoundView {
    /// Projects a round.
    pub fn new(round: &AnyRound, mode: GameMode, score: ScoreTally) -> Self {
        Self {
            board: round.board().clone(),
            status: round.status(),
            winning_cells: round.winning_line().to_vec(),
            history: round.history().to_vec(),
            mode,
            score,
        }
    }

    /// Side to move, if the round is in progress.
    pub fn to_move(&self) -> Option<Side> {
        match self.status {
            RoundStatus::InProgress { to_move } => Some(to_move),
            RoundStatus::Won(_) | RoundStatus::Drawn => None,
        }
    }

    /// Returns true once the round is won or drawn.
    pub fn is_over(&self) -> bool {
        self.to_move().is_none()
    }

    /// One-line status for display.
    pub fn status_line(&self) -> String {
        match self.status {
            RoundStatus::InProgress { to_move } => format!("{} to move.", to_move),
            RoundStatus::Won(side) => format!("{} wins!", side),
            RoundStatus::Drawn => "Draw!".to_string(),
        }
    }

    /// Board, status, and scores as terminal text.
    pub fn display(&self) -> String {
        format!(
            "{}\n\n{}\n{}",
            self.board.display(),
            self.status_line(),
            self.score
        )
    }
}

/// Snapshot of a snake round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeView {
    /// Grid with snake and food.
    pub grid: Grid,
    /// Current heading.
    pub heading: Heading,
    /// Running, paused, or crashed.
    pub status: SnakeStatus,
    /// Snake length.
    pub length: usize,
    /// Food eaten this round.
    pub food_eaten: u32,
    /// Round score.
    pub score: u32,
    /// Ticks applied this round.
    pub ticks: u64,
    /// Results of earlier rounds.
    pub records: SnakeRecords,
}

impl SnakeView {
    /// Projects a round.
    pub fn new(round: &SnakeRound, records: SnakeRecords) -> Self {
        Self {
            grid: round.grid().clone(),
            heading: *round.heading(),
            status: *round.status(),
            length: round.grid().len(),
            food_eaten: *round.food_eaten(),
            score: *round.score(),
            ticks: *round.ticks(),
            records,
        }
    }

    /// Returns true once the snake has crashed.
    pub fn is_over(&self) -> bool {
        matches!(self.status, SnakeStatus::Crashed(_))
    }

    /// Grid and statistics as terminal text.
    pub fn display(&self) -> String {
        let status = match self.status {
            SnakeStatus::Running => "running".to_string(),
            SnakeStatus::Paused => "paused".to_string(),
            SnakeStatus::Crashed(kind) => format!("crashed ({})", kind),
        };
        format!(
            "{}\nScore: {}  Length: {}  Food: {}  Best: {}  [{}]",
            self.grid.display(),
            self.score,
            self.length,
            self.food_eaten,
            self.records.best_score(),
            status
        )
    }
}
