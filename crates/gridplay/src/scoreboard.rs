//! Cross-round tallies kept for the lifetime of a session.

use derive_getters::Getters;
use derive_new::new;
use gridplay_tictactoe::{Outcome, Side};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Counter a completed turn-game round lands in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum ScoreBucket {
    /// Rounds won by X.
    X,
    /// Rounds won by O.
    O,
    /// Drawn rounds.
    Tie,
}

impl From<Side> for ScoreBucket {
    fn from(side: Side) -> Self {
        match side {
            Side::X => ScoreBucket::X,
            Side::O => ScoreBucket::O,
        }
    }
}

impl From<Outcome> for ScoreBucket {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(side) => side.into(),
            Outcome::Draw => ScoreBucket::Tie,
        }
    }
}

/// Snapshot of the turn-game counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct ScoreTally {
    /// Rounds won by X.
    pub x: u32,
    /// Rounds won by O.
    pub o: u32,
    /// Drawn rounds.
    pub ties: u32,
}

impl ScoreTally {
    /// Count in one bucket.
    pub fn get(&self, bucket: ScoreBucket) -> u32 {
        match bucket {
            ScoreBucket::X => self.x,
            ScoreBucket::O => self.o,
            ScoreBucket::Tie => self.ties,
        }
    }

    /// Completed rounds across all buckets.
    pub fn total(&self) -> u32 {
        self.x + self.o + self.ties
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}  Ties: {}", self.x, self.o, self.ties)
    }
}

/// Turn-game wins per side plus ties.
///
/// Counters only grow, one step per completed round, until `reset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    tally: ScoreTally,
}

impl ScoreBoard {
    /// Creates a board with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter matching `outcome`.
    #[instrument(skip(self))]
    pub fn record_result(&mut self, outcome: Outcome) -> ScoreBucket {
        let bucket = ScoreBucket::from(outcome);
        match bucket {
            ScoreBucket::X => self.tally.x += 1,
            ScoreBucket::O => self.tally.o += 1,
            ScoreBucket::Tie => self.tally.ties += 1,
        }
        info!(%bucket, tally = %self.tally, "Score recorded");
        bucket
    }

    /// Zeroes every counter.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.tally = ScoreTally::default();
        info!("Scores reset");
    }

    /// Current counters.
    pub fn snapshot(&self) -> ScoreTally {
        self.tally
    }

    /// Count in one bucket.
    pub fn count(&self, bucket: ScoreBucket) -> u32 {
        self.tally.get(bucket)
    }
}

/// Snake results across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct SnakeRecords {
    /// Rounds that ended in a crash.
    rounds_played: u32,
    /// Score of the most recent crashed round.
    last_score: Option<u32>,
    /// Highest score of any crashed round.
    best_score: u32,
}

impl SnakeRecords {
    /// Records the final score of a crashed round.
    #[instrument(skip(self))]
    pub fn record_round(&mut self, score: u32) {
        self.rounds_played += 1;
        self.last_score = Some(score);
        if score > self.best_score {
            info!(score, previous = self.best_score, "New best score");
            self.best_score = score;
        }
    }

    /// Clears every record.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
