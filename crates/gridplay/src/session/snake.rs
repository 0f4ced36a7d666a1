//! Snake session.

use crate::config::SnakeConfig;
use crate::error::SessionError;
use crate::scoreboard::SnakeRecords;
use crate::view::SnakeView;
use gridplay_snake::{AdvanceOutcome, Heading, SnakeRound, SteerOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Controller for one player's snake session.
///
/// Passive: the round only moves when a scheduler calls [`tick`](Self::tick).
#[derive(Debug)]
pub struct SnakeSession {
    config: SnakeConfig,
    round: SnakeRound,
    rng: StdRng,
    records: SnakeRecords,
}

impl SnakeSession {
    /// Creates a session with a running round.
    ///
    /// # Errors
    ///
    /// `Snake(GridTooSmall)` if the grid can't hold a snake and its food.
    #[instrument(skip(config))]
    pub fn new(config: SnakeConfig) -> Result<Self, SessionError> {
        let mut rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        let round = SnakeRound::new(*config.grid_size(), *config.food_points(), &mut rng)?;
        Ok(Self {
            config,
            round,
            rng,
            records: SnakeRecords::default(),
        })
    }

    /// Current round.
    pub fn round(&self) -> &SnakeRound {
        &self.round
    }

    /// Session configuration.
    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    /// Results of crashed rounds.
    pub fn records(&self) -> SnakeRecords {
        self.records
    }

    /// Time between ticks for the configured speed.
    pub fn interval(&self) -> Duration {
        self.config.speed().interval()
    }

    /// Replaces the round with a fresh running one.
    ///
    /// # Errors
    ///
    /// `Snake(GridTooSmall)` if the grid can't hold a snake and its food.
    #[instrument(skip(self))]
    pub fn start_new_round(&mut self) -> Result<SnakeView, SessionError> {
        self.round = SnakeRound::new(
            *self.config.grid_size(),
            *self.config.food_points(),
            &mut self.rng,
        )?;
        Ok(self.current_view())
    }

    /// Requests a heading for the next tick. The exact reverse is ignored.
    ///
    /// # Errors
    ///
    /// `RoundAlreadyOver` after a crash.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, heading: Heading) -> Result<SnakeView, SessionError> {
        let outcome = self.round.steer(heading)?;
        if outcome == SteerOutcome::IgnoredReversal {
            debug!(%heading, "Reverse heading dropped");
        }
        Ok(self.current_view())
    }

    /// Advances the round one cell. A paused round is returned unchanged.
    ///
    /// # Errors
    ///
    /// `RoundAlreadyOver` after a crash.
    #[instrument(skip(self))]
    pub fn tick(&mut self) -> Result<SnakeView, SessionError> {
        if let AdvanceOutcome::Crashed(kind) = self.round.advance(&mut self.rng)? {
            let score = *self.round.score();
            self.records.record_round(score);
            info!(%kind, score, rounds = self.records.rounds_played(), "Snake round over");
        }
        Ok(self.current_view())
    }

    /// Pauses the round.
    ///
    /// # Errors
    ///
    /// `RoundAlreadyOver` after a crash.
    #[instrument(skip(self))]
    pub fn pause(&mut self) -> Result<SnakeView, SessionError> {
        self.round.pause()?;
        Ok(self.current_view())
    }

    /// Resumes a paused round.
    ///
    /// # Errors
    ///
    /// `RoundAlreadyOver` after a crash.
    #[instrument(skip(self))]
    pub fn resume(&mut self) -> Result<SnakeView, SessionError> {
        self.round.resume()?;
        Ok(self.current_view())
    }

    /// Projection of the current round.
    pub fn current_view(&self) -> SnakeView {
        SnakeView::new(&self.round, self.records)
    }

    /// Clears the cross-round records.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.records.reset();
        info!("Snake records reset");
    }
}
