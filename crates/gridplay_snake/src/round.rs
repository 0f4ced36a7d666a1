//! Snake round state machine.
//!
//! `Running` advances one cell per tick along the heading until the head
//! leaves the grid or hits the body, which moves the round to `Crashed`.
//! `Crashed` is terminal; a new round replaces it.

use super::rules::detect_crash;
use super::{CrashKind, Grid, Heading, SnakeError};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Lifecycle of a snake round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnakeStatus {
    /// Advancing on every tick.
    Running,
    /// Ticks are ignored until resumed.
    Paused,
    /// Terminal.
    Crashed(CrashKind),
}

/// Result of a heading change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteerOutcome {
    /// The heading changed.
    Turned,
    /// The heading was already the requested one.
    Unchanged,
    /// The request was the exact reverse of the heading and was dropped.
    IgnoredReversal,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The snake moved one cell.
    Moved,
    /// The snake moved onto food and grew.
    Ate,
    /// The round is paused; nothing moved.
    Paused,
    /// The head would have crashed; the body did not move.
    Crashed(CrashKind),
}

/// One snake round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SnakeRound {
    /// Grid with the snake and its food.
    grid: Grid,
    /// Direction the next tick moves in.
    heading: Heading,
    /// Lifecycle status.
    status: SnakeStatus,
    /// Points scored this round.
    score: u32,
    /// Food eaten this round.
    food_eaten: u32,
    /// Points awarded per food.
    food_points: u32,
    /// Ticks applied while running.
    ticks: u64,
}

impl SnakeRound {
    /// Heading of every new round.
    pub const START_HEADING: Heading = Heading::Right;

    /// Starts a running round on a `size`×`size` grid with food placed.
    #[instrument(skip(rng))]
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        food_points: u32,
        rng: &mut R,
    ) -> Result<Self, SnakeError> {
        let mut grid = Grid::new(size)?;
        grid.respawn_food(rng);
        info!(size, head = %grid.head(), "Snake round started");
        Ok(Self {
            grid,
            heading: Self::START_HEADING,
            status: SnakeStatus::Running,
            score: 0,
            food_eaten: 0,
            food_points,
            ticks: 0,
        })
    }

    /// Returns true once the round has crashed.
    pub fn is_over(&self) -> bool {
        matches!(self.status, SnakeStatus::Crashed(_))
    }

    /// Requests a new heading for the next tick.
    ///
    /// The exact reverse of the current heading is ignored.
    ///
    /// # Errors
    ///
    /// `RoundAlreadyOver` after a crash.
    #[instrument(skip(self), fields(current = %self.heading))]
    pub fn steer(&mut self, heading: Heading) -> Result<SteerOutcome, SnakeError> {
        if self.is_over() {
            warn!("Steer offered to a crashed round");
            return Err(SnakeError::RoundAlreadyOver);
        }
        if heading == self.heading {
            return Ok(SteerOutcome::Unchanged);
        }
        if heading.is_reverse_of(self.heading) {
            debug!("Reversal ignored");
            return Ok(SteerOutcome::IgnoredReversal);
        }
        self.heading = heading;
        debug!("Heading changed");
        Ok(SteerOutcome::Turned)
    }

    /// Stops ticks from moving the snake.
    ///
    /// # Errors
    ///
    /// `RoundAlreadyOver` after a crash.
    #[instrument(skip(self))]
    pub fn pause(&mut self) -> Result<(), SnakeError> {
        if self.is_over() {
            return Err(SnakeError::RoundAlreadyOver);
        }
        self.status = SnakeStatus::Paused;
        Ok(())
    }

    /// Lets ticks move the snake again.
    ///
    /// # Errors
    ///
    /// `RoundAlreadyOver` after a crash.
    #[instrument(skip(self))]
    pub fn resume(&mut self) -> Result<(), SnakeError> {
        if self.is_over() {
            return Err(SnakeError::RoundAlreadyOver);
        }
        self.status = SnakeStatus::Running;
        Ok(())
    }

    /// Advances the head one cell along the heading.
    ///
    /// A crash leaves the body where it was and moves the round to `Crashed`.
    /// Eating grows the snake, adds `food_points`, and respawns the food.
    ///
    /// # Errors
    ///
    /// `RoundAlreadyOver` after a crash.
    #[instrument(skip(self, rng), fields(heading = %self.heading, ticks = self.ticks))]
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<AdvanceOutcome, SnakeError> {
        match self.status {
            SnakeStatus::Crashed(_) => return Err(SnakeError::RoundAlreadyOver),
            SnakeStatus::Paused => return Ok(AdvanceOutcome::Paused),
            SnakeStatus::Running => {}
        }

        self.ticks += 1;
        let next = self.grid.head().step(self.heading);
        let eats = self.grid.food() == Some(next);

        if let Some(kind) = detect_crash(&self.grid, next, eats) {
            self.status = SnakeStatus::Crashed(kind);
            info!(%kind, score = self.score, len = self.grid.len(), "Snake crashed");
            return Ok(AdvanceOutcome::Crashed(kind));
        }

        self.grid.shift(next, eats);
        if eats {
            self.score = self.score.saturating_add(self.food_points);
            self.food_eaten += 1;
            self.grid.respawn_food(rng);
            debug!(score = self.score, "Food eaten");
            Ok(AdvanceOutcome::Ate)
        } else {
            Ok(AdvanceOutcome::Moved)
        }
    }

    #[cfg(test)]
    pub(crate) fn with_grid(grid: Grid, heading: Heading) -> Self {
        Self {
            grid,
            heading,
            status: SnakeStatus::Running,
            score: 0,
            food_eaten: 0,
            food_points: 10,
            ticks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_wall_crash_keeps_body() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = Grid::from_parts(4, vec![Point::new(3, 1), Point::new(2, 1)], None);
        let mut round = SnakeRound::with_grid(grid.clone(), Heading::Right);

        assert_eq!(
            round.advance(&mut rng),
            Ok(AdvanceOutcome::Crashed(CrashKind::Wall))
        );
        assert_eq!(round.grid(), &grid);
        assert!(round.is_over());
        assert_eq!(round.advance(&mut rng), Err(SnakeError::RoundAlreadyOver));
        assert_eq!(round.steer(Heading::Up), Err(SnakeError::RoundAlreadyOver));
    }

    #[test]
    fn test_reverse_heading_ignored() {
        let grid = Grid::from_parts(6, vec![Point::new(3, 3), Point::new(2, 3)], None);
        let mut round = SnakeRound::with_grid(grid, Heading::Right);
        let before = round.clone();

        assert_eq!(round.steer(Heading::Left), Ok(SteerOutcome::IgnoredReversal));
        assert_eq!(round, before);
        assert_eq!(round.steer(Heading::Right), Ok(SteerOutcome::Unchanged));
        assert_eq!(round.steer(Heading::Up), Ok(SteerOutcome::Turned));
        assert_eq!(round.heading(), &Heading::Up);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = Grid::from_parts(5, vec![Point::new(1, 1)], Some(Point::new(2, 1)));
        let mut round = SnakeRound::with_grid(grid, Heading::Right);

        assert_eq!(round.advance(&mut rng), Ok(AdvanceOutcome::Ate));
        assert_eq!(round.grid().len(), 2);
        assert_eq!(round.grid().head(), Point::new(2, 1));
        assert_eq!(*round.score(), 10);
        assert_eq!(*round.food_eaten(), 1);
        let food = round.grid().food().expect("free cells remain");
        assert!(!round.grid().is_occupied(food));

        assert!(round.advance(&mut rng).is_ok());
    }

    #[test]
    fn test_score_saturates_on_huge_food_points() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = Grid::from_parts(5, vec![Point::new(1, 1)], Some(Point::new(2, 1)));
        let mut round = SnakeRound::with_grid(grid, Heading::Right);
        round.food_points = u32::MAX;
        round.score = u32::MAX - 3;

        assert_eq!(round.advance(&mut rng), Ok(AdvanceOutcome::Ate));
        assert_eq!(*round.score(), u32::MAX);
        assert_eq!(*round.food_eaten(), 1);
    }

    #[test]
    fn test_chasing_tail_is_safe() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = Grid::from_parts(
            4,
            vec![
                Point::new(1, 1),
                Point::new(1, 2),
                Point::new(2, 2),
                Point::new(2, 1),
            ],
            None,
        );
        let mut round = SnakeRound::with_grid(grid, Heading::Right);
        assert_eq!(round.advance(&mut rng), Ok(AdvanceOutcome::Moved));
        assert_eq!(round.grid().head(), Point::new(2, 1));
        assert_eq!(round.grid().len(), 4);
    }

    #[test]
    fn test_pause_holds_position() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut round = SnakeRound::new(8, 10, &mut rng).unwrap();
        let head = round.grid().head();

        round.pause().unwrap();
        assert_eq!(round.advance(&mut rng), Ok(AdvanceOutcome::Paused));
        assert_eq!(round.grid().head(), head);

        round.resume().unwrap();
        round.advance(&mut rng).unwrap();
        assert_eq!(round.grid().head(), Point::new(head.x + 1, head.y));
    }
}
