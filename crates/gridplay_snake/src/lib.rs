//! Snake game logic.
//!
//! A one-cell snake starts in the centre of an N×N grid heading right. Each
//! tick moves the head one cell; eating food grows the body and scores, and
//! leaving the grid or running into the body ends the round.
//!
//! # Example
//!
//! ```
//! use gridplay_snake::{AdvanceOutcome, Heading, SnakeRound};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut round = SnakeRound::new(12, 10, &mut rng).unwrap();
//! round.steer(Heading::Down).unwrap();
//! assert!(matches!(
//!     round.advance(&mut rng).unwrap(),
//!     AdvanceOutcome::Moved | AdvanceOutcome::Ate
//! ));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod grid;
mod round;
pub mod rules;
mod types;

pub use error::SnakeError;
pub use grid::Grid;
pub use round::{AdvanceOutcome, SnakeRound, SnakeStatus, SteerOutcome};
pub use types::{CrashKind, Heading, Point, SnakeCell};
