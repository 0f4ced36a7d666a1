//! K-in-a-row game logic.
//!
//! Pure rules for the turn game: an N×N board, terminal detection that names
//! the winning cells, a typestate turn engine with move contracts, and
//! opponent policies for a side not played by a human.
//!
//! # Example
//!
//! ```
//! use gridplay_tictactoe::{AnyRound, Coord, Move, RoundSetup, RoundStatus, Side};
//!
//! let round = AnyRound::start(RoundSetup::new(), Side::X);
//! let round = round.make_move(Move::new(Side::X, Coord::new(1, 1))).unwrap();
//! assert_eq!(round.status(), RoundStatus::InProgress { to_move: Side::O });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod invariants;
mod opponent;
mod phases;
pub mod rules;
mod types;
mod typestate;
mod wrapper;

pub use action::{Move, MoveError};
pub use contracts::{CellInBounds, CellIsEmpty, Contract, LegalMove, MoveContract, SidesTurn};
pub use invariants::{
    AlternatingTurnInvariant, BalancedMarksInvariant, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, RoundInvariants,
};
pub use opponent::{FirstAvailable, GreedyPolicy, OpponentPolicy, winning_move};
pub use phases::Outcome;
pub use rules::Verdict;
pub use types::{Board, Cell, Coord, DimensionError, Side};
pub use typestate::{RoundFinished, RoundInProgress, RoundResult, RoundSetup};
pub use wrapper::{AnyRound, RoundStatus};
