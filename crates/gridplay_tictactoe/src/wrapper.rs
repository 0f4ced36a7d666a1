//! Serializable round wrapper for typestate phases.

use super::action::{Move, MoveError};
use super::phases::Outcome;
use super::typestate::{RoundFinished, RoundInProgress, RoundResult, RoundSetup};
use super::{Board, Coord, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Status of a round as seen by a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Waiting for `to_move`.
    InProgress {
        /// Side to move.
        to_move: Side,
    },
    /// A side completed a line.
    Won(Side),
    /// The board filled with no completed line.
    Drawn,
}

/// A round in any live phase.
///
/// Typestate phases can't be stored in one slot directly, so a session keeps
/// this enum and swaps it wholesale after every accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyRound {
    /// Round in progress.
    InProgress(RoundInProgress),
    /// Round finished.
    Finished(RoundFinished),
}

impl From<RoundInProgress> for AnyRound {
    fn from(round: RoundInProgress) -> Self {
        AnyRound::InProgress(round)
    }
}

impl From<RoundFinished> for AnyRound {
    fn from(round: RoundFinished) -> Self {
        AnyRound::Finished(round)
    }
}

impl From<RoundResult> for AnyRound {
    fn from(result: RoundResult) -> Self {
        match result {
            RoundResult::InProgress(r) => r.into(),
            RoundResult::Finished(r) => r.into(),
        }
    }
}

impl AnyRound {
    /// Starts a fresh round from a setup.
    #[instrument(skip(setup))]
    pub fn start(setup: RoundSetup, first_side: Side) -> Self {
        setup.start(first_side).into()
    }

    /// Returns the board for any phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyRound::InProgress(r) => r.board(),
            AnyRound::Finished(r) => r.board(),
        }
    }

    /// Returns the move history for any phase.
    pub fn history(&self) -> &[Move] {
        match self {
            AnyRound::InProgress(r) => r.history(),
            AnyRound::Finished(r) => r.history(),
        }
    }

    /// Returns the side that opened the round.
    pub fn first_side(&self) -> Side {
        match self {
            AnyRound::InProgress(r) => r.first_side(),
            AnyRound::Finished(r) => r.first_side(),
        }
    }

    /// Returns true if the round is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyRound::Finished(_))
    }

    /// Returns the side to move, if the round is in progress.
    pub fn to_move(&self) -> Option<Side> {
        match self {
            AnyRound::InProgress(r) => Some(r.to_move()),
            AnyRound::Finished(_) => None,
        }
    }

    /// Returns the outcome, if the round is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            AnyRound::InProgress(_) => None,
            AnyRound::Finished(r) => Some(*r.outcome()),
        }
    }

    /// Returns the winning cells; empty unless the round was won.
    pub fn winning_line(&self) -> &[Coord] {
        match self {
            AnyRound::InProgress(_) => &[],
            AnyRound::Finished(r) => r.winning_line(),
        }
    }

    /// Returns the host-facing status.
    pub fn status(&self) -> RoundStatus {
        match self {
            AnyRound::InProgress(r) => RoundStatus::InProgress {
                to_move: r.to_move(),
            },
            AnyRound::Finished(r) => match r.outcome() {
                Outcome::Winner(side) => RoundStatus::Won(*side),
                Outcome::Draw => RoundStatus::Drawn,
            },
        }
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self.status() {
            RoundStatus::InProgress { to_move } => format!("In progress. {} to move.", to_move),
            RoundStatus::Won(side) => format!("Round over. {} wins!", side),
            RoundStatus::Drawn => "Round over. Draw!".to_string(),
        }
    }

    /// Applies a move, returning the next round.
    ///
    /// # Errors
    ///
    /// `RoundAlreadyOver` on a finished round, otherwise the move's own
    /// validation error. `self` is never modified.
    #[instrument(skip(self))]
    pub fn make_move(&self, action: Move) -> Result<AnyRound, MoveError> {
        match self {
            AnyRound::InProgress(round) => {
                let next = round.make_move(action).inspect_err(|e| {
                    warn!(error = %e, "Move rejected");
                })?;
                debug!(moves = round.history().len() + 1, "Move accepted");
                Ok(next.into())
            }
            AnyRound::Finished(_) => {
                warn!("Move offered to a finished round");
                Err(MoveError::RoundAlreadyOver)
            }
        }
    }

    /// Builds a fresh round on an empty board of the same dimensions.
    #[instrument(skip(self))]
    pub fn restart(&self, first_side: Side) -> AnyRound {
        let setup = match self {
            AnyRound::InProgress(r) => r.restart(),
            AnyRound::Finished(r) => r.restart(),
        };
        AnyRound::start(setup, first_side)
    }
}
