//! Phase-specific typestate structs for a round.
//!
//! Each phase is its own type. A `RoundFinished` always carries an outcome,
//! and only a `RoundInProgress` accepts moves. Transitions borrow the current
//! phase and build the next one, so a rejected move leaves the caller's round
//! untouched.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::phases::Outcome;
use super::rules::{self, Verdict};
use super::{Board, Coord, DimensionError, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Round in setup phase: the board is always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSetup {
    board: Board,
}

impl RoundSetup {
    /// Creates a classic 3x3 round in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Creates a setup on a `size`×`size` board won by `run_length` in a row.
    #[instrument]
    pub fn with_dimensions(size: usize, run_length: usize) -> Result<Self, DimensionError> {
        Ok(Self {
            board: Board::with_dimensions(size, run_length)?,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the round with the opening side.
    #[instrument(skip(self))]
    pub fn start(self, first_side: Side) -> RoundInProgress {
        debug!(size = self.board.size(), "Round started");
        RoundInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first_side,
            first_side,
        }
    }
}

impl Default for RoundSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round in progress: accepts moves from the side to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Side,
    pub(crate) first_side: Side,
}

impl RoundInProgress {
    /// Applies a move and returns the next phase.
    ///
    /// Preconditions are always checked; postconditions in debug builds.
    ///
    /// # Errors
    ///
    /// `OutOfBounds`, `CellOccupied`, or `NotYourTurn`. `self` is unchanged.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(&self, action: Move) -> Result<RoundResult, MoveError> {
        MoveContract::pre(self, &action)?;

        let board = self.board.place(action.coord, action.side)?;
        let mut history = self.history.clone();
        history.push(action);

        match rules::evaluate(&board) {
            Verdict::Won { side, line } => {
                info!(winner = %side, moves = history.len(), "Round won");
                Ok(RoundResult::Finished(RoundFinished {
                    board,
                    history,
                    first_side: self.first_side,
                    outcome: Outcome::Winner(side),
                    winning_line: line,
                }))
            }
            Verdict::Drawn => {
                info!(moves = history.len(), "Round drawn");
                Ok(RoundResult::Finished(RoundFinished {
                    board,
                    history,
                    first_side: self.first_side,
                    outcome: Outcome::Draw,
                    winning_line: Vec::new(),
                }))
            }
            Verdict::InProgress => {
                let next = RoundInProgress {
                    board,
                    history,
                    to_move: self.to_move.opponent(),
                    first_side: self.first_side,
                };

                #[cfg(debug_assertions)]
                MoveContract::post(self, &next)?;

                Ok(RoundResult::InProgress(next))
            }
        }
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Returns the side that opened the round.
    pub fn first_side(&self) -> Side {
        self.first_side
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns empty cells in row-major order.
    pub fn valid_moves(&self) -> Vec<Coord> {
        self.board.empty_cells()
    }

    /// Abandons the round, returning an empty setup of the same dimensions.
    #[instrument(skip(self))]
    pub fn restart(&self) -> RoundSetup {
        RoundSetup {
            board: self.board.cleared(),
        }
    }

    /// Replays moves from a fresh setup.
    ///
    /// # Errors
    ///
    /// Any move error from the replayed moves, or `RoundAlreadyOver` if moves
    /// remain after the round finished.
    #[instrument(skip(setup))]
    pub fn replay(
        setup: RoundSetup,
        first_side: Side,
        moves: &[Move],
    ) -> Result<RoundResult, MoveError> {
        let mut round = setup.start(first_side);

        for (index, action) in moves.iter().enumerate() {
            match round.make_move(*action)? {
                RoundResult::InProgress(next) => round = next,
                RoundResult::Finished(done) if index + 1 == moves.len() => {
                    return Ok(RoundResult::Finished(done));
                }
                RoundResult::Finished(_) => return Err(MoveError::RoundAlreadyOver),
            }
        }

        Ok(RoundResult::InProgress(round))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round finished: the outcome is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundFinished {
    board: Board,
    history: Vec<Move>,
    first_side: Side,
    outcome: Outcome,
    winning_line: Vec<Coord>,
}

impl RoundFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the completed line; empty for a draw.
    pub fn winning_line(&self) -> &[Coord] {
        &self.winning_line
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the side that opened the round.
    pub fn first_side(&self) -> Side {
        self.first_side
    }

    /// Restarts on an empty board of the same dimensions.
    #[instrument(skip(self))]
    pub fn restart(&self) -> RoundSetup {
        RoundSetup {
            board: self.board.cleared(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundResult {
    /// Round continues.
    InProgress(RoundInProgress),
    /// Round finished.
    Finished(RoundFinished),
}
