//! Turn-game session.

use crate::config::TicTacToeConfig;
use crate::error::SessionError;
use crate::scoreboard::{ScoreBoard, ScoreTally};
use crate::session::GameMode;
use crate::view::RoundView;
use gridplay_tictactoe::{
    AnyRound, Coord, GreedyPolicy, Move, MoveError, OpponentPolicy, RoundInProgress, RoundSetup,
    Side,
};
use tracing::{debug, info, instrument, warn};

/// Controller for one player's turn-game session.
///
/// Owns the current round, the tally, and the opponent policy.
#[derive(Debug)]
pub struct TicTacToeSession {
    config: TicTacToeConfig,
    mode: GameMode,
    round: AnyRound,
    scores: ScoreBoard,
    policy: Box<dyn OpponentPolicy>,
}

impl TicTacToeSession {
    /// Creates a two-human session with the greedy policy ready for
    /// `HumanVsPolicy` rounds.
    ///
    /// # Errors
    ///
    /// `Dimensions` if the board size and run length can't form a round.
    #[instrument(skip(config))]
    pub fn new(config: TicTacToeConfig) -> Result<Self, SessionError> {
        let policy: Box<dyn OpponentPolicy> = match config.seed() {
            Some(seed) => Box::new(GreedyPolicy::seeded(*seed)),
            None => Box::new(GreedyPolicy::from_entropy()),
        };
        Self::with_policy(config, policy)
    }

    /// Creates a two-human session using `policy` for the policy side.
    ///
    /// # Errors
    ///
    /// `Dimensions` if the board size and run length can't form a round.
    #[instrument(skip(config, policy), fields(policy_name = policy.name()))]
    pub fn with_policy(
        config: TicTacToeConfig,
        policy: Box<dyn OpponentPolicy>,
    ) -> Result<Self, SessionError> {
        let round = AnyRound::start(Self::setup(&config)?, *config.first_side());
        info!(size = config.board_size(), "Turn-game session created");
        Ok(Self {
            config,
            mode: GameMode::TwoHuman,
            round,
            scores: ScoreBoard::new(),
            policy,
        })
    }

    fn setup(config: &TicTacToeConfig) -> Result<RoundSetup, SessionError> {
        Ok(RoundSetup::with_dimensions(
            *config.board_size(),
            *config.run_length(),
        )?)
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current round.
    pub fn round(&self) -> &AnyRound {
        &self.round
    }

    /// Session configuration.
    pub fn config(&self) -> &TicTacToeConfig {
        &self.config
    }

    /// Side the policy plays in `HumanVsPolicy` mode.
    pub fn policy_side(&self) -> Side {
        *self.config.policy_side()
    }

    /// Discards the current round and starts a fresh one in `mode`.
    ///
    /// When the policy side opens, its first move is already applied.
    ///
    /// # Errors
    ///
    /// `Dimensions` if the configured board can't form a round.
    #[instrument(skip(self))]
    pub fn start_new_round(&mut self, mode: GameMode) -> Result<RoundView, SessionError> {
        let setup = Self::setup(&self.config)?;
        let fresh = AnyRound::start(setup, *self.config.first_side());
        let next = self.with_policy_reply(fresh, mode)?;
        self.mode = mode;
        info!(%mode, first = %self.config.first_side(), "Round started");
        self.commit(next);
        Ok(self.current_view())
    }

    /// Applies `side`'s move at `coord`, then the policy's reply if it is the
    /// policy's turn.
    ///
    /// # Errors
    ///
    /// `RoundAlreadyOver`, `OutOfBounds`, `CellOccupied`, or `NotYourTurn`,
    /// with the round left unchanged.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, side: Side, coord: Coord) -> Result<RoundView, SessionError> {
        let next = self.round.make_move(Move::new(side, coord))?;
        debug!(%side, %coord, "Move accepted");
        let next = self.with_policy_reply(next, self.mode)?;
        self.commit(next);
        Ok(self.current_view())
    }

    /// Replaces the round with one rebuilt from `moves` in two-human mode.
    ///
    /// # Errors
    ///
    /// The first rejected move's error; the current round is kept.
    #[instrument(skip(self, moves), fields(moves = moves.len()))]
    pub fn replay(&mut self, moves: &[Move]) -> Result<RoundView, SessionError> {
        let setup = Self::setup(&self.config)?;
        let result = RoundInProgress::replay(setup, *self.config.first_side(), moves)
            .inspect_err(|e| warn!(error = %e, "Replay rejected"))?;
        self.mode = GameMode::TwoHuman;
        self.commit(result.into());
        Ok(self.current_view())
    }

    /// Projection of the current round.
    pub fn current_view(&self) -> RoundView {
        RoundView::new(&self.round, self.mode, self.scores.snapshot())
    }

    /// Current tally.
    pub fn current_score(&self) -> ScoreTally {
        self.scores.snapshot()
    }

    /// Zeroes the tally without touching the round.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    fn commit(&mut self, next: AnyRound) {
        self.round = next;
        if let Some(outcome) = self.round.outcome() {
            info!(%outcome, "Round finished");
            self.scores.record_result(outcome);
        }
    }

    /// Applies the policy's reply to a candidate round when it is the
    /// policy's turn. The session itself is not touched.
    fn with_policy_reply(
        &mut self,
        round: AnyRound,
        mode: GameMode,
    ) -> Result<AnyRound, SessionError> {
        let side = self.policy_side();
        if mode != GameMode::HumanVsPolicy || round.to_move() != Some(side) {
            return Ok(round);
        }

        let Some(coord) = self.policy.choose_move(round.board(), side) else {
            warn!(%side, "Policy found no empty cell");
            return Err(MoveError::RoundAlreadyOver.into());
        };
        debug!(policy = self.policy.name(), %coord, "Policy reply");
        let next = round.make_move(Move::new(side, coord)).inspect_err(|e| {
            warn!(policy = self.policy.name(), error = %e, "Policy reply rejected");
        })?;
        Ok(next)
    }
}
