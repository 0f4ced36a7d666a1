//! Fixed-interval ticker for snake sessions.

use crate::error::SessionError;
use crate::session::SnakeSession;
use crate::view::SnakeView;
use gridplay_snake::Heading;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, instrument};

/// Input collected between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeCommand {
    /// Change heading before the next tick.
    Steer(Heading),
    /// Stop advancing.
    Pause,
    /// Continue advancing.
    Resume,
}

/// Messages sent from the driver to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnakeEvent {
    /// A tick was applied.
    Ticked(SnakeView),
    /// The snake crashed; the driver stops.
    Crashed(SnakeView),
}

/// Advances a snake session on a timer, draining commands between ticks.
#[derive(Debug)]
pub struct SnakeDriver {
    session: SnakeSession,
    commands: mpsc::UnboundedReceiver<SnakeCommand>,
    events: mpsc::UnboundedSender<SnakeEvent>,
    interval: Duration,
    max_ticks: Option<u64>,
}

impl SnakeDriver {
    /// Creates a driver ticking at the session's configured speed.
    pub fn new(
        session: SnakeSession,
        commands: mpsc::UnboundedReceiver<SnakeCommand>,
        events: mpsc::UnboundedSender<SnakeEvent>,
    ) -> Self {
        let interval = session.interval();
        Self {
            session,
            commands,
            events,
            interval,
            max_ticks: None,
        }
    }

    /// Shortest accepted tick interval.
    pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

    /// Overrides the tick interval, raised to at least [`Self::MIN_INTERVAL`].
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(Self::MIN_INTERVAL);
        self
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stops after `max_ticks` ticks even if the snake is alive.
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    /// Runs until a crash, the tick limit, or the host dropping the event
    /// receiver. Returns the session so its records survive.
    ///
    /// # Errors
    ///
    /// `RoundAlreadyOver` if the session's round had already crashed.
    #[instrument(skip(self), fields(interval_ms = self.interval.as_millis() as u64))]
    pub async fn run(mut self) -> Result<SnakeSession, SessionError> {
        info!(max_ticks = ?self.max_ticks, "Starting snake ticker");
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks = 0u64;

        loop {
            if self.max_ticks.is_some_and(|max| ticks >= max) {
                info!(ticks, "Tick limit reached");
                break;
            }
            ticker.tick().await;

            self.drain_commands()?;
            let view = self.session.tick()?;
            ticks += 1;

            let over = view.is_over();
            let event = if over {
                SnakeEvent::Crashed(view)
            } else {
                SnakeEvent::Ticked(view)
            };
            if self.events.send(event).is_err() {
                debug!("Event receiver dropped");
                break;
            }
            if over {
                break;
            }
        }

        Ok(self.session)
    }

    fn drain_commands(&mut self) -> Result<(), SessionError> {
        loop {
            match self.commands.try_recv() {
                Ok(SnakeCommand::Steer(heading)) => {
                    self.session.submit_move(heading)?;
                }
                Ok(SnakeCommand::Pause) => {
                    self.session.pause()?;
                }
                Ok(SnakeCommand::Resume) => {
                    self.session.resume()?;
                }
                Err(TryRecvError::Empty) => return Ok(()),
                Err(TryRecvError::Disconnected) => {
                    debug!("Command channel closed");
                    return Ok(());
                }
            }
        }
    }
}
