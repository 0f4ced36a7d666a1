//! Gridplay - terminal host
//!
//! Plays tic-tac-toe and snake over stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use gridplay::{
    GameConfig, GameMode, SnakeCommand, SnakeDriver, SnakeEvent, SnakeSession, TicTacToeSession,
};
use gridplay_snake::Heading;
use gridplay_tictactoe::{Coord, Move};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,gridplay=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Tictactoe { mode, config } => run_tictactoe(mode, load_config(config)?),
        Command::Snake { config, max_ticks } => run_snake(load_config(config)?, max_ticks).await,
        Command::Replay { file, config } => run_replay(&file, load_config(config)?),
    }
}

/// Loads the config file, or defaults when none is given.
#[instrument]
fn load_config(path: Option<PathBuf>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => {
            debug!("No config file, using defaults");
            Ok(GameConfig::default())
        }
    }
}

/// Plays tic-tac-toe until stdin closes or `quit`.
fn run_tictactoe(mode: GameMode, config: GameConfig) -> Result<()> {
    let mut session = TicTacToeSession::new(config.tictactoe().clone())
        .context("Failed to create tic-tac-toe session")?;
    let mut view = session.start_new_round(mode)?;
    info!(%mode, "Tic-tac-toe session started");

    println!("{}", view.display());
    println!("Enter `row col` or a cell index; `new`, `scores`, `reset-scores`, `quit`.");

    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        match line.trim() {
            "" => continue,
            "quit" => break,
            "new" => view = session.start_new_round(mode)?,
            "scores" => {
                println!("{}", session.current_score());
                continue;
            }
            "reset-scores" => {
                session.reset_scores();
                view = session.current_view();
            }
            input => {
                let size = view.board.size();
                let Some(coord) = Coord::parse(input, size) else {
                    println!("Unrecognized input: {}", input);
                    continue;
                };
                let side = view.to_move().unwrap_or(*session.config().first_side());
                match session.submit_move(side, coord) {
                    Ok(next) => view = next,
                    Err(e) => {
                        warn!(error = %e, "Move rejected");
                        println!("{} ({})", e, e.kind());
                        continue;
                    }
                }
            }
        }
        println!("{}", view.display());
        if view.is_over() {
            println!("Type `new` for another round.");
        }
    }

    info!(score = %session.current_score(), "Tic-tac-toe session ended");
    Ok(())
}

/// Plays snake on a timer, forwarding stdin lines as commands.
async fn run_snake(config: GameConfig, max_ticks: Option<u64>) -> Result<()> {
    let session =
        SnakeSession::new(config.snake().clone()).context("Failed to create snake session")?;
    println!("{}", session.current_view().display());
    println!("Steer with up/down/left/right; `pause`, `resume`.");

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    // Blocking stdin reads live on a detached thread so exit isn't held up.
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            let command = match line.trim() {
                "pause" => SnakeCommand::Pause,
                "resume" => SnakeCommand::Resume,
                other => match other.parse::<Heading>() {
                    Ok(heading) => SnakeCommand::Steer(heading),
                    Err(_) => continue,
                },
            };
            if command_tx.send(command).is_err() {
                break;
            }
        }
    });

    let mut driver = SnakeDriver::new(session, command_rx, event_tx);
    if let Some(max_ticks) = max_ticks {
        driver = driver.with_max_ticks(max_ticks);
    }
    let handle = tokio::spawn(driver.run());

    while let Some(event) = event_rx.recv().await {
        match event {
            SnakeEvent::Ticked(view) => println!("\n{}", view.display()),
            SnakeEvent::Crashed(view) => {
                println!("\n{}\nGame over!", view.display());
            }
        }
    }

    let session = handle.await.context("Snake ticker panicked")??;
    let records = session.records();
    println!(
        "Rounds: {}  Best: {}",
        records.rounds_played(),
        records.best_score()
    );
    Ok(())
}

/// Replays a JSON move list through a fresh two-human session.
#[instrument]
fn run_replay(file: &Path, config: GameConfig) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let moves: Vec<Move> =
        serde_json::from_str(&content).context("Failed to parse move list")?;

    let mut session = TicTacToeSession::new(config.tictactoe().clone())?;
    let view = session.replay(&moves).context("Replay rejected")?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
