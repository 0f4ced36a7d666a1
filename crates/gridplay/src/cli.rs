//! Command-line interface for gridplay.

use clap::{Parser, Subcommand};
use gridplay::GameMode;
use std::path::PathBuf;

/// Gridplay - tic-tac-toe and snake in the terminal
#[derive(Parser, Debug)]
#[command(name = "gridplay")]
#[command(about = "Turn-based and continuous grid games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe, reading moves from stdin
    Tictactoe {
        /// Who controls each side
        #[arg(short, long, value_enum, default_value_t = GameMode::TwoHuman)]
        mode: GameMode,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Play snake, reading headings from stdin between ticks
    Snake {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Stop after this many ticks
        #[arg(long)]
        max_ticks: Option<u64>,
    },

    /// Replay a JSON move list and print the final round as JSON
    Replay {
        /// File holding a JSON array of moves
        #[arg(short, long)]
        file: PathBuf,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
