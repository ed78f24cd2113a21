//! Command-line interface for hotseat.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hotseat - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe with a board that survives restarts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "hotseat.toml")]
    pub config: PathBuf,

    /// Override the file the game is saved to
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    /// Override the file the interactive UI logs to
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Print the board and status
    Show,

    /// Place the current player's mark
    Move {
        /// Cell index, 0-8 in row-major order
        index: usize,
    },

    /// Clear the board; X moves first
    Reset,
}
