//! Hotseat - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use hotseat::{FileStore, GameSession, HotseatConfig, MoveOutcome};
use std::io::Write;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::Play);

    // The TUI logs to a file named in the config, so it initializes later.
    if command != Command::Play {
        initialize_cli_tracing();
    }
    let config = load_config(&cli)?;

    match command {
        Command::Play => run_play(&config),
        Command::Show => {
            let session = open_session(&config)?;
            print_game(&session);
            Ok(())
        }
        Command::Move { index } => {
            let mut session = open_session(&config)?;
            run_move(&mut session, index, &mut std::io::stderr())?;
            print_game(&session);
            Ok(())
        }
        Command::Reset => {
            let mut session = open_session(&config)?;
            session.request_reset().context("Failed to save reset board")?;
            print_game(&session);
            Ok(())
        }
    }
}

/// Run the interactive TUI
fn run_play(config: &HotseatConfig) -> Result<()> {
    hotseat::tui::init_file_logging(config.log_file())?;
    info!(
        state_file = %config.state_file().display(),
        log_file = %config.log_file().display(),
        "Configuration resolved"
    );
    let mut session = open_session(config)?;
    hotseat::tui::run_tui(&mut session)
}

/// Apply a single move; a rejected move is reported on `err` and is not a failure.
#[instrument(skip(session, err))]
fn run_move(
    session: &mut GameSession<FileStore>,
    index: usize,
    err: &mut impl Write,
) -> Result<()> {
    match session.request_move(index).context("Failed to save move")? {
        MoveOutcome::Accepted => info!("Move applied"),
        MoveOutcome::Rejected(rejection) => {
            debug!(%rejection, "Move rejected");
            writeln!(err, "Move ignored: {}", rejection)?;
        }
    }
    Ok(())
}

#[instrument(skip(cli), fields(config = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<HotseatConfig> {
    let config = HotseatConfig::load_or_default(&cli.config)?
        .with_overrides(cli.state_file.clone(), cli.log_file.clone());
    debug!(?config, "Configuration resolved");
    Ok(config)
}

fn open_session(config: &HotseatConfig) -> Result<GameSession<FileStore>> {
    GameSession::open_file(config.state_file().clone()).with_context(|| {
        format!(
            "Failed to load saved game from {}",
            config.state_file().display()
        )
    })
}

fn print_game(session: &GameSession<FileStore>) {
    println!("{}\n\n{}", session.state().board(), session.status_text());
}

fn initialize_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
