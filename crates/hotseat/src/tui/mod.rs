//! Interactive terminal front end.

mod board;
mod input;

pub use board::render;
pub use input::{action_for, move_cursor, Action, START_CURSOR};

use crate::session::{GameSession, MoveOutcome};
use crate::store::KeyValueStore;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};

/// Sends tracing output to `log_file` so it does not corrupt the screen.
pub fn init_file_logging(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,hotseat=debug")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the interactive game until the players quit.
#[instrument(skip_all)]
pub fn run_tui<S: KeyValueStore>(session: &mut GameSession<S>) -> Result<()> {
    info!("Starting hotseat TUI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = event_loop(&mut terminal, session);
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

type TeardownStep = (&'static str, fn() -> io::Result<()>);

const TEARDOWN: [TeardownStep; 2] = [
    ("disable raw mode", disable_raw_mode),
    ("leave alternate screen", leave_alternate_screen),
];

fn leave_alternate_screen() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Runs every step even when earlier ones fail; returns how many failed.
fn run_teardown(steps: &[TeardownStep]) -> usize {
    let mut failures = 0;
    for &(name, step) in steps {
        if let Err(e) = step() {
            warn!(step = name, error = %e, "Terminal teardown step failed");
            failures += 1;
        }
    }
    failures
}

/// Raw mode plus alternate screen, undone on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, dropping the guard restores the terminal.
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        run_teardown(&TEARDOWN);
    }
}

fn event_loop<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut GameSession<S>,
) -> Result<()> {
    let mut cursor = START_CURSOR;

    loop {
        terminal.draw(|f| render(f, session, cursor))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match action_for(key, cursor) {
            Action::Quit => {
                info!("Quit requested");
                return Ok(());
            }
            Action::MoveCursor(next) => cursor = next,
            Action::Play(index) => {
                cursor = index;
                if let MoveOutcome::Rejected(rejection) = session.request_move(index)? {
                    debug!(index, %rejection, "Ignoring rejected move");
                }
            }
            Action::Reset => session.request_reset()?,
            Action::Ignore => {}
        }
    }
}
