//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Cursor starts on the center cell.
pub const START_CURSOR: usize = 4;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to the given cell.
    MoveCursor(usize),
    /// Play at the given cell.
    Play(usize),
    /// Clear the board.
    Reset,
    /// Leave the game.
    Quit,
    /// Key has no meaning here.
    Ignore,
}

/// Moves the cursor one step with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    row * 3 + col
}

/// Maps a key press to an action given the cursor position.
///
/// Digits 1-9 address cells directly, numbered like the board display.
pub fn action_for(key: KeyEvent, cursor: usize) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Play(cursor),
        KeyCode::Char(c @ '1'..='9') => Action::Play(c as usize - '1' as usize),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::MoveCursor(move_cursor(cursor, key.code))
        }
        _ => Action::Ignore,
    }
}
