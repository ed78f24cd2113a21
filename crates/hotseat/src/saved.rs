//! Persisted game state codec.
//!
//! The board and the turn live under separate keys. The board is a JSON
//! array of nine `"X"` / `"O"` / `null` entries, the turn a JSON boolean
//! that is `true` while X moves next.

use crate::store::{KeyValueStore, StoreError};
use hotseat_rules::{Board, GameState, Mark};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

/// Key holding the board.
pub const SQUARES_KEY: &str = "ticTacToeSquares";

/// Key holding whether X moves next.
pub const IS_X_NEXT_KEY: &str = "ticTacToeIsXNext";

/// Reads the persisted game, falling back per key to the initial state.
///
/// Missing or unreadable values are not errors; only a failing store is.
#[instrument(skip(store))]
pub fn load_state<S: KeyValueStore>(store: &S) -> Result<GameState, StoreError> {
    let board = load_or_default(store, SQUARES_KEY, Board::new)?;
    let is_x_next = load_or_default(store, IS_X_NEXT_KEY, || true)?;
    let turn = if is_x_next { Mark::X } else { Mark::O };
    Ok(GameState::from_parts(board, turn))
}

/// Writes the board and the turn in one store operation.
#[instrument(skip(store, state), fields(turn = %state.turn()))]
pub fn save_state<S: KeyValueStore>(store: &mut S, state: &GameState) -> Result<(), StoreError> {
    let squares = serde_json::to_string(state.board())?;
    let is_x_next = serde_json::to_string(&(state.turn() == Mark::X))?;
    store.save_all(&[
        (SQUARES_KEY, squares.as_str()),
        (IS_X_NEXT_KEY, is_x_next.as_str()),
    ])?;
    debug!("Game state saved");
    Ok(())
}

fn load_or_default<S, T>(
    store: &S,
    key: &str,
    default: impl FnOnce() -> T,
) -> Result<T, StoreError>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let Some(raw) = store.load(key)? else {
        debug!(key, "Nothing persisted, using default");
        return Ok(default());
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(key, error = %e, "Persisted value unreadable, using default");
            Ok(default())
        }
    }
}
