//! Hotseat tic-tac-toe - two players, one terminal.
//!
//! # Architecture
//!
//! - **Rules**: pure engine from [`hotseat_rules`]
//! - **Store**: key-value persistence that survives restarts
//! - **Session**: presentation model the front ends read and drive
//! - **TUI**: interactive ratatui front end
//!
//! # Example
//!
//! ```
//! use hotseat::{GameSession, MemoryStore, MoveOutcome};
//!
//! # fn example() -> Result<(), hotseat::StoreError> {
//! let mut session = GameSession::open(MemoryStore::new())?;
//! assert_eq!(session.request_move(4)?, MoveOutcome::Accepted);
//! assert_eq!(session.status_text(), "Next Player: O");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod saved;
mod session;
mod store;
pub mod tui;

pub use config::{ConfigError, HotseatConfig};
pub use saved::{load_state, save_state, IS_X_NEXT_KEY, SQUARES_KEY};
pub use session::{CellView, GameSession, MoveOutcome};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

pub use hotseat_rules::{Board, Cell, GameState, Mark, MoveRejection, Status};
