//! Pure tic-tac-toe rules for a two-player hot-seat game.
//!
//! Everything here is synchronous and free of I/O. Boards are small
//! `Copy` snapshots: applying a move produces a new board and never
//! mutates the one passed in.
//!
//! # Example
//!
//! ```
//! use hotseat_rules::{apply_move, compute_status, Board, Mark, Status};
//!
//! let (board, turn) = apply_move(&Board::new(), Mark::X, 4).unwrap();
//! assert_eq!(compute_status(&board, turn), Status::InProgress(Mark::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod rules;
mod types;

pub use action::MoveRejection;
pub use engine::{apply_move, reset, GameState};
pub use rules::{compute_status, compute_winner, is_full, winning_line, Status, WINNING_LINES};
pub use types::{Board, Cell, Mark};
