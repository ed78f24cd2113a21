//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Kept apart from the state
//! container so front ends can evaluate arbitrary boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{compute_winner, winning_line, WINNING_LINES};

use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Derived status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Won(Mark),
    /// Board is full and nobody won.
    #[display("It's a draw!")]
    Draw,
    /// Game continues; holds the mark that moves next.
    #[display("Next Player: {}", _0)]
    InProgress(Mark),
}

impl Status {
    /// True for `Won` and `Draw`.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Status::InProgress(_))
    }
}

/// Computes the status of `board` with `turn` to move.
///
/// A winner always takes precedence over a full board.
#[instrument(skip(board))]
pub fn compute_status(board: &Board, turn: Mark) -> Status {
    if let Some(winner) = compute_winner(board) {
        Status::Won(winner)
    } else if is_full(board) {
        Status::Draw
    } else {
        Status::InProgress(turn)
    }
}
