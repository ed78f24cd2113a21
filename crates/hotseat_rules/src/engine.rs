//! Move application and the owned game state.

use super::action::MoveRejection;
use super::rules::{compute_status, compute_winner, Status};
use super::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Applies `turn`'s mark at `index`, returning the new board and next turn.
///
/// The input board is left untouched. The move is rejected when the
/// index is off the board, the game already has a winner, or the cell
/// is occupied, checked in that order.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, turn: Mark, index: usize) -> Result<(Board, Mark), MoveRejection> {
    if index >= Board::SIZE {
        return Err(MoveRejection::OutOfRange(index));
    }
    if compute_winner(board).is_some() {
        return Err(MoveRejection::GameDecided);
    }
    if !board.is_empty(index) {
        return Err(MoveRejection::Occupied(index));
    }

    let mut next = *board;
    next.set(index, Cell::Occupied(turn));
    Ok((next, turn.opponent()))
}

/// Returns the initial state: empty board, X to move.
#[instrument]
pub fn reset() -> GameState {
    GameState::new()
}

/// Board plus the mark that moves next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Mark,
}

impl GameState {
    /// Creates a fresh game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
        }
    }

    /// Rebuilds a state from a stored board and turn.
    pub fn from_parts(board: Board, turn: Mark) -> Self {
        Self { board, turn }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the derived status.
    pub fn status(&self) -> Status {
        compute_status(&self.board, self.turn)
    }

    /// Plays the current turn at `index`.
    ///
    /// On rejection the state is unchanged.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play(&mut self, index: usize) -> Result<(), MoveRejection> {
        match apply_move(&self.board, self.turn, index) {
            Ok((board, turn)) => {
                debug!(index, next = %turn, "Move accepted");
                self.board = board;
                self.turn = turn;
                Ok(())
            }
            Err(rejection) => {
                debug!(index, %rejection, "Move rejected");
                Err(rejection)
            }
        }
    }

    /// Returns to the initial state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = reset();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
