//! Presentation model shared by the front ends.

use crate::saved::{load_state, save_state};
use crate::store::{FileStore, KeyValueStore, StoreError};
use std::path::PathBuf;
use derive_getters::Getters;
use derive_new::new;
use hotseat_rules::{reset, winning_line, Cell, GameState, MoveRejection, Status};
use tracing::{info, instrument};

/// What a front end needs to draw one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct CellView {
    /// Board index (0-8).
    index: usize,
    /// Cell contents.
    cell: Cell,
    /// Whether the cell belongs to the winning line.
    highlighted: bool,
}

impl CellView {
    /// Text shown in the cell: the mark's name, or nothing.
    pub fn label(&self) -> &'static str {
        self.cell.mark().map_or("", <&'static str>::from)
    }
}

/// Result of asking for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Mark placed and state saved.
    Accepted,
    /// Nothing changed.
    Rejected(MoveRejection),
}

/// Owns the game state and writes it through to a store.
#[derive(Debug)]
pub struct GameSession<S> {
    store: S,
    state: GameState,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Opens a session, reading the persisted state once.
    #[instrument(skip(store))]
    pub fn open(store: S) -> Result<Self, StoreError> {
        let state = load_state(&store)?;
        info!(turn = %state.turn(), status = %state.status(), "Session opened");
        Ok(Self { store, state })
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current derived status.
    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Human-readable status line.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// One view per cell, in board order.
    pub fn cells(&self) -> [CellView; 9] {
        let board = self.state.board();
        let line = winning_line(board);
        std::array::from_fn(|index| {
            CellView::new(
                index,
                board.cells()[index],
                line.is_some_and(|l| l.contains(&index)),
            )
        })
    }

    /// Plays the current turn at `index`, saving on success.
    ///
    /// The in-memory state only changes once the save went through.
    #[instrument(skip(self))]
    pub fn request_move(&mut self, index: usize) -> Result<MoveOutcome, StoreError> {
        let mut next = self.state;
        match next.play(index) {
            Ok(()) => {
                self.commit(next)?;
                Ok(MoveOutcome::Accepted)
            }
            Err(rejection) => Ok(MoveOutcome::Rejected(rejection)),
        }
    }

    /// Clears the board and saves.
    #[instrument(skip(self))]
    pub fn request_reset(&mut self) -> Result<(), StoreError> {
        self.commit(reset())?;
        info!("Game reset");
        Ok(())
    }

    fn commit(&mut self, next: GameState) -> Result<(), StoreError> {
        save_state(&mut self.store, &next)?;
        self.state = next;
        Ok(())
    }

    /// Gives back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}

impl GameSession<FileStore> {
    /// Opens a session saved in the JSON file at `path`.
    pub fn open_file(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::open(FileStore::new(path))
    }
}
