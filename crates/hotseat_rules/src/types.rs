//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// The mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
)]
pub enum Mark {
    /// Player X (always moves first).
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single square of the board.
///
/// Serializes as `null`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Mark>", into = "Option<Mark>")]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Square holds a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Cell::Empty, Cell::Occupied)
    }
}

impl From<Cell> for Option<Mark> {
    fn from(cell: Cell) -> Self {
        cell.mark()
    }
}

/// 3x3 board, row-major (`index = row * 3 + col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const SIZE: usize = 9;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; Self::SIZE],
        }
    }

    /// Builds a board from explicit cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns true if `index` is on the board and unoccupied.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Indices of the unoccupied cells, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        (0..Self::SIZE).filter(|&i| self.is_empty(i)).collect()
    }

    /// Caller guarantees `index < 9`.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_indices(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.set(0, Cell::Occupied(Mark::X));
        board.set(4, Cell::Occupied(Mark::O));
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
