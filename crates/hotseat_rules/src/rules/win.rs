//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use tracing::instrument;

/// The eight winning triples, in the order they are checked:
/// rows top to bottom, columns left to right, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line in [`WINNING_LINES`] order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();
    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        cells[a].mark().is_some() && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Returns the mark owning the first completed line, if any.
///
/// Boards with several completed lines cannot arise from legal play;
/// for those the earliest line in [`WINNING_LINES`] decides.
#[instrument(skip(board))]
pub fn compute_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.cells()[a].mark())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn with_marks(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(index, mark) in marks {
            board.set(index, Cell::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(compute_winner(&Board::new()), None);
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let board = with_marks(&line.map(|i| (i, Mark::O)));
            assert_eq!(compute_winner(&board), Some(Mark::O), "line {:?}", line);
            assert_eq!(winning_line(&board), Some(line));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = with_marks(&[(0, Mark::X), (1, Mark::X), (2, Mark::O)]);
        assert_eq!(compute_winner(&board), None);
    }

    #[test]
    fn test_earliest_line_breaks_ties() {
        // O holds the middle row, X the top row: the top row is checked first.
        let board = with_marks(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::O),
            (5, Mark::O),
        ]);
        assert_eq!(compute_winner(&board), Some(Mark::X));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn test_column_checked_before_diagonal() {
        // X owns column 0 and the anti-diagonal 2-4-6.
        let board = with_marks(&[
            (0, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
            (2, Mark::X),
            (4, Mark::X),
        ]);
        assert_eq!(winning_line(&board), Some([0, 3, 6]));
    }
}
