//! End-to-end game scenarios played through the public API.

use hotseat_rules::{
    apply_move, compute_status, reset, Board, Cell, GameState, Mark, MoveRejection, Status,
};

fn play_all(moves: &[usize]) -> GameState {
    let mut state = GameState::new();
    for &index in moves {
        state.play(index).expect("Valid move");
    }
    state
}

fn cells(marks: [Option<Mark>; 9]) -> [Cell; 9] {
    marks.map(Cell::from)
}

#[test]
fn test_x_wins_top_row() {
    let mut state = play_all(&[0, 3, 1, 4, 2]);
    let x = Some(Mark::X);
    let o = Some(Mark::O);
    assert_eq!(
        state.board().cells(),
        &cells([x, x, x, o, o, None, None, None, None])
    );
    assert_eq!(state.status(), Status::Won(Mark::X));

    let before = state;
    assert_eq!(state.play(5), Err(MoveRejection::GameDecided));
    assert_eq!(state, before);
}

#[test]
fn test_draw() {
    let state = play_all(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let x = Some(Mark::X);
    let o = Some(Mark::O);
    assert_eq!(state.board().cells(), &cells([x, o, x, x, o, o, x, o, x]));
    assert_eq!(state.status(), Status::Draw);
}

#[test]
fn test_diagonal_win() {
    let state = play_all(&[0, 1, 4, 2, 8]);
    let x = Some(Mark::X);
    let o = Some(Mark::O);
    assert_eq!(
        state.board().cells(),
        &cells([x, o, None, o, x, None, None, None, x])
    );
    assert_eq!(state.status(), Status::Won(Mark::X));
    assert_eq!(hotseat_rules::winning_line(state.board()), Some([0, 4, 8]));
}

#[test]
fn test_turn_alternates_across_accepted_moves() {
    let mut state = GameState::new();
    let mut expected = Mark::X;
    for index in [4, 0, 8, 2, 1, 7] {
        assert_eq!(state.turn(), expected);
        state.play(index).expect("Valid move");
        expected = expected.opponent();
        // Rejected attempts in between must not disturb the alternation.
        assert!(state.play(index).is_err());
        assert!(state.play(100).is_err());
        assert_eq!(state.turn(), expected);
    }
    assert_eq!(state.turn(), Mark::X);
}

#[test]
fn test_reset_from_decided_game() {
    let mut state = play_all(&[0, 3, 1, 4, 2]);
    assert!(state.status().is_decided());
    state.reset();
    assert_eq!(state, reset());
    assert_eq!(state.board(), &Board::new());
    assert_eq!(state.turn(), Mark::X);
    assert_eq!(state.status(), Status::InProgress(Mark::X));
}

#[test]
fn test_drawn_board_rejects_every_cell() {
    let state = play_all(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    for index in 0..9 {
        assert_eq!(
            apply_move(state.board(), state.turn(), index),
            Err(MoveRejection::Occupied(index))
        );
    }
}

/// Decodes `n` in base 3 into a board: 0 = empty, 1 = X, 2 = O.
fn board_from_code(mut n: u32) -> Board {
    let mut cells = [Cell::Empty; 9];
    for cell in &mut cells {
        *cell = match n % 3 {
            0 => Cell::Empty,
            1 => Cell::Occupied(Mark::X),
            _ => Cell::Occupied(Mark::O),
        };
        n /= 3;
    }
    Board::from_cells(cells)
}

fn has_line(board: &Board, mark: Mark) -> bool {
    let c = board.cells();
    let owned = |i: usize| c[i] == Cell::Occupied(mark);
    (0..3).any(|r| owned(r * 3) && owned(r * 3 + 1) && owned(r * 3 + 2))
        || (0..3).any(|col| owned(col) && owned(col + 3) && owned(col + 6))
        || (owned(0) && owned(4) && owned(8))
        || (owned(2) && owned(4) && owned(6))
}

#[test]
fn test_status_over_every_board() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        let full = board.cells().iter().all(|c| *c != Cell::Empty);
        let status = compute_status(&board, Mark::O);

        match status {
            Status::Won(mark) => assert!(has_line(&board, mark), "{board}"),
            Status::Draw => {
                assert!(full, "{board}");
                assert!(!has_line(&board, Mark::X) && !has_line(&board, Mark::O));
            }
            Status::InProgress(turn) => {
                assert_eq!(turn, Mark::O);
                assert!(!full, "{board}");
                assert!(!has_line(&board, Mark::X) && !has_line(&board, Mark::O));
            }
        }
    }
}

#[test]
fn test_rejection_is_idempotent_over_every_board() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        for index in 0..9 {
            let occupied = !board.is_empty(index);
            let decided = hotseat_rules::compute_winner(&board).is_some();
            match apply_move(&board, Mark::X, index) {
                Ok((next, turn)) => {
                    assert!(!occupied && !decided);
                    assert_eq!(turn, Mark::O);
                    assert_eq!(next.get(index), Some(Cell::Occupied(Mark::X)));
                }
                Err(_) => assert!(occupied || decided),
            }
        }
    }
}

#[test]
fn test_persisted_shapes() {
    let state = play_all(&[0, 3, 1, 4, 2]);
    let json = serde_json::to_string(state.board()).unwrap();
    assert_eq!(json, r#"["X","X","X","O","O",null,null,null,null]"#);

    let board: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(&board, state.board());

    let short = serde_json::from_str::<Board>(r#"["X",null]"#);
    assert!(short.is_err());
}
