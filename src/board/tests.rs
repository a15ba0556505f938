use super::*;
use crate::mnk_position;

fn play_out(board: &Board, moves: &[(usize, usize)]) -> Board {
    moves.iter().fold(board.clone(), |state, &(row, col)| {
        state.apply_move(Coord::new(row, col)).unwrap()
    })
}

#[test]
fn test_new_board() {
    let board = Board::new(3, 3).unwrap();
    assert_eq!(board.size(), 3);
    assert_eq!(board.win_length(), 3);
    assert_eq!(board.move_count(), 0);
    assert_eq!(board.current_player(), Mark::X, "X always moves first");
    assert_eq!(board.legal_moves().len(), 9);
    assert!(!board.is_terminal());
    assert_eq!(board.winner(), None);
    assert_eq!(board.utility(), None);
}

#[test]
fn test_invalid_dimensions() {
    assert_eq!(Board::new(0, 1).unwrap_err(), BoardError::InvalidBoardSize);
    assert_eq!(
        Board::new(3, 4).unwrap_err(),
        BoardError::InvalidWinLength {
            win_length: 4,
            size: 3
        }
    );
    assert_eq!(
        Board::new(3, 0).unwrap_err(),
        BoardError::InvalidWinLength {
            win_length: 0,
            size: 3
        }
    );
}

#[test]
fn test_apply_move_transitions() {
    let board = Board::new(3, 3).unwrap();
    let next = board.apply_move(Coord::new(1, 1)).unwrap();

    assert_eq!(next.get(Coord::new(1, 1)), Some(Mark::X));
    assert_eq!(next.move_count(), 1);
    assert_eq!(next.current_player(), Mark::O, "after X moves it is O's turn");
    assert_eq!(next.legal_moves().len(), 8);

    // The parent is a separate value and must be untouched.
    assert_eq!(board.get(Coord::new(1, 1)), None);
    assert_eq!(board.move_count(), 0);
}

#[test]
fn test_apply_move_is_repeatable() {
    let board = play_out(&Board::new(3, 3).unwrap(), &[(0, 0), (2, 2)]);
    let first = board.apply_move(Coord::new(1, 1)).unwrap();
    let second = board.apply_move(Coord::new(1, 1)).unwrap();
    assert_eq!(first, second, "same move from the same parent, same successor");
}

#[test]
fn test_apply_move_occupied_cell() {
    let board = Board::new(3, 3).unwrap();
    let next = board.apply_move(Coord::new(1, 1)).unwrap();
    assert_eq!(
        next.apply_move(Coord::new(1, 1)).unwrap_err(),
        BoardError::CellOccupied { row: 1, col: 1 }
    );
}

#[test]
fn test_apply_move_out_of_bounds() {
    let board = Board::new(3, 3).unwrap();
    assert_eq!(
        board.apply_move(Coord::new(3, 0)).unwrap_err(),
        BoardError::OutOfBounds {
            row: 3,
            col: 0,
            size: 3
        }
    );
}

#[test]
fn test_row_win() {
    // X: (0,0), (0,1), (0,2); O: (1,1), (2,2).
    let board = play_out(
        &Board::new(3, 3).unwrap(),
        &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)],
    );
    assert_eq!(board.winner(), Some(Mark::X));
    assert!(board.is_terminal());
    assert_eq!(board.utility(), Some(1));
}

#[test]
fn test_column_win_for_o() {
    let board = play_out(
        &Board::new(3, 3).unwrap(),
        &[(0, 0), (0, 2), (1, 1), (1, 2), (0, 1), (2, 2)],
    );
    assert_eq!(board.winner(), Some(Mark::O));
    assert!(board.is_terminal());
    assert_eq!(board.utility(), Some(-1));
}

#[test]
fn test_diagonal_win() {
    let board = mnk_position! {
        k = 3;
        X . O
        . X .
        O . X
    };
    assert_eq!(board.winner(), Some(Mark::X));
}

#[test]
fn test_anti_diagonal_win() {
    let board = play_out(
        &Board::new(3, 3).unwrap(),
        &[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)],
    );
    assert_eq!(board.winner(), Some(Mark::X));
}

#[test]
fn test_offset_diagonal_win_on_larger_board() {
    // k = 3 on 4x4: a diagonal run that starts away from the corner.
    let board = mnk_position! {
        k = 3;
        . X . .
        O . X .
        O . . X
        . . . .
    };
    assert_eq!(board.winner(), Some(Mark::X));
}

#[test]
fn test_win_requires_exactly_k_consecutive() {
    // k - 1 in a row is not a win.
    let two = mnk_position! {
        k = 3;
        X X . .
        . . . .
        O . . .
        . . . .
    };
    assert_eq!(two.winner(), None);
    assert!(!two.is_terminal());

    // k marks in a line split by the opponent are not a win.
    let split = mnk_position! {
        k = 3;
        X X O X
        . . . .
        O . . .
        . . . .
    };
    assert_eq!(split.winner(), None);

    // k consecutive is.
    let three = mnk_position! {
        k = 3;
        . X X X
        . . . .
        O . O .
        . . . .
    };
    assert_eq!(three.winner(), Some(Mark::X));
}

#[test]
fn test_draw() {
    // A full 3x3 board with no three-in-a-row ever formed.
    let board = play_out(
        &Board::new(3, 3).unwrap(),
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert!(board.is_terminal());
    assert_eq!(board.winner(), None);
    assert_eq!(board.utility(), Some(0));
}

#[test]
fn test_legal_moves_are_lexicographic() {
    let board = mnk_position! {
        k = 3;
        X . O
        . X .
        . . .
    };
    let moves = board.legal_moves();
    assert_eq!(moves.len(), 6);
    assert!(
        moves.windows(2).all(|pair| pair[0] < pair[1]),
        "legal moves should come out sorted by (row, col)"
    );
    assert_eq!(moves[0], Coord::new(0, 1));
    assert_eq!(moves[5], Coord::new(2, 2));
}

#[test]
fn test_move_count_tracks_occupied_cells() {
    let board = play_out(&Board::new(4, 3).unwrap(), &[(0, 0), (1, 0), (0, 1)]);
    let occupied = (0..4)
        .flat_map(|row| (0..4).map(move |col| (row, col)))
        .filter(|&(row, col)| board.get(Coord::new(row, col)).is_some())
        .count();
    assert_eq!(board.move_count(), occupied);
    assert_eq!(board.current_player(), Mark::O);
}

#[test]
fn test_center() {
    assert_eq!(Board::new(3, 3).unwrap().center(), Coord::new(1, 1));
    assert_eq!(Board::new(4, 3).unwrap().center(), Coord::new(2, 2));
}
