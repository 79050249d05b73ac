//! Board tests - grid access and hazard placement

use std::collections::HashSet;

use minewalk::core::{Board, BoardError};
use minewalk::types::{EMPTY, HAZARD};

fn hazards(board: &Board) -> HashSet<(usize, usize)> {
    let mut found = HashSet::new();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.is_hazard(row, col).unwrap() {
                found.insert((row, col));
            }
        }
    }
    found
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(5, 5).unwrap();
    assert_eq!(board.rows(), 5);
    assert_eq!(board.cols(), 5);
    assert_eq!(board.capacity(), 25);

    for row in 0..5 {
        for col in 0..5 {
            assert_eq!(board.get_cell(row, col), Ok(EMPTY), "cell ({row}, {col})");
        }
    }
}

#[test]
fn test_board_invalid_dimensions() {
    assert_eq!(
        Board::new(0, 5).unwrap_err(),
        BoardError::InvalidDimensions { rows: 0, cols: 5 }
    );
    let err = Board::new(3, 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "number of rows and columns must be greater than 0 (got 3x0)"
    );
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(5, 5).unwrap();
    board.set_cell(2, 2, 9).unwrap();
    assert_eq!(board.get_cell(2, 2), Ok(9));

    board.set_cell(0, 0, HAZARD).unwrap();
    assert_eq!(board.is_hazard(0, 0), Ok(true));
}

#[test]
fn test_board_out_of_bounds() {
    let mut board = Board::new(5, 5).unwrap();
    let oob = |row, col| BoardError::OutOfBounds {
        row,
        col,
        rows: 5,
        cols: 5,
    };

    assert_eq!(board.is_hazard(5, 0), Err(oob(5, 0)));
    assert_eq!(board.is_hazard(0, 5), Err(oob(0, 5)));
    assert_eq!(board.get_cell(7, 7), Err(oob(7, 7)));
    assert_eq!(board.set_cell(0, 5, HAZARD), Err(oob(0, 5)));
    assert_eq!(board.hazard_count(), 0);
}

#[test]
fn test_place_hazards_count() {
    let mut board = Board::new(5, 5).unwrap();
    board.place_hazards(5).unwrap();
    assert_eq!(hazards(&board).len(), 5);
    assert_eq!(board.hazard_count(), 5);
}

#[test]
fn test_place_hazards_fills_whole_board() {
    let mut board = Board::with_seed(3, 4, 77).unwrap();
    board.place_hazards(12).unwrap();
    assert!(board.cells().iter().all(|&m| m == HAZARD));
}

#[test]
fn test_place_hazards_invalid_count_leaves_board_unmarked() {
    let mut board = Board::new(5, 5).unwrap();

    assert_eq!(
        board.place_hazards(0),
        Err(BoardError::InvalidHazardCount {
            count: 0,
            available: 25
        })
    );
    assert!(board.place_hazards(26).is_err());
    assert_eq!(board.hazard_count(), 0);
}

#[test]
fn test_same_seed_same_layout() {
    let mut a = Board::with_seed(8, 8, 2024).unwrap();
    let mut b = Board::with_seed(8, 8, 2024).unwrap();
    a.place_hazards(10).unwrap();
    b.place_hazards(10).unwrap();
    assert_eq!(a.cells(), b.cells());
    assert_eq!(a.seed(), 2024);
}
