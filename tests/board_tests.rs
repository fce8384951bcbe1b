use othello::{Board, BoardError, Cell, ConfigError, Opening, Side};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(6, 10).unwrap();
    assert_eq!(board.rows(), 6);
    assert_eq!(board.cols(), 10);
    assert_eq!(board.disc_count(), 0);
    assert!(board.cells().all(|(_, cell)| cell == Cell::Empty));
    assert_eq!(board.cells().count(), 60);
}

#[test]
fn test_invalid_dimensions() {
    assert_eq!(Board::new(3, 8).unwrap_err(), ConfigError::InvalidDimension(3));
    assert_eq!(Board::new(8, 28).unwrap_err(), ConfigError::InvalidDimension(28));
    assert_eq!(Board::new(8, 7).unwrap_err(), ConfigError::InvalidDimension(7));
    assert!(Board::new(26, 4).is_ok());
}

#[test]
fn test_get_set_and_bounds() {
    let mut board = Board::new(4, 6).unwrap();
    board.set(3, 5, Cell::Disc(Side::White)).unwrap();
    assert_eq!(board.get(3, 5).unwrap(), Cell::Disc(Side::White));
    assert!(board.in_bounds(3, 5));
    assert!(!board.in_bounds(4, 0));
    assert!(!board.in_bounds(0, 6));

    assert_eq!(
        board.get(4, 0).unwrap_err(),
        BoardError::OutOfRange { row: 4, col: 0 }
    );
    assert_eq!(
        board.set(0, 6, Cell::Disc(Side::Black)).unwrap_err(),
        BoardError::OutOfRange { row: 0, col: 6 }
    );
    assert_eq!(board.disc_count(), 1);
}

#[test]
fn test_standard_opening() {
    let board = Board::for_opening(8, 8, Opening::Standard).unwrap();
    assert_eq!(board.get(3, 3).unwrap(), Cell::Disc(Side::White));
    assert_eq!(board.get(3, 4).unwrap(), Cell::Disc(Side::Black));
    assert_eq!(board.get(4, 3).unwrap(), Cell::Disc(Side::Black));
    assert_eq!(board.get(4, 4).unwrap(), Cell::Disc(Side::White));
    assert_eq!(board.disc_count(), 4);

    let empty = Board::for_opening(8, 8, Opening::Empty).unwrap();
    assert_eq!(empty.disc_count(), 0);
}
