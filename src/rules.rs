//! Move validation, atomic application of captures, and scoring.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::{Cell, MoveError, Side};
use crate::scan::{scan_all, DIRECTIONS};

/// Result of an accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// Cells changed by the move: the placed disc plus every captured disc.
    pub flipped: usize,
}

impl Applied {
    /// Opponent discs turned over, excluding the placed disc.
    pub fn captured(&self) -> usize {
        self.flipped - 1
    }
}

/// Validate and apply a placement for `side` at `(row, col)`.
///
/// Checks run in order: bounds, occupancy, then the eight direction scans.
/// On success the placement and all flips are committed together; on any
/// error `board` is left exactly as it was.
pub fn try_move(board: &mut Board, side: Side, row: usize, col: usize) -> Result<Applied, MoveError> {
    if !board.in_bounds(row, col) {
        return Err(MoveError::OutOfRange);
    }
    if !board.get(row, col)?.is_empty() {
        return Err(MoveError::CellOccupied);
    }
    let captures = scan_all(board, side, row, col);
    if !captures.iter().any(|c| c.is_capture()) {
        return Err(MoveError::NoCaptureAvailable);
    }

    // Stage on a copy so a failure part-way through never leaks out.
    let mut staged = board.clone();
    staged.set(row, col, Cell::Disc(side))?;
    let mut flipped = 1;
    for (dir, capture) in DIRECTIONS.iter().zip(captures) {
        let n = capture.count();
        let (mut r, mut c) = (row, col);
        for _ in 0..n {
            (r, c) = staged.offset(r, c, *dir).ok_or(MoveError::OutOfRange)?;
            staged.set(r, c, Cell::Disc(side))?;
        }
        flipped += n;
    }
    *board = staged;
    Ok(Applied { flipped })
}

/// Returns `true` when placing at `(row, col)` would be accepted.
pub fn is_legal(board: &Board, side: Side, row: usize, col: usize) -> bool {
    matches!(board.get(row, col), Ok(Cell::Empty))
        && scan_all(board, side, row, col).iter().any(|c| c.is_capture())
}

/// Every cell where `side` may legally place, row-major.
pub fn legal_moves(board: &Board, side: Side) -> Vec<(usize, usize)> {
    board
        .cells()
        .filter(|&((r, c), _)| is_legal(board, side, r, c))
        .map(|(pos, _)| pos)
        .collect()
}

/// Returns `true` when `side` has at least one legal placement.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board.cells().any(|((r, c), _)| is_legal(board, side, r, c))
}

/// Number of discs owned by `side`.
pub fn score(board: &Board, side: Side) -> usize {
    board
        .cells()
        .filter(|&(_, cell)| cell == Cell::Disc(side))
        .count()
}
