//! Walks one line outward from a candidate cell and reports whether it
//! brackets a run of opponent discs.

use crate::board::Board;
use crate::common::{Cell, Side};

/// A unit step on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Direction { d_row, d_col }
    }
}

/// The eight compass directions, clockwise from top-left.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
    Direction::new(0, 1),
    Direction::new(1, 1),
    Direction::new(1, 0),
    Direction::new(1, -1),
    Direction::new(0, -1),
];

/// Outcome of scanning a single direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureResult {
    NoCapture,
    /// Number of contiguous opponent discs that would flip (always `>= 1`).
    Capture(usize),
}

impl CaptureResult {
    /// Number of discs captured, zero for `NoCapture`.
    pub fn count(self) -> usize {
        match self {
            CaptureResult::NoCapture => 0,
            CaptureResult::Capture(n) => n,
        }
    }

    pub fn is_capture(self) -> bool {
        matches!(self, CaptureResult::Capture(_))
    }
}

/// Scan from `(row, col)` along `dir` for `side`.
///
/// The start cell itself is never inspected. The walk ends at the first empty
/// cell, at the first own disc, or when the next step leaves the board; only
/// an own disc after at least one opponent disc counts as a capture.
pub fn scan(board: &Board, side: Side, row: usize, col: usize, dir: Direction) -> CaptureResult {
    let opponent = side.opponent();
    let mut run = 0usize;
    let mut pos = board.offset(row, col, dir);
    while let Some((r, c)) = pos {
        match board.get(r, c) {
            Ok(Cell::Disc(s)) if s == opponent => run += 1,
            Ok(Cell::Disc(_)) if run > 0 => return CaptureResult::Capture(run),
            _ => return CaptureResult::NoCapture,
        }
        pos = board.offset(r, c, dir);
    }
    CaptureResult::NoCapture
}

/// Scan all eight directions from `(row, col)`, in `DIRECTIONS` order.
pub fn scan_all(board: &Board, side: Side, row: usize, col: usize) -> [CaptureResult; 8] {
    DIRECTIONS.map(|dir| scan(board, side, row, col, dir))
}
