//! Rectangular Othello grid with bounds-checked accessors.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Cell, ConfigError, Side};
use crate::config::{validate_dimension, Opening};
use crate::scan::Direction;

/// A `rows x cols` grid of cells stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Both dimensions must be even and in `4..=26`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        validate_dimension(rows)?;
        validate_dimension(cols)?;
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// Create a board with the standard four centre discs.
    pub fn with_opening(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        let mut board = Self::new(rows, cols)?;
        let (r, c) = (rows / 2, cols / 2);
        for (row, col, side) in [
            (r - 1, c - 1, Side::White),
            (r - 1, c, Side::Black),
            (r, c - 1, Side::Black),
            (r, c, Side::White),
        ] {
            let idx = board.index(row, col);
            board.cells[idx] = Cell::Disc(side);
        }
        Ok(board)
    }

    /// Build a board for the given starting position.
    pub fn for_opening(rows: usize, cols: usize, opening: Opening) -> Result<Self, ConfigError> {
        match opening {
            Opening::Standard => Self::with_opening(rows, cols),
            Opening::Empty => Self::new(rows, cols),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` when `(row, col)` lies on the board.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Contents of the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.index(row, col)])
    }

    /// Overwrite the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// The neighbour of `(row, col)` one step along `dir`, or `None` when the
    /// step leaves the board on either axis.
    pub fn offset(&self, row: usize, col: usize, dir: Direction) -> Option<(usize, usize)> {
        let next_row = row.checked_add_signed(dir.d_row as isize)?;
        let next_col = col.checked_add_signed(dir.d_col as isize)?;
        if self.in_bounds(next_row, next_col) {
            Some((next_row, next_col))
        } else {
            None
        }
    }

    /// Iterator over `((row, col), cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i / cols, i % cols), cell))
    }

    /// Number of discs of either side on the board.
    pub fn disc_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if self.in_bounds(row, col) {
            Ok(())
        } else {
            Err(BoardError::OutOfRange { row, col })
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board<{}x{}>:", self.rows, self.cols)?;
        for r in 0..self.rows {
            for c in 0..self.cols {
                let ch = match self.cells[self.index(r, c)] {
                    Cell::Empty => '.',
                    Cell::Disc(Side::Black) => 'B',
                    Cell::Disc(Side::White) => 'W',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
