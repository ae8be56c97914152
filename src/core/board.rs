//! The 4×4 grid.
//!
//! Cells hold the tile's face value (2, 4, 8, ...) with 0 meaning empty.
//! The grid is never resized. Direction handling relies on two
//! self-inverse transforms, [`Board::reverse_rows`] and
//! [`Board::transpose`], which map every direction onto the Left rule.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EngineError;

/// Side length of the board.
pub const SIZE: usize = 4;

/// Largest value a cell can hold. Two of these never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// One row (or, after a transpose, one column) of cells.
pub type Row = [u32; SIZE];

/// Cell coordinate as `(row, col)`.
pub type Cell = (usize, usize);

/// A 4×4 board of tile values.
///
/// ## Example
///
/// ```
/// use rust_2048::core::Board;
///
/// let board = Board::from_rows([
///     [2, 2, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 4],
///     [0, 0, 0, 0],
/// ]).unwrap();
///
/// assert_eq!(board.get(2, 3), 4);
/// assert_eq!(board.empty_cells().len(), 13);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Row; SIZE]", into = "[Row; SIZE]")]
pub struct Board {
    cells: [Row; SIZE],
}

impl Board {
    /// Create an empty board (all zeros).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
        }
    }

    /// Build a board from raw rows, rejecting values that are not tiles.
    pub fn from_rows(rows: [Row; SIZE]) -> Result<Self, EngineError> {
        for (row, cells) in rows.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(EngineError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Borrow the rows.
    #[must_use]
    pub fn rows(&self) -> &[Row; SIZE] {
        &self.cells
    }

    /// Get one row by index.
    #[must_use]
    pub fn row(&self, row: usize) -> Row {
        self.cells[row]
    }

    pub(crate) fn set_row(&mut self, row: usize, values: Row) {
        self.cells[row] = values;
    }

    /// Get a cell value. 0 means empty.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    /// Iterate over every cell value in row-major order.
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Coordinates of all empty cells, row-major.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Cell> {
        let mut out = Vec::with_capacity(SIZE * SIZE);
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.values().all(|v| v != 0)
    }

    /// True when every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values().all(|v| v == 0)
    }

    /// True if any cell holds `value`.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        self.values().any(|v| v == value)
    }

    /// Highest tile on the board (0 for an empty board).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.values().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.values().map(u64::from).sum()
    }

    /// Mirror each row left-to-right. Its own inverse.
    #[must_use]
    pub fn reverse_rows(&self) -> Self {
        let mut cells = self.cells;
        for row in &mut cells {
            row.reverse();
        }
        Self { cells }
    }

    /// Swap rows and columns. Its own inverse.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut cells = [[0; SIZE]; SIZE];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                cells[c][r] = value;
            }
        }
        Self { cells }
    }
}

impl TryFrom<[Row; SIZE]> for Board {
    type Error = EngineError;

    fn try_from(rows: [Row; SIZE]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for [Row; SIZE] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
        }
        Ok(())
    }
}
