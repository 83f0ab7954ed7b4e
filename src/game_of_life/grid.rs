//! Grid representation for Game of Life

use crate::error::{LifeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

/// A (row, column) coordinate, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

/// Rectangular grid of cell states stored densely in row-major order.
///
/// Dimensions are fixed at construction; every cell is either [`DEAD`] or [`ALIVE`].
/// Serializes as a list of rows, and deserializes through [`Grid::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(LifeError::InvalidDimensions(format!(
                "grid must have at least one row and one column, got {}x{}",
                rows, columns
            )));
        }

        let len = rows
            .checked_mul(columns)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or_else(|| {
                LifeError::InvalidDimensions(format!("{}x{} grid is too large", rows, columns))
            })?;

        Ok(Self {
            rows,
            columns,
            cells: vec![DEAD; len],
        })
    }

    /// Create a grid from explicit rows of 0/1 values
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(LifeError::InvalidDimensions("grid has no rows".to_string()));
        }

        let height = rows.len();
        let width = rows[0].len();

        if width == 0 {
            return Err(LifeError::InvalidDimensions("grid rows cannot be empty".to_string()));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LifeError::InvalidDimensions(format!(
                    "row {} has length {}, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            if let Some((j, &value)) = row.iter().enumerate().find(|(_, &v)| v > ALIVE) {
                return Err(LifeError::InvalidCellValue { row: i, column: j, value });
            }
        }

        Ok(Self {
            rows: height,
            columns: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a grid by drawing every cell from `f`
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(Cell) -> bool) -> Result<Self> {
        let mut grid = Self::new(rows, columns)?;
        for row in 0..rows {
            for column in 0..columns {
                if f(Cell::new(row, column)) {
                    let idx = grid.index(row, column);
                    grid.cells[idx] = ALIVE;
                }
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }

    fn checked_index(&self, cell: Cell) -> Result<usize> {
        if self.contains(cell) {
            Ok(self.index(cell.row, cell.column))
        } else {
            Err(LifeError::OutOfBounds {
                row: cell.row,
                column: cell.column,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// Read a cell state
    pub fn get(&self, cell: Cell) -> Result<u8> {
        let idx = self.checked_index(cell)?;
        Ok(self.cells[idx])
    }

    /// Write a cell state
    pub fn set(&mut self, cell: Cell, value: u8) -> Result<()> {
        if value > ALIVE {
            return Err(LifeError::InvalidCellValue {
                row: cell.row,
                column: cell.column,
                value,
            });
        }
        let idx = self.checked_index(cell)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Flip a cell between dead and alive, returning the new state
    pub fn toggle(&mut self, cell: Cell) -> Result<u8> {
        let idx = self.checked_index(cell)?;
        self.cells[idx] ^= ALIVE;
        Ok(self.cells[idx])
    }

    /// Unchecked read for callers that already hold in-range coordinates
    #[inline]
    pub(crate) fn value_at(&self, row: usize, column: usize) -> u8 {
        self.cells[self.index(row, column)]
    }

    #[inline]
    pub(crate) fn set_at(&mut self, row: usize, column: usize, value: u8) {
        let idx = self.index(row, column);
        self.cells[idx] = value;
    }

    /// Iterate rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.columns)
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == ALIVE).count()
    }

    /// True when no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&v| v == DEAD)
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = LifeError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.iter_rows().map(<[u8]>::to_vec).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &cell in row {
                write!(f, "{}", if cell == ALIVE { '█' } else { '·' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
