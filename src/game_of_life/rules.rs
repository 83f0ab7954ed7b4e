//! Game of Life rules implementation

use super::grid::{Cell, Grid, ALIVE, DEAD};
use crate::error::{LifeError, Result};
use itertools::iproduct;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Count living cells in the Moore neighbourhood of `cell`.
    ///
    /// Positions beyond the grid edge count as dead; there is no wraparound.
    pub fn count_neighbours(grid: &Grid, cell: Cell) -> Result<u8> {
        if !grid.contains(cell) {
            return Err(LifeError::OutOfBounds {
                row: cell.row,
                column: cell.column,
                rows: grid.rows(),
                columns: grid.columns(),
            });
        }
        Ok(Self::live_neighbours(grid, cell.row, cell.column))
    }

    /// Neighbour count for coordinates already known to be inside `grid`
    fn live_neighbours(grid: &Grid, row: usize, column: usize) -> u8 {
        let row = row as isize;
        let column = column as isize;

        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(dr, dc)| (dr, dc) != (0, 0))
            .filter_map(|(dr, dc)| {
                let r = row + dr;
                let c = column + dc;
                if r >= 0 && c >= 0 && (r as usize) < grid.rows() && (c as usize) < grid.columns() {
                    Some(grid.value_at(r as usize, c as usize))
                } else {
                    None
                }
            })
            .sum()
    }

    /// Next state of a single cell given its current state and neighbour count
    pub fn next_state(current: u8, neighbours: u8) -> u8 {
        match (current, neighbours) {
            (ALIVE, n) if !(2..=3).contains(&n) => DEAD,
            (DEAD, 3) => ALIVE,
            (state, _) => state,
        }
    }

    /// Compute the generation following `current`.
    ///
    /// Counts are taken from `current` only, so earlier updates in the same
    /// pass never leak into later cells.
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = current.clone();

        for (row, column) in iproduct!(0..current.rows(), 0..current.columns()) {
            let neighbours = Self::live_neighbours(current, row, column);
            let state = Self::next_state(current.value_at(row, column), neighbours);
            next.set_at(row, column, state);
        }

        next
    }
}
