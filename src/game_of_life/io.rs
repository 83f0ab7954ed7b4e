//! Text encoding and file I/O for Game of Life grids

use super::grid::{Grid, ALIVE};
use crate::error::{LifeError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Parse a grid from its text representation.
///
/// Each non-blank line is one row. Every ASCII digit on a line is a cell value;
/// any other character is skipped, so separators and annotations are tolerated.
pub fn parse_grid_from_string(content: &str) -> Result<Grid> {
    let rows: Vec<Vec<u8>> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.chars()
                .filter_map(|ch| ch.to_digit(10))
                .map(|d| d as u8)
                .collect()
        })
        .collect();

    if rows.is_empty() {
        return Err(LifeError::InvalidDimensions(
            "grid text contains no rows".to_string(),
        ));
    }

    Grid::from_rows(rows)
}

/// Convert a grid to its text representation, one `0`/`1` line per row
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.rows() * (grid.columns() + 1));

    for row in grid.iter_rows() {
        result.extend(row.iter().map(|&cell| if cell == ALIVE { '1' } else { '0' }));
        result.push('\n');
    }

    result
}

impl FromStr for Grid {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_grid_from_string(s)
    }
}

/// Load a grid from a text file
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| LifeError::from_io(path, e))?;

    let grid = parse_grid_from_string(&content)?;
    debug!(path = %path.display(), rows = grid.rows(), columns = grid.columns(), "loaded grid");
    Ok(grid)
}

/// Save a grid to a text file, replacing any existing content
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let path = path.as_ref();
    let content = grid_to_string(grid);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| LifeError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, content).map_err(|source| LifeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "saved grid");
    Ok(())
}

/// Create example grid files, returning the paths written.
///
/// Existing files are left alone unless `overwrite` is set.
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P, overwrite: bool) -> Result<Vec<PathBuf>> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| LifeError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let patterns = [
        ("glider.txt", "01000\n00100\n11100\n00000\n00000\n"),
        ("blinker.txt", "00000\n00000\n01110\n00000\n00000\n"),
        ("block.txt", "0000\n0110\n0110\n0000\n"),
        ("beacon.txt", "110000\n110000\n001100\n001100\n000000\n"),
    ];

    let mut written = Vec::new();
    for (name, content) in patterns {
        let path = dir.join(name);
        if path.exists() && !overwrite {
            debug!(path = %path.display(), "keeping existing pattern");
            continue;
        }
        std::fs::write(&path, content).map_err(|source| LifeError::Io {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    Ok(written)
}
