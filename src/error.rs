//! Error type shared by the simulation engine

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

#[derive(Error, Debug)]
pub enum LifeError {
    #[error("Invalid grid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Cell ({row}, {column}) out of bounds for {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("Invalid cell value {value} at ({row}, {column}), expected 0 or 1")]
    InvalidCellValue { row: usize, column: usize, value: u8 },

    #[error("Grid file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LifeError {
    /// Classify a filesystem error, separating a missing path from other failures
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            LifeError::NotFound(path)
        } else {
            LifeError::Io { path, source }
        }
    }
}
