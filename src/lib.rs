//! Conway's Game of Life simulation engine
//!
//! The engine owns a grid of dead/alive cells, advances it one generation at a
//! time, and reports whether the population is still changing. Grids load from
//! and save to a plain `0`/`1` text format. Frontends drive the engine through
//! the narrow [`frontend::Frontend`] trait.

pub mod config;
pub mod error;
pub mod frontend;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::{LifeError, Result};
pub use frontend::{BatchRunner, ConsoleFrontend, Frontend, RunSummary, StopReason};
pub use game_of_life::{Cell, GameOfLife, Grid};
