//! Driving loops that own an engine for the duration of a run.
//!
//! A frontend reads the engine's current generation, feeds back cell toggles,
//! and decides when to call [`GameOfLife::step`]. No simulation logic lives here.
//!
//! [`GameOfLife::step`]: crate::game_of_life::GameOfLife::step

pub mod batch;
pub mod console;

pub use batch::{BatchRunner, Tick};
pub use console::ConsoleFrontend;

use crate::game_of_life::GameOfLife;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A presentation layer with a single entry point that runs its own loop
pub trait Frontend {
    fn run(&mut self) -> anyhow::Result<RunSummary>;
}

/// Why a driving loop stopped advancing the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The last step produced the same grid as the one before it
    Stable,
    MaxGenerations,
    IterationLimit,
    Paused,
}

impl StopReason {
    /// The reason an engine refuses another step, if any
    pub fn for_engine(life: &GameOfLife) -> Option<Self> {
        if !life.is_changing() {
            Some(StopReason::Stable)
        } else if life.is_max_generations_exceeded() {
            Some(StopReason::MaxGenerations)
        } else {
            None
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StopReason::Stable => "population stopped changing",
            StopReason::MaxGenerations => "generation cap reached",
            StopReason::IterationLimit => "iteration limit reached",
            StopReason::Paused => "paused",
        };
        f.write_str(text)
    }
}

/// Outcome of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub rows: usize,
    pub columns: usize,
    pub generations: usize,
    pub steps: usize,
    pub living_cells: usize,
    pub stop_reason: StopReason,
}

impl RunSummary {
    pub fn new(life: &GameOfLife, steps: usize, stop_reason: StopReason) -> Self {
        Self {
            rows: life.rows(),
            columns: life.columns(),
            generations: life.generation_count(),
            steps,
            living_cells: life.current_generation().living_count(),
            stop_reason,
        }
    }
}
