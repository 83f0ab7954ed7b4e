//! Headless driving loop

use super::{Frontend, RunSummary, StopReason};
use crate::error::Result;
use crate::game_of_life::{Cell, GameOfLife};
use std::collections::VecDeque;
use tracing::{debug, info};

/// Result of a single loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Stepped,
    Paused,
    Stopped(StopReason),
}

/// Steps an engine until it stabilises, hits its generation cap, or an
/// optional iteration limit.
///
/// Toggles queued between iterations are applied at the start of the next
/// iteration, before that iteration decides whether to step.
pub struct BatchRunner<'a> {
    life: &'a mut GameOfLife,
    iteration_limit: Option<usize>,
    pending_toggles: VecDeque<Cell>,
    paused: bool,
    steps: usize,
    observer: Option<Box<dyn FnMut(&GameOfLife) + 'a>>,
}

impl<'a> BatchRunner<'a> {
    pub fn new(life: &'a mut GameOfLife) -> Self {
        Self {
            life,
            iteration_limit: None,
            pending_toggles: VecDeque::new(),
            paused: false,
            steps: 0,
            observer: None,
        }
    }

    /// Stop after at most `limit` steps even if the engine would continue
    pub fn with_iteration_limit(mut self, limit: Option<usize>) -> Self {
        self.iteration_limit = limit;
        self
    }

    /// Call `observer` with the engine after every step
    pub fn on_generation(mut self, observer: impl FnMut(&GameOfLife) + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn life(&self) -> &GameOfLife {
        &*self.life
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Queue a cell toggle for the next iteration
    pub fn queue_toggle(&mut self, cell: Cell) {
        self.pending_toggles.push_back(cell);
    }

    /// Run one iteration: apply queued toggles, then step unless paused or finished.
    ///
    /// A failing toggle is dropped from the queue and reported; the engine is
    /// not stepped in that iteration.
    pub fn tick(&mut self) -> Result<Tick> {
        while let Some(cell) = self.pending_toggles.pop_front() {
            let state = self.life.toggle_cell(cell)?;
            debug!(row = cell.row, column = cell.column, state, "toggled cell");
        }

        if self.paused {
            return Ok(Tick::Paused);
        }

        if let Some(reason) = StopReason::for_engine(&*self.life) {
            info!(generation = self.life.generation_count(), %reason, "simulation finished");
            return Ok(Tick::Stopped(reason));
        }

        if self.iteration_limit.is_some_and(|limit| self.steps >= limit) {
            info!(steps = self.steps, "iteration limit reached");
            return Ok(Tick::Stopped(StopReason::IterationLimit));
        }

        self.life.step();
        self.steps += 1;

        if let Some(observer) = self.observer.as_mut() {
            observer(&*self.life);
        }

        Ok(Tick::Stepped)
    }

    pub fn summary(&self, stop_reason: StopReason) -> RunSummary {
        RunSummary::new(&*self.life, self.steps, stop_reason)
    }
}

impl Frontend for BatchRunner<'_> {
    fn run(&mut self) -> anyhow::Result<RunSummary> {
        loop {
            match self.tick()? {
                Tick::Stepped => continue,
                Tick::Paused => return Ok(self.summary(StopReason::Paused)),
                Tick::Stopped(reason) => return Ok(self.summary(reason)),
            }
        }
    }
}
