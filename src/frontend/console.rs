//! Text frontend printing generations to a writer

use super::{BatchRunner, Frontend, RunSummary, StopReason, Tick};
use crate::game_of_life::GameOfLife;
use crate::utils::GridFormatter;
use anyhow::Context;
use std::io::Write;

/// Drives a [`BatchRunner`] and writes each generation as text
pub struct ConsoleFrontend<'a, W: Write> {
    runner: BatchRunner<'a>,
    out: W,
    show_generations: bool,
}

impl<'a, W: Write> ConsoleFrontend<'a, W> {
    pub fn new(life: &'a mut GameOfLife, out: W) -> Self {
        Self {
            runner: BatchRunner::new(life),
            out,
            show_generations: true,
        }
    }

    pub fn with_iteration_limit(mut self, limit: Option<usize>) -> Self {
        self.runner = self.runner.with_iteration_limit(limit);
        self
    }

    pub fn show_generations(mut self, show: bool) -> Self {
        self.show_generations = show;
        self
    }

    fn print_generation(&mut self) -> anyhow::Result<()> {
        if !self.show_generations {
            return Ok(());
        }

        let life = self.runner.life();
        writeln!(
            self.out,
            "Generation {} (living: {})",
            life.generation_count(),
            life.current_generation().living_count()
        )
        .context("Failed to write generation header")?;
        writeln!(self.out, "{}", GridFormatter::format_grid_compact(life.current_generation()))
            .context("Failed to write generation")?;

        Ok(())
    }
}

impl<W: Write> Frontend for ConsoleFrontend<'_, W> {
    fn run(&mut self) -> anyhow::Result<RunSummary> {
        self.print_generation()?;

        let reason = loop {
            match self.runner.tick()? {
                Tick::Stepped => self.print_generation()?,
                Tick::Paused => break StopReason::Paused,
                Tick::Stopped(reason) => break reason,
            }
        };

        self.out.flush().context("Failed to flush output")?;
        Ok(self.runner.summary(reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_each_generation() {
        let mut life =
            GameOfLife::from_grid("000\n111\n000\n".parse().unwrap(), Some(3)).unwrap();
        let mut out = Vec::new();

        let summary = ConsoleFrontend::new(&mut life, &mut out).run().unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(summary.stop_reason, StopReason::MaxGenerations);
        assert!(text.contains("Generation 1 (living: 3)"));
        assert!(text.contains("Generation 2 (living: 3)"));
        assert!(text.contains("Generation 3 (living: 3)"));
        assert!(!text.contains("Generation 4"));
        assert!(text.contains("·█·\n·█·\n·█·\n"));
    }

    #[test]
    fn test_quiet_mode() {
        let mut life =
            GameOfLife::from_grid("000\n111\n000\n".parse().unwrap(), None).unwrap();
        let mut out = Vec::new();

        let summary = ConsoleFrontend::new(&mut life, &mut out)
            .show_generations(false)
            .with_iteration_limit(Some(2))
            .run()
            .unwrap();

        assert_eq!(summary.stop_reason, StopReason::IterationLimit);
        assert_eq!(summary.steps, 2);
        assert!(out.is_empty());
    }
}
