//! Configuration settings for the Game of Life simulator

use crate::error::{LifeError, Result};
use crate::game_of_life::GameOfLife;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub rows: usize,
    pub columns: usize,
    pub randomize: bool,
    pub max_generations: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// When set, the initial grid is loaded from this file instead of generated
    pub initial_state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_generations: bool,
    pub final_state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            columns: 25,
            randomize: true,
            max_generations: None,
            seed: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_generations: false,
            final_state_file: None,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LifeError::from_io(path, e))?;

        let settings: Settings = serde_yaml::from_str(&content).map_err(|e| {
            LifeError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)
            .map_err(|e| LifeError::Config(format!("failed to serialize settings: {}", e)))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| LifeError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, content).map_err(|source| LifeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.rows == 0 || self.simulation.columns == 0 {
            return Err(LifeError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.simulation.rows, self.simulation.columns
            )));
        }

        if self.simulation.max_generations == Some(0) {
            return Err(LifeError::Config(
                "max_generations must be positive when set".to_string(),
            ));
        }

        if let Some(ref file) = self.input.initial_state_file {
            if !file.exists() {
                return Err(LifeError::Config(format!(
                    "initial state file does not exist: {}",
                    file.display()
                )));
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.simulation.rows = rows;
        }
        if let Some(columns) = cli_overrides.columns {
            self.simulation.columns = columns;
        }
        if let Some(randomize) = cli_overrides.randomize {
            self.simulation.randomize = randomize;
        }
        if let Some(max_generations) = cli_overrides.max_generations {
            self.simulation.max_generations = Some(max_generations);
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(ref input) = cli_overrides.input {
            self.input.initial_state_file = Some(input.clone());
        }
        if let Some(ref output) = cli_overrides.output {
            self.output.final_state_file = Some(output.clone());
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if cli_overrides.show_generations {
            self.output.show_generations = true;
        }
    }

    /// Build an engine as described by these settings
    pub fn build_engine(&self) -> Result<GameOfLife> {
        let sim = &self.simulation;

        match (&self.input.initial_state_file, sim.seed) {
            (Some(file), _) => {
                let mut life = GameOfLife::load(file)?;
                life.set_max_generations(sim.max_generations);
                Ok(life)
            }
            (None, Some(seed)) => {
                GameOfLife::seeded(sim.rows, sim.columns, sim.randomize, sim.max_generations, seed)
            }
            (None, None) => GameOfLife::new(sim.rows, sim.columns, sim.randomize, sim.max_generations),
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub randomize: Option<bool>,
    pub max_generations: Option<usize>,
    pub seed: Option<u64>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub show_generations: bool,
}
