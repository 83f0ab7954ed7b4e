//! Command line interface for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life::{
    config::{CliOverrides, OutputFormat, Settings},
    frontend::{BatchRunner, ConsoleFrontend, Frontend},
    game_of_life::{create_example_grids, grid_to_string, load_grid_from_file, GameOfLife},
    utils::{ColorOutput, GridFormatter},
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation until it stabilises or reaches its generation cap
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid rows (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Grid columns (overrides config)
        #[arg(long)]
        columns: Option<usize>,

        /// Start from an all-dead grid instead of a random one
        #[arg(long)]
        no_randomize: bool,

        /// Generation cap (overrides config)
        #[arg(short, long)]
        max_generations: Option<usize>,

        /// Seed for the random initial grid (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Initial state file (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Where to save the final generation (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Summary format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Print every generation
        #[arg(long)]
        show_generations: bool,

        /// Stop after this many steps regardless of the engine state
        #[arg(long)]
        iteration_limit: Option<usize>,
    },

    /// Advance a grid file by a number of generations
    Step {
        /// Grid file to load
        input: PathBuf,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// Output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a default configuration and example pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Print a grid file with coordinates and statistics
    Show {
        /// Grid file to display
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", ColorOutput::error(&format!("Error: {:#}", e)));
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            config,
            rows,
            columns,
            no_randomize,
            max_generations,
            seed,
            input,
            output,
            format,
            show_generations,
            iteration_limit,
        } => {
            let overrides = CliOverrides {
                rows,
                columns,
                randomize: no_randomize.then_some(false),
                max_generations,
                seed,
                input,
                output,
                format,
                show_generations,
            };
            run_command(config, overrides, iteration_limit)
        }
        Commands::Step { input, generations, output } => step_command(input, generations, output),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Show { input } => show_command(input),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    iteration_limit: Option<usize>,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;

    let mut life = settings.build_engine().context("Failed to create simulation")?;
    info!(
        rows = life.rows(),
        columns = life.columns(),
        max_generations = ?life.max_generations(),
        "starting simulation"
    );

    let summary = ConsoleFrontend::new(&mut life, std::io::stdout().lock())
        .show_generations(settings.output.show_generations)
        .with_iteration_limit(iteration_limit)
        .run()?;

    match settings.output.format {
        OutputFormat::Text => {
            println!("{}", GridFormatter::format_summary(&summary));
            println!("Final State:");
            println!("{}", GridFormatter::format_grid_compact(life.current_generation()));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
            println!("{}", json);
        }
    }

    if let Some(ref path) = settings.output.final_state_file {
        life.save(path)
            .with_context(|| format!("Failed to save final state to {}", path.display()))?;
        println!("{}", ColorOutput::success(&format!("Final state saved to {}", path.display())));
    }

    Ok(())
}

fn step_command(input: PathBuf, generations: usize, output: Option<PathBuf>) -> Result<()> {
    let mut life = GameOfLife::load(&input)
        .with_context(|| format!("Failed to load grid from {}", input.display()))?;

    let summary = BatchRunner::new(&mut life)
        .with_iteration_limit(Some(generations))
        .run()?;
    info!(steps = summary.steps, reason = %summary.stop_reason, "stepping finished");

    match output {
        Some(path) => {
            life.save(&path)
                .with_context(|| format!("Failed to save grid to {}", path.display()))?;
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "Advanced {} generation(s), saved to {}",
                    summary.steps,
                    path.display()
                ))
            );
        }
        None => print!("{}", grid_to_string(life.current_generation())),
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    write_config(&config_dir.join("default.yaml"), &Settings::default(), force)?;

    let written = create_example_grids(&patterns_dir, force).context("Failed to create example grids")?;
    for path in &written {
        println!("Created: {}", path.display());
    }
    if written.len() < 4 {
        println!("Skipped existing patterns in {} (use --force to overwrite)", patterns_dir.display());
    }

    let mut glider_config = Settings::default();
    glider_config.simulation.max_generations = Some(20);
    glider_config.input.initial_state_file = Some(PathBuf::from("patterns/glider.txt"));
    glider_config.output.show_generations = true;
    write_config(&config_dir.join("glider.yaml"), &glider_config, force)?;

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your own patterns to {}", patterns_dir.display());
    println!("3. Run: game_of_life run --config config/glider.yaml");

    Ok(())
}

fn write_config(path: &Path, settings: &Settings, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("Skipped: {} (already exists)", path.display());
        return Ok(());
    }

    settings
        .to_file(path)
        .with_context(|| format!("Failed to write configuration {}", path.display()))?;
    println!("Created: {}", path.display());
    Ok(())
}

fn show_command(input: PathBuf) -> Result<()> {
    let grid = load_grid_from_file(&input)
        .with_context(|| format!("Failed to load grid from {}", input.display()))?;

    println!("{}", GridFormatter::format_grid_with_coords(&grid));
    println!("{}", GridFormatter::format_statistics(&grid));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life",
            "run",
            "--config",
            "test.yaml",
            "--rows",
            "10",
            "--max-generations",
            "5",
            "--format",
            "json",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["game_of_life", "-vv", "step", "grid.txt", "-g", "3"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Step { generations: 3, .. }));
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("config/glider.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());
    }

    #[test]
    fn test_setup_respects_force() {
        let temp_dir = tempdir().unwrap();
        let glider_config = temp_dir.path().join("config/glider.yaml");
        let glider_pattern = temp_dir.path().join("patterns/glider.txt");
        std::fs::create_dir_all(temp_dir.path().join("config")).unwrap();
        std::fs::create_dir_all(temp_dir.path().join("patterns")).unwrap();
        std::fs::write(&glider_config, "simulation:\n  rows: 3\n").unwrap();
        std::fs::write(&glider_pattern, "111\n").unwrap();

        setup_command(temp_dir.path().to_path_buf(), false).unwrap();
        assert_eq!(std::fs::read_to_string(&glider_config).unwrap(), "simulation:\n  rows: 3\n");
        assert_eq!(std::fs::read_to_string(&glider_pattern).unwrap(), "111\n");
        assert!(temp_dir.path().join("config/default.yaml").exists());

        setup_command(temp_dir.path().to_path_buf(), true).unwrap();
        assert_ne!(std::fs::read_to_string(&glider_config).unwrap(), "simulation:\n  rows: 3\n");
        assert_eq!(
            std::fs::read_to_string(&glider_pattern).unwrap(),
            "01000\n00100\n11100\n00000\n00000\n"
        );
    }

    #[test]
    fn test_step_command() {
        let temp_dir = tempdir().unwrap();
        let input = temp_dir.path().join("glider.txt");
        let output = temp_dir.path().join("next.txt");
        std::fs::write(&input, "01000\n00100\n11100\n00000\n00000\n").unwrap();

        step_command(input, 1, Some(output.clone())).unwrap();

        assert_eq!(
            std::fs::read_to_string(output).unwrap(),
            "00000\n10100\n01100\n01000\n00000\n"
        );
    }
}
