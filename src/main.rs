//! Command line front end for the Game of Life simulation

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use life_grid::{
    build_grid,
    config::{CliOverrides, EdgePolicy, RendererKind, Settings},
    game_of_life::{create_example_patterns, load_pattern_from_file, StabilityAnalysis},
    host::FrameLoop,
    logging::{init_logging, LoggingConfig},
    render::renderer_for,
    utils::{ColorOutput, GridFormatter},
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "life_grid")]
#[command(about = "Conway's Game of Life on a fixed-size grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        #[command(flatten)]
        overrides: RunOverrides,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Analyze a pattern file
    Inspect {
        /// Pattern file
        #[arg(short, long)]
        pattern: PathBuf,

        /// Edge policy used while simulating
        #[arg(short, long, value_enum, default_value = "toroidal")]
        edge_policy: EdgePolicy,

        /// Longest oscillation period to look for
        #[arg(short, long, default_value_t = 16)]
        max_period: usize,
    },
}

/// Flags that override the configuration file
#[derive(Args, Debug, Default)]
struct RunOverrides {
    /// Number of rows (overrides config)
    #[arg(long)]
    rows: Option<i64>,

    /// Number of columns (overrides config)
    #[arg(long)]
    columns: Option<i64>,

    /// Seed for the random initial state (overrides config)
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Chance between 0 and 1 that a cell starts alive (overrides config)
    #[arg(long)]
    threshold: Option<f64>,

    /// Initial pattern file; replaces random initialization
    #[arg(long)]
    pattern: Option<PathBuf>,

    /// Frames per second (overrides config)
    #[arg(long)]
    fps: Option<u32>,

    /// Stop after this many generations (overrides config)
    #[arg(short, long)]
    generations: Option<u64>,

    /// Edge policy for neighbor lookups (overrides config)
    #[arg(long, value_enum)]
    edge_policy: Option<EdgePolicy>,

    /// Renderer (overrides config)
    #[arg(long, value_enum)]
    renderer: Option<RendererKind>,

    /// Stop once the pattern dies out or stops changing
    #[arg(long)]
    stop_when_stable: bool,
}

impl From<RunOverrides> for CliOverrides {
    fn from(flags: RunOverrides) -> Self {
        Self {
            rows: flags.rows,
            columns: flags.columns,
            edge_policy: flags.edge_policy,
            seed: flags.seed,
            threshold: flags.threshold,
            pattern: flags.pattern,
            fps: flags.fps,
            generations: flags.generations,
            renderer: flags.renderer,
            stop_when_stable: flags.stop_when_stable,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, overrides, verbose } => {
            init_logging(if verbose { LoggingConfig::verbose() } else { LoggingConfig::default() });
            run_command(config, overrides.into())
        }
        Commands::Setup { directory, force } => {
            init_logging(LoggingConfig::default());
            setup_command(directory, force)
        }
        Commands::Inspect { pattern, edge_policy, max_period } => {
            init_logging(LoggingConfig::default());
            inspect_command(pattern, edge_policy, max_period)
        }
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        eprintln!("{}", ColorOutput::warning(&format!(
            "Config file {} not found, using defaults", config_path.display()
        )));
        Ok(Settings::default())
    }
}

fn run_command(config_path: PathBuf, cli_overrides: CliOverrides) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&cli_overrides);

    settings.validate()
        .context("Configuration validation failed")?;
    report_generated_seed(&mut settings, &mut std::io::stderr())?;

    let mut grid = build_grid(&settings)
        .context("Failed to build initial grid")?;
    let frame_loop = FrameLoop::from_settings(&settings.display)
        .context("Invalid display settings")?;

    // Frames go to stdout; status messages stay on stderr so JSON output is clean.
    let stdout = std::io::stdout();
    let mut renderer = renderer_for(settings.display.renderer, stdout.lock());

    let summary = frame_loop.run(&mut grid, renderer.as_mut(), || false)
        .context("Simulation loop failed")?;

    eprintln!("{}", ColorOutput::success(&summary.to_string()));
    Ok(())
}

/// Pin a clock-derived seed and tell the user how to repeat the run
fn report_generated_seed<W: Write>(settings: &mut Settings, out: &mut W) -> Result<()> {
    if let Some(seed) = settings.pin_seed() {
        writeln!(out, "{}", ColorOutput::info(&format!(
            "Using generated seed {seed} (pass --seed={seed} to reproduce this run)"
        )))
        .context("Failed to report seed")?;
    }
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let pattern_dir = directory.join("patterns");

    for dir in [&config_dir, &pattern_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&pattern_dir)
        .context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)
        .with_context(|| format!("Failed to create directory {}", examples_dir.display()))?;

    // Reproducible random soup
    let mut random_config = Settings::default();
    random_config.grid.rows = 40;
    random_config.grid.columns = 40;
    random_config.seed.seed = Some(42);
    random_config.seed.threshold = 0.3;
    random_config.to_file(&examples_dir.join("random.yaml"))
        .context("Failed to create random example configuration")?;

    // Fixed pattern; relative paths are resolved against the config file
    let mut blinker_config = Settings::default();
    blinker_config.pattern.file = Some(PathBuf::from("../../patterns/blinker.txt"));
    blinker_config.display.fps = 4;
    blinker_config.display.max_generations = Some(10);
    blinker_config.to_file(&examples_dir.join("blinker.yaml"))
        .context("Failed to create blinker example configuration")?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your own patterns to {}", pattern_dir.display());
    println!("3. Run: life_grid run --config {}", examples_dir.join("blinker.yaml").display());

    Ok(())
}

fn inspect_command(pattern_path: PathBuf, edge_policy: EdgePolicy, max_period: usize) -> Result<()> {
    let grid = load_pattern_from_file(&pattern_path, edge_policy)
        .with_context(|| format!("Failed to load pattern from {}", pattern_path.display()))?;

    println!("Pattern ({}x{}, {:?}):", grid.rows(), grid.columns(), edge_policy);
    println!("{}", GridFormatter::format_grid_with_coords(&grid));

    println!("Grid Statistics:");
    println!("  Living cells: {}", grid.living_count());
    println!("  Density: {:.1}%", (grid.living_count() as f64 / grid.len() as f64) * 100.0);

    let analysis = StabilityAnalysis::observe(&grid, max_period);
    println!("\n{}", analysis);

    if analysis.is_stable() {
        println!("{}", ColorOutput::success("Pattern is stable"));
    } else {
        println!("{}", ColorOutput::warning("No repetition found in the observed window"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "life_grid",
            "run",
            "--config", "test.yaml",
            "--rows", "30",
            "--seed=-12",
            "--generations", "5",
            "--edge-policy", "bounded",
            "--renderer", "json",
        ]);

        let Ok(Cli { command: Commands::Run { config, overrides, .. } }) = cli else {
            panic!("expected run command");
        };
        assert_eq!(config, PathBuf::from("test.yaml"));
        assert_eq!(overrides.rows, Some(30));
        assert_eq!(overrides.seed, Some(-12));
        assert_eq!(overrides.generations, Some(5));
        assert_eq!(overrides.edge_policy, Some(EdgePolicy::Bounded));
        assert_eq!(overrides.renderer, Some(RendererKind::Json));
    }

    #[test]
    fn test_inspect_parsing() {
        let cli = Cli::try_parse_from(["life_grid", "inspect", "--pattern", "p.txt"]);
        assert!(matches!(
            cli,
            Ok(Cli { command: Commands::Inspect { edge_policy: EdgePolicy::Toroidal, max_period: 16, .. } })
        ));
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("config/examples/blinker.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());
    }

    #[test]
    fn test_setup_configs_load_from_any_directory() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        let settings = load_settings(&temp_dir.path().join("config/examples/blinker.yaml")).unwrap();
        let grid = build_grid(&settings).unwrap();
        assert_eq!(grid.living_cells(), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_generated_seed_is_reported() {
        let mut settings = Settings::default();
        let mut out = Vec::new();
        report_generated_seed(&mut settings, &mut out).unwrap();

        let seed = settings.seed.seed.unwrap();
        let message = String::from_utf8(out).unwrap();
        assert!(message.contains(&format!("--seed={seed}")), "{message}");

        // The reported seed is the one the grid is built from.
        let mut repeat = Settings::default();
        repeat.seed.seed = Some(seed);
        assert_eq!(build_grid(&settings).unwrap(), build_grid(&repeat).unwrap());
    }

    #[test]
    fn test_configured_seed_is_not_reported() {
        let mut settings = Settings::default();
        settings.seed.seed = Some(9);
        let mut out = Vec::new();
        report_generated_seed(&mut settings, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_inspect_command() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        let result = inspect_command(temp_dir.path().join("beacon.txt"), EdgePolicy::Toroidal, 4);
        assert!(result.is_ok());
        assert!(inspect_command(temp_dir.path().join("missing.txt"), EdgePolicy::Toroidal, 4).is_err());
    }
}
