//! pball — Monte Carlo volume estimation for n-dimensional p-norm balls.
//!
//! One run per invocation: resolve the configuration, run the serial
//! baseline or the parallel engine, print the report, exit. Configuration
//! errors are rejected with a nonzero exit before any worker starts.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pball_engine::SimulationEngine;

mod config;
mod error;
mod report;

pub use error::{CliError, Result};

use config::{CliOverrides, FileConfig, Mode, ScheduleKind};

/// Monte Carlo p-norm ball volume estimator
#[derive(Parser)]
#[command(name = "pball")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of spatial dimensions
    #[arg(short = 'n', long)]
    dimensions: Option<usize>,

    /// p-norm exponent (general positive real)
    #[arg(short = 'p', long)]
    exponent: Option<f64>,

    /// Ball radius R; points are sampled from the cube [-R, R]^n
    #[arg(short = 'R', long)]
    radius: Option<f64>,

    /// Number of Monte Carlo trials
    #[arg(short = 'N', long)]
    trials: Option<u64>,

    /// Base seed; worker streams are derived from it
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Worker count; setting this implies parallel mode
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Scheduling policy for parallel runs
    #[arg(long, value_enum)]
    schedule: Option<ScheduleKind>,

    /// Block size for the chosen policy (0 selects the engine default)
    #[arg(long)]
    chunk: Option<u64>,

    /// Force parallel execution even with one worker
    #[arg(long)]
    parallel: bool,

    /// Optional TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dimensions: self.dimensions,
            exponent: self.exponent,
            radius: self.radius,
            trials: self.trials,
            seed: self.seed,
            threads: self.threads,
            schedule: self.schedule,
            chunk: self.chunk,
            parallel: self.parallel,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; --verbose lifts the default filter to debug
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    let file = match &cli.config {
        Some(path) => config::load_file(path)?,
        None => FileConfig::default(),
    };
    let settings = config::resolve(cli.overrides(), file)?;

    report::print_banner(&settings.run, &settings.mode);

    let engine = SimulationEngine::new(settings.run.clone())?;
    let result = match settings.mode {
        Mode::Serial => engine.run_serial()?,
        Mode::Parallel { workers, schedule } => engine.run_parallel(workers, schedule)?,
    };

    report::print_results(&settings.run, &result);
    Ok(())
}
