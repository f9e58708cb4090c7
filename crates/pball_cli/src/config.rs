//! Configuration resolution.
//!
//! Run parameters come from three layers, highest precedence first:
//! explicit command-line flags, an optional TOML file, and the standard
//! defaults. Unknown keys in the file are reported with a warning and
//! otherwise ignored, never silently dropped.

use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use tracing::warn;

use pball_engine::{RunConfig, Schedule};

use crate::error::Result;

/// Scheduling policy family as named on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleKind {
    /// Assignment fixed at schedule time.
    Static,
    /// Blocks claimed at run time from a shared cursor.
    Dynamic,
}

/// Execution mode resolved from the configuration surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Single-stream baseline.
    Serial,
    /// Fork-join run over a fixed worker pool.
    Parallel {
        /// Worker count W.
        workers: usize,
        /// Scheduling policy.
        schedule: Schedule,
    },
}

/// Fully resolved settings for one invocation.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Validated run parameters.
    pub run: RunConfig,
    /// Serial or parallel execution.
    pub mode: Mode,
}

/// Values read from the optional TOML configuration file.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub dimensions: Option<usize>,
    pub exponent: Option<f64>,
    pub radius: Option<f64>,
    pub trials: Option<u64>,
    pub seed: Option<u64>,
    pub threads: Option<usize>,
    pub schedule: Option<ScheduleKind>,
    pub chunk: Option<u64>,
    pub parallel: Option<bool>,
}

/// Command-line values that override the file and the defaults.
#[derive(Clone, Debug, Default)]
pub struct CliOverrides {
    pub dimensions: Option<usize>,
    pub exponent: Option<f64>,
    pub radius: Option<f64>,
    pub trials: Option<u64>,
    pub seed: Option<u64>,
    pub threads: Option<usize>,
    pub schedule: Option<ScheduleKind>,
    pub chunk: Option<u64>,
    pub parallel: bool,
}

const KNOWN_KEYS: [&str; 9] = [
    "dimensions",
    "exponent",
    "radius",
    "trials",
    "seed",
    "threads",
    "schedule",
    "chunk",
    "parallel",
];

/// Loads a TOML configuration file, warning on unknown keys.
pub fn load_file(path: &Path) -> Result<FileConfig> {
    let text = std::fs::read_to_string(path)?;
    parse_file(&text)
}

fn parse_file(text: &str) -> Result<FileConfig> {
    let table: toml::Table = text.parse()?;
    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn!(key = key.as_str(), "ignoring unknown configuration key");
        }
    }
    let config = toml::Value::Table(table).try_into()?;
    Ok(config)
}

/// Resolves the three configuration layers into validated [`Settings`].
///
/// Worker-count presence (flag or file) implies parallel mode; the
/// `parallel` flag forces parallel execution even with one worker. A chunk
/// size of 0 selects the engine's default chunking.
///
/// # Errors
///
/// Returns a configuration error when the merged parameters fail
/// validation; nothing has run at that point.
pub fn resolve(cli: CliOverrides, file: FileConfig) -> Result<Settings> {
    let mut builder = RunConfig::builder();
    if let Some(n) = cli.dimensions.or(file.dimensions) {
        builder = builder.dimensions(n);
    }
    if let Some(p) = cli.exponent.or(file.exponent) {
        builder = builder.exponent(p);
    }
    if let Some(r) = cli.radius.or(file.radius) {
        builder = builder.radius(r);
    }
    if let Some(n) = cli.trials.or(file.trials) {
        builder = builder.trials(n);
    }
    if let Some(s) = cli.seed.or(file.seed) {
        builder = builder.seed(s);
    }
    let run = builder.build()?;

    let threads = cli.threads.or(file.threads);
    let parallel = cli.parallel || file.parallel.unwrap_or(false) || threads.is_some();

    let mode = if parallel {
        let kind = cli.schedule.or(file.schedule).unwrap_or(ScheduleKind::Static);
        let chunk = cli.chunk.or(file.chunk).unwrap_or(0);
        let schedule = match (kind, chunk) {
            (ScheduleKind::Static, 0) => Schedule::StaticEqual,
            (ScheduleKind::Static, c) => Schedule::StaticChunk(c),
            (ScheduleKind::Dynamic, 0) => Schedule::DynamicDefault,
            (ScheduleKind::Dynamic, c) => Schedule::DynamicChunk(c),
        };
        Mode::Parallel {
            workers: threads.unwrap_or_else(num_cpus::get),
            schedule,
        }
    } else {
        Mode::Serial
    };

    Ok(Settings { run, mode })
}
