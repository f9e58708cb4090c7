//! CLI error type.

/// Convenience alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error.
///
/// Configuration problems exit nonzero before any sampling work starts;
/// engine errors fail the whole run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Invalid run parameters.
    #[error("configuration error: {0}")]
    Config(#[from] pball_engine::ConfigError),

    /// The run itself failed (allocation, worker pool).
    #[error(transparent)]
    Engine(#[from] pball_engine::EngineError),

    /// Configuration file could not be read.
    #[error("cannot read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}
