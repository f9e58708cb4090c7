//! Error types for the sampling engine.
//!
//! Configuration errors are detected before any worker starts; runtime
//! resource errors abort the whole run. Nothing here is retryable.

use crate::config::{MAX_DIMENSIONS, MAX_TRIALS};

/// Configuration error for a Monte Carlo run.
///
/// These errors occur during validation, strictly before any sampling work
/// begins.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Dimension count outside [1, MAX_DIMENSIONS].
    #[error("invalid dimension count {0}: must be in range [1, {MAX_DIMENSIONS}]")]
    InvalidDimensions(usize),

    /// Trial count outside [1, MAX_TRIALS].
    #[error("invalid trial count {0}: must be in range [1, {MAX_TRIALS}]")]
    InvalidTrialCount(u64),

    /// Exponent not a finite positive real.
    #[error("invalid p-norm exponent {0}: must be a finite positive real")]
    InvalidExponent(f64),

    /// Radius not finite or negative.
    #[error("invalid radius {0}: must be finite and non-negative")]
    InvalidRadius(f64),

    /// Parallel run requested with zero workers.
    #[error("invalid worker count 0: a parallel run needs at least one worker")]
    InvalidWorkerCount,

    /// Explicit chunk size outside [1, trial count].
    #[error("invalid chunk size {chunk}: must be in range [1, {trials}]")]
    InvalidChunkSize {
        /// The rejected chunk size.
        chunk: u64,
        /// Trial count of the run being configured.
        trials: u64,
    },
}

/// Runtime error for a Monte Carlo run.
///
/// Any of these fails the entire run; a partial result is never reported.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Invalid configuration surfaced at run time.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A worker's point buffer could not be allocated.
    #[error("failed to allocate the {dimensions}-coordinate point buffer for worker {worker}")]
    Allocation {
        /// Worker the buffer was being allocated for.
        worker: usize,
        /// Requested coordinate count.
        dimensions: usize,
    },

    /// The fixed worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
