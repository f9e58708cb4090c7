//! # pball_engine
//!
//! Monte Carlo sampling engine for estimating the volume of an
//! n-dimensional p-norm ball, comparing a serial baseline against a
//! fork-join parallel implementation under selectable scheduling policies.
//!
//! # Data flow
//!
//! The scheduler assigns trial index ranges to workers; each worker runs
//! sampler + membership test per assigned index against its private random
//! stream, accumulating a local hit count; the reducer merges local counts
//! atomically after all workers finish; the estimator converts the merged
//! hit ratio into a volume.
//!
//! # Reproducibility
//!
//! Worker streams are derived from (base seed, worker identity), so results
//! are reproducible for a fixed (seed, worker count, static policy). They
//! are not bit-identical to the serial baseline for more than one worker,
//! since the index space is covered by different streams.
//!
//! # Examples
//!
//! ```rust
//! use pball_engine::{RunConfig, Schedule, SimulationEngine};
//! use pball_core::exact_volume;
//!
//! let config = RunConfig::builder()
//!     .dimensions(3)
//!     .exponent(2.0)
//!     .trials(100_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let engine = SimulationEngine::new(config).unwrap();
//!
//! let result = engine.run_parallel(4, Schedule::DynamicDefault).unwrap();
//! let exact = exact_volume(3, 2.0, 1.0);
//! assert!((result.volume - exact).abs() / exact < 0.05);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod reduce;
pub mod rng;
pub mod sampler;
pub mod schedule;

// Re-exports for convenient access
pub use config::{RunConfig, RunConfigBuilder, MAX_DIMENSIONS, MAX_TRIALS};
pub use engine::{RunResult, SimulationEngine};
pub use error::{ConfigError, EngineError};
pub use rng::SampleRng;
pub use schedule::{Schedule, DEFAULT_DYNAMIC_CHUNK};
