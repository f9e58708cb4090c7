//! Serial and fork-join parallel estimation runs.
//!
//! [`SimulationEngine`] owns a validated [`RunConfig`] and executes it
//! either as a single-stream serial baseline or as a fork-join run over a
//! fixed pool of W workers. Worker state (stream, point buffer, local hit
//! counter) is allocated before any worker starts, so resource exhaustion
//! fails the whole run cleanly instead of producing a partial result.
//!
//! # Architecture
//!
//! ```text
//! SimulationEngine
//! ├── RunConfig        (validated parameters)
//! ├── Schedule         (static plan or dynamic cursor)
//! ├── WorkerState      (private stream + point buffer, one per worker)
//! └── HitAccumulator   (atomic reduction after each worker finishes)
//! ```

use std::ops::Range;
use std::time::{Duration, Instant};

use rayon::ThreadPoolBuilder;
use tracing::debug;

use pball_core::ball::is_inside;
use pball_core::volume::estimate_volume;

use crate::config::RunConfig;
use crate::error::{ConfigError, EngineError};
use crate::reduce::HitAccumulator;
use crate::rng::SampleRng;
use crate::sampler::{alloc_point_buffer, sample_point};
use crate::schedule::{static_plan, DynamicCursor, Schedule};

/// Outcome of one completed estimation run.
#[derive(Clone, Debug)]
pub struct RunResult {
    /// Number of sampled points found inside the ball.
    pub hits: u64,
    /// Total trials executed (always the configured N).
    pub trials: u64,
    /// Estimated volume, (hits / trials) · (2R)ⁿ.
    pub volume: f64,
    /// Wall-clock time of the sampling loop, excluding pool construction.
    pub elapsed: Duration,
}

impl RunResult {
    /// Fraction of trials that hit the ball.
    #[inline]
    pub fn hit_ratio(&self) -> f64 {
        self.hits as f64 / self.trials as f64
    }
}

/// Exclusively-owned state of one sampling worker.
///
/// Never shared or mutated by another worker; the stream is keyed by the
/// worker's identity, so its draw sequence does not depend on which trial
/// indices the scheduler assigns.
struct WorkerState {
    rng: SampleRng,
    point: Vec<f64>,
    hits: u64,
}

impl WorkerState {
    fn new(base_seed: u64, worker: usize, dimensions: usize) -> Result<Self, EngineError> {
        let point = alloc_point_buffer(dimensions)
            .map_err(|_| EngineError::Allocation { worker, dimensions })?;
        Ok(Self {
            rng: SampleRng::for_worker(base_seed, worker),
            point,
            hits: 0,
        })
    }

    /// Runs the trials of one assigned index range.
    fn run_range(&mut self, range: Range<u64>, exponent: f64, radius: f64) {
        for _ in range {
            sample_point(&mut self.rng, radius, &mut self.point);
            if is_inside(&self.point, exponent, radius) {
                self.hits += 1;
            }
        }
    }
}

/// Monte Carlo volume-estimation engine.
///
/// # Examples
///
/// ```rust
/// use pball_engine::{RunConfig, Schedule, SimulationEngine};
///
/// let config = RunConfig::builder()
///     .dimensions(2)
///     .exponent(2.0)
///     .trials(10_000)
///     .build()
///     .unwrap();
/// let engine = SimulationEngine::new(config).unwrap();
///
/// let serial = engine.run_serial().unwrap();
/// let parallel = engine.run_parallel(4, Schedule::StaticEqual).unwrap();
///
/// // Both estimate the unit-disc area π
/// assert!((serial.volume - std::f64::consts::PI).abs() < 0.2);
/// assert!((parallel.volume - std::f64::consts::PI).abs() < 0.2);
/// ```
pub struct SimulationEngine {
    config: RunConfig,
}

impl SimulationEngine {
    /// Creates an engine over a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the configuration is out of range; no
    /// worker ever observes an invalid configuration.
    pub fn new(config: RunConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the run configuration.
    #[inline]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs the serial baseline: one stream seeded with the base seed,
    /// one pass over [0, N).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Allocation` when the point buffer cannot be
    /// allocated.
    pub fn run_serial(&self) -> Result<RunResult, EngineError> {
        let c = &self.config;
        debug!(
            dimensions = c.dimensions(),
            trials = c.trials(),
            seed = c.seed(),
            "starting serial run"
        );

        // Worker stream 0 is the base stream, so the serial baseline is a
        // one-worker static run executed inline.
        let mut state = WorkerState::new(c.seed(), 0, c.dimensions())?;

        let start = Instant::now();
        state.run_range(0..c.trials(), c.exponent(), c.radius());
        let elapsed = start.elapsed();

        Ok(self.result(state.hits, elapsed))
    }

    /// Runs a fork-join parallel estimation over `workers` workers under
    /// the given scheduling policy.
    ///
    /// The pool is built once per run and joined before the estimator reads
    /// the merged hit count. Results are reproducible for a fixed
    /// (seed, worker count, static policy); dynamic policies cover [0, N)
    /// exactly but their per-worker trial counts depend on claim timing.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidWorkerCount` for zero workers
    /// - `ConfigError::InvalidChunkSize` for an out-of-range explicit chunk
    /// - `EngineError::Allocation` when any worker's point buffer cannot be
    ///   allocated (detected before any worker starts)
    /// - `EngineError::ThreadPool` when the pool cannot be built
    pub fn run_parallel(
        &self,
        workers: usize,
        schedule: Schedule,
    ) -> Result<RunResult, EngineError> {
        let c = &self.config;
        if workers == 0 {
            return Err(ConfigError::InvalidWorkerCount.into());
        }
        schedule.validate(c.trials())?;

        debug!(
            workers,
            %schedule,
            trials = c.trials(),
            seed = c.seed(),
            "starting parallel run"
        );

        // All worker state is allocated up front: an allocation failure
        // aborts the run before a single trial has executed.
        let mut states = Vec::with_capacity(workers);
        for worker in 0..workers {
            states.push(WorkerState::new(c.seed(), worker, c.dimensions())?);
        }

        let pool = ThreadPoolBuilder::new().num_threads(workers).build()?;
        let accumulator = HitAccumulator::new();
        let exponent = c.exponent();
        let radius = c.radius();
        let trials = c.trials();

        let start = Instant::now();
        if schedule.is_dynamic() {
            let cursor = DynamicCursor::new(trials, schedule.dynamic_chunk());
            pool.scope(|s| {
                for mut state in states {
                    let cursor = &cursor;
                    let accumulator = &accumulator;
                    s.spawn(move |_| {
                        while let Some(range) = cursor.claim() {
                            state.run_range(range, exponent, radius);
                        }
                        accumulator.commit(state.hits);
                    });
                }
            });
        } else {
            let plan = static_plan(trials, workers, schedule);
            pool.scope(|s| {
                for (mut state, ranges) in states.into_iter().zip(plan) {
                    let accumulator = &accumulator;
                    s.spawn(move |_| {
                        for range in ranges {
                            state.run_range(range, exponent, radius);
                        }
                        accumulator.commit(state.hits);
                    });
                }
            });
        }
        let elapsed = start.elapsed();

        // The scope above is a full join barrier; only now is the merged
        // count read.
        Ok(self.result(accumulator.total(), elapsed))
    }

    fn result(&self, hits: u64, elapsed: Duration) -> RunResult {
        let c = &self.config;
        let volume = estimate_volume(hits, c.trials(), c.dimensions(), c.radius());
        debug!(hits, volume, ?elapsed, "run finished");
        RunResult {
            hits,
            trials: c.trials(),
            volume,
            elapsed,
        }
    }
}
