//! Work partitioning policies.
//!
//! The scheduler assigns the trial index space [0, N) to workers. Static
//! policies fix the assignment at schedule time; dynamic policies hand out
//! blocks at run time from a shared, atomically-claimed cursor, balancing
//! load across workers of uneven speed.
//!
//! Policy-independent guarantee: the union of all workers' assigned ranges
//! equals [0, N) exactly, with no duplicate and no omission.

use std::cmp::min;
use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ConfigError;

/// Default block size for dynamic policies.
///
/// Small enough to balance uneven workers, large enough that the cursor
/// fetch-add is negligible against n `powf` evaluations per trial.
pub const DEFAULT_DYNAMIC_CHUNK: u64 = 1024;

/// Scheduling policy for partitioning [0, N) across workers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// W contiguous blocks of near-equal size (sizes differ by at most 1),
    /// one block fixed per worker for the whole run.
    StaticEqual,
    /// Fixed blocks of the given size, assigned round-robin to workers at
    /// schedule time; the assignment never changes at run time.
    StaticChunk(u64),
    /// Blocks of [`DEFAULT_DYNAMIC_CHUNK`] trials claimed from a shared
    /// atomic cursor as workers become free.
    DynamicDefault,
    /// Dynamic claiming with an explicit block size.
    DynamicChunk(u64),
}

impl Schedule {
    /// Returns true for the dynamically-claimed policies.
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::DynamicDefault | Self::DynamicChunk(_))
    }

    /// Returns the block size a dynamic run would use.
    #[inline]
    pub fn dynamic_chunk(&self) -> u64 {
        match self {
            Self::DynamicChunk(c) => *c,
            _ => DEFAULT_DYNAMIC_CHUNK,
        }
    }

    /// Validates the policy against a run's trial count.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidChunkSize` when an explicit chunk size
    /// is 0 or exceeds the trial count.
    pub fn validate(&self, trials: u64) -> Result<(), ConfigError> {
        match *self {
            Self::StaticChunk(chunk) | Self::DynamicChunk(chunk) => {
                if chunk == 0 || chunk > trials {
                    Err(ConfigError::InvalidChunkSize { chunk, trials })
                } else {
                    Ok(())
                }
            }
            Self::StaticEqual | Self::DynamicDefault => Ok(()),
        }
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StaticEqual => write!(f, "static-equal"),
            Self::StaticChunk(c) => write!(f, "static-chunk({c})"),
            Self::DynamicDefault => write!(f, "dynamic-default"),
            Self::DynamicChunk(c) => write!(f, "dynamic-chunk({c})"),
        }
    }
}

/// Builds the per-worker range lists for a static policy.
///
/// The returned vector has exactly `workers` entries; entry w is the list
/// of index ranges worker w will execute, in order.
///
/// # Panics
///
/// Panics if called with a dynamic policy or zero workers; the engine
/// routes dynamic runs through [`DynamicCursor`] instead.
pub fn static_plan(trials: u64, workers: usize, schedule: Schedule) -> Vec<Vec<Range<u64>>> {
    assert!(workers > 0, "static plan needs at least one worker");
    let mut plan: Vec<Vec<Range<u64>>> = vec![Vec::new(); workers];

    match schedule {
        Schedule::StaticEqual => {
            // Contiguous near-equal blocks; the first (trials % W) workers
            // take one extra trial.
            let base = trials / workers as u64;
            let remainder = trials % workers as u64;
            let mut start = 0;
            for (w, ranges) in plan.iter_mut().enumerate() {
                let size = base + u64::from((w as u64) < remainder);
                if size > 0 {
                    ranges.push(start..start + size);
                }
                start += size;
            }
        }
        Schedule::StaticChunk(chunk) => {
            // Fixed-size blocks dealt round-robin at schedule time.
            let mut start = 0;
            let mut block = 0usize;
            while start < trials {
                let end = min(start + chunk, trials);
                plan[block % workers].push(start..end);
                start = end;
                block += 1;
            }
        }
        Schedule::DynamicDefault | Schedule::DynamicChunk(_) => {
            panic!("dynamic schedules are claimed at run time, not planned");
        }
    }

    plan
}

/// Shared block-assignment cursor for dynamic policies.
///
/// Workers claim blocks via an atomic fetch-add on the cursor; a worker
/// that finishes a block immediately claims the next available one. The
/// fetch-add makes claimed ranges disjoint by construction under any
/// interleaving, which is the safety-critical property here: a race on the
/// cursor could run a trial twice or skip it entirely.
pub struct DynamicCursor {
    /// Next unclaimed trial index.
    next: AtomicU64,
    /// Total trial count N.
    trials: u64,
    /// Block size per claim.
    chunk: u64,
}

impl DynamicCursor {
    /// Creates a cursor over [0, trials) handing out blocks of `chunk`.
    pub fn new(trials: u64, chunk: u64) -> Self {
        debug_assert!(chunk > 0);
        Self {
            next: AtomicU64::new(0),
            trials,
            chunk,
        }
    }

    /// Claims the next available block, or `None` when the index space is
    /// exhausted.
    ///
    /// Relaxed ordering suffices: the claimed range is derived purely from
    /// the returned counter value, and hit counts only become visible to
    /// the reducer through the join barrier.
    pub fn claim(&self) -> Option<Range<u64>> {
        let start = self.next.fetch_add(self.chunk, Ordering::Relaxed);
        if start >= self.trials {
            return None;
        }
        Some(start..min(start + self.chunk, self.trials))
    }
}
