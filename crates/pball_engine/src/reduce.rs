//! Concurrency-safe hit-count reduction.
//!
//! Each worker accumulates hits in a private counter and commits it to the
//! shared accumulator exactly once, after finishing its assignment. The
//! combine is an atomic add, so the merged value is deterministic and
//! independent of commit order. The estimator reads the total only after
//! every worker has joined.

use std::sync::atomic::{AtomicU64, Ordering};

/// Shared accumulator for per-worker hit counts.
///
/// # Examples
///
/// ```rust
/// use pball_engine::reduce::HitAccumulator;
///
/// let acc = HitAccumulator::new();
/// acc.commit(3);
/// acc.commit(4);
/// assert_eq!(acc.total(), 7);
/// ```
#[derive(Debug, Default)]
pub struct HitAccumulator {
    hits: AtomicU64,
}

impl HitAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits one worker's local hit count.
    ///
    /// Relaxed ordering suffices: no worker reads the total, and the
    /// reducer's read happens after the join barrier, which orders all
    /// commits before it.
    #[inline]
    pub fn commit(&self, local_hits: u64) {
        self.hits.fetch_add(local_hits, Ordering::Relaxed);
    }

    /// Returns the merged hit count.
    ///
    /// Only meaningful once all contributing workers have joined.
    #[inline]
    pub fn total(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_accumulates() {
        let acc = HitAccumulator::new();
        assert_eq!(acc.total(), 0);
        acc.commit(10);
        acc.commit(0);
        acc.commit(32);
        assert_eq!(acc.total(), 42);
    }

    #[test]
    fn test_concurrent_commits_sum_exactly() {
        let acc = HitAccumulator::new();
        std::thread::scope(|s| {
            for _ in 0..16 {
                s.spawn(|| {
                    for _ in 0..1000 {
                        acc.commit(1);
                    }
                });
            }
        });
        assert_eq!(acc.total(), 16_000);
    }
}
