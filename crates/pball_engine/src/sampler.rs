//! Candidate-point sampling.
//!
//! One trial draws a point uniformly from the bounding cube [−R, R]ⁿ into a
//! pre-allocated buffer. Buffers are hoisted out of the trial loop and owned
//! exclusively by one worker, so the hot path never allocates.

use std::collections::TryReserveError;

use crate::rng::SampleRng;

/// Allocates a point buffer of `dimensions` coordinates.
///
/// Allocation goes through `try_reserve_exact` so that exhaustion surfaces
/// as an error the engine can turn into a clean whole-run abort, instead of
/// an allocator abort mid-run.
pub fn alloc_point_buffer(dimensions: usize) -> Result<Vec<f64>, TryReserveError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(dimensions)?;
    buffer.resize(dimensions, 0.0);
    Ok(buffer)
}

/// Draws one candidate point uniformly from [−R, R]ⁿ.
///
/// Each coordinate is an independent draw u ∈ [0, 1) mapped to (2u − 1)·R.
/// Identical stream state yields an identical point sequence.
#[inline]
pub fn sample_point(rng: &mut SampleRng, radius: f64, point: &mut [f64]) {
    for coord in point.iter_mut() {
        let u = rng.gen_uniform();
        *coord = (2.0 * u - 1.0) * radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_point_buffer() {
        let buffer = alloc_point_buffer(16).unwrap();
        assert_eq!(buffer.len(), 16);
        assert!(buffer.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_sample_point_within_cube() {
        let mut rng = SampleRng::from_seed(42);
        let mut point = alloc_point_buffer(8).unwrap();
        for _ in 0..1000 {
            sample_point(&mut rng, 2.5, &mut point);
            assert!(point.iter().all(|&x| (-2.5..2.5).contains(&x)));
        }
    }

    #[test]
    fn test_sample_point_reproducible() {
        let mut a = SampleRng::from_seed(99);
        let mut b = SampleRng::from_seed(99);
        let mut pa = alloc_point_buffer(5).unwrap();
        let mut pb = alloc_point_buffer(5).unwrap();
        for _ in 0..100 {
            sample_point(&mut a, 1.0, &mut pa);
            sample_point(&mut b, 1.0, &mut pb);
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn test_zero_radius_collapses_to_origin() {
        let mut rng = SampleRng::from_seed(1);
        let mut point = alloc_point_buffer(4).unwrap();
        sample_point(&mut rng, 0.0, &mut point);
        assert!(point.iter().all(|&x| x == 0.0));
    }
}
