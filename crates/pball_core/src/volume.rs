//! Volume formulae: bounding cube, closed form, and Monte Carlo estimate.

use crate::special::gamma;

/// Volume of the bounding hypercube [−R, R]ⁿ, i.e. (2R)ⁿ.
///
/// # Examples
///
/// ```rust
/// use pball_core::volume::hypercube_volume;
///
/// assert_eq!(hypercube_volume(3, 1.0), 8.0);
/// assert_eq!(hypercube_volume(10, 0.0), 0.0);
/// ```
#[inline]
pub fn hypercube_volume(dimensions: usize, radius: f64) -> f64 {
    (2.0 * radius).powi(dimensions as i32)
}

/// Closed-form volume of the n-dimensional p-norm ball of radius R:
///
/// ```text
/// V(n, p, R) = (2 Γ(1 + 1/p))ⁿ / Γ(1 + n/p) · Rⁿ
/// ```
///
/// Serves as the accuracy reference for the Monte Carlo estimate. Assumes
/// n ≥ 1, p > 0 and R ≥ 0 (enforced upstream by configuration validation).
///
/// # Examples
///
/// ```rust
/// use pball_core::volume::exact_volume;
///
/// // The interval [−1, 1] has length 2
/// assert!((exact_volume(1, 2.0, 1.0) - 2.0).abs() < 1e-12);
/// ```
pub fn exact_volume(dimensions: usize, exponent: f64, radius: f64) -> f64 {
    let n = dimensions as f64;
    let numerator = (2.0 * gamma(1.0 + 1.0 / exponent)).powi(dimensions as i32);
    let denominator = gamma(1.0 + n / exponent);
    numerator / denominator * radius.powi(dimensions as i32)
}

/// Monte Carlo volume estimate from a hit count.
///
/// `hits` of `trials` sampled points fell inside the ball; the estimate is
/// the hit ratio scaled by the bounding-cube volume. The caller guarantees
/// `trials > 0` (validated configuration).
#[inline]
pub fn estimate_volume(hits: u64, trials: u64, dimensions: usize, radius: f64) -> f64 {
    hits as f64 / trials as f64 * hypercube_volume(dimensions, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_interval_length() {
        // n=1: the ball is [−R, R] for every p
        assert_relative_eq!(exact_volume(1, 2.0, 1.0), 2.0, max_relative = 1e-12);
        assert_relative_eq!(exact_volume(1, 4.0, 3.0), 6.0, max_relative = 1e-12);
    }

    #[test]
    fn test_unit_disc_area() {
        assert_relative_eq!(
            exact_volume(2, 2.0, 1.0),
            std::f64::consts::PI,
            max_relative = 1e-10
        );
    }

    #[test]
    fn test_unit_sphere_volume() {
        let expected = 4.0 / 3.0 * std::f64::consts::PI;
        assert_relative_eq!(exact_volume(3, 2.0, 1.0), expected, max_relative = 1e-10);
    }

    #[test]
    fn test_l1_cross_polytope() {
        // p=1 ball volume is 2ⁿ/n!
        assert_relative_eq!(exact_volume(3, 1.0, 1.0), 8.0 / 6.0, max_relative = 1e-10);
    }

    #[test]
    fn test_infinity_like_large_p() {
        // As p → ∞ the ball approaches the cube; at p = 200 the volume is
        // already within a percent of (2R)ⁿ
        let v = exact_volume(4, 200.0, 1.0);
        assert!(v > 0.98 * hypercube_volume(4, 1.0));
        assert!(v <= hypercube_volume(4, 1.0) * (1.0 + 1e-9));
    }

    #[test]
    fn test_radius_scaling() {
        // V(n, p, R) = Rⁿ V(n, p, 1)
        let base = exact_volume(5, 3.0, 1.0);
        assert_relative_eq!(exact_volume(5, 3.0, 2.0), 32.0 * base, max_relative = 1e-10);
    }

    #[test]
    fn test_zero_radius() {
        assert_eq!(exact_volume(7, 4.0, 0.0), 0.0);
        assert_eq!(estimate_volume(0, 100, 7, 0.0), 0.0);
    }

    #[test]
    fn test_estimate_extremes() {
        assert_eq!(estimate_volume(0, 1_000, 3, 1.0), 0.0);
        assert_relative_eq!(
            estimate_volume(1_000, 1_000, 3, 1.0),
            hypercube_volume(3, 1.0),
            max_relative = 1e-12
        );
    }

    proptest! {
        #[test]
        fn prop_ball_fits_in_cube(
            n in 1usize..12,
            p in 0.5f64..16.0,
            r in 0.1f64..4.0,
        ) {
            let ball = exact_volume(n, p, r);
            let cube = hypercube_volume(n, r);
            prop_assert!(ball > 0.0);
            prop_assert!(ball <= cube * (1.0 + 1e-9));
        }

        #[test]
        fn prop_estimate_bounded_by_cube(
            hits in 0u64..=10_000,
            n in 1usize..12,
            r in 0.0f64..4.0,
        ) {
            let est = estimate_volume(hits, 10_000, n, r);
            prop_assert!(est >= 0.0);
            prop_assert!(est <= hypercube_volume(n, r) * (1.0 + 1e-9));
        }
    }
}
