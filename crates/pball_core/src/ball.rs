//! p-norm ball membership test.
//!
//! A point x ∈ ℝⁿ lies inside the p-norm ball of radius R when
//! Σ|xᵢ|ᵖ ≤ Rᵖ. The exponent is a general positive real, so the test uses
//! `powf` throughout; there is deliberately no integer fast path, which
//! would change rounding behaviour between e.g. p = 2 and p = 2.0001.

/// Returns Σ|xᵢ|ᵖ for the given point.
///
/// This is the p-th power of the p-norm; callers compare it against Rᵖ
/// directly to avoid the p-th root.
#[inline]
pub fn pnorm_pow_sum(point: &[f64], exponent: f64) -> f64 {
    point.iter().map(|x| x.abs().powf(exponent)).sum()
}

/// Membership predicate for the p-norm ball of radius `radius`.
///
/// Pure and side-effect-free. The empty point (n = 0) is inside any ball
/// with R ≥ 0 since the sum is 0.
///
/// # Examples
///
/// ```rust
/// use pball_core::ball::is_inside;
///
/// // Euclidean unit circle
/// assert!(is_inside(&[0.6, 0.8], 2.0, 1.0));
/// assert!(!is_inside(&[0.8, 0.8], 2.0, 1.0));
/// ```
#[inline]
pub fn is_inside(point: &[f64], exponent: f64, radius: f64) -> bool {
    pnorm_pow_sum(point, exponent) <= radius.powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_origin_always_inside() {
        assert!(is_inside(&[0.0; 8], 4.0, 1.0));
        assert!(is_inside(&[0.0; 8], 0.5, 0.1));
    }

    #[test]
    fn test_boundary_point_inside() {
        // Boundary counts as inside (≤, not <)
        assert!(is_inside(&[1.0, 0.0], 2.0, 1.0));
    }

    #[test]
    fn test_outside_corner() {
        // The cube corner is outside the inscribed ball for n ≥ 2
        assert!(!is_inside(&[1.0, 1.0], 2.0, 1.0));
        assert!(!is_inside(&[1.0, 1.0, 1.0], 4.0, 1.0));
    }

    #[test]
    fn test_radius_zero_only_origin() {
        assert!(is_inside(&[0.0, 0.0], 2.0, 0.0));
        assert!(!is_inside(&[1e-12, 0.0], 2.0, 0.0));
    }

    #[test]
    fn test_fractional_exponent() {
        // p = 0.5 ball is star-shaped; (0.25, 0.25) has Σ|x|^0.5 = 1 ≤ 1
        assert!(is_inside(&[0.25, 0.25], 0.5, 1.0));
        assert!(!is_inside(&[0.3, 0.3], 0.5, 1.0));
    }

    proptest! {
        #[test]
        fn prop_membership_sign_invariant(
            coords in proptest::collection::vec(-1.0f64..1.0, 1..10),
            p in 0.5f64..8.0,
        ) {
            let flipped: Vec<f64> = coords.iter().map(|x| -x).collect();
            prop_assert_eq!(is_inside(&coords, p, 1.0), is_inside(&flipped, p, 1.0));
        }

        #[test]
        fn prop_membership_monotone_in_radius(
            coords in proptest::collection::vec(-1.0f64..1.0, 1..10),
            p in 0.5f64..8.0,
        ) {
            // Anything inside the unit ball is inside every larger ball
            if is_inside(&coords, p, 1.0) {
                prop_assert!(is_inside(&coords, p, 2.0));
            }
        }
    }
}
