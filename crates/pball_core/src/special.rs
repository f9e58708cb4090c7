//! Special mathematical functions.
//!
//! The closed-form volume of a p-norm ball is expressed through the Gamma
//! function, which the standard library does not provide. This module
//! carries a Lanczos approximation accurate to well below the Monte Carlo
//! noise floor of any realistic run.

/// Lanczos approximation of ln Γ(x).
///
/// Uses the g = 7, nine-coefficient expansion, with the reflection formula
/// for x < 0.5.
///
/// Reference: Lanczos (1964), "A Precision Approximation of the Gamma
/// Function", *SIAM Journal on Numerical Analysis* 1(1).
///
/// # Accuracy
///
/// Relative error < 2 × 10⁻¹⁰ for x > 0.
///
/// # Examples
///
/// ```rust
/// use pball_core::special::ln_gamma;
///
/// // Γ(5) = 4! = 24
/// assert!((ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-10);
/// ```
pub fn ln_gamma(x: f64) -> f64 {
    #[allow(clippy::excessive_precision)]
    const COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];
    const G: f64 = 7.0;

    if x < 0.5 {
        // Reflection: Γ(x) Γ(1−x) = π / sin(πx)
        let pi = std::f64::consts::PI;
        return (pi / (pi * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut sum = COEFFICIENTS[0];
    for (i, &c) in COEFFICIENTS[1..].iter().enumerate() {
        sum += c / (x + i as f64 + 1.0);
    }

    let t = x + G + 0.5;
    0.5 * (2.0 * std::f64::consts::PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

/// Gamma function Γ(x) = exp(ln Γ(x)).
///
/// # Examples
///
/// ```rust
/// use pball_core::special::gamma;
///
/// // Γ(0.5) = √π
/// assert!((gamma(0.5) - std::f64::consts::PI.sqrt()).abs() < 1e-10);
/// ```
#[inline]
pub fn gamma(x: f64) -> f64 {
    ln_gamma(x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gamma_integer_arguments() {
        // Γ(k+1) = k!
        let factorials = [1.0, 1.0, 2.0, 6.0, 24.0, 120.0, 720.0];
        for (k, &expected) in factorials.iter().enumerate() {
            assert_relative_eq!(gamma(k as f64 + 1.0), expected, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_gamma_half_integers() {
        let sqrt_pi = std::f64::consts::PI.sqrt();
        assert_relative_eq!(gamma(0.5), sqrt_pi, max_relative = 1e-10);
        assert_relative_eq!(gamma(1.5), 0.5 * sqrt_pi, max_relative = 1e-10);
        assert_relative_eq!(gamma(2.5), 0.75 * sqrt_pi, max_relative = 1e-10);
    }

    #[test]
    fn test_ln_gamma_reflection_region() {
        // Γ(0.25) Γ(0.75) = π / sin(π/4)
        let product = ln_gamma(0.25) + ln_gamma(0.75);
        let expected = (std::f64::consts::PI / (std::f64::consts::FRAC_PI_4).sin()).ln();
        assert_relative_eq!(product, expected, max_relative = 1e-10);
    }

    #[test]
    fn test_gamma_recurrence() {
        // Γ(x+1) = x Γ(x)
        for &x in &[0.7, 1.3, 2.8, 4.1, 9.5] {
            assert_relative_eq!(gamma(x + 1.0), x * gamma(x), max_relative = 1e-9);
        }
    }
}
