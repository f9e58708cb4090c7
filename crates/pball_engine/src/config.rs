//! Run configuration.
//!
//! [`RunConfig`] is the immutable parameter set for one estimation run.
//! Construction goes through [`RunConfigBuilder`], which validates at build
//! time so that no invalid configuration ever reaches a worker.

use crate::error::ConfigError;

/// Maximum number of dimensions allowed.
pub const MAX_DIMENSIONS: usize = 100_000;

/// Maximum number of trials allowed.
pub const MAX_TRIALS: u64 = 1_000_000_000_000;

/// Immutable configuration for one volume-estimation run.
///
/// # Examples
///
/// ```rust
/// use pball_engine::RunConfig;
///
/// let config = RunConfig::builder()
///     .dimensions(10)
///     .exponent(4.0)
///     .radius(1.0)
///     .trials(1_000_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.dimensions(), 10);
/// assert_eq!(config.trials(), 1_000_000);
/// ```
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Number of spatial dimensions n.
    dimensions: usize,
    /// p-norm exponent, a general positive real.
    exponent: f64,
    /// Ball radius R; the bounding cube is [−R, R]ⁿ.
    radius: f64,
    /// Total number of trials N.
    trials: u64,
    /// Base seed; worker streams are derived from it.
    seed: u64,
}

impl RunConfig {
    /// Creates a new configuration builder preloaded with the standard
    /// defaults (n = 10, p = 4, R = 1, N = 1,000,000, seed = 42).
    #[inline]
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Returns the number of dimensions.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Returns the p-norm exponent.
    #[inline]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Returns the ball radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the total trial count.
    #[inline]
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Returns the base seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `dimensions` is 0 or greater than [`MAX_DIMENSIONS`]
    /// - `trials` is 0 or greater than [`MAX_TRIALS`]
    /// - `exponent` is not a finite positive real
    /// - `radius` is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions == 0 || self.dimensions > MAX_DIMENSIONS {
            return Err(ConfigError::InvalidDimensions(self.dimensions));
        }
        if self.trials == 0 || self.trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(self.trials));
        }
        if !self.exponent.is_finite() || self.exponent <= 0.0 {
            return Err(ConfigError::InvalidExponent(self.exponent));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

/// Builder for [`RunConfig`].
///
/// Every field has the standard default, so only deviations need to be set.
///
/// # Examples
///
/// ```rust
/// use pball_engine::RunConfig;
///
/// // Unit circle area estimation
/// let config = RunConfig::builder()
///     .dimensions(2)
///     .exponent(2.0)
///     .trials(100_000)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug)]
pub struct RunConfigBuilder {
    dimensions: usize,
    exponent: f64,
    radius: f64,
    trials: u64,
    seed: u64,
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self {
            dimensions: 10,
            exponent: 4.0,
            radius: 1.0,
            trials: 1_000_000,
            seed: 42,
        }
    }
}

impl RunConfigBuilder {
    /// Sets the number of dimensions.
    #[inline]
    pub fn dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Sets the p-norm exponent.
    #[inline]
    pub fn exponent(mut self, exponent: f64) -> Self {
        self.exponent = exponent;
        self
    }

    /// Sets the ball radius.
    #[inline]
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the total trial count.
    #[inline]
    pub fn trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the base seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when any parameter is out of range; see
    /// [`RunConfig::validate`].
    pub fn build(self) -> Result<RunConfig, ConfigError> {
        let config = RunConfig {
            dimensions: self.dimensions,
            exponent: self.exponent,
            radius: self.radius,
            trials: self.trials,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = RunConfig::builder().build().unwrap();
        assert_eq!(config.dimensions(), 10);
        assert_eq!(config.exponent(), 4.0);
        assert_eq!(config.radius(), 1.0);
        assert_eq!(config.trials(), 1_000_000);
        assert_eq!(config.seed(), 42);
    }

    #[test]
    fn test_builder_overrides() {
        let config = RunConfig::builder()
            .dimensions(3)
            .exponent(2.0)
            .radius(0.5)
            .trials(1000)
            .seed(7)
            .build()
            .unwrap();

        assert_eq!(config.dimensions(), 3);
        assert_eq!(config.exponent(), 2.0);
        assert_eq!(config.radius(), 0.5);
        assert_eq!(config.trials(), 1000);
        assert_eq!(config.seed(), 7);
    }

    #[test]
    fn test_invalid_zero_dimensions() {
        let result = RunConfig::builder().dimensions(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidDimensions(0))));
    }

    #[test]
    fn test_invalid_too_many_dimensions() {
        let result = RunConfig::builder().dimensions(MAX_DIMENSIONS + 1).build();
        assert!(matches!(result, Err(ConfigError::InvalidDimensions(_))));
    }

    #[test]
    fn test_invalid_zero_trials() {
        // N = 0 would divide by zero in the estimator; must be rejected here
        let result = RunConfig::builder().trials(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidTrialCount(0))));
    }

    #[test]
    fn test_invalid_exponent() {
        for bad in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            let result = RunConfig::builder().exponent(bad).build();
            assert!(matches!(result, Err(ConfigError::InvalidExponent(_))));
        }
    }

    #[test]
    fn test_invalid_radius() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let result = RunConfig::builder().radius(bad).build();
            assert!(matches!(result, Err(ConfigError::InvalidRadius(_))));
        }
    }

    #[test]
    fn test_zero_radius_is_valid() {
        // R = 0 is a legal degenerate case: the estimate must come out 0
        let config = RunConfig::builder().radius(0.0).build().unwrap();
        assert_eq!(config.radius(), 0.0);
    }
}
