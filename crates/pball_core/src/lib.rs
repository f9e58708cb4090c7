//! # pball_core
//!
//! Mathematical foundation for the pball volume estimator.
//!
//! This crate provides the pure, side-effect-free building blocks consumed
//! by the sampling engine:
//!
//! - [`special`] — numerical approximations of the Gamma function
//! - [`ball`] — the p-norm ball membership predicate
//! - [`volume`] — bounding-cube, closed-form and Monte Carlo volume formulae
//!
//! Nothing in this crate allocates, draws random numbers, or touches
//! concurrency; it knows nothing about workers or scheduling.

pub mod ball;
pub mod special;
pub mod volume;

pub use ball::is_inside;
pub use special::{gamma, ln_gamma};
pub use volume::{estimate_volume, exact_volume, hypercube_volume};
