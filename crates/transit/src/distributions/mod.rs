//! Prior distributions for orbit and light-curve parameters.
//!
//! Everything samples from an explicitly seeded [`ChaChaRng`] so runs are
//! reproducible, and exposes the log density needed by the samplers in
//! [`crate::sampling`].

use rand_chacha::ChaChaRng;
use thiserror::Error;

pub mod continuous;
pub mod limb_dark;
pub mod orbital;

#[cfg(test)]
mod continuous_test;
#[cfg(test)]
mod limb_dark_test;

pub use continuous::{Beta, Normal, Rayleigh, Uniform};
pub use limb_dark::QuadLimbDark;
pub use orbital::{kipping_beta, Angle, ImpactParameter};

/// A univariate distribution with a log density and a sampler.
pub trait Distribution {
    /// Log of the probability density at `x`. Outside the support this is
    /// negative infinity.
    fn log_prob(&self, x: f64) -> f64;

    /// Draw one value.
    fn sample(&self, rng: &mut ChaChaRng) -> f64;
}

#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("upper bound {upper} must exceed lower bound {lower}")]
    EmptySupport { lower: f64, upper: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}
