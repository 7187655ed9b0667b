//! Quick-look estimators for periods, amplitudes, and chain diagnostics.
//!
//! These produce the starting points that the samplers in
//! [`crate::sampling`] refine: a periodogram peak or BLS detection seeds
//! the period, and the radial velocity fits seed companion masses.

use thiserror::Error;

pub mod autocorr;
pub mod bls;
pub mod lomb_scargle;
pub mod rv;


pub use autocorr::{autocorr_function, integrated_autocorr_time};
pub use bls::{bls, BlsConfig, BlsResult};
pub use lomb_scargle::{frequency_grid, lomb_scargle, Periodogram};
pub use rv::{estimate_minimum_mass, estimate_semi_amplitude};

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("input series must not be empty")]
    Empty,

    #[error("length mismatch: {left} timestamps vs {right} values")]
    LengthMismatch { left: usize, right: usize },

    #[error("need at least {required} points, got {actual}")]
    TooShort { required: usize, actual: usize },

    #[error("input series is constant")]
    ConstantInput,

    #[error("invalid search grid: {reason}")]
    InvalidGrid { reason: String },

    #[error("period must be positive, got {0} d")]
    NonPositivePeriod(f64),

    #[error("sinusoid fit is degenerate at period {period} d")]
    DegenerateFit { period: f64 },

    #[error("stellar mass must be positive, got {0} solar masses")]
    NonPositiveMass(f64),

    #[error("semi-amplitude must be finite and non-negative, got {0} m/s")]
    NegativeAmplitude(f64),
}
