//! MCMC samplers for posterior exploration.
//!
//! Two samplers cover the usual regimes: the affine-invariant
//! [`EnsembleSampler`] needs no tuning and handles correlated, moderately
//! non-Gaussian posteriors; [`AdaptiveMetropolis`] is a single-chain
//! random-walk sampler that learns its proposal covariance on a schedule of
//! doubling adaptation windows.

use thiserror::Error;

pub mod chain;
pub mod ensemble;
pub mod metropolis;
pub mod schedule;

#[cfg(test)]
mod chain_test;
#[cfg(test)]
mod metropolis_test;

pub use chain::Chain;
pub use ensemble::EnsembleSampler;
pub use metropolis::AdaptiveMetropolis;
pub use schedule::TuningSchedule;

/// A target density for the samplers.
pub trait Model: Send + Sync {
    /// Number of free parameters.
    fn ndim(&self) -> usize;

    /// Log posterior density up to a constant. Return negative infinity
    /// for parameter vectors outside the support.
    fn log_prob(&self, theta: &[f64]) -> f64;
}

#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("{ndim}-dimensional models need at least {required} walkers, got {n_walkers}")]
    TooFewWalkers { n_walkers: usize, ndim: usize, required: usize },

    #[error("walker count must be even, got {0}")]
    OddWalkerCount(usize),

    #[error("expected {expected} initial positions, got {actual}")]
    WalkerCountMismatch { expected: usize, actual: usize },

    #[error("initial position {index} has dimension {actual}, expected {expected}")]
    DimensionMismatch { index: usize, expected: usize, actual: usize },

    #[error("initial position {index} has non-finite log probability")]
    NonFiniteStart { index: usize },

    #[error("model must have at least one parameter")]
    EmptyModel,
}
