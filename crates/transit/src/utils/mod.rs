//! Shared numeric helpers and logging setup used across the crate.

pub mod logging;
pub mod phase;
pub mod special;
pub mod stats;

#[cfg(test)]
mod stats_test;

pub use phase::fold;
pub use special::{ln_beta, ln_gamma};
pub use stats::{mean, median, std_dev, variance, weighted_mean};
