//! Tools for modeling transiting exoplanets: Keplerian orbits, limb-darkened
//! transit light curves, celerite Gaussian process noise models, MCMC
//! samplers, and period-search estimators.
//!
//! The crate builds in one of two stages selected by the `runtime` cargo
//! feature. The feature is on by default and enables the full surface below.
//! Building with `--no-default-features` yields the setup stage: only
//! [`VERSION`] is exported and none of the functional dependencies are
//! compiled, so the crate can be resolved by packaging and doc tooling before
//! its numeric stack is available.

/// Crate version, available in both build stages.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "runtime")]
pub mod distributions;
#[cfg(feature = "runtime")]
pub mod estimators;
#[cfg(feature = "runtime")]
pub mod gp;
#[cfg(feature = "runtime")]
pub mod orbits;
#[cfg(feature = "runtime")]
pub mod sampling;
#[cfg(feature = "runtime")]
pub mod utils;

#[cfg(feature = "runtime")]
mod light_curve;

#[cfg(feature = "runtime")]
pub use light_curve::{LightCurveError, StarryLightCurve};
