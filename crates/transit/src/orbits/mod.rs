//! Orbital models that map timestamps to sky-plane geometry.
//!
//! Positions are expressed in units of the stellar radius with the star at
//! the origin and the observer at `z = +infinity`, so a companion occults
//! the star whenever it is close to the origin in the sky plane with
//! `z > 0`.

use thiserror::Error;
use units::Time;

pub mod kepler;
pub mod keplerian;
pub mod simple;

#[cfg(test)]
mod simple_test;

pub use kepler::{eccentric_from_true, solve_kepler, true_anomaly};
pub use keplerian::{KeplerianOrbit, KeplerianOrbitBuilder};
pub use simple::SimpleTransitOrbit;

/// An orbit that can place its companion on the sky at a given time.
pub trait TransitOrbit {
    /// Companion position `[x, y, z]` relative to the stellar center, in
    /// stellar radii. The companion is in front of the star when `z > 0`.
    fn position(&self, t: Time) -> [f64; 3];

    /// Projected separation between the companion and the stellar center,
    /// in stellar radii.
    fn sky_distance(&self, t: Time) -> f64 {
        let [x, y, _] = self.position(t);
        x.hypot(y)
    }

    /// Whether the companion is on the observer's side of the sky plane.
    fn in_front(&self, t: Time) -> bool {
        self.position(t)[2] > 0.0
    }
}

#[derive(Debug, Error)]
pub enum OrbitError {
    #[error("eccentricity must lie in [0, 1), got {0}")]
    Eccentricity(f64),

    #[error("exactly one of period or semi-major axis must be given")]
    AmbiguousSize,

    #[error("period must be positive, got {0} days")]
    NonPositivePeriod(f64),

    #[error("semi-major axis must be positive, got {0} au")]
    NonPositiveSemiMajorAxis(f64),

    #[error("at most one of inclination or impact parameter may be given")]
    AmbiguousInclination,

    #[error("impact parameter {b} cannot be reached at a/R* = {a_over_r}")]
    UnreachableImpactParameter { b: f64, a_over_r: f64 },

    #[error("impact parameter {0} must lie in [0, 1) for a full transit chord")]
    GrazingImpactParameter(f64),

    #[error("stellar mass and radius must be positive")]
    NonPhysicalStar,

    #[error("transit duration must be positive and shorter than the period")]
    InvalidDuration,

    #[error("orbit of size a/R* = {0} lies inside the star")]
    OrbitInsideStar(f64),
}
