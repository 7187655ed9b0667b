use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

/// Uninformative prior over physically allowed quadratic limb darkening
/// coefficients, using the Kipping (2013) triangular reparameterization.
///
/// Sampling draws `(q1, q2)` uniformly on the unit square and maps to
/// `(u1, u2)`; the map has unit Jacobian, so the density over the triangle
/// is flat. The triangle is the set of coefficients for which the intensity
/// profile is positive and decreasing toward the limb.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuadLimbDark;

impl QuadLimbDark {
    pub fn new() -> Self {
        Self
    }

    /// Log density at `(u1, u2)`: zero inside the allowed triangle and
    /// negative infinity outside.
    pub fn log_prob(&self, u1: f64, u2: f64) -> f64 {
        if u1 > 0.0 && u1 + u2 < 1.0 && u1 + 2.0 * u2 > 0.0 {
            0.0
        } else {
            f64::NEG_INFINITY
        }
    }

    /// Draw one coefficient pair `(u1, u2)`.
    pub fn sample(&self, rng: &mut ChaChaRng) -> (f64, f64) {
        let q1: f64 = rng.random();
        let q2: f64 = rng.random();
        Self::from_q(q1, q2)
    }

    /// Map sampling coordinates `(q1, q2)` on the unit square to
    /// coefficients `(u1, u2)`.
    pub fn from_q(q1: f64, q2: f64) -> (f64, f64) {
        let s = q1.sqrt();
        (2.0 * s * q2, s * (1.0 - 2.0 * q2))
    }

    /// Inverse of [`QuadLimbDark::from_q`] for coefficients inside the
    /// triangle.
    pub fn to_q(u1: f64, u2: f64) -> (f64, f64) {
        let sum = u1 + u2;
        (sum * sum, u1 / (2.0 * sum))
    }
}
