use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use super::continuous::Beta;
use super::{Distribution, DistributionError};

/// Uniform density over angles in `(-pi, pi]`, used for arguments of
/// periastron and longitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Angle;

impl Angle {
    /// Wrap an arbitrary angle into `(-pi, pi]`.
    pub fn wrap(theta: f64) -> f64 {
        let wrapped = theta - (2.0 * PI) * (theta / (2.0 * PI)).round();
        if wrapped <= -PI {
            wrapped + 2.0 * PI
        } else {
            wrapped
        }
    }
}

impl Distribution for Angle {
    fn log_prob(&self, x: f64) -> f64 {
        if x > -PI && x <= PI {
            -(2.0 * PI).ln()
        } else {
            f64::NEG_INFINITY
        }
    }

    fn sample(&self, rng: &mut ChaChaRng) -> f64 {
        PI * (1.0 - 2.0 * rng.random::<f64>())
    }
}

/// Uniform impact parameter prior over `[0, 1 + ror)`, covering grazing
/// configurations up to the last geometry that still produces a transit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameter {
    ror: f64,
}

impl ImpactParameter {
    pub fn new(ror: f64) -> Result<Self, DistributionError> {
        if !ror.is_finite() {
            return Err(DistributionError::NonFinite { name: "ror", value: ror });
        }
        if ror < 0.0 {
            return Err(DistributionError::NonPositive { name: "ror", value: ror });
        }
        Ok(Self { ror })
    }

    pub fn upper(&self) -> f64 {
        1.0 + self.ror
    }
}

impl Distribution for ImpactParameter {
    fn log_prob(&self, x: f64) -> f64 {
        if x >= 0.0 && x < self.upper() {
            -self.upper().ln()
        } else {
            f64::NEG_INFINITY
        }
    }

    fn sample(&self, rng: &mut ChaChaRng) -> f64 {
        self.upper() * rng.random::<f64>()
    }
}

/// The Kipping (2013) eccentricity prior for short-period planets, a
/// Beta(0.867, 3.03) density fit to the radial velocity sample.
pub fn kipping_beta() -> Beta {
    Beta::new_unchecked(0.867, 3.03)
}
