use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::length::AU_TO_M;
use crate::time::SECONDS_PER_DAY;

/// Convert between AU/day and m/s
pub const AU_DAY_TO_M_S: f64 = AU_TO_M / SECONDS_PER_DAY;

/// A velocity quantity with meters per second as the base unit.
///
/// Radial-velocity semi-amplitudes are quoted in m/s (stellar reflex
/// motion from planets spans ~0.1 m/s to a few hundred m/s), which makes
/// m/s the natural base unit here.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: m/s

impl Velocity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * 1000.0)
    }

    pub fn from_au_per_day(value: f64) -> Self {
        Self(value * AU_DAY_TO_M_S)
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / 1000.0
    }

    pub fn to_au_per_day(&self) -> f64 {
        self.0 / AU_DAY_TO_M_S
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}

/// Division of Velocity by Velocity returns a dimensionless ratio
impl Div for Velocity {
    type Output = f64;

    fn div(self, rhs: Velocity) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Velocity (commutative multiplication)
impl Mul<Velocity> for f64 {
    type Output = Velocity;

    fn mul(self, rhs: Velocity) -> Velocity {
        rhs * self
    }
}
