use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of the Sun in kilograms (IAU nominal solar mass, 1.98841 × 10³⁰ kg)
pub const SOLAR_MASS_KG: f64 = 1.988_41e30;

/// Mass of Jupiter in kilograms (1.89813 × 10²⁷ kg)
pub const JUPITER_MASS_KG: f64 = 1.898_13e27;

/// Mass of the Earth in kilograms (5.9722 × 10²⁴ kg)
pub const EARTH_MASS_KG: f64 = 5.972_2e24;

/// A physical mass quantity using f64 precision.
///
/// The `Mass` struct represents mass values with solar masses as the base
/// unit, the natural scale for the host stars and companions handled by the
/// transit models. Planet masses are usually quoted in Jupiter or Earth
/// masses and convert through the IAU nominal values above.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let host = Mass::from_solar_masses(0.92);
/// let hot_jupiter = Mass::from_jupiter_masses(1.3);
/// let super_earth = Mass::from_earth_masses(4.7);
///
/// // Convert between units
/// let ratio = hot_jupiter / host;
/// assert!(ratio < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a zero mass value, used for test particles and unset
    /// companion masses.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Jupiter masses.
    ///
    /// One Jupiter mass is approximately 9.546 × 10⁻⁴ solar masses.
    pub fn from_jupiter_masses(value: f64) -> Self {
        Self(value * JUPITER_MASS_KG / SOLAR_MASS_KG)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    ///
    /// One solar mass is approximately 332,950 Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_KG / SOLAR_MASS_KG)
    }

    /// Creates a new `Mass` from a value in kilograms.
    pub fn from_kg(value: f64) -> Self {
        Self(value / SOLAR_MASS_KG)
    }

    /// Returns the mass in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Converts the mass to Jupiter masses.
    pub fn to_jupiter_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_KG / JUPITER_MASS_KG
    }

    /// Converts the mass to Earth masses.
    pub fn to_earth_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_KG / EARTH_MASS_KG
    }

    /// Converts the mass to kilograms.
    pub fn to_kg(&self) -> f64 {
        self.0 * SOLAR_MASS_KG
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Mass (commutative multiplication)
impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}
