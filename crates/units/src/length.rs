use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Astronomical unit in meters (IAU 2012 exact definition)
pub const AU_TO_M: f64 = 1.495_978_707e11;

/// Solar radius in meters (IAU nominal, 6.957 × 10⁸ m)
pub const SOLAR_RADIUS_M: f64 = 6.957e8;

/// Jupiter equatorial radius in meters (IAU nominal, 7.1492 × 10⁷ m)
pub const JUPITER_RADIUS_M: f64 = 7.149_2e7;

/// Earth equatorial radius in meters (IAU nominal, 6.3781 × 10⁶ m)
pub const EARTH_RADIUS_M: f64 = 6.378_1e6;

/// Solar radius in AU: 1 R☉ ≈ 0.00465047 AU
pub const SOLAR_RADIUS_AU: f64 = SOLAR_RADIUS_M / AU_TO_M;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with astronomical units (AU)
/// as the base unit. Orbital separations are naturally quoted in AU while
/// transit geometry works in stellar radii, so conversions to and from solar
/// radii carry most of the traffic in this workspace.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let a = Length::from_au(0.05);        // a hot Jupiter orbit
/// let r_star = Length::from_solar_radii(0.9);
///
/// // Scaled semi-major axis a/R*, the quantity transit depths care about
/// let a_over_r = a / r_star;
/// assert!(a_over_r > 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_AU)
    }

    /// Creates a new `Length` from a value in Jupiter radii.
    pub fn from_jupiter_radii(value: f64) -> Self {
        Self(value * JUPITER_RADIUS_M / AU_TO_M)
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * EARTH_RADIUS_M / AU_TO_M)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value / AU_TO_M)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value * 1000.0 / AU_TO_M)
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0
    }

    /// Converts the length to solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.0 / SOLAR_RADIUS_AU
    }

    /// Converts the length to Jupiter radii.
    pub fn to_jupiter_radii(&self) -> f64 {
        self.0 * AU_TO_M / JUPITER_RADIUS_M
    }

    /// Converts the length to Earth radii.
    pub fn to_earth_radii(&self) -> f64 {
        self.0 * AU_TO_M / EARTH_RADIUS_M
    }

    /// Converts the length to meters.
    pub fn to_meters(&self) -> f64 {
        self.0 * AU_TO_M
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 * AU_TO_M / 1000.0
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
