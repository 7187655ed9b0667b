use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub(crate) const DAYS_PER_YEAR: f64 = 365.25;
pub(crate) const HOURS_PER_DAY: f64 = 24.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// A physical time quantity using f64 precision.
///
/// The `Time` struct represents time with days as the base unit. Transit
/// ephemerides, orbital periods, and radial-velocity epochs are all quoted
/// in days, so keeping the base unit there avoids conversion noise in the
/// hot paths. Durations (ingress, total transit length) convert to hours.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let period = Time::from_days(3.52);
/// let duration = Time::from_hours(2.9);
///
/// assert!(duration.to_days() < period.to_days());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Days

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Time` from a value in days.
    pub fn from_days(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a value in Julian years (365.25 days).
    pub fn from_years(value: f64) -> Self {
        Self(value * DAYS_PER_YEAR)
    }

    /// Creates a new `Time` from a value in hours.
    pub fn from_hours(value: f64) -> Self {
        Self(value / HOURS_PER_DAY)
    }

    /// Creates a new `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self(value / SECONDS_PER_DAY)
    }

    /// Returns the time in days.
    pub fn to_days(&self) -> f64 {
        self.0
    }

    /// Returns the time in Julian years.
    pub fn to_years(&self) -> f64 {
        self.0 / DAYS_PER_YEAR
    }

    /// Converts the time to hours.
    pub fn to_hours(&self) -> f64 {
        self.0 * HOURS_PER_DAY
    }

    /// Converts the time to seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0 * SECONDS_PER_DAY
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Time (commutative multiplication)
impl Mul<Time> for f64 {
    type Output = Time;

    fn mul(self, rhs: Time) -> Time {
        rhs * self
    }
}
