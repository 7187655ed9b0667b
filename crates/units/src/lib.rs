//! Typed physical quantities for transit modeling.
//!
//! Each quantity is an `f64` newtype with a base unit chosen for the transit
//! domain: days for time, AU for length, solar masses for mass, and m/s for
//! velocity. Conversions go through IAU nominal constants.

pub mod length;
pub mod mass;
pub mod time;
pub mod velocity;

#[cfg(test)]
mod velocity_test;

pub use length::{Length, AU_TO_M, SOLAR_RADIUS_M};
pub use mass::{Mass, EARTH_MASS_KG, JUPITER_MASS_KG, SOLAR_MASS_KG};
pub use time::{Time, SECONDS_PER_DAY};
pub use velocity::Velocity;
