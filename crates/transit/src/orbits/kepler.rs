//! Kepler's equation and anomaly conversions.

use std::f64::consts::{PI, TAU};

use units::{Length, Mass, Time, SOLAR_MASS_KG};

/// Nominal solar gravitational parameter GM_sun in m^3 / s^2 (IAU 2015).
pub const GM_SUN: f64 = 1.327_124_4e20;

const MAX_NEWTON_ITER: usize = 50;
const TOLERANCE: f64 = 1e-13;

/// Solve Kepler's equation `M = E - e sin E` for the eccentric anomaly.
///
/// Newton iteration with a bisection safeguard: the root is bracketed in
/// `[|M|, |M| + e]` after range reduction, so any Newton step that leaves
/// the bracket falls back to its midpoint. Converges for all `e` in `[0, 1)`.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    if eccentricity == 0.0 {
        return mean_anomaly;
    }

    // Reduce to [-pi, pi] and solve on the positive half by symmetry.
    let cycles = (mean_anomaly / TAU).round();
    let m_wrapped = mean_anomaly - TAU * cycles;
    let m = m_wrapped.abs();

    let mut lo = m;
    let mut hi = (m + eccentricity).min(PI);
    let mut ecc_anomaly = m + eccentricity * m.sin();

    for _ in 0..MAX_NEWTON_ITER {
        let f = ecc_anomaly - eccentricity * ecc_anomaly.sin() - m;
        let df = 1.0 - eccentricity * ecc_anomaly.cos();

        if f > 0.0 {
            hi = ecc_anomaly;
        } else {
            lo = ecc_anomaly;
        }

        let step = f / df;
        let next = ecc_anomaly - step;
        ecc_anomaly = if next > lo && next < hi {
            next
        } else {
            0.5 * (lo + hi)
        };

        if step.abs() < TOLERANCE {
            break;
        }
    }

    let signed = if m_wrapped < 0.0 { -ecc_anomaly } else { ecc_anomaly };
    signed + TAU * cycles
}

/// True anomaly from the eccentric anomaly.
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin())
        .atan2((1.0 - eccentricity).sqrt() * half.cos())
}

/// Eccentric anomaly from the true anomaly; the inverse of [`true_anomaly`].
pub fn eccentric_from_true(true_anomaly: f64, eccentricity: f64) -> f64 {
    let half = true_anomaly / 2.0;
    2.0 * ((1.0 - eccentricity).sqrt() * half.sin())
        .atan2((1.0 + eccentricity).sqrt() * half.cos())
}

/// Orbital period from Kepler's third law.
pub fn period_from_semi_major(semi_major_axis: Length, total_mass: Mass) -> Time {
    let a_m = semi_major_axis.to_meters();
    let gm = GM_SUN * total_mass.to_solar_masses();
    let period_sec = TAU * (a_m.powi(3) / gm).sqrt();
    Time::from_seconds(period_sec)
}

/// Semi-major axis from Kepler's third law.
pub fn semi_major_from_period(period: Time, total_mass: Mass) -> Length {
    let gm = GM_SUN * total_mass.to_solar_masses();
    let mean_motion = TAU / period.to_seconds();
    Length::from_meters((gm / (mean_motion * mean_motion)).cbrt())
}

/// Newtonian gravitational constant in m^3 / (kg s^2), for expressions that
/// need masses rather than gravitational parameters.
pub(crate) const G_SI: f64 = GM_SUN / SOLAR_MASS_KG;
