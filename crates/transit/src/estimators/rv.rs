//! Radial velocity amplitude and companion mass estimators.

use std::f64::consts::TAU;

use nalgebra::{Matrix3, Vector3};
use units::{Mass, Time, Velocity};

use super::EstimatorError;
use crate::orbits::kepler::G_SI;

/// Fit a circular-orbit sinusoid at a known period and return its
/// semi-amplitude.
///
/// The model is `A cos(w t) + B sin(w t) + C` with `w = 2 pi / P`,
/// solved by least squares, and `K = sqrt(A^2 + B^2)`. `times` are in
/// days and `rv` in m/s. The period usually comes from a periodogram
/// peak, so only the amplitude and phase are left to the fit.
pub fn estimate_semi_amplitude(
    period: Time,
    times: &[f64],
    rv: &[f64],
) -> Result<Velocity, EstimatorError> {
    if times.is_empty() {
        return Err(EstimatorError::Empty);
    }
    if times.len() != rv.len() {
        return Err(EstimatorError::LengthMismatch { left: times.len(), right: rv.len() });
    }
    if times.len() < 3 {
        return Err(EstimatorError::TooShort { required: 3, actual: times.len() });
    }
    let p_days = period.to_days();
    if !(p_days > 0.0) {
        return Err(EstimatorError::NonPositivePeriod(p_days));
    }

    let omega = TAU / p_days;
    let n = times.len() as f64;

    // Normal equations for the design (cos wt, sin wt, 1), averaged so
    // the determinant test is independent of the sample size.
    let mut m = Matrix3::zeros();
    let mut b = Vector3::zeros();
    for (&t, &v) in times.iter().zip(rv) {
        let g = Vector3::new((omega * t).cos(), (omega * t).sin(), 1.0);
        m += g * g.transpose() / n;
        b += g * (v / n);
    }

    if m.determinant().abs() < 1e-10 {
        return Err(EstimatorError::DegenerateFit { period: p_days });
    }
    let coeffs = m
        .lu()
        .solve(&b)
        .ok_or(EstimatorError::DegenerateFit { period: p_days })?;

    Ok(Velocity::from_meters_per_sec(coeffs[0].hypot(coeffs[1])))
}

/// Convert a semi-amplitude into the minimum companion mass `Mp sin i`.
///
/// Uses the circular-orbit relation of Lovis & Fischer (2010),
/// `Mp sin i = K (P M*^2 / (2 pi G))^(1/3)`, valid for companions much
/// lighter than the star.
pub fn estimate_minimum_mass(
    period: Time,
    semi_amplitude: Velocity,
    m_star: Mass,
) -> Result<Mass, EstimatorError> {
    let p = period.to_seconds();
    if !(p > 0.0) {
        return Err(EstimatorError::NonPositivePeriod(period.to_days()));
    }
    let ms = m_star.to_kg();
    if !(ms > 0.0) {
        return Err(EstimatorError::NonPositiveMass(m_star.to_solar_masses()));
    }
    let k = semi_amplitude.to_meters_per_sec();
    if !k.is_finite() || k < 0.0 {
        return Err(EstimatorError::NegativeAmplitude(k));
    }

    let mp_sini = k * (p * ms * ms / (TAU * G_SI)).cbrt();
    Ok(Mass::from_kg(mp_sini))
}
