//! Limb-darkened transit light curves.

use thiserror::Error;
use units::Time;

use crate::orbits::TransitOrbit;

mod gauss;
mod occultation;


/// Transit light curve model for a star with polynomial limb darkening,
/// occulted by an opaque spherical companion.
///
/// The limb darkening law is `I(mu) = 1 - sum_n u_n (1 - mu)^n` where `mu`
/// is the cosine of the angle between the line of sight and the surface
/// normal; `u = []` gives a uniform disk and two coefficients give the
/// familiar quadratic law. Fluxes are relative to the unocculted star: zero
/// out of transit and negative during transit.
///
/// ```
/// use transit::StarryLightCurve;
///
/// let lc = StarryLightCurve::quadratic(0.4, 0.26)?;
/// let depth = lc.relative_flux(0.0, 0.1);
/// assert!(depth < -0.01 && depth > -0.02);
/// # Ok::<(), transit::LightCurveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StarryLightCurve {
    u: Vec<f64>,
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

#[derive(Debug, Error)]
pub enum LightCurveError {
    #[error("limb darkening coefficient {index} is not finite")]
    NonFiniteCoefficient { index: usize },

    #[error("intensity profile dips negative near mu = {mu:.3}")]
    NegativeIntensity { mu: f64 },
}

impl StarryLightCurve {
    /// Quadrature order for the annulus integral; enough for full double
    /// precision on non-grazing geometries.
    const QUADRATURE_ORDER: usize = 128;

    /// Build a light curve model from polynomial limb darkening
    /// coefficients, lowest order first.
    ///
    /// The profile is validated on a dense grid: every coefficient must be
    /// finite and the implied intensity must be non-negative across the
    /// disk.
    pub fn new(u: Vec<f64>) -> Result<Self, LightCurveError> {
        for (index, coeff) in u.iter().enumerate() {
            if !coeff.is_finite() {
                return Err(LightCurveError::NonFiniteCoefficient { index });
            }
        }
        for i in 0..=100 {
            let mu = i as f64 / 100.0;
            if occultation::intensity(&u, mu) < 0.0 {
                return Err(LightCurveError::NegativeIntensity { mu });
            }
        }

        let (nodes, weights) = gauss::gauss_legendre(Self::QUADRATURE_ORDER);
        Ok(Self { u, nodes, weights })
    }

    /// A star with no limb darkening.
    pub fn uniform() -> Self {
        let (nodes, weights) = gauss::gauss_legendre(Self::QUADRATURE_ORDER);
        Self { u: Vec::new(), nodes, weights }
    }

    /// The quadratic law `I(mu) = 1 - u1 (1 - mu) - u2 (1 - mu)^2`.
    pub fn quadratic(u1: f64, u2: f64) -> Result<Self, LightCurveError> {
        Self::new(vec![u1, u2])
    }

    /// Limb darkening coefficients, lowest order first.
    pub fn coefficients(&self) -> &[f64] {
        &self.u
    }

    /// Surface intensity at cosine-angle `mu`, normalized to one at disk
    /// center.
    pub fn intensity(&self, mu: f64) -> f64 {
        occultation::intensity(&self.u, mu)
    }

    /// Relative flux when a companion of radius ratio `ror` sits at
    /// projected separation `b` (both in stellar radii): zero when clear of
    /// the disk, `-1` when the star is fully covered.
    pub fn relative_flux(&self, b: f64, ror: f64) -> f64 {
        -occultation::occulted_fraction(&self.u, b, ror, &self.nodes, &self.weights)
    }

    /// Evaluate the transit light curve of `orbit` at each timestamp.
    ///
    /// Times where the companion sits behind the sky plane contribute zero;
    /// secondary eclipses are not modeled.
    pub fn light_curve<O: TransitOrbit>(&self, orbit: &O, ror: f64, times: &[Time]) -> Vec<f64> {
        times
            .iter()
            .map(|&t| {
                let [x, y, z] = orbit.position(t);
                if z > 0.0 {
                    self.relative_flux(x.hypot(y), ror)
                } else {
                    0.0
                }
            })
            .collect()
    }
}
