use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};
use units::{Length, Mass, Time, Velocity};

use super::kepler::{
    eccentric_from_true, period_from_semi_major, semi_major_from_period, solve_kepler,
    true_anomaly, G_SI,
};
use super::{OrbitError, TransitOrbit};

/// A Keplerian orbit anchored on a reference transit time.
///
/// The orbit is parameterized the way transit surveys report systems: a
/// period or semi-major axis (the other follows from Kepler's third law),
/// a mid-transit epoch, and either an inclination or an impact parameter.
/// Built through [`KeplerianOrbitBuilder`].
#[derive(Debug, Clone)]
pub struct KeplerianOrbit {
    period: Time,
    semi_major_axis: Length,
    t0: Time,
    eccentricity: f64,
    omega: f64,
    incl: f64,
    m_star: Mass,
    r_star: Length,
    m_planet: Mass,
    // Derived at build time.
    a_over_r: f64,
    mean_motion: f64,
    m_transit: f64,
}

impl KeplerianOrbit {
    pub fn builder() -> KeplerianOrbitBuilder {
        KeplerianOrbitBuilder::default()
    }

    pub fn period(&self) -> Time {
        self.period
    }

    pub fn semi_major_axis(&self) -> Length {
        self.semi_major_axis
    }

    pub fn t0(&self) -> Time {
        self.t0
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Argument of periastron in radians.
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Inclination in radians; `pi/2` is edge-on.
    pub fn inclination(&self) -> f64 {
        self.incl
    }

    pub fn stellar_mass(&self) -> Mass {
        self.m_star
    }

    pub fn stellar_radius(&self) -> Length {
        self.r_star
    }

    pub fn planet_mass(&self) -> Mass {
        self.m_planet
    }

    /// Scaled semi-major axis a/R*.
    pub fn a_over_r_star(&self) -> f64 {
        self.a_over_r
    }

    /// Impact parameter of the transit chord in stellar radii.
    pub fn impact_parameter(&self) -> f64 {
        let ecc_factor =
            (1.0 - self.eccentricity * self.eccentricity) / (1.0 + self.eccentricity * self.omega.sin());
        self.a_over_r * self.incl.cos() * ecc_factor
    }

    /// Total transit duration (first to fourth contact) for a companion of
    /// radius ratio `ror`, or `None` when the geometry never transits.
    pub fn transit_duration(&self, ror: f64) -> Option<Time> {
        let b = self.impact_parameter();
        let limb = (1.0 + ror) * (1.0 + ror) - b * b;
        if limb <= 0.0 {
            return None;
        }
        let sin_i = self.incl.sin();
        let x = (limb.sqrt() / (self.a_over_r * sin_i)).min(1.0);
        let ecc_factor = (1.0 - self.eccentricity * self.eccentricity).sqrt()
            / (1.0 + self.eccentricity * self.omega.sin());
        Some(self.period / PI * x.asin() * ecc_factor)
    }

    /// Radial velocity of the host star at time `t`. Positive means the star
    /// recedes from the observer.
    pub fn radial_velocity(&self, t: Time) -> Velocity {
        let nu = self.true_anomaly_at(t);
        let k = self.semi_amplitude().to_meters_per_sec();
        let v = k * ((self.omega + nu).cos() + self.eccentricity * self.omega.cos());
        Velocity::from_meters_per_sec(v)
    }

    /// Radial velocity semi-amplitude K of the stellar reflex motion.
    pub fn semi_amplitude(&self) -> Velocity {
        let period_sec = self.period.to_seconds();
        let m_total_kg = (self.m_star + self.m_planet).to_kg();
        let k = (TAU * G_SI / period_sec).cbrt() * self.m_planet.to_kg() * self.incl.sin()
            / (m_total_kg.powf(2.0 / 3.0)
                * (1.0 - self.eccentricity * self.eccentricity).sqrt());
        Velocity::from_meters_per_sec(k)
    }

    /// True anomaly at time `t`.
    pub fn true_anomaly_at(&self, t: Time) -> f64 {
        let m = self.mean_motion * (t - self.t0).to_days() + self.m_transit;
        let ecc_anomaly = solve_kepler(m, self.eccentricity);
        true_anomaly(ecc_anomaly, self.eccentricity)
    }
}

impl TransitOrbit for KeplerianOrbit {
    fn position(&self, t: Time) -> [f64; 3] {
        let m = self.mean_motion * (t - self.t0).to_days() + self.m_transit;
        let ecc_anomaly = solve_kepler(m, self.eccentricity);
        let nu = true_anomaly(ecc_anomaly, self.eccentricity);

        let r = self.a_over_r * (1.0 - self.eccentricity * ecc_anomaly.cos());
        let (sin_arg, cos_arg) = (self.omega + nu).sin_cos();
        let (sin_i, cos_i) = self.incl.sin_cos();

        [r * cos_arg, r * sin_arg * cos_i, r * sin_arg * sin_i]
    }
}

/// Builder for [`KeplerianOrbit`].
///
/// Exactly one of `period` or `semi_major_axis` must be set; the other is
/// derived from Kepler's third law using the stellar and planetary masses.
/// At most one of `inclination` or `impact_parameter` may be set; with
/// neither the orbit is edge-on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeplerianOrbitBuilder {
    period: Option<Time>,
    semi_major_axis: Option<Length>,
    t0: Time,
    eccentricity: f64,
    omega: f64,
    incl: Option<f64>,
    impact_param: Option<f64>,
    m_star: Mass,
    r_star: Length,
    m_planet: Mass,
}

impl Default for KeplerianOrbitBuilder {
    fn default() -> Self {
        Self {
            period: None,
            semi_major_axis: None,
            t0: Time::zero(),
            eccentricity: 0.0,
            // Conventional choice for circular orbits: periastron at
            // inferior conjunction.
            omega: FRAC_PI_2,
            incl: None,
            impact_param: None,
            m_star: Mass::from_solar_masses(1.0),
            r_star: Length::from_solar_radii(1.0),
            m_planet: Mass::zero(),
        }
    }
}

impl KeplerianOrbitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn period(mut self, period: Time) -> Self {
        self.period = Some(period);
        self
    }

    pub fn semi_major_axis(mut self, a: Length) -> Self {
        self.semi_major_axis = Some(a);
        self
    }

    pub fn t0(mut self, t0: Time) -> Self {
        self.t0 = t0;
        self
    }

    pub fn eccentricity(mut self, ecc: f64) -> Self {
        self.eccentricity = ecc;
        self
    }

    /// Argument of periastron in radians.
    pub fn omega(mut self, omega: f64) -> Self {
        self.omega = omega;
        self
    }

    /// Inclination in radians.
    pub fn inclination(mut self, incl: f64) -> Self {
        self.incl = Some(incl);
        self
    }

    /// Impact parameter of the transit chord in stellar radii.
    pub fn impact_parameter(mut self, b: f64) -> Self {
        self.impact_param = Some(b);
        self
    }

    pub fn star(mut self, mass: Mass, radius: Length) -> Self {
        self.m_star = mass;
        self.r_star = radius;
        self
    }

    pub fn planet_mass(mut self, mass: Mass) -> Self {
        self.m_planet = mass;
        self
    }

    pub fn build(self) -> Result<KeplerianOrbit, OrbitError> {
        let ecc = self.eccentricity;
        if !(0.0..1.0).contains(&ecc) {
            return Err(OrbitError::Eccentricity(ecc));
        }
        if self.m_star.to_solar_masses() <= 0.0 || self.r_star.to_au() <= 0.0 {
            return Err(OrbitError::NonPhysicalStar);
        }

        let total_mass = self.m_star + self.m_planet;
        let (period, semi_major_axis) = match (self.period, self.semi_major_axis) {
            (Some(p), None) => {
                if p.to_days() <= 0.0 {
                    return Err(OrbitError::NonPositivePeriod(p.to_days()));
                }
                (p, semi_major_from_period(p, total_mass))
            }
            (None, Some(a)) => {
                if a.to_au() <= 0.0 {
                    return Err(OrbitError::NonPositiveSemiMajorAxis(a.to_au()));
                }
                (period_from_semi_major(a, total_mass), a)
            }
            _ => return Err(OrbitError::AmbiguousSize),
        };

        let a_over_r = semi_major_axis / self.r_star;
        if a_over_r <= 1.0 {
            return Err(OrbitError::OrbitInsideStar(a_over_r));
        }

        let ecc_factor = (1.0 - ecc * ecc) / (1.0 + ecc * self.omega.sin());
        let incl = match (self.incl, self.impact_param) {
            (Some(_), Some(_)) => return Err(OrbitError::AmbiguousInclination),
            (Some(incl), None) => incl,
            (None, Some(b)) => {
                let cos_i = b / (a_over_r * ecc_factor);
                if !(-1.0..=1.0).contains(&cos_i) {
                    return Err(OrbitError::UnreachableImpactParameter { b, a_over_r });
                }
                cos_i.acos()
            }
            (None, None) => FRAC_PI_2,
        };

        // Anchor the mean anomaly so that t0 is the time of inferior
        // conjunction, where the transit is centered.
        let nu_transit = FRAC_PI_2 - self.omega;
        let ecc_transit = eccentric_from_true(nu_transit, ecc);
        let m_transit = ecc_transit - ecc * ecc_transit.sin();

        Ok(KeplerianOrbit {
            period,
            semi_major_axis,
            t0: self.t0,
            eccentricity: ecc,
            omega: self.omega,
            incl,
            m_star: self.m_star,
            r_star: self.r_star,
            m_planet: self.m_planet,
            a_over_r,
            mean_motion: TAU / period.to_days(),
            m_transit,
        })
    }
}
