use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use super::{Distribution, DistributionError};
use crate::utils::special::ln_beta;

/// Uniform density over `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Uniform {
    lower: f64,
    upper: f64,
}

impl Uniform {
    pub fn new(lower: f64, upper: f64) -> Result<Self, DistributionError> {
        if !lower.is_finite() {
            return Err(DistributionError::NonFinite { name: "lower", value: lower });
        }
        if !upper.is_finite() {
            return Err(DistributionError::NonFinite { name: "upper", value: upper });
        }
        if upper <= lower {
            return Err(DistributionError::EmptySupport { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }
}

impl Distribution for Uniform {
    fn log_prob(&self, x: f64) -> f64 {
        if x >= self.lower && x < self.upper {
            -(self.upper - self.lower).ln()
        } else {
            f64::NEG_INFINITY
        }
    }

    fn sample(&self, rng: &mut ChaChaRng) -> f64 {
        self.lower + (self.upper - self.lower) * rng.random::<f64>()
    }
}

/// Gaussian density, sampled with the Box-Muller transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    pub fn new(mu: f64, sigma: f64) -> Result<Self, DistributionError> {
        if !mu.is_finite() {
            return Err(DistributionError::NonFinite { name: "mu", value: mu });
        }
        if !(sigma > 0.0) {
            return Err(DistributionError::NonPositive { name: "sigma", value: sigma });
        }
        Ok(Self { mu, sigma })
    }

    pub fn standard() -> Self {
        Self { mu: 0.0, sigma: 1.0 }
    }
}

impl Distribution for Normal {
    fn log_prob(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.sigma;
        -0.5 * z * z - self.sigma.ln() - 0.5 * (2.0 * PI).ln()
    }

    fn sample(&self, rng: &mut ChaChaRng) -> f64 {
        self.mu + self.sigma * standard_normal(rng)
    }
}

/// One standard normal draw via Box-Muller.
pub(crate) fn standard_normal(rng: &mut ChaChaRng) -> f64 {
    // 1 - u keeps the log argument in (0, 1].
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    (-2.0 * (1.0 - u1).ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Beta density on `(0, 1)`, sampled through two gamma deviates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Beta {
    alpha: f64,
    beta: f64,
}

impl Beta {
    pub fn new(alpha: f64, beta: f64) -> Result<Self, DistributionError> {
        if !(alpha > 0.0) {
            return Err(DistributionError::NonPositive { name: "alpha", value: alpha });
        }
        if !(beta > 0.0) {
            return Err(DistributionError::NonPositive { name: "beta", value: beta });
        }
        Ok(Self { alpha, beta })
    }

    pub(crate) fn new_unchecked(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Distribution for Beta {
    fn log_prob(&self, x: f64) -> f64 {
        if x <= 0.0 || x >= 1.0 {
            return f64::NEG_INFINITY;
        }
        (self.alpha - 1.0) * x.ln() + (self.beta - 1.0) * (1.0 - x).ln()
            - ln_beta(self.alpha, self.beta)
    }

    fn sample(&self, rng: &mut ChaChaRng) -> f64 {
        let x = sample_gamma(self.alpha, rng);
        let y = sample_gamma(self.beta, rng);
        x / (x + y)
    }
}

/// Gamma(shape, 1) deviate via Marsaglia & Tsang (2000).
fn sample_gamma(shape: f64, rng: &mut ChaChaRng) -> f64 {
    if shape < 1.0 {
        // Boost through Gamma(shape + 1) and scale by a uniform power.
        let u: f64 = rng.random();
        return sample_gamma(shape + 1.0, rng) * u.powf(1.0 / shape);
    }

    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();
    loop {
        let x = standard_normal(rng);
        let v = (1.0 + c * x).powi(3);
        if v <= 0.0 {
            continue;
        }
        let u: f64 = rng.random();
        if u < 1.0 - 0.0331 * x.powi(4) {
            return d * v;
        }
        if u.ln() < 0.5 * x * x + d * (1.0 - v + v.ln()) {
            return d * v;
        }
    }
}

/// Rayleigh density on `[0, inf)`, a common eccentricity prior for
/// multi-planet systems.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rayleigh {
    sigma: f64,
}

impl Rayleigh {
    pub fn new(sigma: f64) -> Result<Self, DistributionError> {
        if !(sigma > 0.0) {
            return Err(DistributionError::NonPositive { name: "sigma", value: sigma });
        }
        Ok(Self { sigma })
    }
}

impl Distribution for Rayleigh {
    fn log_prob(&self, x: f64) -> f64 {
        if x < 0.0 {
            return f64::NEG_INFINITY;
        }
        let s2 = self.sigma * self.sigma;
        x.ln() - s2.ln() - 0.5 * x * x / s2
    }

    fn sample(&self, rng: &mut ChaChaRng) -> f64 {
        let u: f64 = rng.random();
        self.sigma * (-2.0 * (1.0 - u).ln()).sqrt()
    }
}
