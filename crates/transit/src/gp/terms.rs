//! Covariance kernels in celerite form.
//!
//! Every kernel is a mixture of exponentials,
//! `k(tau) = sum_j a_j exp(-c_j tau)
//!         + sum_j exp(-c_j tau) (a_j cos(d_j tau) + b_j sin(d_j tau))`,
//! which is what makes the O(N J^2) factorization in the solver possible.

use std::f64::consts::PI;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::GpError;

/// One real exponential component `a exp(-c tau)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealCoeff {
    pub a: f64,
    pub c: f64,
}

/// One damped oscillator component
/// `exp(-c tau) (a cos(d tau) + b sin(d tau))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexCoeff {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// The celerite mixture backing a kernel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub real: Vec<RealCoeff>,
    pub complex: Vec<ComplexCoeff>,
}

impl Coefficients {
    /// Number of columns in the semiseparable representation.
    pub fn width(&self) -> usize {
        self.real.len() + 2 * self.complex.len()
    }

    /// Kernel value at zero lag.
    pub fn diag(&self) -> f64 {
        let real: f64 = self.real.iter().map(|r| r.a).sum();
        let complex: f64 = self.complex.iter().map(|c| c.a).sum();
        real + complex
    }
}

/// A stationary kernel expressible as a celerite mixture.
pub trait Term {
    fn coefficients(&self) -> Coefficients;

    /// Covariance at lag `tau`.
    fn value(&self, tau: f64) -> f64 {
        let tau = tau.abs();
        let coeffs = self.coefficients();
        let mut k = 0.0;
        for r in &coeffs.real {
            k += r.a * (-r.c * tau).exp();
        }
        for c in &coeffs.complex {
            k += (-c.c * tau).exp() * (c.a * (c.d * tau).cos() + c.b * (c.d * tau).sin());
        }
        k
    }

    /// One-sided power spectral density at angular frequency `omega`.
    fn psd(&self, omega: f64) -> f64 {
        let w2 = omega * omega;
        let coeffs = self.coefficients();
        let mut s = 0.0;
        for r in &coeffs.real {
            s += r.a * r.c / (r.c * r.c + w2);
        }
        for c in &coeffs.complex {
            let c2d2 = c.c * c.c + c.d * c.d;
            let num = (c.a * c.c + c.b * c.d) * c2d2 + (c.a * c.c - c.b * c.d) * w2;
            let den = w2 * w2 + 2.0 * (c.c * c.c - c.d * c.d) * w2 + c2d2 * c2d2;
            s += num / den;
        }
        (2.0 / PI).sqrt() * s
    }
}

/// A single real exponential kernel `a exp(-c tau)`.
///
/// Negative amplitudes are allowed so terms can cancel inside a sum; a
/// standalone negative term simply fails to factorize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealTerm {
    a: f64,
    c: f64,
}

impl RealTerm {
    pub fn new(a: f64, c: f64) -> Result<Self, GpError> {
        if !a.is_finite() || !c.is_finite() || c <= 0.0 {
            return Err(GpError::InvalidTerm { name: "RealTerm" });
        }
        Ok(Self { a, c })
    }
}

impl Term for RealTerm {
    fn coefficients(&self) -> Coefficients {
        Coefficients {
            real: vec![RealCoeff { a: self.a, c: self.c }],
            complex: Vec::new(),
        }
    }
}

/// A damped oscillator kernel with explicit celerite coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexTerm {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl ComplexTerm {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self, GpError> {
        let finite = a.is_finite() && b.is_finite() && c.is_finite() && d.is_finite();
        if !finite || c <= 0.0 {
            return Err(GpError::InvalidTerm { name: "ComplexTerm" });
        }
        Ok(Self { a, b, c, d })
    }
}

impl Term for ComplexTerm {
    fn coefficients(&self) -> Coefficients {
        Coefficients {
            real: Vec::new(),
            complex: vec![ComplexCoeff { a: self.a, b: self.b, c: self.c, d: self.d }],
        }
    }
}

/// A stochastically driven damped harmonic oscillator.
///
/// Parameterized by the power `s0` at peak, the undamped angular frequency
/// `w0`, and the quality factor `q`. The PSD is
/// `sqrt(2/pi) s0 w0^4 / ((w^2 - w0^2)^2 + w0^2 w^2 / q^2)`, a flexible
/// model for granulation (`q ~ 1/sqrt(2)`) and oscillation modes
/// (`q >> 1`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SHOTerm {
    s0: f64,
    w0: f64,
    q: f64,
}

impl SHOTerm {
    pub fn new(s0: f64, w0: f64, q: f64) -> Result<Self, GpError> {
        if !(s0 > 0.0) || !(w0 > 0.0) || !(q > 0.0) {
            return Err(GpError::InvalidTerm { name: "SHOTerm" });
        }
        Ok(Self { s0, w0, q })
    }

    pub fn s0(&self) -> f64 {
        self.s0
    }

    pub fn w0(&self) -> f64 {
        self.w0
    }

    pub fn q(&self) -> f64 {
        self.q
    }
}

impl Term for SHOTerm {
    fn coefficients(&self) -> Coefficients {
        // Critical damping separates two analytic branches; nudge off the
        // boundary to keep both well conditioned.
        let q = if (self.q - 0.5).abs() < 1e-6 { 0.5 + 1e-6 } else { self.q };
        let amp = self.s0 * self.w0 * q;
        let c = self.w0 / (2.0 * q);

        if q > 0.5 {
            // Underdamped: one oscillating component.
            let eta = (1.0 - 1.0 / (4.0 * q * q)).sqrt();
            Coefficients {
                real: Vec::new(),
                complex: vec![ComplexCoeff {
                    a: amp,
                    b: amp / (2.0 * eta * q),
                    c,
                    d: eta * self.w0,
                }],
            }
        } else {
            // Overdamped: splits into two real exponentials.
            let eta = (1.0 / (4.0 * q * q) - 1.0).sqrt();
            let shift = eta * self.w0;
            let spread = 1.0 / (2.0 * eta * q);
            Coefficients {
                real: vec![
                    RealCoeff { a: 0.5 * amp * (1.0 + spread), c: c - shift },
                    RealCoeff { a: 0.5 * amp * (1.0 - spread), c: c + shift },
                ],
                complex: Vec::new(),
            }
        }
    }
}

/// A Matern-3/2 kernel `s^2 (1 + sqrt(3) tau / rho) exp(-sqrt(3) tau / rho)`
/// in the standard small-frequency celerite approximation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matern32Term {
    sigma: f64,
    rho: f64,
    eps: f64,
}

impl Matern32Term {
    const DEFAULT_EPS: f64 = 0.01;

    pub fn new(sigma: f64, rho: f64) -> Result<Self, GpError> {
        Self::with_eps(sigma, rho, Self::DEFAULT_EPS)
    }

    /// Control the approximation frequency; the kernel error is O(eps^2).
    pub fn with_eps(sigma: f64, rho: f64, eps: f64) -> Result<Self, GpError> {
        if !(sigma > 0.0) || !(rho > 0.0) || !(eps > 0.0) {
            return Err(GpError::InvalidTerm { name: "Matern32Term" });
        }
        Ok(Self { sigma, rho, eps })
    }
}

impl Term for Matern32Term {
    fn coefficients(&self) -> Coefficients {
        let f0 = 3.0_f64.sqrt() / self.rho;
        let variance = self.sigma * self.sigma;
        Coefficients {
            real: Vec::new(),
            complex: vec![ComplexCoeff {
                a: variance,
                b: variance * f0 / self.eps,
                c: f0,
                d: self.eps,
            }],
        }
    }
}

/// A sum of celerite kernels, built with `+` or [`TermSum::add_term`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermSum {
    coefficients: Coefficients,
}

impl TermSum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_term<T: Term>(mut self, term: &T) -> Self {
        let mut coeffs = term.coefficients();
        self.coefficients.real.append(&mut coeffs.real);
        self.coefficients.complex.append(&mut coeffs.complex);
        self
    }

    /// Number of component kernels (complex components count once).
    pub fn n_components(&self) -> usize {
        self.coefficients.real.len() + self.coefficients.complex.len()
    }
}

impl Term for TermSum {
    fn coefficients(&self) -> Coefficients {
        self.coefficients.clone()
    }
}

impl From<RealTerm> for TermSum {
    fn from(term: RealTerm) -> Self {
        TermSum::new().add_term(&term)
    }
}

impl From<ComplexTerm> for TermSum {
    fn from(term: ComplexTerm) -> Self {
        TermSum::new().add_term(&term)
    }
}

impl From<SHOTerm> for TermSum {
    fn from(term: SHOTerm) -> Self {
        TermSum::new().add_term(&term)
    }
}

impl From<Matern32Term> for TermSum {
    fn from(term: Matern32Term) -> Self {
        TermSum::new().add_term(&term)
    }
}

impl<R: Into<TermSum>> Add<R> for TermSum {
    type Output = TermSum;

    fn add(mut self, rhs: R) -> TermSum {
        let mut rhs = rhs.into();
        self.coefficients.real.append(&mut rhs.coefficients.real);
        self.coefficients.complex.append(&mut rhs.coefficients.complex);
        self
    }
}

impl<R: Into<TermSum>> Add<R> for RealTerm {
    type Output = TermSum;

    fn add(self, rhs: R) -> TermSum {
        TermSum::from(self) + rhs
    }
}

impl<R: Into<TermSum>> Add<R> for ComplexTerm {
    type Output = TermSum;

    fn add(self, rhs: R) -> TermSum {
        TermSum::from(self) + rhs
    }
}

impl<R: Into<TermSum>> Add<R> for SHOTerm {
    type Output = TermSum;

    fn add(self, rhs: R) -> TermSum {
        TermSum::from(self) + rhs
    }
}

impl<R: Into<TermSum>> Add<R> for Matern32Term {
    type Output = TermSum;

    fn add(self, rhs: R) -> TermSum {
        TermSum::from(self) + rhs
    }
}
