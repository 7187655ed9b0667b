//! Scalable Gaussian process regression for irregularly sampled light
//! curves and radial velocity series, using the celerite kernel family.

use thiserror::Error;

pub mod terms;

mod solver;

#[cfg(test)]
mod terms_test;

pub use terms::{ComplexTerm, Matern32Term, RealTerm, SHOTerm, Term, TermSum};

use solver::CeleriteFactor;

#[derive(Debug, Error)]
pub enum GpError {
    #[error("invalid {name} parameters")]
    InvalidTerm { name: &'static str },

    #[error("input times must not be empty")]
    Empty,

    #[error("input times must be strictly increasing (violated at index {index})")]
    UnsortedTimes { index: usize },

    #[error("expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("covariance is not positive definite (pivot {index})")]
    NotPositiveDefinite { index: usize },
}

/// A Gaussian process with a celerite kernel, conditioned on fixed
/// observation times and per-point measurement uncertainties.
///
/// The covariance is factored once at construction; likelihood evaluations
/// and solves against different data vectors then cost O(N J^2) each.
///
/// ```
/// use transit::gp::{GaussianProcess, SHOTerm};
///
/// let kernel = SHOTerm::new(1.0, 2.5, 4.0)?;
/// let t = [0.0, 0.7, 1.9, 2.2, 3.6];
/// let yerr = [0.1; 5];
/// let gp = GaussianProcess::new(kernel, &t, &yerr)?;
/// let ll = gp.log_likelihood(&[0.3, -0.1, 0.2, 0.5, -0.4])?;
/// assert!(ll.is_finite());
/// # Ok::<(), transit::gp::GpError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GaussianProcess {
    kernel: TermSum,
    t: Vec<f64>,
    factor: CeleriteFactor,
}

impl GaussianProcess {
    /// Condition `kernel` on observation times `t` (strictly increasing)
    /// with measurement uncertainties `yerr`.
    pub fn new(
        kernel: impl Into<TermSum>,
        t: &[f64],
        yerr: &[f64],
    ) -> Result<Self, GpError> {
        let kernel = kernel.into();
        if t.is_empty() {
            return Err(GpError::Empty);
        }
        if yerr.len() != t.len() {
            return Err(GpError::LengthMismatch { expected: t.len(), actual: yerr.len() });
        }
        for (index, pair) in t.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(GpError::UnsortedTimes { index: index + 1 });
            }
        }

        let diag: Vec<f64> = yerr.iter().map(|e| e * e).collect();
        let factor = CeleriteFactor::new(&kernel.coefficients(), t, &diag)?;

        Ok(Self { kernel, t: t.to_vec(), factor })
    }

    pub fn kernel(&self) -> &TermSum {
        &self.kernel
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Log determinant of the covariance matrix.
    pub fn log_determinant(&self) -> f64 {
        self.factor.log_determinant()
    }

    /// Apply the inverse covariance: returns `K^-1 y`.
    pub fn apply_inverse(&self, y: &[f64]) -> Result<Vec<f64>, GpError> {
        self.check_len(y)?;
        Ok(self.factor.solve(y))
    }

    /// Marginalized Gaussian log likelihood of the residual vector `y`.
    pub fn log_likelihood(&self, y: &[f64]) -> Result<f64, GpError> {
        self.check_len(y)?;
        let alpha = self.factor.solve(y);
        let chi2: f64 = y.iter().zip(&alpha).map(|(yi, ai)| yi * ai).sum();
        let n = self.t.len() as f64;
        Ok(-0.5 * (chi2 + self.log_determinant() + n * (2.0 * std::f64::consts::PI).ln()))
    }

    /// Posterior mean of the process at `t_pred`, conditioned on `y`.
    pub fn predict(&self, y: &[f64], t_pred: &[f64]) -> Result<Vec<f64>, GpError> {
        self.check_len(y)?;
        let alpha = self.factor.solve(y);
        let mean = t_pred
            .iter()
            .map(|&tp| {
                self.t
                    .iter()
                    .zip(&alpha)
                    .map(|(&tn, an)| self.kernel.value(tp - tn) * an)
                    .sum()
            })
            .collect();
        Ok(mean)
    }

    fn check_len(&self, y: &[f64]) -> Result<(), GpError> {
        if y.len() != self.t.len() {
            return Err(GpError::LengthMismatch { expected: self.t.len(), actual: y.len() });
        }
        Ok(())
    }
}
