//! Cholesky-style factorization of celerite covariance matrices.
//!
//! The covariance `K = diag + semiseparable(U, V, P)` factors as
//! `K = L D L^T` with `L` unit lower triangular and representable in the
//! same semiseparable form, so the factorization, solves, and the log
//! determinant all run in O(N J^2) for `J` mixture columns (Foreman-Mackey
//! et al. 2017).

use super::terms::Coefficients;
use super::GpError;

#[derive(Debug, Clone)]
pub(crate) struct CeleriteFactor {
    n: usize,
    width: usize,
    /// Diagonal of `D`.
    d: Vec<f64>,
    /// `W` rows (the `V` rows of `L`), N x width, row major.
    w: Vec<f64>,
    /// `U` rows, N x width, row major.
    u: Vec<f64>,
    /// Interval decay factors between consecutive points, (N-1) x width.
    p: Vec<f64>,
}

impl CeleriteFactor {
    /// Factor the covariance implied by `coeffs` over sorted input times
    /// with `diag` added to the diagonal (measurement variance plus the
    /// kernel value at zero lag).
    pub(crate) fn new(
        coeffs: &Coefficients,
        t: &[f64],
        diag: &[f64],
    ) -> Result<Self, GpError> {
        let n = t.len();
        let width = coeffs.width();
        let k0 = coeffs.diag();

        let mut u = vec![0.0; n * width];
        let mut v = vec![0.0; n * width];
        let mut p = vec![0.0; n.saturating_sub(1) * width];

        for i in 0..n {
            let ti = t[i];
            let row = i * width;
            let mut j = 0;
            for r in &coeffs.real {
                u[row + j] = r.a;
                v[row + j] = 1.0;
                j += 1;
            }
            for c in &coeffs.complex {
                let (sin, cos) = (c.d * ti).sin_cos();
                u[row + j] = c.a * cos + c.b * sin;
                u[row + j + 1] = c.a * sin - c.b * cos;
                v[row + j] = cos;
                v[row + j + 1] = sin;
                j += 2;
            }
        }

        for i in 0..n.saturating_sub(1) {
            let dt = t[i + 1] - t[i];
            let row = i * width;
            let mut j = 0;
            for r in &coeffs.real {
                p[row + j] = (-r.c * dt).exp();
                j += 1;
            }
            for c in &coeffs.complex {
                let decay = (-c.c * dt).exp();
                p[row + j] = decay;
                p[row + j + 1] = decay;
                j += 2;
            }
        }

        // Forward recursion for D and W. S accumulates the propagated
        // outer-product sum; tmp holds U_i S.
        let mut d = vec![0.0; n];
        let mut w = v;
        let mut s = vec![0.0; width * width];
        let mut tmp = vec![0.0; width];

        for i in 0..n {
            let row = i * width;

            if i > 0 {
                let prev = (i - 1) * width;
                for j in 0..width {
                    for k in 0..width {
                        s[j * width + k] = p[prev + j]
                            * p[prev + k]
                            * (s[j * width + k] + d[i - 1] * w[prev + j] * w[prev + k]);
                    }
                }
            }

            let mut di = diag[i] + k0;
            for k in 0..width {
                let mut acc = 0.0;
                for j in 0..width {
                    acc += u[row + j] * s[j * width + k];
                }
                tmp[k] = acc;
                di -= u[row + k] * acc;
            }

            if di <= 0.0 || !di.is_finite() {
                return Err(GpError::NotPositiveDefinite { index: i });
            }

            d[i] = di;
            for k in 0..width {
                w[row + k] = (w[row + k] - tmp[k]) / di;
            }
        }

        Ok(Self { n, width, d, w, u, p })
    }

    pub(crate) fn len(&self) -> usize {
        self.n
    }

    /// Log determinant of the factored covariance.
    pub(crate) fn log_determinant(&self) -> f64 {
        self.d.iter().map(|di| di.ln()).sum()
    }

    /// Solve `K x = y`.
    pub(crate) fn solve(&self, y: &[f64]) -> Vec<f64> {
        let width = self.width;
        let mut x = y.to_vec();
        let mut f = vec![0.0; width];

        // L z = y
        for i in 1..self.n {
            let prev = (i - 1) * width;
            let row = i * width;
            let mut dot = 0.0;
            for j in 0..width {
                f[j] = self.p[prev + j] * (f[j] + self.w[prev + j] * x[i - 1]);
                dot += self.u[row + j] * f[j];
            }
            x[i] -= dot;
        }

        // D z' = z
        for i in 0..self.n {
            x[i] /= self.d[i];
        }

        // L^T x = z'
        for j in &mut f {
            *j = 0.0;
        }
        for i in (0..self.n.saturating_sub(1)).rev() {
            let row = i * width;
            let next = (i + 1) * width;
            let mut dot = 0.0;
            for j in 0..width {
                f[j] = self.p[row + j] * (f[j] + self.u[next + j] * x[i + 1]);
                dot += self.w[row + j] * f[j];
            }
            x[i] -= dot;
        }

        x
    }
}
