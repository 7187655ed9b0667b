use nalgebra::{Cholesky, DMatrix, DVector};
use rand::Rng;
use rand_chacha::ChaChaRng;
use tracing::debug;

use super::chain::Chain;
use super::schedule::TuningSchedule;
use super::{Model, SamplingError};
use crate::distributions::continuous::standard_normal;

/// Random-walk Metropolis with covariance adaptation (Haario et al. 2001).
///
/// During tuning the proposal covariance is re-estimated from the chain at
/// the close of each [`TuningSchedule`] window and scaled by the usual
/// `2.38^2 / ndim` factor; sampling then runs with the proposal frozen.
/// Tuning steps are discarded, so the returned [`Chain`] holds draws only.
#[derive(Debug, Clone)]
pub struct AdaptiveMetropolis {
    schedule: TuningSchedule,
}

impl AdaptiveMetropolis {
    pub fn new(n_tune: usize) -> Self {
        Self { schedule: TuningSchedule::new(n_tune) }
    }

    pub fn with_schedule(schedule: TuningSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &TuningSchedule {
        &self.schedule
    }

    /// Tune on the fly, then record `n_draws` posterior samples starting
    /// from `initial`.
    pub fn run(
        &self,
        model: &dyn Model,
        rng: &mut ChaChaRng,
        initial: &[f64],
        n_draws: usize,
    ) -> Result<Chain, SamplingError> {
        let ndim = model.ndim();
        if ndim == 0 {
            return Err(SamplingError::EmptyModel);
        }
        if initial.len() != ndim {
            return Err(SamplingError::DimensionMismatch {
                index: 0,
                expected: ndim,
                actual: initial.len(),
            });
        }
        let mut position = initial.to_vec();
        let mut log_prob = model.log_prob(&position);
        if !log_prob.is_finite() {
            return Err(SamplingError::NonFiniteStart { index: 0 });
        }

        let scale = 2.38 / (ndim as f64).sqrt();
        let mut proposal_root = DMatrix::identity(ndim, ndim) * scale;
        let mut window_samples: Vec<f64> = Vec::new();

        let n_tune = self.schedule.n_tune();
        debug!(ndim, n_tune, n_draws, "starting adaptive metropolis run");

        let mut chain = Chain::with_capacity(ndim, 1, n_draws);
        let mut proposal = vec![0.0; ndim];
        let mut noise = DVector::zeros(ndim);
        let mut accepted = 0usize;

        for step in 0..n_tune + n_draws {
            for value in noise.iter_mut() {
                *value = standard_normal(rng);
            }
            let jump = &proposal_root * &noise;
            for d in 0..ndim {
                proposal[d] = position[d] + jump[d];
            }

            let lp = model.log_prob(&proposal);
            if rng.random::<f64>().ln() < lp - log_prob {
                position.copy_from_slice(&proposal);
                log_prob = lp;
                if step >= n_tune {
                    accepted += 1;
                }
            }

            if self.schedule.is_tuning(step) {
                window_samples.extend_from_slice(&position);
                if self.schedule.window_closes_at(step + 1) {
                    if let Some(root) = estimate_proposal_root(&window_samples, ndim, scale) {
                        proposal_root = root;
                        debug!(step, "proposal covariance re-estimated");
                    } else {
                        debug!(step, "window covariance not positive definite, keeping proposal");
                    }
                    window_samples.clear();
                }
            } else {
                chain.record(std::slice::from_ref(&position), &[log_prob]);
            }
        }

        chain.count_proposals(accepted, n_draws);
        debug!(acceptance = chain.acceptance_fraction(), "adaptive metropolis run complete");
        Ok(chain)
    }
}

/// Scaled Cholesky factor of the sample covariance of `samples`, or `None`
/// when there are too few samples or the covariance does not factor.
fn estimate_proposal_root(
    samples: &[f64],
    ndim: usize,
    scale: f64,
) -> Option<DMatrix<f64>> {
    let n = samples.len() / ndim;
    if n < ndim + 2 {
        return None;
    }

    let mut mean = vec![0.0; ndim];
    for row in 0..n {
        for d in 0..ndim {
            mean[d] += samples[row * ndim + d];
        }
    }
    for m in &mut mean {
        *m /= n as f64;
    }

    let mut cov = DMatrix::zeros(ndim, ndim);
    for row in 0..n {
        for i in 0..ndim {
            let di = samples[row * ndim + i] - mean[i];
            for j in 0..=i {
                let dj = samples[row * ndim + j] - mean[j];
                cov[(i, j)] += di * dj;
            }
        }
    }
    for i in 0..ndim {
        for j in 0..=i {
            cov[(i, j)] /= (n - 1) as f64;
            cov[(j, i)] = cov[(i, j)];
        }
        // Ridge keeps a frozen chain from collapsing the proposal.
        cov[(i, i)] += 1e-10;
    }

    Cholesky::new(cov).map(|chol| chol.l() * scale)
}
