use serde::{Deserialize, Serialize};

use crate::utils::stats;

/// Posterior samples recorded by a sampler.
///
/// Stores one position per walker per step, flattened in step-major order.
/// For the single-chain samplers the walker count is one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chain {
    ndim: usize,
    n_walkers: usize,
    samples: Vec<f64>,
    log_probs: Vec<f64>,
    accepted: usize,
    proposed: usize,
}

impl Chain {
    pub(crate) fn with_capacity(ndim: usize, n_walkers: usize, n_steps: usize) -> Self {
        Self {
            ndim,
            n_walkers,
            samples: Vec::with_capacity(n_steps * n_walkers * ndim),
            log_probs: Vec::with_capacity(n_steps * n_walkers),
            accepted: 0,
            proposed: 0,
        }
    }

    pub(crate) fn record(&mut self, positions: &[Vec<f64>], log_probs: &[f64]) {
        for position in positions {
            self.samples.extend_from_slice(position);
        }
        self.log_probs.extend_from_slice(log_probs);
    }

    pub(crate) fn count_proposals(&mut self, accepted: usize, proposed: usize) {
        self.accepted += accepted;
        self.proposed += proposed;
    }

    pub fn ndim(&self) -> usize {
        self.ndim
    }

    pub fn n_walkers(&self) -> usize {
        self.n_walkers
    }

    /// Number of recorded steps.
    pub fn n_steps(&self) -> usize {
        if self.n_walkers == 0 {
            return 0;
        }
        self.log_probs.len() / self.n_walkers
    }

    /// Fraction of proposals accepted over the run.
    pub fn acceptance_fraction(&self) -> f64 {
        if self.proposed == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.proposed as f64
    }

    /// All samples of one parameter, discarding the first `discard` steps
    /// of every walker.
    pub fn parameter(&self, dim: usize, discard: usize) -> Vec<f64> {
        let start = discard.min(self.n_steps());
        (start..self.n_steps())
            .flat_map(|step| {
                (0..self.n_walkers).map(move |walker| {
                    self.samples[(step * self.n_walkers + walker) * self.ndim + dim]
                })
            })
            .collect()
    }

    /// Log probabilities in recording order.
    pub fn log_probs(&self) -> &[f64] {
        &self.log_probs
    }

    /// Posterior mean of one parameter after discarding burn-in.
    pub fn mean(&self, dim: usize, discard: usize) -> f64 {
        stats::mean(&self.parameter(dim, discard))
    }

    /// Posterior standard deviation of one parameter after discarding
    /// burn-in.
    pub fn std_dev(&self, dim: usize, discard: usize) -> f64 {
        stats::std_dev(&self.parameter(dim, discard))
    }

    /// Positions of all walkers at the final recorded step.
    pub fn last_positions(&self) -> Vec<Vec<f64>> {
        let steps = self.n_steps();
        if steps == 0 {
            return Vec::new();
        }
        let base = (steps - 1) * self.n_walkers * self.ndim;
        (0..self.n_walkers)
            .map(|walker| {
                let offset = base + walker * self.ndim;
                self.samples[offset..offset + self.ndim].to_vec()
            })
            .collect()
    }
}
