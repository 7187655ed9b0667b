use rand::Rng;
use rand_chacha::ChaChaRng;
use tracing::debug;

use super::chain::Chain;
use super::{Model, SamplingError};

/// Affine-invariant ensemble sampler with the stretch move of Goodman &
/// Weare (2010).
///
/// An ensemble of walkers explores the posterior together; each proposal
/// stretches one walker along the line through a randomly chosen partner,
/// which makes the sampler invariant under affine reparameterizations and
/// leaves only the walker count to choose.
#[derive(Debug, Clone)]
pub struct EnsembleSampler {
    n_walkers: usize,
    stretch: f64,
}

impl EnsembleSampler {
    pub fn new(n_walkers: usize) -> Self {
        Self { n_walkers, stretch: 2.0 }
    }

    /// Override the stretch scale `a`; larger values propose bolder moves.
    pub fn with_stretch(mut self, stretch: f64) -> Self {
        self.stretch = stretch;
        self
    }

    pub fn n_walkers(&self) -> usize {
        self.n_walkers
    }

    /// Run the ensemble for `n_steps`, starting each walker from the
    /// matching row of `initial`.
    pub fn run(
        &self,
        model: &dyn Model,
        rng: &mut ChaChaRng,
        initial: &[Vec<f64>],
        n_steps: usize,
    ) -> Result<Chain, SamplingError> {
        let ndim = model.ndim();
        if ndim == 0 {
            return Err(SamplingError::EmptyModel);
        }
        let required = 2 * ndim + 2;
        if self.n_walkers < required {
            return Err(SamplingError::TooFewWalkers {
                n_walkers: self.n_walkers,
                ndim,
                required,
            });
        }
        if self.n_walkers % 2 != 0 {
            return Err(SamplingError::OddWalkerCount(self.n_walkers));
        }
        if initial.len() != self.n_walkers {
            return Err(SamplingError::WalkerCountMismatch {
                expected: self.n_walkers,
                actual: initial.len(),
            });
        }

        let mut positions: Vec<Vec<f64>> = Vec::with_capacity(self.n_walkers);
        let mut log_probs = Vec::with_capacity(self.n_walkers);
        for (index, position) in initial.iter().enumerate() {
            if position.len() != ndim {
                return Err(SamplingError::DimensionMismatch {
                    index,
                    expected: ndim,
                    actual: position.len(),
                });
            }
            let lp = model.log_prob(position);
            if !lp.is_finite() {
                return Err(SamplingError::NonFiniteStart { index });
            }
            positions.push(position.clone());
            log_probs.push(lp);
        }

        debug!(
            n_walkers = self.n_walkers,
            ndim,
            n_steps,
            stretch = self.stretch,
            "starting ensemble run"
        );

        let mut chain = Chain::with_capacity(ndim, self.n_walkers, n_steps);
        let mut proposal = vec![0.0; ndim];
        let mut accepted = 0usize;

        for _ in 0..n_steps {
            for k in 0..self.n_walkers {
                // Partner drawn from the rest of the ensemble.
                let mut partner = rng.random_range(0..self.n_walkers - 1);
                if partner >= k {
                    partner += 1;
                }

                let z = {
                    let u: f64 = rng.random();
                    let g = (self.stretch - 1.0) * u + 1.0;
                    g * g / self.stretch
                };
                for d in 0..ndim {
                    proposal[d] =
                        positions[partner][d] + z * (positions[k][d] - positions[partner][d]);
                }

                let lp = model.log_prob(&proposal);
                let ln_accept = (ndim as f64 - 1.0) * z.ln() + lp - log_probs[k];
                if rng.random::<f64>().ln() < ln_accept {
                    positions[k].copy_from_slice(&proposal);
                    log_probs[k] = lp;
                    accepted += 1;
                }
            }
            chain.record(&positions, &log_probs);
        }

        chain.count_proposals(accepted, n_steps * self.n_walkers);
        debug!(
            acceptance = chain.acceptance_fraction(),
            "ensemble run complete"
        );
        Ok(chain)
    }
}
