//! Box least squares transit search (Kovacs, Zucker & Mazeh 2002).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::EstimatorError;
use crate::utils::phase::fold;
use crate::utils::stats;

/// Search grid for [`bls`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlsConfig {
    /// Shortest trial period, in days.
    pub min_period: f64,
    /// Longest trial period, in days.
    pub max_period: f64,
    /// Number of trial periods, spaced uniformly in frequency.
    pub n_periods: usize,
    /// Trial transit durations, in days.
    pub durations: Vec<f64>,
}

impl BlsConfig {
    /// A grid that covers `[min_period, max_period]` with duration guesses
    /// spanning 1% to 5% of the shortest period.
    pub fn over(min_period: f64, max_period: f64, n_periods: usize) -> Self {
        let durations = [0.01, 0.02, 0.035, 0.05]
            .iter()
            .map(|frac| frac * min_period)
            .collect();
        Self { min_period, max_period, n_periods, durations }
    }

    fn validate(&self, n_points: usize) -> Result<(), EstimatorError> {
        if !(self.min_period > 0.0) || self.max_period <= self.min_period {
            return Err(EstimatorError::InvalidGrid {
                reason: format!(
                    "period range [{}, {}] is not increasing and positive",
                    self.min_period, self.max_period
                ),
            });
        }
        if self.n_periods < 2 {
            return Err(EstimatorError::InvalidGrid {
                reason: "need at least two trial periods".into(),
            });
        }
        if self.durations.is_empty() {
            return Err(EstimatorError::InvalidGrid { reason: "no trial durations".into() });
        }
        for &d in &self.durations {
            if !(d > 0.0) || d >= self.min_period {
                return Err(EstimatorError::InvalidGrid {
                    reason: format!("duration {d} must be positive and below the period"),
                });
            }
        }
        if n_points < 10 {
            return Err(EstimatorError::TooShort { required: 10, actual: n_points });
        }
        Ok(())
    }
}

/// Result of a [`bls`] search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlsResult {
    /// Trial periods in days.
    pub periods: Vec<f64>,
    /// Peak signal residue at each trial period.
    pub power: Vec<f64>,
    /// Period of the strongest detection, in days.
    pub best_period: f64,
    /// Mid-transit epoch of the strongest detection, in days.
    pub best_t0: f64,
    /// Fractional depth of the strongest detection.
    pub best_depth: f64,
    /// Duration of the strongest detection, in days.
    pub best_duration: f64,
}

/// Search for a periodic box-shaped dip in `flux`.
///
/// At each trial period the series is folded and binned, and every
/// duration-sized window is scored with the signal residue
/// `s^2 / (r (1 - r))` of Kovacs et al.; the best window across all
/// trial periods defines the detection.
pub fn bls(times: &[f64], flux: &[f64], config: &BlsConfig) -> Result<BlsResult, EstimatorError> {
    if times.is_empty() {
        return Err(EstimatorError::Empty);
    }
    if times.len() != flux.len() {
        return Err(EstimatorError::LengthMismatch { left: times.len(), right: flux.len() });
    }
    config.validate(times.len())?;

    let t_ref = times[0];
    let mean_flux = stats::mean(flux);
    let centered: Vec<f64> = flux.iter().map(|f| f - mean_flux).collect();
    let n_total = times.len() as f64;

    let min_duration = config.durations.iter().cloned().fold(f64::INFINITY, f64::min);

    let f_min = 1.0 / config.max_period;
    let f_max = 1.0 / config.min_period;
    let df = (f_max - f_min) / (config.n_periods - 1) as f64;

    let mut periods = Vec::with_capacity(config.n_periods);
    let mut power = Vec::with_capacity(config.n_periods);
    let mut best = BlsResult {
        periods: Vec::new(),
        power: Vec::new(),
        best_period: 0.0,
        best_t0: 0.0,
        best_depth: 0.0,
        best_duration: 0.0,
    };
    let mut best_power = f64::NEG_INFINITY;

    for i in 0..config.n_periods {
        let period = 1.0 / (f_max - i as f64 * df);
        // Bin width tracks the finest duration so narrow boxes stay
        // resolved; capped to keep long periods affordable.
        let n_bins = ((3.0 * period / min_duration).ceil() as usize).clamp(50, 2000);

        let mut bin_sum = vec![0.0; n_bins];
        let mut bin_count = vec![0usize; n_bins];
        for (&t, &f) in times.iter().zip(&centered) {
            let phase = fold(t, period, t_ref) + 0.5;
            let bin = ((phase * n_bins as f64) as usize).min(n_bins - 1);
            bin_sum[bin] += f;
            bin_count[bin] += 1;
        }

        let mut period_best = f64::NEG_INFINITY;
        for &duration in &config.durations {
            let width = ((duration / period * n_bins as f64).round() as usize).max(1);
            if width >= n_bins {
                continue;
            }

            // Slide a circular window of `width` bins.
            let mut s: f64 = bin_sum[..width].iter().sum();
            let mut count: usize = bin_count[..width].iter().sum();
            for start in 0..n_bins {
                let r = count as f64 / n_total;
                if r > 0.0 && r < 1.0 {
                    let sr = s * s / (r * (1.0 - r));
                    if sr > period_best {
                        period_best = sr;
                    }
                    if sr > best_power && s < 0.0 {
                        best_power = sr;
                        let phase_mid =
                            (start as f64 + width as f64 / 2.0) / n_bins as f64 - 0.5;
                        best.best_period = period;
                        best.best_t0 = t_ref + phase_mid * period;
                        best.best_depth = -s * n_total / (count as f64 * (n_total - count as f64));
                        best.best_duration = duration;
                    }
                }
                // Advance the window by one bin.
                let leave = start;
                let enter = (start + width) % n_bins;
                s += bin_sum[enter] - bin_sum[leave];
                count += bin_count[enter];
                count -= bin_count[leave];
            }
        }

        periods.push(period);
        power.push(if period_best.is_finite() { period_best } else { 0.0 });
    }

    if best_power.is_finite() {
        debug!(
            period = best.best_period,
            depth = best.best_depth,
            duration = best.best_duration,
            "bls detection"
        );
    }

    best.periods = periods;
    best.power = power;
    Ok(best)
}
