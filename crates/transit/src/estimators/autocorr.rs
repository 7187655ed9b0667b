//! Autocorrelation diagnostics for MCMC output.

use super::EstimatorError;
use crate::utils::stats;

/// Normalized autocorrelation function of `values` up to `max_lag`
/// inclusive; element zero is always one.
pub fn autocorr_function(values: &[f64], max_lag: usize) -> Result<Vec<f64>, EstimatorError> {
    if values.is_empty() {
        return Err(EstimatorError::Empty);
    }
    if max_lag >= values.len() {
        return Err(EstimatorError::TooShort { required: max_lag + 1, actual: values.len() });
    }

    let mean = stats::mean(values);
    let denom: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    if denom <= 0.0 {
        return Err(EstimatorError::ConstantInput);
    }

    let rho = (0..=max_lag)
        .map(|lag| {
            let num: f64 = values[..values.len() - lag]
                .iter()
                .zip(&values[lag..])
                .map(|(a, b)| (a - mean) * (b - mean))
                .sum();
            num / denom
        })
        .collect();
    Ok(rho)
}

/// Integrated autocorrelation time with the self-consistent window of
/// Sokal: the smallest `w` satisfying `w >= c tau(w)`, with `c = 5`.
///
/// Needs a chain several tau long to be trustworthy; with the window
/// capped at half the chain length the estimate degrades gracefully rather
/// than erroring for short chains.
pub fn integrated_autocorr_time(values: &[f64]) -> Result<f64, EstimatorError> {
    const C: f64 = 5.0;

    if values.len() < 8 {
        return Err(EstimatorError::TooShort { required: 8, actual: values.len() });
    }
    let max_window = values.len() / 2;
    let rho = autocorr_function(values, max_window)?;

    let mut tau = 1.0;
    for (w, r) in rho.iter().enumerate().skip(1) {
        tau += 2.0 * r;
        if (w as f64) >= C * tau {
            return Ok(tau.max(1.0));
        }
    }
    Ok(tau.max(1.0))
}
