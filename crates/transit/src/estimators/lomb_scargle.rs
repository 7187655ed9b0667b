//! Generalized Lomb-Scargle periodogram (Zechmeister & Kurster 2009).

use std::f64::consts::TAU;

use super::EstimatorError;

/// Periodogram power over a frequency grid. Frequencies are in cycles per
/// time unit, powers normalized to `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Periodogram {
    pub frequency: Vec<f64>,
    pub power: Vec<f64>,
}

impl Periodogram {
    /// Frequency and power of the strongest peak.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.power
            .iter()
            .zip(&self.frequency)
            .max_by(|a, b| a.0.total_cmp(b.0))
            .map(|(p, f)| (*f, *p))
    }

    /// Period corresponding to the strongest peak.
    pub fn peak_period(&self) -> Option<f64> {
        self.peak().map(|(f, _)| 1.0 / f)
    }
}

/// Standard frequency grid for `times`: spacing set by oversampling the
/// baseline `samples_per_peak` times, extent set by `nyquist_factor` times
/// the average Nyquist frequency.
pub fn frequency_grid(
    times: &[f64],
    samples_per_peak: usize,
    nyquist_factor: f64,
) -> Result<Vec<f64>, EstimatorError> {
    if times.len() < 2 {
        return Err(EstimatorError::TooShort { required: 2, actual: times.len() });
    }
    if samples_per_peak == 0 || !(nyquist_factor > 0.0) {
        return Err(EstimatorError::InvalidGrid {
            reason: "oversampling and nyquist factor must be positive".into(),
        });
    }
    let (min, max) = min_max(times);
    let baseline = max - min;
    if baseline <= 0.0 {
        return Err(EstimatorError::InvalidGrid {
            reason: "times must span a positive baseline".into(),
        });
    }

    let df = 1.0 / (baseline * samples_per_peak as f64);
    let f_max = nyquist_factor * times.len() as f64 / (2.0 * baseline);
    let n = (f_max / df) as usize;

    Ok((1..=n).map(|i| i as f64 * df).collect())
}

/// Generalized Lomb-Scargle power at each frequency, with a floating mean
/// and optional per-point uncertainties.
pub fn lomb_scargle(
    times: &[f64],
    values: &[f64],
    errors: Option<&[f64]>,
    frequencies: &[f64],
) -> Result<Periodogram, EstimatorError> {
    if times.is_empty() {
        return Err(EstimatorError::Empty);
    }
    if values.len() != times.len() {
        return Err(EstimatorError::LengthMismatch { left: times.len(), right: values.len() });
    }
    if let Some(errors) = errors {
        if errors.len() != times.len() {
            return Err(EstimatorError::LengthMismatch {
                left: times.len(),
                right: errors.len(),
            });
        }
    }
    if times.len() < 3 {
        return Err(EstimatorError::TooShort { required: 3, actual: times.len() });
    }

    // Normalized weights.
    let weights: Vec<f64> = match errors {
        Some(errors) => {
            let raw: Vec<f64> = errors.iter().map(|e| 1.0 / (e * e)).collect();
            let total: f64 = raw.iter().sum();
            raw.into_iter().map(|w| w / total).collect()
        }
        None => vec![1.0 / times.len() as f64; times.len()],
    };

    let y_mean: f64 = weights.iter().zip(values).map(|(w, y)| w * y).sum();
    let yy: f64 = weights
        .iter()
        .zip(values)
        .map(|(w, y)| w * (y - y_mean) * (y - y_mean))
        .sum();
    if yy <= 0.0 {
        return Err(EstimatorError::ConstantInput);
    }

    let power = frequencies
        .iter()
        .map(|f| {
            let omega = TAU * f;
            let mut c = 0.0;
            let mut s = 0.0;
            let mut cc = 0.0;
            let mut ss = 0.0;
            let mut cs = 0.0;
            let mut yc = 0.0;
            let mut ys = 0.0;
            for ((&w, &t), &y) in weights.iter().zip(times).zip(values) {
                let (sin, cos) = (omega * t).sin_cos();
                let dy = y - y_mean;
                c += w * cos;
                s += w * sin;
                cc += w * cos * cos;
                ss += w * sin * sin;
                cs += w * cos * sin;
                yc += w * dy * cos;
                ys += w * dy * sin;
            }
            // Center the trig sums on the weighted mean.
            let cc = cc - c * c;
            let ss = ss - s * s;
            let cs = cs - c * s;
            let det = cc * ss - cs * cs;
            if det.abs() < 1e-300 {
                return 0.0;
            }
            ((ss * yc * yc + cc * ys * ys - 2.0 * cs * yc * ys) / (yy * det)).clamp(0.0, 1.0)
        })
        .collect();

    Ok(Periodogram { frequency: frequencies.to_vec(), power })
}

fn min_max(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}
