//! Transit search and fit walkthrough.
//!
//! Simulates a month of photometry for a hot Jupiter, then runs the full
//! recovery pipeline:
//! 1. Box least squares finds the period, epoch, and depth
//! 2. The ensemble sampler fits the radius ratio
//! 3. Autocorrelation time checks that the chain actually converged
//!
//! Run with: cargo run --package transit --example fit_transit

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use transit::distributions::{Distribution, Normal};
use transit::estimators::{bls, integrated_autocorr_time, BlsConfig};
use transit::orbits::KeplerianOrbit;
use transit::sampling::{EnsembleSampler, Model};
use transit::utils::{fold, logging};
use transit::StarryLightCurve;
use units::{Length, Mass, Time};

const PERIOD: f64 = 3.5;
const T0: f64 = 1.1;
const ROR: f64 = 0.1;
const SIGMA: f64 = 5e-4;

struct RorModel {
    curve: StarryLightCurve,
    orbit: KeplerianOrbit,
    times: Vec<Time>,
    flux: Vec<f64>,
}

impl Model for RorModel {
    fn ndim(&self) -> usize {
        1
    }

    fn log_prob(&self, theta: &[f64]) -> f64 {
        let ror = theta[0];
        if !(0.0..0.5).contains(&ror) {
            return f64::NEG_INFINITY;
        }
        let model = self.curve.light_curve(&self.orbit, ror, &self.times);
        let chi2: f64 = model
            .iter()
            .zip(&self.flux)
            .map(|(m, f)| {
                let r = (f - 1.0 - m) / SIGMA;
                r * r
            })
            .sum();
        -0.5 * chi2
    }
}

fn main() {
    logging::init();

    println!("Transit Search and Fit");
    println!("{}", "=".repeat(60));

    // The system we will try to recover.
    let orbit = KeplerianOrbit::builder()
        .period(Time::from_days(PERIOD))
        .t0(Time::from_days(T0))
        .star(Mass::from_solar_masses(1.0), Length::from_solar_radii(1.0))
        .impact_parameter(0.3)
        .build()
        .unwrap();
    let curve = StarryLightCurve::quadratic(0.4, 0.26).unwrap();

    println!("Injected system:");
    println!("  Period: {PERIOD} d, epoch: {T0} d");
    println!("  Radius ratio: {ROR} (depth ~ {:.4})", ROR * ROR);
    println!("  Impact parameter: {:.2}", orbit.impact_parameter());
    if let Some(duration) = orbit.transit_duration(ROR) {
        println!("  Transit duration: {:.3} d", duration.to_days());
    }

    // A month of photometry at a 29-minute cadence.
    let noise = Normal::new(0.0, SIGMA).unwrap();
    let mut rng = ChaChaRng::seed_from_u64(42);
    let days: Vec<f64> = (0..1375).map(|i| i as f64 * 0.02).collect();
    let times: Vec<Time> = days.iter().map(|&d| Time::from_days(d)).collect();
    let flux: Vec<f64> = curve
        .light_curve(&orbit, ROR, &times)
        .into_iter()
        .map(|rel| 1.0 + rel + noise.sample(&mut rng))
        .collect();
    println!("\nSimulated {} points over {:.1} d at SNR ~ {:.0} per transit",
        days.len(),
        days.last().unwrap(),
        ROR * ROR / SIGMA * 6.0_f64.sqrt(),
    );

    // Stage 1: box least squares.
    println!("\n{}", "=".repeat(60));
    println!("Box least squares search...");
    let config = BlsConfig {
        min_period: 2.0,
        max_period: 5.0,
        n_periods: 600,
        durations: vec![0.08, 0.12, 0.18],
    };
    let detection = bls(&days, &flux, &config).unwrap();
    println!("  Period:   {:.4} d", detection.best_period);
    println!("  Epoch:    {:.4} d", detection.best_t0);
    println!("  Depth:    {:.5}", detection.best_depth);
    println!("  Duration: {:.3} d", detection.best_duration);

    // Stage 2: fit the radius ratio on the points near transit.
    println!("\n{}", "=".repeat(60));
    println!("Ensemble fit of the radius ratio...");
    let mut window_times = Vec::new();
    let mut window_flux = Vec::new();
    for (&d, &f) in days.iter().zip(&flux) {
        if (fold(d, PERIOD, T0) * PERIOD).abs() < 0.25 {
            window_times.push(Time::from_days(d));
            window_flux.push(f);
        }
    }
    println!("  Fitting {} in-window points", window_times.len());

    let model = RorModel { curve, orbit, times: window_times, flux: window_flux };
    let jitter = Normal::new(0.0, 3e-3).unwrap();
    let initial: Vec<Vec<f64>> = (0..12)
        .map(|_| vec![(detection.best_depth.max(1e-4)).sqrt() + jitter.sample(&mut rng)])
        .collect();

    let chain = EnsembleSampler::new(12)
        .run(&model, &mut rng, &initial, 400)
        .unwrap();
    let ror_mean = chain.mean(0, 100);
    let ror_std = chain.std_dev(0, 100);
    let tau = integrated_autocorr_time(&chain.parameter(0, 100)).unwrap();

    println!("  ror = {ror_mean:.5} +/- {ror_std:.5}");
    println!("  Acceptance: {:.2}", chain.acceptance_fraction());
    println!("  Autocorrelation time: {tau:.1} samples");

    // Success criteria.
    println!("\n{}", "=".repeat(60));
    if (detection.best_period - PERIOD).abs() < 0.02 {
        println!("✓ Period recovered to the grid resolution");
    } else {
        println!("✗ Period off by {:.4} d", (detection.best_period - PERIOD).abs());
    }

    let epoch_offset = fold(detection.best_t0, PERIOD, T0) * PERIOD;
    if epoch_offset.abs() < 0.08 {
        println!("✓ Epoch recovered to within the binning");
    } else {
        println!("✗ Epoch off by {:.3} d", epoch_offset.abs());
    }

    if (ror_mean - ROR).abs() < 4.0 * ror_std {
        println!("✓ Radius ratio within 4 sigma of the injected value");
    } else {
        println!("✗ Radius ratio off by {:.1} sigma", (ror_mean - ROR).abs() / ror_std);
    }

    println!("\nDone.");
}
