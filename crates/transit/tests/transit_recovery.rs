#![cfg(feature = "runtime")]

//! End-to-end exercise: synthesize noisy photometry of a Keplerian transit,
//! recover the period with a box search, then fit the radius ratio with the
//! ensemble sampler.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use transit::distributions::{Distribution, Normal};
use transit::estimators::{bls, BlsConfig};
use transit::orbits::KeplerianOrbit;
use transit::sampling::{EnsembleSampler, Model};
use transit::utils::fold;
use transit::StarryLightCurve;
use units::{Length, Mass, Time};

const PERIOD: f64 = 3.5;
const T0: f64 = 1.1;
const ROR: f64 = 0.1;
const SIGMA: f64 = 5e-4;

fn injected_orbit() -> KeplerianOrbit {
    KeplerianOrbit::builder()
        .period(Time::from_days(PERIOD))
        .t0(Time::from_days(T0))
        .star(Mass::from_solar_masses(1.0), Length::from_solar_radii(1.0))
        .impact_parameter(0.3)
        .build()
        .unwrap()
}

/// 27.5 days at a 29-minute cadence with white noise.
fn photometry(seed: u64) -> (Vec<f64>, Vec<f64>) {
    let orbit = injected_orbit();
    let curve = StarryLightCurve::quadratic(0.4, 0.26).unwrap();
    let noise = Normal::new(0.0, SIGMA).unwrap();
    let mut rng = ChaChaRng::seed_from_u64(seed);

    let days: Vec<f64> = (0..1375).map(|i| i as f64 * 0.02).collect();
    let times: Vec<Time> = days.iter().map(|&d| Time::from_days(d)).collect();
    let flux: Vec<f64> = curve
        .light_curve(&orbit, ROR, &times)
        .into_iter()
        .map(|rel| 1.0 + rel + noise.sample(&mut rng))
        .collect();
    (days, flux)
}

#[test]
fn box_search_recovers_the_injected_ephemeris() {
    let (days, flux) = photometry(7);
    let config = BlsConfig {
        min_period: 2.0,
        max_period: 5.0,
        n_periods: 600,
        durations: vec![0.08, 0.12, 0.18],
    };

    let result = bls(&days, &flux, &config).unwrap();

    assert!(
        (result.best_period - PERIOD).abs() < 0.02,
        "period {} vs injected {PERIOD}",
        result.best_period
    );

    let epoch_offset = fold(result.best_t0, PERIOD, T0) * PERIOD;
    assert!(epoch_offset.abs() < 0.08, "epoch off by {epoch_offset} d");

    assert!(
        result.best_depth > 0.006 && result.best_depth < 0.014,
        "depth {} vs roughly {}",
        result.best_depth,
        ROR * ROR
    );

    // The duration grid point nearest the true chord wins.
    let true_duration = injected_orbit()
        .transit_duration(ROR)
        .map(|d| d.to_days())
        .unwrap();
    assert!((true_duration - 0.122).abs() < 0.01, "chord {true_duration} d");
    assert!((result.best_duration - true_duration).abs() < 0.03);
}

struct RorModel<'a> {
    curve: StarryLightCurve,
    orbit: KeplerianOrbit,
    times: &'a [Time],
    flux: &'a [f64],
}

impl Model for RorModel<'_> {
    fn ndim(&self) -> usize {
        1
    }

    fn log_prob(&self, theta: &[f64]) -> f64 {
        let ror = theta[0];
        if !(0.0..0.5).contains(&ror) {
            return f64::NEG_INFINITY;
        }
        let model = self.curve.light_curve(&self.orbit, ror, self.times);
        let chi2: f64 = model
            .iter()
            .zip(self.flux)
            .map(|(m, f)| {
                let r = (f - 1.0 - m) / SIGMA;
                r * r
            })
            .sum();
        -0.5 * chi2
    }
}

#[test]
fn ensemble_fit_pins_down_the_radius_ratio() {
    let (days, flux) = photometry(9);

    // Fit only the neighborhood of the transits; the rest of the series
    // carries no information about the radius ratio.
    let mut window_times = Vec::new();
    let mut window_flux = Vec::new();
    for (&d, &f) in days.iter().zip(&flux) {
        if (fold(d, PERIOD, T0) * PERIOD).abs() < 0.25 {
            window_times.push(Time::from_days(d));
            window_flux.push(f);
        }
    }
    assert!(window_times.len() > 100);

    let model = RorModel {
        curve: StarryLightCurve::quadratic(0.4, 0.26).unwrap(),
        orbit: injected_orbit(),
        times: &window_times,
        flux: &window_flux,
    };

    let mut rng = ChaChaRng::seed_from_u64(10);
    let jitter = Normal::new(0.0, 3e-3).unwrap();
    let initial: Vec<Vec<f64>> = (0..10)
        .map(|_| vec![ROR + jitter.sample(&mut rng)])
        .collect();

    let chain = EnsembleSampler::new(10)
        .run(&model, &mut rng, &initial, 150)
        .unwrap();

    let mean = chain.mean(0, 50);
    let std = chain.std_dev(0, 50);
    assert!(
        (0.09..0.11).contains(&mean),
        "posterior mean {mean} vs injected {ROR}"
    );
    assert!(std < 0.01, "posterior spread {std} too wide");
    assert!(chain.acceptance_fraction() > 0.2);
}
