mod tests {
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    use crate::distributions::{Beta, Distribution, Normal, Rayleigh, Uniform};

    fn draw<D: Distribution>(dist: &D, n: usize, seed: u64) -> Vec<f64> {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        (0..n).map(|_| dist.sample(&mut rng)).collect()
    }

    fn sample_mean(values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }

    #[test]
    fn uniform_rejects_empty_support() {
        assert!(Uniform::new(1.0, 1.0).is_err());
        assert!(Uniform::new(2.0, -1.0).is_err());
        assert!(Uniform::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn uniform_samples_stay_in_bounds() {
        let dist = Uniform::new(-2.0, 3.0).unwrap();
        for x in draw(&dist, 5_000, 7) {
            assert!((-2.0..3.0).contains(&x));
            assert_relative_eq!(dist.log_prob(x), -(5.0_f64).ln());
        }
        assert!(dist.log_prob(3.5).is_infinite());
    }

    #[test]
    fn normal_moments_match_parameters() {
        let dist = Normal::new(1.5, 0.7).unwrap();
        let samples = draw(&dist, 20_000, 11);
        let mean = sample_mean(&samples);
        let var = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>()
            / samples.len() as f64;

        assert!((mean - 1.5).abs() < 0.02, "sample mean {mean}");
        assert!((var.sqrt() - 0.7).abs() < 0.02, "sample sigma {}", var.sqrt());
    }

    #[test]
    fn normal_log_prob_is_quadratic() {
        let dist = Normal::standard();
        // ln N(0) - ln N(2) = 2
        assert_relative_eq!(dist.log_prob(0.0) - dist.log_prob(2.0), 2.0, epsilon = 1e-12);
        assert!(Normal::new(0.0, 0.0).is_err());
    }

    #[test]
    fn beta_mean_matches_alpha_over_sum() {
        let dist = Beta::new(2.0, 5.0).unwrap();
        let samples = draw(&dist, 20_000, 13);
        for x in &samples {
            assert!((0.0..1.0).contains(x));
        }
        assert!((sample_mean(&samples) - 2.0 / 7.0).abs() < 0.01);
    }

    #[test]
    fn beta_with_small_shape_stays_in_unit_interval() {
        // Exercises the alpha < 1 boost path of the gamma sampler.
        let dist = Beta::new(0.5, 0.5).unwrap();
        let samples = draw(&dist, 10_000, 17);
        for x in &samples {
            assert!((0.0..1.0).contains(x), "sample {x} outside (0, 1)");
        }
        assert!((sample_mean(&samples) - 0.5).abs() < 0.02);
    }

    #[test]
    fn beta_log_prob_integrates_the_density() {
        // Midpoint rule over (0, 1) should recover a unit integral.
        let dist = Beta::new(2.5, 1.5).unwrap();
        let n = 20_000;
        let total: f64 = (0..n)
            .map(|i| {
                let x = (i as f64 + 0.5) / n as f64;
                dist.log_prob(x).exp()
            })
            .sum::<f64>()
            / n as f64;
        assert_relative_eq!(total, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn rayleigh_mean_is_sigma_root_half_pi() {
        let sigma = 0.05;
        let dist = Rayleigh::new(sigma).unwrap();
        let samples = draw(&dist, 20_000, 19);
        let expected = sigma * (std::f64::consts::PI / 2.0).sqrt();
        assert!((sample_mean(&samples) - expected).abs() < 0.002);
        assert!(dist.log_prob(-0.1).is_infinite());
    }
}
