mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    use crate::sampling::{AdaptiveMetropolis, Model, SamplingError, TuningSchedule};

    /// Bivariate Gaussian with correlation `rho` centered on `mean`.
    struct CorrelatedGaussian {
        mean: [f64; 2],
        rho: f64,
    }

    impl Model for CorrelatedGaussian {
        fn ndim(&self) -> usize {
            2
        }

        fn log_prob(&self, theta: &[f64]) -> f64 {
            let dx = theta[0] - self.mean[0];
            let dy = theta[1] - self.mean[1];
            let r2 = 1.0 - self.rho * self.rho;
            -0.5 * (dx * dx - 2.0 * self.rho * dx * dy + dy * dy) / r2
        }
    }

    struct Gaussian1d {
        mean: f64,
        sigma: f64,
    }

    impl Model for Gaussian1d {
        fn ndim(&self) -> usize {
            1
        }

        fn log_prob(&self, theta: &[f64]) -> f64 {
            let z = (theta[0] - self.mean) / self.sigma;
            -0.5 * z * z
        }
    }

    #[test]
    fn adapts_to_a_correlated_gaussian() {
        let model = CorrelatedGaussian { mean: [1.0, -1.0], rho: 0.8 };
        let mut rng = ChaChaRng::seed_from_u64(131);
        let sampler = AdaptiveMetropolis::new(600);

        let chain = sampler.run(&model, &mut rng, &[0.0, 0.0], 4000).unwrap();
        assert_eq!(chain.n_steps(), 4000);
        assert_eq!(chain.n_walkers(), 1);

        assert!((chain.mean(0, 0) - 1.0).abs() < 0.25, "mean x {}", chain.mean(0, 0));
        assert!((chain.mean(1, 0) + 1.0).abs() < 0.25, "mean y {}", chain.mean(1, 0));
        // Marginal deviations are unity regardless of the correlation.
        assert!((chain.std_dev(0, 0) - 1.0).abs() < 0.25);
        assert!((chain.std_dev(1, 0) - 1.0).abs() < 0.25);

        // Sample correlation should reflect rho.
        let xs = chain.parameter(0, 0);
        let ys = chain.parameter(1, 0);
        let mx = chain.mean(0, 0);
        let my = chain.mean(1, 0);
        let cov: f64 = xs
            .iter()
            .zip(&ys)
            .map(|(x, y)| (x - mx) * (y - my))
            .sum::<f64>()
            / (xs.len() - 1) as f64;
        let corr = cov / (chain.std_dev(0, 0) * chain.std_dev(1, 0));
        assert!((corr - 0.8).abs() < 0.15, "sample correlation {corr}");

        let acceptance = chain.acceptance_fraction();
        assert!(
            (0.1..0.7).contains(&acceptance),
            "acceptance {acceptance} outside the adapted random-walk range"
        );
    }

    #[test]
    fn one_dimensional_target_is_recovered() {
        let model = Gaussian1d { mean: 5.0, sigma: 2.0 };
        let mut rng = ChaChaRng::seed_from_u64(132);
        let sampler = AdaptiveMetropolis::new(400);

        let chain = sampler.run(&model, &mut rng, &[4.0], 3000).unwrap();
        assert!((chain.mean(0, 0) - 5.0).abs() < 0.35);
        assert!((chain.std_dev(0, 0) - 2.0).abs() < 0.4);
    }

    #[test]
    fn tuning_steps_are_not_recorded() {
        let model = Gaussian1d { mean: 0.0, sigma: 1.0 };
        let mut rng = ChaChaRng::seed_from_u64(133);

        let chain = AdaptiveMetropolis::new(500)
            .run(&model, &mut rng, &[0.0], 250)
            .unwrap();
        assert_eq!(chain.n_steps(), 250);
        assert_eq!(chain.log_probs().len(), 250);
    }

    #[test]
    fn custom_schedules_plug_in() {
        let schedule = TuningSchedule::with_layout(200, 30, 10, 40);
        let sampler = AdaptiveMetropolis::with_schedule(schedule);
        assert_eq!(sampler.schedule().n_tune(), 200);

        let model = Gaussian1d { mean: 0.0, sigma: 1.0 };
        let mut rng = ChaChaRng::seed_from_u64(134);
        let chain = sampler.run(&model, &mut rng, &[0.2], 1000).unwrap();
        assert!((chain.mean(0, 0)).abs() < 0.3);
    }

    #[test]
    fn rejects_inconsistent_setups() {
        let model = Gaussian1d { mean: 0.0, sigma: 1.0 };
        let mut rng = ChaChaRng::seed_from_u64(135);

        assert!(matches!(
            AdaptiveMetropolis::new(100).run(&model, &mut rng, &[0.0, 0.0], 10),
            Err(SamplingError::DimensionMismatch { expected: 1, actual: 2, .. })
        ));

        struct HalfLine;
        impl Model for HalfLine {
            fn ndim(&self) -> usize {
                1
            }
            fn log_prob(&self, theta: &[f64]) -> f64 {
                if theta[0] > 0.0 {
                    -theta[0]
                } else {
                    f64::NEG_INFINITY
                }
            }
        }
        assert!(matches!(
            AdaptiveMetropolis::new(100).run(&HalfLine, &mut rng, &[-1.0], 10),
            Err(SamplingError::NonFiniteStart { .. })
        ));

        struct NoParams;
        impl Model for NoParams {
            fn ndim(&self) -> usize {
                0
            }
            fn log_prob(&self, _theta: &[f64]) -> f64 {
                0.0
            }
        }
        assert!(matches!(
            AdaptiveMetropolis::new(100).run(&NoParams, &mut rng, &[], 10),
            Err(SamplingError::EmptyModel)
        ));
    }
}
