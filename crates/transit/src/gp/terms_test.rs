mod tests {
    use approx::assert_relative_eq;

    use crate::gp::terms::{ComplexTerm, Matern32Term, RealTerm, SHOTerm, Term, TermSum};

    /// Closed-form SHO power spectral density.
    fn sho_psd(s0: f64, w0: f64, q: f64, w: f64) -> f64 {
        let w2 = w * w;
        let w02 = w0 * w0;
        (2.0 / std::f64::consts::PI).sqrt() * s0 * w02 * w02
            / ((w2 - w02) * (w2 - w02) + w02 * w2 / (q * q))
    }

    #[test]
    fn sho_psd_matches_closed_form_underdamped() {
        let (s0, w0, q) = (1.3, 2.5, 4.0);
        let term = SHOTerm::new(s0, w0, q).unwrap();
        for i in 0..50 {
            let w = 0.05 + 8.0 * i as f64 / 49.0;
            assert_relative_eq!(
                term.psd(w),
                sho_psd(s0, w0, q, w),
                max_relative = 1e-10
            );
        }
    }

    #[test]
    fn sho_psd_matches_closed_form_overdamped() {
        let (s0, w0, q) = (0.7, 1.8, 0.2);
        let term = SHOTerm::new(s0, w0, q).unwrap();
        for i in 0..50 {
            let w = 0.05 + 6.0 * i as f64 / 49.0;
            assert_relative_eq!(
                term.psd(w),
                sho_psd(s0, w0, q, w),
                max_relative = 1e-10
            );
        }
    }

    #[test]
    fn sho_variance_is_s0_w0_q() {
        // k(0) = s0 w0 q on both damping branches.
        let under = SHOTerm::new(1.1, 2.0, 3.0).unwrap();
        assert_relative_eq!(under.value(0.0), 1.1 * 2.0 * 3.0, epsilon = 1e-12);

        let over = SHOTerm::new(1.1, 2.0, 0.25).unwrap();
        assert_relative_eq!(over.value(0.0), 1.1 * 2.0 * 0.25, epsilon = 1e-12);
    }

    #[test]
    fn critical_damping_is_continuous() {
        let below = SHOTerm::new(1.0, 2.0, 0.5 - 1e-4).unwrap();
        let above = SHOTerm::new(1.0, 2.0, 0.5 + 1e-4).unwrap();
        for i in 0..20 {
            let tau = 2.0 * i as f64 / 19.0;
            assert_relative_eq!(below.value(tau), above.value(tau), max_relative = 1e-2);
        }
    }

    #[test]
    fn matern_approximates_the_exact_kernel() {
        let (sigma, rho) = (1.4, 2.3);
        let term = Matern32Term::new(sigma, rho).unwrap();
        for i in 0..30 {
            let tau = 5.0 * i as f64 / 29.0;
            let arg = 3.0_f64.sqrt() * tau / rho;
            let exact = sigma * sigma * (1.0 + arg) * (-arg).exp();
            assert_relative_eq!(term.value(tau), exact, epsilon = 1e-3);
        }
    }

    #[test]
    fn complex_term_is_a_damped_oscillation() {
        let term = ComplexTerm::new(1.2, 0.4, 0.6, 2.0).unwrap();
        for i in 0..20 {
            let tau = 3.0 * i as f64 / 19.0;
            let expected =
                (-0.6 * tau).exp() * (1.2 * (2.0 * tau).cos() + 0.4 * (2.0 * tau).sin());
            assert_relative_eq!(term.value(tau), expected, epsilon = 1e-14);
        }

        // With b = d = 0 it collapses to a real exponential.
        let degenerate = ComplexTerm::new(2.0, 0.0, 0.7, 0.0).unwrap();
        let real = RealTerm::new(2.0, 0.7).unwrap();
        assert_relative_eq!(degenerate.value(1.1), real.value(1.1), epsilon = 1e-14);
    }

    #[test]
    fn real_term_is_an_exponential() {
        let term = RealTerm::new(2.0, 0.7).unwrap();
        assert_relative_eq!(term.value(0.0), 2.0);
        assert_relative_eq!(term.value(1.5), 2.0 * (-0.7_f64 * 1.5).exp(), epsilon = 1e-14);
        // Covariance is even in the lag.
        assert_relative_eq!(term.value(-1.5), term.value(1.5));
    }

    #[test]
    fn sums_add_values_and_widths() {
        let sho = SHOTerm::new(1.0, 2.5, 4.0).unwrap();
        let real = RealTerm::new(0.5, 0.3).unwrap();
        let sum = sho + real;

        assert_eq!(sum.n_components(), 2);
        assert_eq!(sum.coefficients().width(), 3);
        for i in 0..10 {
            let tau = i as f64 / 3.0;
            assert_relative_eq!(
                sum.value(tau),
                sho.value(tau) + real.value(tau),
                epsilon = 1e-12
            );
        }

        let triple = sum.clone() + Matern32Term::new(1.0, 1.0).unwrap();
        assert_eq!(triple.n_components(), 3);
        assert_eq!(TermSum::new().n_components(), 0);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert!(SHOTerm::new(-1.0, 2.0, 3.0).is_err());
        assert!(SHOTerm::new(1.0, 2.0, 0.0).is_err());
        assert!(RealTerm::new(1.0, -0.1).is_err());
        assert!(ComplexTerm::new(1.0, 0.0, -1.0, 2.0).is_err());
        assert!(Matern32Term::new(1.0, 0.0).is_err());
        assert!(RealTerm::new(f64::NAN, 1.0).is_err());
    }
}
