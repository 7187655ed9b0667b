mod tests {
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    use crate::distributions::QuadLimbDark;

    #[test]
    fn samples_land_inside_the_allowed_triangle() {
        let prior = QuadLimbDark::new();
        let mut rng = ChaChaRng::seed_from_u64(23);
        for _ in 0..5_000 {
            let (u1, u2) = prior.sample(&mut rng);
            assert!(prior.log_prob(u1, u2) == 0.0, "({u1}, {u2}) outside triangle");
        }
    }

    #[test]
    fn q_mapping_round_trips() {
        let (u1, u2) = QuadLimbDark::from_q(0.36, 0.25);
        assert_relative_eq!(u1, 0.3, epsilon = 1e-12);
        assert_relative_eq!(u2, 0.3, epsilon = 1e-12);

        let (q1, q2) = QuadLimbDark::to_q(u1, u2);
        assert_relative_eq!(q1, 0.36, epsilon = 1e-12);
        assert_relative_eq!(q2, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn unphysical_coefficients_are_rejected() {
        let prior = QuadLimbDark::new();
        // Negative linear coefficient: brightening toward the limb.
        assert!(prior.log_prob(-0.1, 0.3).is_infinite());
        // Total darkening above one: negative intensity at the limb.
        assert!(prior.log_prob(0.8, 0.4).is_infinite());
        // Strongly negative curvature: negative intensity inside the disk.
        assert!(prior.log_prob(0.2, -0.2).is_infinite());
    }
}
