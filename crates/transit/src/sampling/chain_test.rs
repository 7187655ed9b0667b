mod tests {
    use approx::assert_relative_eq;

    use crate::sampling::Chain;

    /// Two steps of three 2-parameter walkers with easy-to-spot values.
    fn example_chain() -> Chain {
        let mut chain = Chain::with_capacity(2, 3, 2);
        chain.record(
            &[vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0, 30.0]],
            &[-1.0, -2.0, -3.0],
        );
        chain.record(
            &[vec![4.0, 40.0], vec![5.0, 50.0], vec![6.0, 60.0]],
            &[-4.0, -5.0, -6.0],
        );
        chain
    }

    #[test]
    fn shape_accessors() {
        let chain = example_chain();
        assert_eq!(chain.ndim(), 2);
        assert_eq!(chain.n_walkers(), 3);
        assert_eq!(chain.n_steps(), 2);
        assert_eq!(chain.log_probs(), &[-1.0, -2.0, -3.0, -4.0, -5.0, -6.0]);
    }

    #[test]
    fn parameter_flattens_walkers_in_step_order() {
        let chain = example_chain();
        assert_eq!(chain.parameter(0, 0), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(chain.parameter(1, 0), vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
    }

    #[test]
    fn discard_drops_whole_steps() {
        let chain = example_chain();
        assert_eq!(chain.parameter(1, 1), vec![40.0, 50.0, 60.0]);
        assert!(chain.parameter(0, 5).is_empty());
        assert!(chain.mean(0, 5).is_nan());
    }

    #[test]
    fn moments_match_hand_computation() {
        let chain = example_chain();
        assert_relative_eq!(chain.mean(0, 0), 3.5, epsilon = 1e-12);
        // Unbiased variance of 1..=6 is 3.5.
        assert_relative_eq!(chain.std_dev(0, 0), 3.5_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(chain.mean(1, 1), 50.0, epsilon = 1e-12);
    }

    #[test]
    fn last_positions_reproduce_the_final_step() {
        let chain = example_chain();
        assert_eq!(
            chain.last_positions(),
            vec![vec![4.0, 40.0], vec![5.0, 50.0], vec![6.0, 60.0]]
        );

        let empty = Chain::with_capacity(2, 3, 0);
        assert!(empty.last_positions().is_empty());
        assert_eq!(empty.n_steps(), 0);
    }

    #[test]
    fn acceptance_fraction_tracks_counts() {
        let mut chain = example_chain();
        assert_relative_eq!(chain.acceptance_fraction(), 0.0);
        chain.count_proposals(30, 60);
        assert_relative_eq!(chain.acceptance_fraction(), 0.5);
        chain.count_proposals(0, 60);
        assert_relative_eq!(chain.acceptance_fraction(), 0.25);
    }
}
