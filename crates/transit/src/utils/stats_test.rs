mod tests {
    use approx::assert_relative_eq;

    use crate::utils::stats::{mean, median, std_dev, variance, weighted_mean};

    #[test]
    fn mean_and_variance() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&values), 5.0, epsilon = 1e-12);
        assert_relative_eq!(variance(&values), 32.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(std_dev(&values), (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn median_even_and_odd_lengths() {
        assert_relative_eq!(median(&[5.0, 1.0, 3.0]), 3.0);
        assert_relative_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn weighted_mean_favors_precise_points() {
        // Second point carries 100x the weight of the first.
        let w = weighted_mean(&[0.0, 1.0], &[1.0, 0.1]);
        assert_relative_eq!(w, 100.0 / 101.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_input_yields_nan() {
        assert!(mean(&[]).is_nan());
        assert!(variance(&[1.0]).is_nan());
        assert!(median(&[]).is_nan());
    }
}
