mod tests {
    use approx::assert_relative_eq;
    use units::Time;

    use crate::orbits::{OrbitError, SimpleTransitOrbit, TransitOrbit};

    fn orbit() -> SimpleTransitOrbit {
        SimpleTransitOrbit::new(
            Time::from_days(2.0),
            Time::from_days(0.7),
            Time::from_hours(3.0),
            0.25,
        )
        .unwrap()
    }

    #[test]
    fn center_crossing_at_t0() {
        let [x, y, z] = orbit().position(Time::from_days(0.7));
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(y, 0.25);
        assert!(z > 0.0);
    }

    #[test]
    fn chord_is_crossed_in_exactly_one_duration() {
        let orbit = orbit();
        let half = orbit.duration() / 2.0;
        let half_chord = (1.0 - 0.25_f64 * 0.25).sqrt();

        let [x, _, z] = orbit.position(Time::from_days(0.7) + half);
        assert_relative_eq!(x, half_chord, epsilon = 1e-12);
        assert!(z > 0.0, "still in front at last contact of the center");

        let just_outside = Time::from_days(0.7) + half * 1.01;
        assert!(!orbit.in_front(just_outside));
    }

    #[test]
    fn pattern_repeats_each_period() {
        let orbit = orbit();
        let t = Time::from_days(0.7 + 3.0 * 2.0);
        assert_relative_eq!(orbit.sky_distance(t), 0.25, epsilon = 1e-12);
        assert!(orbit.in_front(t));
    }

    #[test]
    fn rejects_degenerate_geometry() {
        let p = Time::from_days(2.0);
        let t0 = Time::zero();
        let d = Time::from_hours(3.0);

        assert!(matches!(
            SimpleTransitOrbit::new(p, t0, d, 1.0),
            Err(OrbitError::GrazingImpactParameter(_))
        ));
        assert!(matches!(
            SimpleTransitOrbit::new(p, t0, Time::from_days(2.5), 0.2),
            Err(OrbitError::InvalidDuration)
        ));
        assert!(matches!(
            SimpleTransitOrbit::new(Time::zero(), t0, d, 0.2),
            Err(OrbitError::NonPositivePeriod(_))
        ));
    }
}
