mod tests {
    use approx::assert_relative_eq;

    use crate::velocity::Velocity;

    #[test]
    fn test_velocity_conversions() {
        let v = Velocity::from_km_per_sec(29.78);
        assert_relative_eq!(v.to_meters_per_sec(), 29_780.0);

        // Earth's orbital velocity is about 0.0172 AU/day
        assert_relative_eq!(v.to_au_per_day(), 0.0172, epsilon = 0.0001);
    }

    #[test]
    fn test_velocity_round_trips() {
        let k = Velocity::from_meters_per_sec(28.4);
        assert_relative_eq!(k.to_meters_per_sec(), 28.4, epsilon = 1e-12);

        let au_day = Velocity::from_au_per_day(0.01);
        assert_relative_eq!(au_day.to_au_per_day(), 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_velocity_arithmetic() {
        let k1 = Velocity::from_meters_per_sec(50.0);
        let k2 = Velocity::from_meters_per_sec(10.0);

        assert_relative_eq!((k1 + k2).to_meters_per_sec(), 60.0);
        assert_relative_eq!((k1 - k2).to_meters_per_sec(), 40.0);
        assert_relative_eq!((k1 * 2.0).to_meters_per_sec(), 100.0);
        assert_relative_eq!((k1 / 5.0).to_meters_per_sec(), 10.0);
        assert_relative_eq!(k1 / k2, 5.0);
    }
}
