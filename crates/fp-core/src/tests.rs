//! Unit tests for fp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(EdgeId(100) > EdgeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    const AMS: GeoPoint = GeoPoint { lat: 52.308056, lon: 4.764167 };
    const JFK: GeoPoint = GeoPoint { lat: 40.641766, lon: -73.780968 };

    #[test]
    fn zero_distance() {
        assert!(AMS.distance_m(AMS) < 1e-6);
        assert_eq!(AMS.initial_bearing_deg(AMS), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = GeoPoint::new(0.0, 0.0).distance_m(GeoPoint::new(0.0, 1.0));
        assert!((d - 111_195.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn transatlantic_distance_and_bearing() {
        let d = AMS.distance_m(JFK);
        assert!((d - 5_847_550.0).abs() < 1_000.0, "got {d}");
        let b = AMS.initial_bearing_deg(JFK);
        assert!((b - 290.56).abs() < 0.05, "got {b}");
    }

    #[test]
    fn destination_inverts_distance_and_bearing() {
        for &(bearing, dist) in &[(45.0, 10_000.0), (90.0, 500_000.0), (290.5, 2_000_000.0)] {
            let p = AMS.destination(bearing, dist);
            assert!((AMS.distance_m(p) - dist).abs() < 0.01, "distance drift at {bearing}");
            let back = AMS.initial_bearing_deg(p);
            assert!((back - bearing).abs() < 1e-6, "bearing drift: {back} vs {bearing}");
        }
    }

    #[test]
    fn destination_along_bearing_reaches_target() {
        let bearing = AMS.initial_bearing_deg(JFK);
        let p = AMS.destination(bearing, AMS.distance_m(JFK));
        assert!(p.distance_m(JFK) < 1.0, "overshoot {}", p.distance_m(JFK));
    }

    #[test]
    fn midpoint_is_average() {
        let m = GeoPoint::new(50.0, -10.0).midpoint(GeoPoint::new(52.0, -20.0));
        assert_eq!(m, GeoPoint::new(51.0, -15.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{ArrivalWindow, TimeBin, hours_to_secs, secs_to_hours, time_bin};

    #[test]
    fn unit_conversion() {
        assert_eq!(hours_to_secs(2.5), 9_000.0);
        assert_eq!(secs_to_hours(5_400.0), 1.5);
    }

    #[test]
    fn bins_floor() {
        assert_eq!(time_bin(0.0, 100.0), TimeBin(0));
        assert_eq!(time_bin(99.9, 100.0), TimeBin(0));
        assert_eq!(time_bin(100.0, 100.0), TimeBin(1));
        assert_eq!(time_bin(-0.5, 100.0), TimeBin(-1));
    }

    #[test]
    fn infinite_bin_collapses_everything() {
        assert_eq!(time_bin(0.0, f64::INFINITY), TimeBin(0));
        assert_eq!(time_bin(1.0e9, f64::INFINITY), TimeBin(0));
        assert_eq!(time_bin(-0.0, 100.0), TimeBin(0));
    }

    #[test]
    fn window_resolution_and_bounds() {
        let w = ArrivalWindow::from_hours(7.0, 7.5);
        assert!(w.is_valid());
        let abs = w.resolve(hours_to_secs(3.0));
        assert_eq!(abs.earliest_secs, hours_to_secs(10.0));
        assert_eq!(abs.latest_secs, hours_to_secs(10.5));
        assert!(abs.is_too_early(hours_to_secs(9.99)));
        assert!(!abs.is_too_early(hours_to_secs(10.0)));
        assert!(!abs.is_too_late(hours_to_secs(10.5)));
        assert!(abs.is_too_late(hours_to_secs(10.51)));
        assert!(w.contains_elapsed(hours_to_secs(7.0)));
        assert!(w.contains_elapsed(hours_to_secs(7.5)));
    }

    #[test]
    fn invalid_windows() {
        assert!(!ArrivalWindow::new(10.0, 5.0).is_valid());
        assert!(!ArrivalWindow::new(-1.0, 5.0).is_valid());
        assert!(!ArrivalWindow::new(0.0, f64::NAN).is_valid());
        assert!(ArrivalWindow::new(5.0, 5.0).is_valid());
    }
}

#[cfg(test)]
mod rng {
    use crate::SeededRng;

    #[test]
    fn deterministic_same_key() {
        let mut r1 = SeededRng::keyed(12345, 7);
        let mut r2 = SeededRng::keyed(12345, 7);
        for _ in 0..100 {
            let a: f64 = r1.gen_range(0.0..1.0);
            let b: f64 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn keyed_streams_differ() {
        let mut r0 = SeededRng::keyed(1, 0);
        let mut r1 = SeededRng::keyed(1, 1);
        let a: Vec<u64> = (0..4).map(|_| r0.gen_range(0..u64::MAX)).collect();
        let b: Vec<u64> = (0..4).map(|_| r1.gen_range(0..u64::MAX)).collect();
        assert_ne!(a, b, "adjacent keys should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SeededRng::keyed(0, 0);
        for _ in 0..1000 {
            let v = rng.gen_range(-5.0f64..5.0);
            assert!((-5.0..5.0).contains(&v));
        }
    }
}
