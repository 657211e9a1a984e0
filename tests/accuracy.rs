use cncoord::{Bd09, Gcj02, Wgs84};

/// Tolerance for pinned fixtures, generated with a reference run of the
/// widely used coordtransform algorithm.
const FIXTURE_TOLERANCE: f64 = 1e-9;

#[test]
fn wgs84_to_gcj02_reference_points() {
    // (wgs lat, wgs lon, gcj lat, gcj lon)
    let cases = [
        (39.915, 116.404, 39.91640428150164, 116.41024449916938),
        (31.2304, 121.4737, 31.22845773757727, 121.47822305927693),
        (23.1291, 113.2644, 23.126423339922844, 113.26972959210308),
        (43.8256, 87.6168, 43.82680539311119, 87.61964994946926),
        (29.6525, 91.1175, 29.64979317952318, 91.11906020564865),
    ];

    for (wgs_lat, wgs_lon, gcj_lat, gcj_lon) in cases {
        let converted = Wgs84::create(wgs_lat, wgs_lon).unwrap().to_gcj02();

        assert!(
            (converted.latitude() - gcj_lat).abs() < FIXTURE_TOLERANCE,
            "latitude off for ({wgs_lat}, {wgs_lon}): got {}", converted.latitude()
        );
        assert!(
            (converted.longitude() - gcj_lon).abs() < FIXTURE_TOLERANCE,
            "longitude off for ({wgs_lat}, {wgs_lon}): got {}", converted.longitude()
        );
    }
}

#[test]
fn gcj02_to_bd09_reference_points() {
    // (gcj lat, gcj lon, bd lat, bd lon)
    let cases = [
        (39.915, 116.404, 39.92133699351021, 116.41036949371029),
        (31.2304, 121.4737, 31.2363348197937, 121.48023740342614),
        (43.8256, 87.6168, 43.83177625779308, 87.62323360789793),
    ];

    for (gcj_lat, gcj_lon, bd_lat, bd_lon) in cases {
        let converted = Gcj02::create(gcj_lat, gcj_lon).unwrap().to_bd09();

        assert!((converted.latitude() - bd_lat).abs() < FIXTURE_TOLERANCE);
        assert!((converted.longitude() - bd_lon).abs() < FIXTURE_TOLERANCE);
    }
}

#[test]
fn bd09_to_gcj02_reference_point() {
    let converted = Bd09::create(39.915, 116.404).unwrap().to_gcj02();

    assert!((converted.latitude() - 39.90865673957631).abs() < FIXTURE_TOLERANCE);
    assert!((converted.longitude() - 116.39762729119315).abs() < FIXTURE_TOLERANCE);
}

#[test]
fn gcj02_to_wgs84_reference_point() {
    let converted = Gcj02::create(39.915, 116.404).unwrap().to_wgs84();

    assert!((converted.latitude() - 39.91359571849836).abs() < FIXTURE_TOLERANCE);
    assert!((converted.longitude() - 116.39775550083061).abs() < FIXTURE_TOLERANCE);
}

#[test]
fn china_gate_is_an_open_interval() {
    // Points exactly on the box edges count as outside, so the offset is
    // not applied and the conversion is an exact identity
    let edges = [(30.0, 73.66), (30.0, 135.05), (3.86, 100.0), (53.55, 100.0)];

    for (lat, lon) in edges {
        let converted = Wgs84::create(lat, lon).unwrap().to_gcj02();

        assert_eq!(converted.latitude(), lat);
        assert_eq!(converted.longitude(), lon);
    }

    // A thousandth of a degree inside, it is applied to both axes
    let inside = [(30.0, 73.661), (30.0, 135.049), (3.861, 100.0), (53.549, 100.0)];

    for (lat, lon) in inside {
        let converted = Wgs84::create(lat, lon).unwrap().to_gcj02();

        assert_ne!(converted.latitude(), lat);
        assert_ne!(converted.longitude(), lon);
    }
}

#[test]
fn identity_outside_china() {
    // New York, Sydney, Null Island, London
    let points = [
        (40.748333, -73.985278),
        (-33.8688, 151.2093),
        (0.0, 0.0),
        (51.5074, -0.1278),
    ];

    for (lat, lon) in points {
        let gcj = Wgs84::create(lat, lon).unwrap().to_gcj02();
        assert_eq!(gcj.latitude(), lat);
        assert_eq!(gcj.longitude(), lon);

        let wgs = Gcj02::create(lat, lon).unwrap().to_wgs84();
        assert_eq!(wgs.latitude(), lat);
        assert_eq!(wgs.longitude(), lon);
    }
}

#[test]
fn round_trips_are_approximate() {
    // In-China sample, including points close to the box corners
    let points = [
        (39.915, 116.404),
        (31.2304, 121.4737),
        (43.8256, 87.6168),
        (4.0, 74.0),
        (53.4, 134.9),
    ];

    for (lat, lon) in points {
        // The two BD09 directions are independent definitions, not exact
        // algebraic inverses
        let round_trip = Bd09::create(lat, lon).unwrap().to_gcj02().to_bd09();

        assert!((round_trip.latitude() - lat).abs() < 1e-5);
        assert!((round_trip.longitude() - lon).abs() < 1e-5);

        // The WGS84 inverse evaluates the offset at the shifted point, so
        // it recovers the original to within a couple of meters only
        let original = Wgs84::create(lat, lon).unwrap();
        let round_trip = original.to_gcj02().to_wgs84();

        assert!((round_trip.latitude() - lat).abs() < 1e-4);
        assert!((round_trip.longitude() - lon).abs() < 1e-4);
        assert!(original.haversine(&round_trip) < 5.0);
    }
}

#[test]
fn obfuscation_offset_is_bounded() {
    let points = [
        (39.915, 116.404),
        (31.2304, 121.4737),
        (23.1291, 113.2644),
        (29.6525, 91.1175),
        (4.0, 74.0),
        (53.5, 135.0),
    ];

    for (lat, lon) in points {
        let gcj = Wgs84::create(lat, lon).unwrap().to_gcj02();

        assert!((gcj.latitude() - lat).abs() < 0.01);
        assert!((gcj.longitude() - lon).abs() < 0.01);
    }
}

#[test]
fn conversions_are_deterministic() {
    let coord = Wgs84::create(39.915, 116.404).unwrap();

    let first = coord.to_gcj02();
    let second = coord.to_gcj02();
    assert_eq!(first.latitude().to_bits(), second.latitude().to_bits());
    assert_eq!(first.longitude().to_bits(), second.longitude().to_bits());

    let first = coord.to_bd09();
    let second = coord.to_bd09();
    assert_eq!(first.latitude().to_bits(), second.latitude().to_bits());
    assert_eq!(first.longitude().to_bits(), second.longitude().to_bits());
}

#[test]
fn parse_str_round_trips_display() {
    let coord = Wgs84::create(39.915, 116.404).unwrap();
    let parsed = Wgs84::parse_str(&coord.to_string()).unwrap();

    assert_eq!(parsed.latitude(), coord.latitude());
    assert_eq!(parsed.longitude(), coord.longitude());

    let parsed: Bd09 = cncoord::from_str("39.915, 116.404").unwrap();
    assert_eq!(parsed.latitude(), 39.915);

    assert!(Wgs84::parse_str("39.915").is_err());
    assert!(Gcj02::parse_str("39.915 not-a-number").is_err());
    assert!(Bd09::parse_str("39.915 116.404 7.0").is_err());
    assert!(Wgs84::parse_str("100.0 116.404").is_err());
}
