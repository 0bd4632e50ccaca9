//! Projection checks against reference positions and across the Sweden envelope.

use geodata_common::{GeoError, Wgs84Point};
use projection::to_sweref99;
use test_utils::assert_grid_point;

/// (lat, lon, easting, northing)
const REFERENCE_POINTS: &[(f64, f64, f64, f64)] = &[
    // Stockholm
    (59.33, 18.07, 674_647.882, 6_580_824.576),
    // Göteborg
    (57.70887, 11.97456, 319_755.489, 6_400_322.805),
    // Malmö
    (55.605, 13.0038, 374_243.759, 6_163_926.553),
    // Umeå
    (63.8258, 20.263, 758_803.435, 7_088_280.798),
    // Kiruna
    (67.8557, 20.2253, 719_584.065, 7_536_058.854),
];

#[test]
fn test_reference_points() {
    for &(lat, lon, e, n) in REFERENCE_POINTS {
        let p = to_sweref99(&Wgs84Point::new(lat, lon)).unwrap();
        assert_grid_point!(p, (e, n), 0.01);
    }
}

#[test]
fn test_envelope_sweep_stays_in_extent() {
    // Lat 55.0 along the central meridian dips just below northing 6 100 000,
    // so the sweep starts a quarter degree north of the envelope edge.
    for i in 1..=56 {
        let lat = 55.0 + i as f64 * 0.25;
        for j in 0..=40 {
            let lon = 11.0 + j as f64 * 0.25;
            let p = to_sweref99(&Wgs84Point::new(lat, lon))
                .unwrap_or_else(|e| panic!("({}, {}) failed: {}", lat, lon, e));
            assert!(p.validate().is_ok());
        }
    }
}

#[test]
fn test_outside_envelope_rejected() {
    let outside = [
        (54.9, 15.0),
        (69.1, 20.0),
        (60.0, 10.9),
        (60.0, 24.1),
        (48.86, 2.35),
        (-59.33, 18.07),
    ];
    for (lat, lon) in outside {
        match to_sweref99(&Wgs84Point::new(lat, lon)) {
            Err(GeoError::Validation(msg)) => {
                assert!(msg.contains("outside valid range for Sweden"), "{}", msg)
            }
            other => panic!("({}, {}) should be rejected, got {:?}", lat, lon, other),
        }
    }
}

#[test]
fn test_northing_increases_with_latitude() {
    let mut previous = f64::MIN;
    for i in 1..=28 {
        let lat = 55.0 + i as f64 * 0.5;
        let p = to_sweref99(&Wgs84Point::new(lat, 16.0)).unwrap();
        assert!(p.y > previous);
        previous = p.y;
    }
}
