//! Test support for the SGU geodata workspace.
//!
//! - [`MockTransport`] replays scripted upstream responses and records
//!   every request it receives
//! - [`query_pairs`] / [`query_value`] pick apart the URLs the clients build
//! - [`fixtures`] holds representative SGU payloads
//!
//! Pull it in as a dev-dependency:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod mock;

pub use mock::{query_pairs, query_value, MockTransport};

/// Assert that a projected point lies within `tolerance` meters of an
/// expected `(easting, northing)` on both axes.
///
/// ```ignore
/// use test_utils::assert_grid_point;
///
/// assert_grid_point!(point, (674_647.882, 6_580_824.576), 0.01);
/// ```
#[macro_export]
macro_rules! assert_grid_point {
    ($point:expr, ($easting:expr, $northing:expr), $tolerance:expr) => {{
        let point = $point;
        let (easting, northing): (f64, f64) = ($easting, $northing);
        let tolerance: f64 = $tolerance;
        let de = (point.x - easting).abs();
        let dn = (point.y - northing).abs();
        if de > tolerance || dn > tolerance {
            panic!(
                "grid point ({}, {}) is off expected ({}, {}) by ({:.4}, {:.4}) m, tolerance {} m",
                point.x, point.y, easting, northing, de, dn, tolerance
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    use geodata_common::Sweref99Point;

    #[test]
    fn test_grid_point_within_tolerance() {
        assert_grid_point!(
            Sweref99Point::new(674647.8821, 6580824.57),
            (674647.88, 6580824.576),
            0.01
        );
    }

    #[test]
    #[should_panic(expected = "is off expected")]
    fn test_grid_point_outside_tolerance() {
        assert_grid_point!(
            Sweref99Point::new(670000.0, 6570000.6),
            (670000.0, 6570000.0),
            0.5
        );
    }
}
