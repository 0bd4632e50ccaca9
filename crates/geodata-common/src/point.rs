//! Point types for the two coordinate systems in play.
//!
//! The two types are deliberately distinct: a function taking a
//! [`Sweref99Point`] cannot be handed raw latitude/longitude by accident.

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, GeoResult};

/// Approximate Sweden envelope in WGS84 degrees.
pub const WGS84_LAT_RANGE: (f64, f64) = (55.0, 69.0);
pub const WGS84_LON_RANGE: (f64, f64) = (11.0, 24.0);

/// Valid SWEREF99TM extent in meters.
pub const SWEREF99_X_RANGE: (f64, f64) = (200_000.0, 1_000_000.0);
pub const SWEREF99_Y_RANGE: (f64, f64) = (6_100_000.0, 7_700_000.0);

/// A WGS84 geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wgs84Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Wgs84Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that the point lies inside the Sweden envelope.
    pub fn validate(&self) -> GeoResult<()> {
        let (min_lat, max_lat) = WGS84_LAT_RANGE;
        let (min_lon, max_lon) = WGS84_LON_RANGE;

        if !(min_lat..=max_lat).contains(&self.latitude) {
            return Err(GeoError::validation(format!(
                "Latitude {} is outside valid range for Sweden ({} to {})",
                self.latitude, min_lat, max_lat
            )));
        }
        if !(min_lon..=max_lon).contains(&self.longitude) {
            return Err(GeoError::validation(format!(
                "Longitude {} is outside valid range for Sweden ({} to {})",
                self.longitude, min_lon, max_lon
            )));
        }
        Ok(())
    }
}

/// A SWEREF99TM (EPSG:3006) position in meters.
///
/// `x` is easting, `y` is northing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sweref99Point {
    pub x: f64,
    pub y: f64,
}

impl Sweref99Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check that the point lies inside the SWEREF99TM extent.
    pub fn validate(&self) -> GeoResult<()> {
        let (min_x, max_x) = SWEREF99_X_RANGE;
        let (min_y, max_y) = SWEREF99_Y_RANGE;

        if !(min_x..=max_x).contains(&self.x) {
            return Err(GeoError::validation(format!(
                "SWEREF99TM x (easting) {} is outside valid range for Sweden ({} to {})",
                self.x, min_x, max_x
            )));
        }
        if !(min_y..=max_y).contains(&self.y) {
            return Err(GeoError::validation(format!(
                "SWEREF99TM y (northing) {} is outside valid range for Sweden ({} to {})",
                self.y, min_y, max_y
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wgs84_envelope() {
        assert!(Wgs84Point::new(59.33, 18.07).validate().is_ok());
        assert!(Wgs84Point::new(55.0, 11.0).validate().is_ok());
        assert!(Wgs84Point::new(69.0, 24.0).validate().is_ok());

        let err = Wgs84Point::new(48.86, 2.35).validate().unwrap_err();
        assert!(err.to_string().contains("outside valid range for Sweden"));

        assert!(Wgs84Point::new(60.0, 25.0).validate().is_err());
        assert!(Wgs84Point::new(f64::NAN, 15.0).validate().is_err());
    }

    #[test]
    fn test_sweref99_extent() {
        assert!(Sweref99Point::new(674_000.0, 6_580_000.0).validate().is_ok());
        assert!(Sweref99Point::new(199_999.0, 6_580_000.0).validate().is_err());
        assert!(Sweref99Point::new(674_000.0, 7_700_001.0).validate().is_err());
    }
}
