//! WGS84 → SWEREF99TM conversions for points, boxes and corridors.
//!
//! Every conversion validates its input against the Sweden WGS84 envelope
//! before projecting and validates the projected result against the
//! SWEREF99TM extent afterwards.

use std::sync::OnceLock;

use geodata_common::{
    BoundingBox, Corridor, GeoError, GeoResult, Sweref99Point, Wgs84BoundingBox, Wgs84Point,
};
use tracing::debug;

use crate::TransverseMercator;

fn projection() -> &'static TransverseMercator {
    static SWEREF99TM: OnceLock<TransverseMercator> = OnceLock::new();
    SWEREF99TM.get_or_init(TransverseMercator::sweref99tm)
}

/// Convert a WGS84 point to SWEREF99TM.
pub fn to_sweref99(point: &Wgs84Point) -> GeoResult<Sweref99Point> {
    point.validate()?;

    let (x, y) = projection().forward(point.latitude, point.longitude);
    let projected = Sweref99Point::new(x, y);
    projected.validate()?;

    debug!(
        lat = point.latitude,
        lon = point.longitude,
        x,
        y,
        "Projected point to SWEREF99TM"
    );
    Ok(projected)
}

/// Convert a WGS84 bounding box to SWEREF99TM by projecting its corners.
///
/// Meridians converge in the grid, so a geographic rectangle maps to a
/// trapezoid. The result is the envelope of all four projected corners.
pub fn bbox_to_sweref99(bbox: &Wgs84BoundingBox) -> GeoResult<BoundingBox> {
    bbox.validate_order()?;

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for corner in bbox.corners() {
        let p = to_sweref99(&corner)?;
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    BoundingBox::try_new(min_x, min_y, max_x, max_y)
}

/// Convert an ordered WGS84 coordinate sequence (at least two points).
pub fn coordinates_to_sweref99(coordinates: &[Wgs84Point]) -> GeoResult<Vec<Sweref99Point>> {
    if coordinates.len() < 2 {
        return Err(GeoError::validation(format!(
            "Corridor requires at least 2 coordinates, got {}",
            coordinates.len()
        )));
    }
    coordinates.iter().map(to_sweref99).collect()
}

/// Build a SWEREF99TM corridor from WGS84 vertices.
pub fn corridor_from_wgs84(coordinates: &[Wgs84Point], buffer_meters: f64) -> GeoResult<Corridor> {
    Corridor::new(coordinates_to_sweref99(coordinates)?, buffer_meters)
}
