//! Corridors: buffered polylines in SWEREF99TM.
//!
//! A corridor is a linear feature (road, pipeline, cable route) plus a
//! lateral tolerance. It is consumed in one of two ways:
//! - [`Corridor::to_bounding_box`]: the buffered envelope, fast and coarse
//! - [`Corridor::to_wkt_polygon`]: an offset outline for precise filtering
//!
//! The outline is built from one left and one right offset point per vertex,
//! using the sum of the incoming and outgoing segment vectors as the local
//! direction. This is an angle-bisector approximation, not a mitered buffer,
//! and sharply bent corridors can produce a self-intersecting ring.

use crate::bbox::BoundingBox;
use crate::error::{GeoError, GeoResult};
use crate::point::Sweref99Point;

/// An ordered SWEREF99TM polyline with a buffer distance in meters.
#[derive(Debug, Clone, PartialEq)]
pub struct Corridor {
    coordinates: Vec<Sweref99Point>,
    buffer_meters: f64,
}

impl Corridor {
    /// Create a corridor, requiring at least two vertices and a positive buffer.
    pub fn new(coordinates: Vec<Sweref99Point>, buffer_meters: f64) -> GeoResult<Self> {
        check_inputs(&coordinates, buffer_meters)?;
        Ok(Self {
            coordinates,
            buffer_meters,
        })
    }

    pub fn coordinates(&self) -> &[Sweref99Point] {
        &self.coordinates
    }

    pub fn buffer_meters(&self) -> f64 {
        self.buffer_meters
    }

    pub fn to_bounding_box(&self) -> GeoResult<BoundingBox> {
        corridor_to_bounding_box(&self.coordinates, self.buffer_meters)
    }

    pub fn to_wkt_polygon(&self) -> GeoResult<String> {
        corridor_to_wkt_polygon(&self.coordinates, self.buffer_meters)
    }
}

fn check_inputs(coordinates: &[Sweref99Point], buffer_meters: f64) -> GeoResult<()> {
    if coordinates.len() < 2 {
        return Err(GeoError::validation(format!(
            "Corridor requires at least 2 coordinates, got {}",
            coordinates.len()
        )));
    }
    if !(buffer_meters > 0.0) || !buffer_meters.is_finite() {
        return Err(GeoError::validation(format!(
            "Corridor bufferMeters must be a positive number, got {}",
            buffer_meters
        )));
    }
    Ok(())
}

/// Axis-aligned envelope of all vertices, grown by `buffer_meters` on every side.
pub fn corridor_to_bounding_box(
    coordinates: &[Sweref99Point],
    buffer_meters: f64,
) -> GeoResult<BoundingBox> {
    check_inputs(coordinates, buffer_meters)?;

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for p in coordinates {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    Ok(BoundingBox::new(
        min_x - buffer_meters,
        min_y - buffer_meters,
        max_x + buffer_meters,
        max_y + buffer_meters,
    ))
}

/// Direction vector at vertex `i`: forward difference at the start, backward
/// at the end, incoming plus outgoing in between.
fn vertex_direction(coordinates: &[Sweref99Point], i: usize) -> (f64, f64) {
    let last = coordinates.len() - 1;
    let diff = |a: &Sweref99Point, b: &Sweref99Point| (b.x - a.x, b.y - a.y);

    if i == 0 {
        diff(&coordinates[0], &coordinates[1])
    } else if i == last {
        diff(&coordinates[last - 1], &coordinates[last])
    } else {
        let (ix, iy) = diff(&coordinates[i - 1], &coordinates[i]);
        let (ox, oy) = diff(&coordinates[i], &coordinates[i + 1]);
        (ix + ox, iy + oy)
    }
}

/// Offset outline of the corridor as a closed WKT polygon.
///
/// Vertices with a zero-length direction vector are skipped. Fails when fewer
/// than two vertices survive, since no ring can be formed.
pub fn corridor_to_wkt_polygon(
    coordinates: &[Sweref99Point],
    buffer_meters: f64,
) -> GeoResult<String> {
    check_inputs(coordinates, buffer_meters)?;

    let mut left = Vec::with_capacity(coordinates.len());
    let mut right = Vec::with_capacity(coordinates.len());

    for (i, p) in coordinates.iter().enumerate() {
        let (dx, dy) = vertex_direction(coordinates, i);
        let len = dx.hypot(dy);
        if len == 0.0 {
            continue;
        }

        // Rotate 90° counter-clockwise for the left-hand normal
        let (px, py) = (-dy / len, dx / len);
        left.push((p.x + buffer_meters * px, p.y + buffer_meters * py));
        right.push((p.x - buffer_meters * px, p.y - buffer_meters * py));
    }

    if left.len() < 2 {
        return Err(GeoError::validation(
            "Corridor polygon is degenerate: fewer than 2 distinct vertices",
        ));
    }

    let ring: Vec<String> = left
        .iter()
        .chain(right.iter().rev())
        .chain(left.first())
        .map(|(x, y)| format!("{} {}", x, y))
        .collect();

    Ok(format!("POLYGON(({}))", ring.join(", ")))
}
