//! Bounding box types and operations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GeoError, GeoResult};
use crate::point::{Sweref99Point, Wgs84Point};

/// A SWEREF99TM bounding box in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Width and height of a bounding box in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates without validating it.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a bounding box and validate it in one step.
    pub fn try_new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> GeoResult<Self> {
        let bbox = Self::new(min_x, min_y, max_x, max_y);
        bbox.validate()?;
        Ok(bbox)
    }

    /// A square box of `2 * half_size` meters centered on `point`.
    pub fn around_point(point: &Sweref99Point, half_size: f64) -> Self {
        Self::new(
            point.x - half_size,
            point.y - half_size,
            point.x + half_size,
            point.y + half_size,
        )
    }

    /// Check ordering of both axes and that both corners fall inside the
    /// SWEREF99TM extent.
    pub fn validate(&self) -> GeoResult<()> {
        if !(self.min_x < self.max_x) {
            return Err(GeoError::validation(format!(
                "Invalid bounding box: minX must be less than maxX (minX={}, maxX={})",
                self.min_x, self.max_x
            )));
        }
        if !(self.min_y < self.max_y) {
            return Err(GeoError::validation(format!(
                "Invalid bounding box: minY must be less than maxY (minY={}, maxY={})",
                self.min_y, self.max_y
            )));
        }
        self.lower_left().validate()?;
        self.upper_right().validate()?;
        Ok(())
    }

    pub fn lower_left(&self) -> Sweref99Point {
        Sweref99Point::new(self.min_x, self.min_y)
    }

    pub fn upper_right(&self) -> Sweref99Point {
        Sweref99Point::new(self.max_x, self.max_y)
    }

    /// Closed WKT polygon tracing the corners counter-clockwise.
    pub fn to_wkt(&self) -> String {
        format!(
            "POLYGON(({minx} {miny}, {maxx} {miny}, {maxx} {maxy}, {minx} {maxy}, {minx} {miny}))",
            minx = self.min_x,
            miny = self.min_y,
            maxx = self.max_x,
            maxy = self.max_y
        )
    }

    /// OGC API `bbox` query value: "minX,minY,maxX,maxY".
    pub fn to_ogc_string(&self) -> String {
        format!("{},{},{},{}", self.min_x, self.min_y, self.max_x, self.max_y)
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.max_x - self.min_x,
            height: self.max_y - self.min_y,
        }
    }

    pub fn center(&self) -> Sweref99Point {
        Sweref99Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Check whether `other` lies entirely inside this box (edges included).
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ogc_string())
    }
}

/// A WGS84 bounding box in degrees, as supplied by callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wgs84BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl Wgs84BoundingBox {
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    /// Check min/max ordering. Range checks happen per corner on transform.
    pub fn validate_order(&self) -> GeoResult<()> {
        if !(self.min_lat < self.max_lat) {
            return Err(GeoError::validation(format!(
                "Invalid bounding box: minLat must be less than maxLat (minLat={}, maxLat={})",
                self.min_lat, self.max_lat
            )));
        }
        if !(self.min_lon < self.max_lon) {
            return Err(GeoError::validation(format!(
                "Invalid bounding box: minLon must be less than maxLon (minLon={}, maxLon={})",
                self.min_lon, self.max_lon
            )));
        }
        Ok(())
    }

    pub fn south_west(&self) -> Wgs84Point {
        Wgs84Point::new(self.min_lat, self.min_lon)
    }

    pub fn north_east(&self) -> Wgs84Point {
        Wgs84Point::new(self.max_lat, self.max_lon)
    }

    /// SW, SE, NE, NW.
    pub fn corners(&self) -> [Wgs84Point; 4] {
        [
            self.south_west(),
            Wgs84Point::new(self.min_lat, self.max_lon),
            self.north_east(),
            Wgs84Point::new(self.max_lat, self.min_lon),
        ]
    }
}
