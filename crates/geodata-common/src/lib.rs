//! Common types and utilities shared across the SGU geodata crates.
//!
//! Coordinates live in two non-interchangeable systems: [`Wgs84Point`] for
//! caller-supplied latitude/longitude and [`Sweref99Point`] for the Swedish
//! national grid the upstream services speak. Crossing between them is the
//! job of the `projection` crate.

pub mod bbox;
pub mod corridor;
pub mod crs;
pub mod error;
pub mod point;

pub use bbox::{BoundingBox, Dimensions, Wgs84BoundingBox};
pub use corridor::{corridor_to_bounding_box, corridor_to_wkt_polygon, Corridor};
pub use crs::{AxisOrder, CrsCode};
pub use error::{GeoError, GeoResult};
pub use point::{Sweref99Point, Wgs84Point};
