//! Coordinate reference system transformations.
//!
//! Implements the SWEREF99TM projection from scratch without external
//! dependencies, accurate to well below a millimeter inside Sweden.

pub mod sweref99;
pub mod transverse_mercator;

pub use sweref99::{bbox_to_sweref99, coordinates_to_sweref99, corridor_from_wgs84, to_sweref99};
pub use transverse_mercator::TransverseMercator;
