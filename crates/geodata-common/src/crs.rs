//! Coordinate Reference System codes and axis-order rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// CRS codes understood by the upstream SGU services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CrsCode {
    /// SWEREF99TM, the Swedish national grid (meters, northing/easting)
    #[default]
    Epsg3006,
    /// WGS84 Geographic (lat/lon in degrees)
    Epsg4326,
}

impl CrsCode {
    /// Axis order for this CRS in WMS 1.3.0.
    ///
    /// WMS 1.3.0 follows the axis order declared by the CRS definition.
    /// Both EPSG:3006 (northing, easting) and EPSG:4326 (lat, lon) put
    /// the y axis first.
    pub fn axis_order_wms_1_3(&self) -> AxisOrder {
        match self {
            CrsCode::Epsg3006 | CrsCode::Epsg4326 => AxisOrder::YX,
        }
    }

    /// Axis order for WMS 1.1.1 (always x, y regardless of CRS).
    pub fn axis_order_wms_1_1(&self) -> AxisOrder {
        AxisOrder::XY
    }
}

impl fmt::Display for CrsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            CrsCode::Epsg3006 => "EPSG:3006",
            CrsCode::Epsg4326 => "EPSG:4326",
        };
        write!(f, "{}", code)
    }
}

/// Axis order for coordinate serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrder {
    /// X (easting/longitude) first
    XY,
    /// Y (northing/latitude) first
    YX,
}
