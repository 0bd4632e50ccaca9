//! WMS protocol versions and the parameter conventions that differ between them.

use std::fmt;
use std::str::FromStr;

use geodata_common::{AxisOrder, BoundingBox, CrsCode, GeoError};
use serde::{Deserialize, Serialize};

/// Supported WMS versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WmsVersion {
    #[serde(rename = "1.1.1")]
    V1_1_1,
    #[serde(rename = "1.3.0")]
    #[default]
    V1_3_0,
}

/// Everything that changes between WMS versions.
///
/// Request builders never branch on the version directly; they look up
/// the rules once and use these fields.
#[derive(Debug)]
pub struct VersionRules {
    pub version: &'static str,
    /// Name of the coordinate system parameter
    pub crs_key: &'static str,
    /// Name of the pixel column parameter in GetFeatureInfo
    pub pixel_x_key: &'static str,
    /// Name of the pixel row parameter in GetFeatureInfo
    pub pixel_y_key: &'static str,
    axis_order: fn(&CrsCode) -> AxisOrder,
}

static WMS_1_1_1: VersionRules = VersionRules {
    version: "1.1.1",
    crs_key: "SRS",
    pixel_x_key: "X",
    pixel_y_key: "Y",
    axis_order: CrsCode::axis_order_wms_1_1,
};

static WMS_1_3_0: VersionRules = VersionRules {
    version: "1.3.0",
    crs_key: "CRS",
    pixel_x_key: "I",
    pixel_y_key: "J",
    axis_order: CrsCode::axis_order_wms_1_3,
};

impl VersionRules {
    pub fn axis_order(&self, crs: &CrsCode) -> AxisOrder {
        (self.axis_order)(crs)
    }

    /// Serialize a bbox for the `BBOX` parameter in this version's axis order.
    pub fn bbox_value(&self, bbox: &BoundingBox, crs: &CrsCode) -> String {
        match self.axis_order(crs) {
            AxisOrder::XY => format!("{},{},{},{}", bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y),
            AxisOrder::YX => format!("{},{},{},{}", bbox.min_y, bbox.min_x, bbox.max_y, bbox.max_x),
        }
    }
}

impl WmsVersion {
    pub fn rules(&self) -> &'static VersionRules {
        match self {
            WmsVersion::V1_1_1 => &WMS_1_1_1,
            WmsVersion::V1_3_0 => &WMS_1_3_0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.rules().version
    }
}

impl fmt::Display for WmsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WmsVersion {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1.1.1" => Ok(WmsVersion::V1_1_1),
            "1.3.0" => Ok(WmsVersion::V1_3_0),
            other => Err(GeoError::validation(format!(
                "Unsupported WMS version: {} (expected 1.1.1 or 1.3.0)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_1_3_0() {
        assert_eq!(WmsVersion::default(), WmsVersion::V1_3_0);
        assert_eq!(WmsVersion::default().to_string(), "1.3.0");
    }

    #[test]
    fn test_parse_version() {
        assert_eq!("1.1.1".parse::<WmsVersion>().unwrap(), WmsVersion::V1_1_1);
        assert_eq!(" 1.3.0 ".parse::<WmsVersion>().unwrap(), WmsVersion::V1_3_0);
        assert!(matches!(
            "1.0.0".parse::<WmsVersion>(),
            Err(GeoError::Validation(_))
        ));
    }

    #[test]
    fn test_rules_table() {
        let old = WmsVersion::V1_1_1.rules();
        assert_eq!((old.crs_key, old.pixel_x_key, old.pixel_y_key), ("SRS", "X", "Y"));

        let new = WmsVersion::V1_3_0.rules();
        assert_eq!((new.crs_key, new.pixel_x_key, new.pixel_y_key), ("CRS", "I", "J"));
    }

    #[test]
    fn test_bbox_value_axis_order() {
        let bbox = BoundingBox::new(670000.0, 6570000.0, 680000.0, 6590000.0);
        assert_eq!(
            WmsVersion::V1_1_1.rules().bbox_value(&bbox, &CrsCode::Epsg3006),
            "670000,6570000,680000,6590000"
        );
        assert_eq!(
            WmsVersion::V1_3_0.rules().bbox_value(&bbox, &CrsCode::Epsg3006),
            "6570000,670000,6590000,680000"
        );
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&WmsVersion::V1_1_1).unwrap(),
            "\"1.1.1\""
        );
    }
}
