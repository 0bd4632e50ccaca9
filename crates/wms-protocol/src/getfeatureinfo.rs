//! WMS GetFeatureInfo request construction
//!
//! A GetFeatureInfo request repeats the GetMap description of the image and
//! adds the pixel to query, whose parameter names depend on the version.

use crate::getmap::{map_params, GetMapOptions};
use crate::version::WmsVersion;
use http_transport::QueryParams;

/// Responses are always requested as JSON; the client decodes them with serde.
pub const INFO_FORMAT: &str = "application/json";

/// GetFeatureInfo request parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GetFeatureInfoOptions {
    /// The map the pixel belongs to
    pub map: GetMapOptions,
    /// Layers to query; defaults to the map layers when empty
    pub query_layers: Vec<String>,
    /// Pixel column (0-based from left)
    pub i: u32,
    /// Pixel row (0-based from top)
    pub j: u32,
    /// Maximum number of features to return
    pub feature_count: u32,
}

impl GetFeatureInfoOptions {
    /// Query the pixel at (`i`, `j`) of `map`.
    pub fn new(map: GetMapOptions, i: u32, j: u32) -> Self {
        Self {
            map,
            query_layers: Vec::new(),
            i,
            j,
            feature_count: 1,
        }
    }

    /// Query the centre pixel of `map`.
    pub fn center_of(map: GetMapOptions) -> Self {
        let (i, j) = (map.width / 2, map.height / 2);
        Self::new(map, i, j)
    }

    fn query_layers(&self) -> &[String] {
        if self.query_layers.is_empty() {
            &self.map.layers
        } else {
            &self.query_layers
        }
    }
}

pub fn feature_info_params(version: WmsVersion, options: &GetFeatureInfoOptions) -> QueryParams {
    let rules = version.rules();
    let mut params = map_params(version, "GetFeatureInfo", &options.map);
    params
        .push("QUERY_LAYERS", options.query_layers().join(","))
        .push("INFO_FORMAT", INFO_FORMAT)
        .push("FEATURE_COUNT", options.feature_count)
        .push(rules.pixel_x_key, options.i)
        .push(rules.pixel_y_key, options.j);
    params
}
