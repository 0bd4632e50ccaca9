//! GetMap and GetLegendGraphic request construction.
//!
//! Both requests are only ever returned to callers as URLs, so these
//! builders are pure and never touch the network.

use geodata_common::{BoundingBox, CrsCode};
use http_transport::QueryParams;

use crate::version::WmsVersion;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_FORMAT: &str = "image/png";
pub const DEFAULT_LEGEND_FORMAT: &str = "image/png";

/// GetMap request parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GetMapOptions {
    /// Upstream layer identifiers, drawn in order
    pub layers: Vec<String>,
    pub bbox: BoundingBox,
    pub crs: CrsCode,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Output MIME type
    pub format: String,
    pub transparent: bool,
    /// One style per layer; empty means server defaults
    pub styles: Vec<String>,
}

impl GetMapOptions {
    pub fn new(layers: Vec<String>, bbox: BoundingBox) -> Self {
        Self {
            layers,
            bbox,
            crs: CrsCode::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            format: DEFAULT_FORMAT.to_string(),
            transparent: true,
            styles: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }
}

/// Parameters shared by GetMap and GetFeatureInfo, in canonical order.
pub(crate) fn map_params(
    version: WmsVersion,
    request: &str,
    options: &GetMapOptions,
) -> QueryParams {
    let rules = version.rules();
    let mut params = QueryParams::new();
    params
        .push("SERVICE", "WMS")
        .push("VERSION", rules.version)
        .push("REQUEST", request)
        .push("LAYERS", options.layers.join(","))
        .push("STYLES", options.styles.join(","))
        .push(rules.crs_key, options.crs)
        .push("BBOX", rules.bbox_value(&options.bbox, &options.crs))
        .push("WIDTH", options.width)
        .push("HEIGHT", options.height)
        .push("FORMAT", &options.format)
        .push("TRANSPARENT", if options.transparent { "TRUE" } else { "FALSE" });
    params
}

pub fn get_map_params(version: WmsVersion, options: &GetMapOptions) -> QueryParams {
    map_params(version, "GetMap", options)
}

pub fn legend_params(version: WmsVersion, layer: &str, format: Option<&str>) -> QueryParams {
    QueryParams::new()
        .with("SERVICE", "WMS")
        .with("VERSION", version.as_str())
        .with("REQUEST", "GetLegendGraphic")
        .with("LAYER", layer)
        .with("FORMAT", format.unwrap_or(DEFAULT_LEGEND_FORMAT))
}
