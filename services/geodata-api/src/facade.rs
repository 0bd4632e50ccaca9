//! Layer-level geodata queries.
//!
//! The facade resolves a logical layer name through the static layer table,
//! builds the matching protocol client for that request and shapes the
//! upstream response. Nothing is cached between calls.

use std::sync::Arc;
use std::time::Duration;

use features_protocol::{FeatureCollection, FeaturesClient, ItemsQuery, DEFAULT_LIMIT};
use geodata_common::{
    BoundingBox, Corridor, CrsCode, GeoError, GeoResult, Sweref99Point, Wgs84BoundingBox,
    Wgs84Point,
};
use http_transport::{HttpClient, Transport, DEFAULT_TIMEOUT};
use metrics::counter;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use wms_protocol::{GetFeatureInfoOptions, GetMapOptions, NamedLayer, WmsClient};

use crate::layers::{find_layer, FeaturesSource, LayerDescriptor, LayerSummary, LAYERS};
use crate::shaping::{shape_collection, shape_point, ShapedRecord};

/// Half the side of the box drawn around a queried point.
pub const POINT_QUERY_HALF_SIZE_M: f64 = 100.0;
/// Width and height of the virtual image used for point queries.
pub const POINT_QUERY_IMAGE_PX: u32 = 256;
pub const MAX_FEATURE_LIMIT: u32 = 1000;
pub const MAX_IMAGE_PX: u32 = 4096;

/// The ways a caller can describe an area.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaInput {
    Bbox(BoundingBox),
    Wgs84Bbox(Wgs84BoundingBox),
    Corridor(Corridor),
}

#[derive(Debug, Clone, Default)]
pub struct AreaFeatureRequest {
    pub bbox: Option<BoundingBox>,
    pub corridor: Option<Corridor>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaFeatures {
    pub layer: String,
    pub features: Vec<ShapedRecord>,
    /// Whether the corridor polygon filter produced this result
    pub used_polygon_filter: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_matched: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct MapImageOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapImage {
    pub map_url: String,
    pub legend_url: String,
    pub bbox: BoundingBox,
    pub coordinate_system: String,
    pub layers: Vec<String>,
}

pub struct GeodataFacade {
    transport: Arc<dyn Transport>,
    timeout: Duration,
}

impl GeodataFacade {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Per-request upstream timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn http(&self, base_url: &str) -> HttpClient {
        HttpClient::new(base_url, Arc::clone(&self.transport)).with_timeout(self.timeout)
    }

    fn wms_client(&self, layer: &LayerDescriptor) -> WmsClient {
        WmsClient::new(self.http(layer.wms_url), layer.wms_version)
    }

    fn features_client(&self, source: &FeaturesSource) -> FeaturesClient {
        FeaturesClient::new(self.http(source.url))
    }

    pub fn list_layers(&self) -> Vec<LayerSummary> {
        LAYERS.iter().map(LayerSummary::from).collect()
    }

    pub fn transform_point(&self, point: &Wgs84Point) -> GeoResult<Sweref99Point> {
        counter!("geodata_queries_total", "operation" => "transform_point").increment(1);
        projection::to_sweref99(point)
    }

    /// Resolve any area description to a validated SWEREF99TM box.
    pub fn build_bounding_box(&self, input: &AreaInput) -> GeoResult<BoundingBox> {
        counter!("geodata_queries_total", "operation" => "build_bounding_box").increment(1);
        let bbox = match input {
            AreaInput::Bbox(bbox) => *bbox,
            AreaInput::Wgs84Bbox(bbox) => projection::bbox_to_sweref99(bbox)?,
            AreaInput::Corridor(corridor) => corridor.to_bounding_box()?,
        };
        bbox.validate()?;
        Ok(bbox)
    }

    /// Vector features of `layer` inside a bbox or along a corridor.
    ///
    /// With a corridor, the precise corridor polygon is tried first as a CQL
    /// filter. If the polygon cannot be built, or the filtered query fails,
    /// the corridor's bounding box is used instead and `used_polygon_filter`
    /// is false.
    #[instrument(skip(self, request), fields(corridor = request.corridor.is_some()))]
    pub async fn query_area_features(
        &self,
        layer: &str,
        request: AreaFeatureRequest,
    ) -> GeoResult<AreaFeatures> {
        counter!("geodata_queries_total", "operation" => "area_features").increment(1);
        let descriptor = find_layer(layer)?;
        let source = descriptor.features.as_ref().ok_or_else(|| {
            GeoError::validation(format!(
                "Layer '{}' does not support area feature queries; request a map image instead",
                layer
            ))
        })?;

        let bbox = match (&request.bbox, &request.corridor) {
            (Some(bbox), _) => *bbox,
            (None, Some(corridor)) => corridor.to_bounding_box()?,
            (None, None) => {
                return Err(GeoError::validation(
                    "Either a bounding box or a corridor is required",
                ))
            }
        };
        bbox.validate()?;

        let limit = request
            .limit
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(1, MAX_FEATURE_LIMIT);
        let base_query = ItemsQuery::new().with_limit(limit).with_bbox(bbox);

        let polygon = request
            .corridor
            .as_ref()
            .and_then(|corridor| match corridor.to_wkt_polygon() {
                Ok(wkt) => Some(wkt),
                Err(e) => {
                    debug!(error = %e, "Corridor polygon unavailable, using its bounding box");
                    None
                }
            });

        let client = self.features_client(source);
        let (collection, used_polygon_filter) = match polygon {
            Some(wkt) => {
                let polygon_query = base_query.clone().with_polygon(wkt);
                match client
                    .get_items::<FeatureCollection>(source.collection, &polygon_query)
                    .await
                {
                    Ok(collection) => (collection, true),
                    Err(e) => {
                        warn!(
                            error = %e,
                            layer,
                            "Polygon filter query failed, retrying with bounding box"
                        );
                        counter!("bedrock_polygon_fallback_total").increment(1);
                        let collection = client
                            .get_items::<FeatureCollection>(source.collection, &base_query)
                            .await
                            .map_err(|e| {
                                let status = match e {
                                    GeoError::UpstreamApi { status, .. } => status,
                                    _ => 0,
                                };
                                GeoError::upstream(
                                    status,
                                    source.url,
                                    "Features could not be retrieved for the corridor, with or without the polygon filter. Try again later.",
                                )
                            })?;
                        (collection, false)
                    }
                }
            }
            None => (
                client
                    .get_items::<FeatureCollection>(source.collection, &base_query)
                    .await?,
                false,
            ),
        };

        Ok(AreaFeatures {
            layer: descriptor.name.to_string(),
            features: shape_collection(descriptor.name, descriptor.record, &collection),
            used_polygon_filter,
            number_matched: collection.number_matched,
        })
    }

    /// Map image and legend URLs for `layer` over `bbox`. Performs no I/O.
    pub fn query_map_image(
        &self,
        layer: &str,
        bbox: &BoundingBox,
        options: &MapImageOptions,
    ) -> GeoResult<MapImage> {
        counter!("geodata_queries_total", "operation" => "map_image").increment(1);
        let descriptor = find_layer(layer)?;
        bbox.validate()?;

        let mut map = map_options(descriptor, *bbox);
        if let Some(width) = options.width {
            map.width = check_image_size("width", width)?;
        }
        if let Some(height) = options.height {
            map.height = check_image_size("height", height)?;
        }
        if let Some(format) = options.format.as_deref().filter(|f| !f.is_empty()) {
            map = map.with_format(format);
        }

        let client = self.wms_client(descriptor);
        Ok(MapImage {
            map_url: client.get_map_url(&map),
            legend_url: client.get_legend_url(
                descriptor.wms_layers.first().copied().unwrap_or_default(),
                None,
            ),
            bbox: *bbox,
            coordinate_system: map.crs.to_string(),
            layers: map.layers,
        })
    }

    /// The shaped feature under `point`, or `None` when there is nothing there.
    #[instrument(skip(self))]
    pub async fn query_point(
        &self,
        layer: &str,
        point: &Sweref99Point,
    ) -> GeoResult<Option<ShapedRecord>> {
        counter!("geodata_queries_total", "operation" => "point").increment(1);
        let descriptor = find_layer(layer)?;
        point.validate()?;

        let bbox = BoundingBox::around_point(point, POINT_QUERY_HALF_SIZE_M);
        let map =
            map_options(descriptor, bbox).with_size(POINT_QUERY_IMAGE_PX, POINT_QUERY_IMAGE_PX);
        let options = GetFeatureInfoOptions::center_of(map);

        let collection: FeatureCollection =
            self.wms_client(descriptor).get_feature_info(&options).await?;
        let record = shape_point(descriptor.name, descriptor.record, &collection);
        if record.is_none() {
            debug!(layer, x = point.x, y = point.y, "No feature at point");
        }
        Ok(record)
    }

    /// Point query from WGS84 input.
    pub async fn query_point_wgs84(
        &self,
        layer: &str,
        point: &Wgs84Point,
    ) -> GeoResult<Option<ShapedRecord>> {
        let projected = projection::to_sweref99(point)?;
        self.query_point(layer, &projected).await
    }

    /// Layers advertised by the upstream WMS endpoint behind `layer`.
    pub async fn describe_upstream_layers(&self, layer: &str) -> GeoResult<Vec<NamedLayer>> {
        counter!("geodata_queries_total", "operation" => "capabilities").increment(1);
        let descriptor = find_layer(layer)?;
        self.wms_client(descriptor).describe_layers().await
    }
}

fn map_options(layer: &LayerDescriptor, bbox: BoundingBox) -> GetMapOptions {
    let mut options = GetMapOptions::new(
        layer.wms_layers.iter().map(|l| l.to_string()).collect(),
        bbox,
    );
    options.crs = CrsCode::Epsg3006;
    options
}

fn check_image_size(name: &str, value: u32) -> GeoResult<u32> {
    if value == 0 || value > MAX_IMAGE_PX {
        return Err(GeoError::validation(format!(
            "Image {} must be between 1 and {} pixels, got {}",
            name, MAX_IMAGE_PX, value
        )));
    }
    Ok(value)
}
