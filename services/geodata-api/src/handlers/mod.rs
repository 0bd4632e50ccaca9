//! HTTP request handlers for the geodata API.

pub mod bbox;
pub mod capabilities;
pub mod error;
pub mod features;
pub mod health;
pub mod layers;
pub mod map;
pub mod point;
pub mod transform;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use geodata_common::{
    BoundingBox, Corridor, GeoError, GeoResult, Sweref99Point, Wgs84BoundingBox, Wgs84Point,
};
use serde::Deserialize;

use crate::facade::AreaInput;
use crate::state::AppState;

/// All API routes with the state attached. Middleware is added by the caller.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/metrics", get(health::metrics_handler))
        .route("/layers", get(layers::list_layers_handler))
        .route("/transform", get(transform::transform_handler))
        .route("/bbox", post(bbox::bbox_handler))
        .route("/layers/:layer/features", post(features::features_handler))
        .route("/layers/:layer/map", post(map::map_handler))
        .route("/layers/:layer/point", get(point::point_handler))
        .route(
            "/layers/:layer/capabilities",
            get(capabilities::capabilities_handler),
        )
        .layer(Extension(state))
}

/// A corridor in either coordinate system.
///
/// Vertices are objects (`{x, y}` or `{latitude, longitude}`), never bare
/// number pairs, so the coordinate system is always explicit.
#[derive(Debug, Deserialize)]
pub struct CorridorBody {
    #[serde(default)]
    pub coordinates: Option<Vec<Sweref99Point>>,
    #[serde(default)]
    pub wgs84_coordinates: Option<Vec<Wgs84Point>>,
    #[serde(alias = "bufferMeters")]
    pub buffer_meters: f64,
}

impl CorridorBody {
    pub fn into_corridor(self) -> GeoResult<Corridor> {
        match (self.coordinates, self.wgs84_coordinates) {
            (Some(points), None) => Corridor::new(points, self.buffer_meters),
            (None, Some(points)) => projection::corridor_from_wgs84(&points, self.buffer_meters),
            _ => Err(GeoError::validation(
                "Corridor needs exactly one of 'coordinates' (SWEREF99TM) or 'wgs84_coordinates'",
            )),
        }
    }
}

/// The area fields shared by request bodies.
#[derive(Debug, Deserialize, Default)]
pub struct AreaBody {
    #[serde(default)]
    pub bbox: Option<BoundingBox>,
    #[serde(default)]
    pub wgs84_bbox: Option<Wgs84BoundingBox>,
    #[serde(default)]
    pub corridor: Option<CorridorBody>,
}

impl AreaBody {
    /// The single area description in the body.
    pub fn into_input(self) -> GeoResult<AreaInput> {
        match (self.bbox, self.wgs84_bbox, self.corridor) {
            (Some(bbox), None, None) => Ok(AreaInput::Bbox(bbox)),
            (None, Some(bbox), None) => Ok(AreaInput::Wgs84Bbox(bbox)),
            (None, None, Some(corridor)) => Ok(AreaInput::Corridor(corridor.into_corridor()?)),
            (None, None, None) => Err(GeoError::validation(
                "One of 'bbox', 'wgs84_bbox' or 'corridor' is required",
            )),
            _ => Err(GeoError::validation(
                "Only one of 'bbox', 'wgs84_bbox' or 'corridor' may be given",
            )),
        }
    }
}
