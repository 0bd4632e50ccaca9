//! Point query handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use geodata_common::{GeoError, Sweref99Point, Wgs84Point};
use serde::Deserialize;

use super::error::ApiResult;
use crate::shaping::ShapedRecord;
use crate::state::AppState;

/// Either `lat`/`lon` (WGS84) or `x`/`y` (SWEREF99TM).
#[derive(Debug, Deserialize)]
pub struct PointParams {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// GET /layers/:layer/point - the record at the point, or `null`
pub async fn point_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(layer): Path<String>,
    Query(params): Query<PointParams>,
) -> ApiResult<Json<Option<ShapedRecord>>> {
    let record = match params {
        PointParams {
            lat: Some(lat),
            lon: Some(lon),
            x: None,
            y: None,
        } => {
            state
                .facade
                .query_point_wgs84(&layer, &Wgs84Point::new(lat, lon))
                .await?
        }
        PointParams {
            lat: None,
            lon: None,
            x: Some(x),
            y: Some(y),
        } => {
            state
                .facade
                .query_point(&layer, &Sweref99Point::new(x, y))
                .await?
        }
        _ => {
            return Err(GeoError::validation(
                "Give either 'lat' and 'lon' (WGS84) or 'x' and 'y' (SWEREF99TM)",
            )
            .into())
        }
    };
    Ok(Json(record))
}
