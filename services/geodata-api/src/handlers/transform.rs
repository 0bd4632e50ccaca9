//! Coordinate transform handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    Json,
};
use geodata_common::{Sweref99Point, Wgs84Point};
use serde::Deserialize;

use super::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TransformParams {
    pub lat: f64,
    pub lon: f64,
}

/// GET /transform?lat=&lon=
pub async fn transform_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<TransformParams>,
) -> ApiResult<Json<Sweref99Point>> {
    let point = Wgs84Point::new(params.lat, params.lon);
    Ok(Json(state.facade.transform_point(&point)?))
}
