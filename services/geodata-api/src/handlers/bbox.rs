//! Bounding box construction handler.

use std::sync::Arc;

use axum::{extract::Extension, Json};
use geodata_common::BoundingBox;

use super::error::ApiResult;
use super::AreaBody;
use crate::state::AppState;

/// POST /bbox with one of `bbox`, `wgs84_bbox` or `corridor`
pub async fn bbox_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<AreaBody>,
) -> ApiResult<Json<BoundingBox>> {
    let input = body.into_input()?;
    Ok(Json(state.facade.build_bounding_box(&input)?))
}
