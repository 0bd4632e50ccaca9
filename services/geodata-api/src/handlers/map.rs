//! Map image handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    Json,
};
use geodata_common::{BoundingBox, Wgs84BoundingBox};
use serde::Deserialize;

use super::error::ApiResult;
use super::AreaBody;
use crate::facade::{MapImage, MapImageOptions};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MapBody {
    #[serde(default)]
    pub bbox: Option<BoundingBox>,
    #[serde(default)]
    pub wgs84_bbox: Option<Wgs84BoundingBox>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<String>,
}

/// POST /layers/:layer/map
pub async fn map_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(layer): Path<String>,
    Json(body): Json<MapBody>,
) -> ApiResult<Json<MapImage>> {
    let area = AreaBody {
        bbox: body.bbox,
        wgs84_bbox: body.wgs84_bbox,
        corridor: None,
    }
    .into_input()?;
    let bbox = state.facade.build_bounding_box(&area)?;

    let options = MapImageOptions {
        width: body.width,
        height: body.height,
        format: body.format,
    };
    Ok(Json(state.facade.query_map_image(&layer, &bbox, &options)?))
}
