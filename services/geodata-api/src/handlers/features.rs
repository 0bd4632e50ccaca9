//! Area feature query handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    Json,
};
use geodata_common::{BoundingBox, Wgs84BoundingBox};
use serde::Deserialize;

use super::error::ApiResult;
use super::{AreaBody, CorridorBody};
use crate::facade::{AreaFeatureRequest, AreaFeatures, AreaInput};
use crate::state::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct FeaturesBody {
    #[serde(default)]
    pub bbox: Option<BoundingBox>,
    #[serde(default)]
    pub wgs84_bbox: Option<Wgs84BoundingBox>,
    #[serde(default)]
    pub corridor: Option<CorridorBody>,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// POST /layers/:layer/features
///
/// A corridor may be combined with nothing else; a bbox is given either in
/// SWEREF99TM or WGS84.
pub async fn features_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(layer): Path<String>,
    Json(body): Json<FeaturesBody>,
) -> ApiResult<Json<AreaFeatures>> {
    let limit = body.limit;
    let area = AreaBody {
        bbox: body.bbox,
        wgs84_bbox: body.wgs84_bbox,
        corridor: body.corridor,
    }
    .into_input()?;

    let request = match area {
        AreaInput::Corridor(corridor) => AreaFeatureRequest {
            bbox: None,
            corridor: Some(corridor),
            limit,
        },
        other => AreaFeatureRequest {
            bbox: Some(state.facade.build_bounding_box(&other)?),
            corridor: None,
            limit,
        },
    };

    Ok(Json(state.facade.query_area_features(&layer, request).await?))
}
