//! Upstream layer discovery handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    Json,
};
use wms_protocol::NamedLayer;

use super::error::ApiResult;
use crate::state::AppState;

/// GET /layers/:layer/capabilities
pub async fn capabilities_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(layer): Path<String>,
) -> ApiResult<Json<Vec<NamedLayer>>> {
    Ok(Json(state.facade.describe_upstream_layers(&layer).await?))
}
