//! Layer listing handler.

use std::sync::Arc;

use axum::{extract::Extension, Json};

use crate::layers::LayerSummary;
use crate::state::AppState;

/// GET /layers
pub async fn list_layers_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<Vec<LayerSummary>> {
    Json(state.facade.list_layers())
}
