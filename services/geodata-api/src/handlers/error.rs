//! Mapping facade errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use geodata_common::GeoError;
use serde::Serialize;

/// Problem-details style error body.
#[derive(Debug, Serialize)]
pub struct ExceptionResponse {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
}

impl From<&GeoError> for ExceptionResponse {
    fn from(error: &GeoError) -> Self {
        let status = error.http_status_code();
        let title = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Error");
        Self {
            type_: error.kind().to_string(),
            title: title.to_string(),
            status,
            detail: error.user_message().to_string(),
        }
    }
}

/// Handler error wrapper so handlers can use `?` on facade results.
#[derive(Debug)]
pub struct ApiError(pub GeoError);

impl From<GeoError> for ApiError {
    fn from(error: GeoError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ExceptionResponse::from(&self.0);
        let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::warn!(error = %self.0, "Request failed upstream");
        } else {
            tracing::debug!(error = %self.0, "Request rejected");
        }
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
