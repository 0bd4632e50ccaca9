//! Error types for the geodata services.

use thiserror::Error;

/// Result type alias using GeoError.
pub type GeoResult<T> = Result<T, GeoError>;

/// Primary error type for geodata operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Caller-supplied geometry or coordinates violate an invariant.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Upstream service failed, timed out, or could not be reached.
    ///
    /// `status` is the HTTP status, or 0 for timeouts and network failures.
    #[error("Upstream API error ({status}) from {url}: {message}")]
    UpstreamApi {
        status: u16,
        url: String,
        message: String,
    },

    /// A single resource looked up by identifier does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl GeoError {
    pub fn validation(message: impl Into<String>) -> Self {
        GeoError::Validation(message.into())
    }

    pub fn upstream(status: u16, url: impl Into<String>, message: impl Into<String>) -> Self {
        GeoError::UpstreamApi {
            status,
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        GeoError::NotFound(message.into())
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            GeoError::Validation(_) => "ValidationError",
            GeoError::UpstreamApi { .. } => "UpstreamApiError",
            GeoError::NotFound(_) => "NotFoundError",
        }
    }

    /// Whether retrying the same request later may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            GeoError::UpstreamApi { status, .. } => *status == 0 || *status >= 500,
            _ => false,
        }
    }

    /// Get the HTTP status code for this error when surfaced by the adapter.
    pub fn http_status_code(&self) -> u16 {
        match self {
            GeoError::Validation(_) => 400,
            GeoError::NotFound(_) => 404,
            GeoError::UpstreamApi { .. } => 502,
        }
    }

    /// The user-facing message without the kind prefix.
    pub fn user_message(&self) -> &str {
        match self {
            GeoError::Validation(msg) | GeoError::NotFound(msg) => msg,
            GeoError::UpstreamApi { message, .. } => message,
        }
    }
}
