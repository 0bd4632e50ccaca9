//! Minimal typed HTTP transport for the upstream geodata services.
//!
//! Protocol clients build a path plus query parameters and call
//! [`HttpClient::request`]. The actual I/O goes through the [`Transport`]
//! trait so tests can substitute a scripted implementation.
//!
//! Failures always surface as `GeoError::UpstreamApi`:
//! - status 0 for timeouts and unreachable hosts
//! - the HTTP status for non-2xx responses, with ≥500 worded as transient

pub mod client;
pub mod query;
pub mod transport;

pub use client::{HttpClient, Method, RequestOptions};
pub use query::{build_url, QueryParams};
pub use transport::{
    is_text_content_type, Payload, PreparedRequest, ReqwestTransport, Transport, TransportConfig,
    DEFAULT_TIMEOUT,
};
