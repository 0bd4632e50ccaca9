//! The I/O seam: a prepared request in, a decoded payload out.

use std::time::Duration;

use async_trait::async_trait;
use geodata_common::{GeoError, GeoResult};
use metrics::counter;
use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::client::Method;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully built outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    /// Complete URL including the query string
    pub url: String,
    /// Base URL the request was built from, reported in errors
    pub base_url: String,
    pub body: Option<Value>,
    pub timeout: Duration,
}

/// A response body, decoded according to its content type.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

/// Whether a response with this content type is returned as raw text.
pub fn is_text_content_type(content_type: &str) -> bool {
    let ct = content_type.to_ascii_lowercase();
    ct.contains("text/plain") || ct.contains("xml") || ct.contains("text/html")
}

/// Executes prepared requests against an upstream service.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: PreparedRequest) -> GeoResult<Payload>;
}

/// Configuration for the reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Default timeout applied by [`crate::HttpClient`]
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("sgu-geodata/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Production transport over reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &TransportConfig) -> GeoResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| {
                GeoError::upstream(0, "", format!("Failed to create HTTP client: {}", e))
            })?;
        Ok(Self { client })
    }

    async fn send(&self, request: &PreparedRequest) -> GeoResult<Payload> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(&e, request))?;

        let status = response.status();
        if !status.is_success() {
            counter!("upstream_errors_total", "kind" => "status").increment(1);
            return Err(status_error(status, &request.base_url));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&e, request))?;

        if is_text_content_type(&content_type) {
            return Ok(Payload::Text(body));
        }

        serde_json::from_str(&body).map(Payload::Json).map_err(|e| {
            warn!(url = %request.url, error = %e, "Upstream returned unparseable JSON");
            GeoError::upstream(
                status.as_u16(),
                &request.base_url,
                "The service returned an unexpected response format. Try again later.",
            )
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, request), fields(url = %request.url))]
    async fn execute(&self, request: PreparedRequest) -> GeoResult<Payload> {
        counter!("upstream_requests_total").increment(1);
        debug!(method = ?request.method, "Sending upstream request");

        match tokio::time::timeout(request.timeout, self.send(&request)).await {
            Ok(result) => result,
            Err(_) => Err(timeout_error(&request)),
        }
    }
}

fn timeout_error(request: &PreparedRequest) -> GeoError {
    counter!("upstream_errors_total", "kind" => "timeout").increment(1);
    warn!(
        url = %request.url,
        timeout_secs = request.timeout.as_secs_f64(),
        "Upstream request timed out"
    );
    GeoError::upstream(
        0,
        &request.base_url,
        format!(
            "Request timed out after {} seconds. The service may be slow; try again or narrow the area.",
            request.timeout.as_secs_f64()
        ),
    )
}

fn transport_error(err: &reqwest::Error, request: &PreparedRequest) -> GeoError {
    if err.is_timeout() {
        return timeout_error(request);
    }
    counter!("upstream_errors_total", "kind" => "network").increment(1);
    warn!(url = %request.url, error = %err, "Upstream request failed");
    GeoError::upstream(
        0,
        &request.base_url,
        "Could not reach the service. It may be unavailable; try again later.",
    )
}

fn status_error(status: StatusCode, base_url: &str) -> GeoError {
    let message = if status.is_server_error() {
        format!(
            "The service returned HTTP {}. This is usually temporary; retry shortly.",
            status.as_u16()
        )
    } else {
        format!(
            "The service returned HTTP {}. The request is likely invalid; check coordinates and parameters.",
            status.as_u16()
        )
    };
    warn!(status = status.as_u16(), base_url, "Upstream returned error status");
    GeoError::upstream(status.as_u16(), base_url, message)
}
