//! Typed request entry point shared by the protocol clients.

use std::sync::Arc;
use std::time::Duration;

use geodata_common::{GeoError, GeoResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::query::{build_url, QueryParams};
use crate::transport::{Payload, PreparedRequest, Transport, DEFAULT_TIMEOUT};

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

/// Per-request options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub params: QueryParams,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn get(params: QueryParams) -> Self {
        Self {
            method: Method::Get,
            params,
            body: None,
        }
    }

    pub fn post(params: QueryParams, body: Value) -> Self {
        Self {
            method: Method::Post,
            params,
            body: Some(body),
        }
    }
}

/// A base URL bound to a transport.
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    timeout: Duration,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The URL a request with these parameters would hit. Performs no I/O.
    pub fn url(&self, path: &str, params: &QueryParams) -> String {
        build_url(&self.base_url, path, params)
    }

    /// Issue a request and return the untyped payload.
    pub async fn request_payload(&self, path: &str, options: RequestOptions) -> GeoResult<Payload> {
        let url = self.url(path, &options.params);
        debug!(%url, "Upstream request");

        self.transport
            .execute(PreparedRequest {
                method: options.method,
                url,
                base_url: self.base_url.clone(),
                body: options.body,
                timeout: self.timeout,
            })
            .await
    }

    /// Issue a request and decode the response into `T`.
    ///
    /// JSON bodies are deserialized directly; text bodies are presented to
    /// serde as a JSON string, so `T = String` receives the raw document.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> GeoResult<T> {
        let payload = self.request_payload(path, options).await?;
        let value = match payload {
            Payload::Json(v) => v,
            Payload::Text(s) => Value::String(s),
        };
        serde_json::from_value(value).map_err(|e| {
            debug!(error = %e, "Response did not match expected shape");
            GeoError::upstream(
                0,
                &self.base_url,
                "The service returned an unexpected response format. Try again later.",
            )
        })
    }
}
