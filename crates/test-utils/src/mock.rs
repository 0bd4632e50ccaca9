//! Scripted transport for exercising protocol clients without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use geodata_common::{GeoError, GeoResult};
use http_transport::{Payload, PreparedRequest, Transport};
use serde_json::Value;

/// A transport that replays scripted responses in order and records every
/// request it receives.
///
/// When the script runs out, further requests fail with an upstream error.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<GeoResult<Payload>>>,
    requests: Mutex<Vec<PreparedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response.
    pub fn push_json(self, value: Value) -> Self {
        self.push(Ok(Payload::Json(value)))
    }

    /// Queue a text response.
    pub fn push_text(self, text: impl Into<String>) -> Self {
        self.push(Ok(Payload::Text(text.into())))
    }

    /// Queue a failure.
    pub fn push_error(self, error: GeoError) -> Self {
        self.push(Err(error))
    }

    /// Queue an HTTP status failure the way the real transport reports it.
    pub fn push_status(self, status: u16) -> Self {
        self.push_error(GeoError::upstream(
            status,
            "mock://upstream",
            format!("The service returned HTTP {}", status),
        ))
    }

    fn push(self, response: GeoResult<Payload>) -> Self {
        self.responses
            .lock()
            .expect("mock transport lock poisoned")
            .push_back(response);
        self
    }

    /// All requests received so far, in order.
    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests
            .lock()
            .expect("mock transport lock poisoned")
            .clone()
    }

    /// URLs of all requests received so far.
    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .expect("mock transport lock poisoned")
            .len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: PreparedRequest) -> GeoResult<Payload> {
        let base_url = request.base_url.clone();
        self.requests
            .lock()
            .expect("mock transport lock poisoned")
            .push(request);

        self.responses
            .lock()
            .expect("mock transport lock poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Err(GeoError::upstream(
                    0,
                    base_url,
                    "MockTransport has no scripted response left",
                ))
            })
    }
}

/// Decoded query parameters of a URL, in order.
pub fn query_pairs(url: &str) -> Vec<(String, String)> {
    let Some((_, query)) = url.split_once('?') else {
        return Vec::new();
    };
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(k), decode(v))
        })
        .collect()
}

/// Decoded value of the first query parameter named `key`.
pub fn query_value(url: &str, key: &str) -> Option<String> {
    query_pairs(url)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

fn decode(s: &str) -> String {
    urlencoding::decode(s)
        .map(|c| c.into_owned())
        .unwrap_or_else(|_| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_transport::Method;
    use std::time::Duration;

    fn request(url: &str) -> PreparedRequest {
        PreparedRequest {
            method: Method::Get,
            url: url.to_string(),
            base_url: "mock://upstream".to_string(),
            body: None,
            timeout: Duration::from_secs(1),
        }
    }

    #[tokio::test]
    async fn test_replays_in_order_then_fails() {
        let mock = MockTransport::new()
            .push_text("first")
            .push_status(500);

        assert_eq!(
            mock.execute(request("mock://a")).await.unwrap(),
            Payload::Text("first".to_string())
        );
        assert!(matches!(
            mock.execute(request("mock://b")).await,
            Err(GeoError::UpstreamApi { status: 500, .. })
        ));
        assert!(mock.execute(request("mock://c")).await.is_err());
        assert_eq!(mock.urls(), vec!["mock://a", "mock://b", "mock://c"]);
    }

    #[test]
    fn test_query_helpers() {
        let url = "https://x/wms?SERVICE=WMS&BBOX=6570000%2C670000&EMPTY=";
        assert_eq!(query_value(url, "BBOX").as_deref(), Some("6570000,670000"));
        assert_eq!(query_value(url, "EMPTY").as_deref(), Some(""));
        assert_eq!(query_value(url, "CRS"), None);
        assert_eq!(query_pairs(url).len(), 3);
        assert!(query_pairs("https://x/wms").is_empty());
    }
}
