//! Query-string construction.

/// Ordered query parameters.
///
/// Parameters whose value is absent or empty are kept in the list but never
/// serialized, so callers can pass optional fields straight through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.pairs.push((key.into(), Some(value.to_string())));
        self
    }

    /// Append an optional parameter.
    pub fn push_opt<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
        self.pairs.push((key.into(), value.map(|v| v.to_string())));
        self
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Builder-style [`push_opt`](Self::push_opt).
    pub fn with_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.push_opt(key, value);
        self
    }

    /// Value of the first parameter named `key` that would be serialized.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.effective().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    fn effective(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().filter_map(|(k, v)| match v.as_deref() {
            Some(value) if !value.is_empty() => Some((k.as_str(), value)),
            _ => None,
        })
    }

    /// Percent-encoded `key=value&...` string, in insertion order.
    pub fn to_query_string(&self) -> String {
        self.effective()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn is_empty(&self) -> bool {
        self.effective().next().is_none()
    }
}

/// Join a base URL, an optional path and a query string.
///
/// An empty path uses the base verbatim, which is what WMS endpoints need
/// since they carry everything in the query string.
pub fn build_url(base: &str, path: &str, params: &QueryParams) -> String {
    let mut url = if path.is_empty() {
        base.to_string()
    } else {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    };

    let query = params.to_query_string();
    if !query.is_empty() {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&query);
    }
    url
}
