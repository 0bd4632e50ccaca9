//! GeoJSON types for OGC API - Features responses.
//!
//! Geometry is kept as raw JSON: the facade passes it through untouched and
//! never needs to inspect it.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A GeoJSON FeatureCollection, optionally with OGC paging counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type", default = "feature_collection_type")]
    pub type_: String,

    /// Array of features.
    #[serde(default)]
    pub features: Vec<Feature>,

    /// Total number of features matching the query, if the server reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_matched: Option<u64>,

    /// Number of features in this page, if the server reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_returned: Option<u64>,
}

fn feature_collection_type() -> String {
    "FeatureCollection".to_string()
}

fn feature_type() -> String {
    "Feature".to_string()
}

impl FeatureCollection {
    /// Create a new empty FeatureCollection.
    pub fn new() -> Self {
        Self {
            type_: feature_collection_type(),
            features: Vec::new(),
            number_matched: None,
            number_returned: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// A GeoJSON Feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type", default = "feature_type")]
    pub type_: String,

    /// Optional feature identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FeatureId>,

    /// Raw GeoJSON geometry; `null` for attribute-only responses.
    #[serde(default)]
    pub geometry: Option<Value>,

    /// Feature attributes as delivered by the server.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub properties: Map<String, Value>,
}

impl Feature {
    /// Create a feature with no geometry and the given properties.
    pub fn with_properties(properties: Map<String, Value>) -> Self {
        Self {
            type_: feature_type(),
            id: None,
            geometry: None,
            properties,
        }
    }

    /// Look up a property by exact name, treating JSON `null` as absent.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name).filter(|v| !v.is_null())
    }
}

/// GeoJSON allows `"properties": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A feature identifier, which GeoJSON allows to be a string or a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FeatureId {
    Text(String),
    Number(Number),
}

impl FeatureId {
    /// True for identifiers that carry no information (the empty string).
    pub fn is_blank(&self) -> bool {
        matches!(self, FeatureId::Text(s) if s.is_empty())
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureId::Text(s) => f.write_str(s),
            FeatureId::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FeatureId {
    fn from(s: &str) -> Self {
        FeatureId::Text(s.to_string())
    }
}
