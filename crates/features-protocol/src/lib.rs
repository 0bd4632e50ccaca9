//! OGC API - Features client
//!
//! This crate queries collections published through an OGC API - Features
//! endpoint, such as the SGU bedrock polygons.
//!
//! # Spatial filters
//!
//! An items query is filtered either by a bounding box or by a WKT polygon
//! expressed as a CQL-text `INTERSECTS` predicate. When both are set the
//! polygon wins and the bbox is not sent.
//!
//! # Example
//!
//! ```rust
//! use features_protocol::ItemsQuery;
//! use geodata_common::BoundingBox;
//!
//! let query = ItemsQuery::new()
//!     .with_limit(50)
//!     .with_bbox(BoundingBox::new(670000.0, 6570000.0, 680000.0, 6590000.0));
//! assert_eq!(query.to_params().get("bbox"), Some("670000,6570000,680000,6590000"));
//! ```

pub mod client;
pub mod collections;
pub mod geojson;
pub mod query;

pub use client::FeaturesClient;
pub use collections::{Collection, CollectionList, Link};
pub use geojson::{Feature, FeatureCollection, FeatureId};
pub use query::{ItemsQuery, DEFAULT_LIMIT};
