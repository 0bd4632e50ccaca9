//! OGC WMS client for the SGU map services.
//!
//! Supports:
//! - WMS 1.1.1 (`SRS`, x/y bbox order, `X`/`Y` pixel keys)
//! - WMS 1.3.0 (`CRS`, per-CRS bbox order, `I`/`J` pixel keys)
//!
//! The version is fixed when a [`WmsClient`] is built; every request builder
//! reads its parameter names and axis order from [`VersionRules`].

pub mod capabilities;
pub mod client;
pub mod getfeatureinfo;
pub mod getmap;
pub mod version;

pub use capabilities::{layer_names, NamedLayer};
pub use client::WmsClient;
pub use getfeatureinfo::{feature_info_params, GetFeatureInfoOptions, INFO_FORMAT};
pub use getmap::{get_map_params, legend_params, GetMapOptions, DEFAULT_LEGEND_FORMAT};
pub use version::{VersionRules, WmsVersion};
