//! The process-wide table of logical layers and their upstream endpoints.

use geodata_common::{GeoError, GeoResult};
use serde::Serialize;
use wms_protocol::WmsVersion;

use crate::shaping::RecordKind;

/// An OGC API Features collection backing a layer's area queries.
#[derive(Debug)]
pub struct FeaturesSource {
    pub url: &'static str,
    pub collection: &'static str,
}

/// A logical layer as exposed to callers.
#[derive(Debug)]
pub struct LayerDescriptor {
    pub name: &'static str,
    pub title: &'static str,
    /// WMS endpoint; the whole request goes in the query string
    pub wms_url: &'static str,
    pub wms_layers: &'static [&'static str],
    pub wms_version: WmsVersion,
    /// Present only for layers that support vector area-feature queries
    pub features: Option<FeaturesSource>,
    pub record: RecordKind,
}

pub static LAYERS: &[LayerDescriptor] = &[
    LayerDescriptor {
        name: "bedrock",
        title: "Berggrund 1:50 000 - 1:250 000",
        wms_url: "https://resource.sgu.se/service/wms/130/berggrund-50-250-tusen",
        wms_layers: &["SE.GOV.SGU.BERG.GEOLOGISK_ENHET.YTA.50K"],
        wms_version: WmsVersion::V1_3_0,
        features: Some(FeaturesSource {
            url: "https://api.sgu.se/oppnadata/berggrund50k-250k/ogc/features/v1",
            collection: "geologisk-enhet-yta",
        }),
        record: RecordKind::Bedrock,
    },
    LayerDescriptor {
        name: "soil_types",
        title: "Jordarter 1:25 000 - 1:100 000",
        wms_url: "https://resource.sgu.se/service/wms/130/jordarter-25-100-tusen",
        wms_layers: &["SE.GOV.SGU.JORD.GRUNDLAGER.25K"],
        wms_version: WmsVersion::V1_3_0,
        features: None,
        record: RecordKind::Soil,
    },
    LayerDescriptor {
        name: "soil_depth",
        title: "Jorddjupsmodell",
        wms_url: "https://resource.sgu.se/service/wms/130/jorddjupsmodell",
        wms_layers: &["SE.GOV.SGU.JORDDJUP.10X10M"],
        wms_version: WmsVersion::V1_3_0,
        features: None,
        record: RecordKind::SoilDepth,
    },
    LayerDescriptor {
        name: "groundwater",
        title: "Grundvattenmagasin",
        wms_url: "https://resource.sgu.se/service/wms/130/grundvattenmagasin",
        wms_layers: &["SE.GOV.SGU.GRUNDVATTEN.MAGASIN.1M"],
        wms_version: WmsVersion::V1_3_0,
        features: None,
        record: RecordKind::Groundwater,
    },
    LayerDescriptor {
        name: "groundwater_vulnerability",
        title: "Genomsläpplighet och sårbarhet för grundvatten",
        wms_url: "https://maps3.sgu.se/geoserver/wms",
        wms_layers: &["SE.GOV.SGU.GRUNDVATTEN.SARBARHET"],
        wms_version: WmsVersion::V1_1_1,
        features: None,
        record: RecordKind::GroundwaterVulnerability,
    },
    LayerDescriptor {
        name: "radon",
        title: "Gammastrålning, uran (radonriskindikator)",
        wms_url: "https://maps3.sgu.se/geoserver/wms",
        wms_layers: &["SE.GOV.SGU.FLYG.GAMMA.URAN"],
        wms_version: WmsVersion::V1_1_1,
        features: None,
        record: RecordKind::Radon,
    },
    LayerDescriptor {
        name: "wells",
        title: "Brunnar",
        wms_url: "https://resource.sgu.se/service/wms/130/brunnar",
        wms_layers: &["SE.GOV.SGU.BRUNNAR.250K"],
        wms_version: WmsVersion::V1_3_0,
        features: None,
        record: RecordKind::Well,
    },
    LayerDescriptor {
        name: "aggregates",
        title: "Grus, sand och krossberg (ballast)",
        wms_url: "https://resource.sgu.se/service/wms/130/ballast",
        wms_layers: &["SE.GOV.SGU.BALLAST.TAKT"],
        wms_version: WmsVersion::V1_3_0,
        features: None,
        record: RecordKind::Aggregate,
    },
];

/// Look up a layer by its logical name.
pub fn find_layer(name: &str) -> GeoResult<&'static LayerDescriptor> {
    LAYERS.iter().find(|l| l.name == name).ok_or_else(|| {
        let known: Vec<_> = LAYERS.iter().map(|l| l.name).collect();
        GeoError::not_found(format!(
            "Unknown layer '{}'. Available layers: {}",
            name,
            known.join(", ")
        ))
    })
}

/// Public summary of a layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LayerSummary {
    pub name: &'static str,
    pub title: &'static str,
    pub wms_version: WmsVersion,
    pub wms_layers: &'static [&'static str],
    pub supports_area_features: bool,
}

impl From<&LayerDescriptor> for LayerSummary {
    fn from(layer: &LayerDescriptor) -> Self {
        Self {
            name: layer.name,
            title: layer.title,
            wms_version: layer.wms_version,
            wms_layers: layer.wms_layers,
            supports_area_features: layer.features.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = LAYERS.iter().map(|l| l.name).collect();
        assert_eq!(names.len(), LAYERS.len());
    }

    #[test]
    fn test_every_layer_has_wms_ids() {
        for layer in LAYERS {
            assert!(!layer.wms_layers.is_empty(), "{}", layer.name);
            assert!(layer.wms_url.starts_with("https://"), "{}", layer.name);
        }
    }

    #[test]
    fn test_only_bedrock_has_features() {
        let with_features: Vec<_> = LAYERS
            .iter()
            .filter(|l| l.features.is_some())
            .map(|l| l.name)
            .collect();
        assert_eq!(with_features, vec!["bedrock"]);
    }

    #[test]
    fn test_legacy_layers_use_1_1_1() {
        assert_eq!(
            find_layer("groundwater_vulnerability").unwrap().wms_version,
            WmsVersion::V1_1_1
        );
        assert_eq!(find_layer("radon").unwrap().wms_version, WmsVersion::V1_1_1);
        assert_eq!(find_layer("soil_types").unwrap().wms_version, WmsVersion::V1_3_0);
    }

    #[test]
    fn test_unknown_layer() {
        let err = find_layer("lava").unwrap_err();
        assert!(matches!(err, GeoError::NotFound(ref m) if m.contains("bedrock")));
    }

    #[test]
    fn test_summary() {
        let summary = LayerSummary::from(find_layer("bedrock").unwrap());
        assert!(summary.supports_area_features);
        assert_eq!(summary.wms_version, WmsVersion::V1_3_0);
    }
}
