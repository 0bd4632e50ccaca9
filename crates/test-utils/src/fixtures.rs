//! Common test fixtures for geodata tests.
//!
//! Payloads mirror what the SGU services return, including the field-name
//! drift between data releases that the shaping tables have to absorb.

use serde_json::{json, Value};

/// Well-known positions.
pub mod places {
    /// Stockholm city centre (lat, lon)
    pub const STOCKHOLM_WGS84: (f64, f64) = (59.33, 18.07);

    /// Paris, outside the Sweden envelope (lat, lon)
    pub const PARIS_WGS84: (f64, f64) = (48.86, 2.35);

    /// A 10 km x 20 km box around Stockholm (minX, minY, maxX, maxY)
    pub const STOCKHOLM_BBOX: (f64, f64, f64, f64) = (670000.0, 6570000.0, 680000.0, 6590000.0);

    /// A diagonal corridor through Stockholm
    pub const STOCKHOLM_CORRIDOR: [(f64, f64); 2] = [(670000.0, 6570000.0), (680000.0, 6580000.0)];
}

/// OGC API Features response with two bedrock polygons using different
/// property conventions.
pub fn bedrock_feature_collection() -> Value {
    json!({
        "type": "FeatureCollection",
        "numberMatched": 2,
        "numberReturned": 2,
        "features": [
            {
                "type": "Feature",
                "id": "berggrund.1001",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [670000.0, 6570000.0],
                        [671000.0, 6570000.0],
                        [671000.0, 6571000.0],
                        [670000.0, 6570000.0]
                    ]]
                },
                "properties": {
                    "bergart_tx": "Granit",
                    "bergart": "GRANIT",
                    "alder_tx": "Paleoproterozoikum",
                    "tekt_enhet_tx": "Svekokarelska orogenen",
                    "beskrivning": "Granit, medelkornig"
                }
            },
            {
                "type": "Feature",
                "id": 1002,
                "geometry": null,
                "properties": {
                    "Bergart": "Gnejs",
                    "Alder": "Mesoproterozoikum"
                }
            }
        ]
    })
}

pub fn empty_feature_collection() -> Value {
    json!({
        "type": "FeatureCollection",
        "numberMatched": 0,
        "numberReturned": 0,
        "features": []
    })
}

/// Collections listing of an OGC API Features endpoint.
pub fn collections_document() -> Value {
    json!({
        "collections": [
            {"id": "berggrund-ytor", "title": "Berggrund ytor", "links": []},
            {"id": "berggrund-linjer", "title": "Berggrund linjer"}
        ],
        "links": []
    })
}

/// GetFeatureInfo for the soil map, current release (lower-case fields).
pub fn soil_feature_info() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "id": "jordarter.77",
            "geometry": null,
            "properties": {
                "jordart_tx": "Sandig morän",
                "jg2": "95",
                "genes_tx": "Glacial",
                "karttyp": "1:25 000 - 1:100 000"
            }
        }]
    })
}

/// GetFeatureInfo for groundwater aquifers, legacy release (upper-case fields).
pub fn groundwater_feature_info_legacy() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {
                "NAMN": "Stockholmsåsen",
                "MAGTYP": "Isälvsavlagring",
                "UTTAG": "1000-5000 l/h",
                "MAGASIN_ID": "GM-1234"
            }
        }]
    })
}

/// GetFeatureInfo for the radon raster layer (GeoServer grey-index value).
pub fn radon_feature_info() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "id": "",
            "geometry": null,
            "properties": {"GRAY_INDEX": 4.2}
        }]
    })
}

/// GetFeatureInfo for the well archive, mixed-case release.
pub fn wells_feature_info() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {
                "Brunnsid": 123456,
                "Totaldjup": 85.0,
                "Jorddjup": 4.5,
                "Kapacitet": 600,
                "anvandning_tx": "Enskild vattenförsörjning"
            }
        }]
    })
}

/// GetFeatureInfo with nothing under the queried pixel.
pub fn empty_feature_info() -> Value {
    json!({"type": "FeatureCollection", "features": []})
}

/// Minimal WMS 1.3.0 capabilities document with two named layers.
pub fn capabilities_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<WMS_Capabilities version="1.3.0" xmlns="http://www.opengis.net/wms">
  <Service>
    <Name>WMS</Name>
    <Title>SGU Jordarter</Title>
  </Service>
  <Capability>
    <Layer>
      <Title>Jordarter 1:25 000 - 1:100 000</Title>
      <CRS>EPSG:3006</CRS>
      <Layer queryable="1">
        <Name>SE.GOV.SGU.JORD.GRUNDLAGER.25K</Name>
        <Title>Jordarter, grundlager</Title>
      </Layer>
      <Layer queryable="0">
        <Name>SE.GOV.SGU.JORD.YTLAGER.25K</Name>
        <Title>Jordarter, ytlager</Title>
      </Layer>
    </Layer>
  </Capability>
</WMS_Capabilities>"#
}
