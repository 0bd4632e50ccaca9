//! Turning provider features into stable output records.
//!
//! SGU data releases disagree on attribute names and casing. Each record
//! kind has a table of output fields, and each output field lists the
//! upstream attribute names to try, most preferred first.

use features_protocol::{Feature, FeatureCollection};
use serde::Serialize;
use serde_json::{Map, Value};

/// One output field and the upstream attributes it can come from.
#[derive(Debug)]
pub struct FieldSpec {
    pub output: &'static str,
    pub candidates: &'static [&'static str],
}

const fn field(output: &'static str, candidates: &'static [&'static str]) -> FieldSpec {
    FieldSpec { output, candidates }
}

const DESCRIPTION: FieldSpec = field("description", &["beskrivning", "Beskrivning", "BESKRIVNING"]);

static BEDROCK: &[FieldSpec] = &[
    field("rock_type", &["bergart_tx", "bergart", "Bergart", "BERGART"]),
    field("rock_class", &["huvudgrupp_tx", "bergartsklass", "Huvudgrupp", "HUVUDGRUPP"]),
    field("age", &["alder_tx", "alder", "Alder", "ALDER"]),
    field("tectonic_unit", &["tekt_enhet_tx", "tektonisk_enhet", "Tektonisk_enhet"]),
    DESCRIPTION,
];

static SOIL: &[FieldSpec] = &[
    field("soil_type", &["jordart_tx", "jordart", "Jordart", "JORDART", "jg2_tx"]),
    field("soil_code", &["jg2", "JG2", "jordartskod"]),
    field("origin", &["genes_tx", "genes", "Genes", "GENES"]),
    field("map_scale", &["karttyp", "Karttyp", "skala"]),
    DESCRIPTION,
];

static SOIL_DEPTH: &[FieldSpec] = &[field(
    "depth_m",
    &["jorddjup", "Jorddjup", "JORDDJUP", "GRAY_INDEX"],
)];

static GROUNDWATER: &[FieldSpec] = &[
    field("aquifer_name", &["namn", "Namn", "NAMN", "magasinsnamn"]),
    field("aquifer_type", &["magasinstyp", "Magasinstyp", "MAGTYP", "typ"]),
    field("yield_class", &["uttag_tx", "uttagsmojlighet", "Uttagsmojlighet", "UTTAG"]),
    field("material", &["geologi", "Geologi", "GEOLOGI"]),
    field("aquifer_id", &["magasin_id", "Magasin_id", "MAGASIN_ID"]),
];

static GROUNDWATER_VULNERABILITY: &[FieldSpec] = &[
    field("vulnerability", &["sarbarhet_tx", "sarbarhet", "Sarbarhet", "SARBARHET", "klass"]),
    DESCRIPTION,
];

static RADON: &[FieldSpec] = &[
    field("radon_risk", &["radonrisk", "Radonrisk", "RADONRISK", "riskklass"]),
    field("uranium_ppm", &["uran", "Uran", "URAN", "GRAY_INDEX"]),
    DESCRIPTION,
];

static WELL: &[FieldSpec] = &[
    field("well_id", &["brunnsid", "Brunnsid", "BRUNNSID"]),
    field("total_depth_m", &["totaldjup", "Totaldjup", "TOTALDJUP", "djup"]),
    field("soil_depth_m", &["jorddjup", "Jorddjup", "JORDDJUP"]),
    field("capacity_l_per_h", &["kapacitet", "Kapacitet", "KAPACITET"]),
    field("usage", &["anvandning_tx", "anvandning", "Anvandning", "ANVANDNING"]),
    field("drilled_date", &["borrdatum", "Borrdatum", "BORRDATUM"]),
];

static AGGREGATE: &[FieldSpec] = &[
    field("site_name", &["namn", "Namn", "NAMN", "objektnamn"]),
    field("material", &["material_tx", "material", "Material", "MATERIAL"]),
    field("status", &["status_tx", "status", "Status", "STATUS"]),
    field("municipality", &["kommun", "Kommun", "KOMMUN"]),
];

/// The shape a layer's features are converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Bedrock,
    Soil,
    SoilDepth,
    Groundwater,
    GroundwaterVulnerability,
    Radon,
    Well,
    Aggregate,
}

impl RecordKind {
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            RecordKind::Bedrock => BEDROCK,
            RecordKind::Soil => SOIL,
            RecordKind::SoilDepth => SOIL_DEPTH,
            RecordKind::Groundwater => GROUNDWATER,
            RecordKind::GroundwaterVulnerability => GROUNDWATER_VULNERABILITY,
            RecordKind::Radon => RADON,
            RecordKind::Well => WELL,
            RecordKind::Aggregate => AGGREGATE,
        }
    }
}

/// A feature reduced to the fields of its record kind.
///
/// Every field of the kind is present; fields no candidate matched are `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedRecord {
    pub layer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Value>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ShapedRecord {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }
}

/// First non-null candidate attribute, in priority order.
fn pick<'a>(feature: &'a Feature, candidates: &[&str]) -> Option<&'a Value> {
    candidates.iter().find_map(|name| feature.property(name))
}

pub fn shape_feature(layer: &str, kind: RecordKind, feature: &Feature) -> ShapedRecord {
    let fields = kind
        .fields()
        .iter()
        .map(|spec| {
            let value = pick(feature, spec.candidates).cloned().unwrap_or(Value::Null);
            (spec.output.to_string(), value)
        })
        .collect();

    ShapedRecord {
        layer: layer.to_string(),
        id: feature
            .id
            .as_ref()
            .filter(|id| !id.is_blank())
            .map(|id| id.to_string()),
        geometry: feature.geometry.clone(),
        fields,
    }
}

pub fn shape_collection(
    layer: &str,
    kind: RecordKind,
    collection: &FeatureCollection,
) -> Vec<ShapedRecord> {
    collection
        .features
        .iter()
        .map(|feature| shape_feature(layer, kind, feature))
        .collect()
}

/// Shape the feature under a queried point, or `None` when nothing is there.
pub fn shape_point(
    layer: &str,
    kind: RecordKind,
    collection: &FeatureCollection,
) -> Option<ShapedRecord> {
    collection
        .features
        .first()
        .map(|feature| shape_feature(layer, kind, feature))
}
