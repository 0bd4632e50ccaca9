//! Facade behaviour against scripted upstream services.

use std::sync::Arc;

use geodata_api::facade::{AreaFeatureRequest, AreaInput, GeodataFacade, MapImageOptions};
use geodata_common::{BoundingBox, Corridor, GeoError, Sweref99Point, Wgs84BoundingBox, Wgs84Point};
use serde_json::json;
use test_utils::{fixtures, query_value, MockTransport};

fn facade(mock: MockTransport) -> (Arc<MockTransport>, GeodataFacade) {
    let mock = Arc::new(mock);
    (mock.clone(), GeodataFacade::new(mock))
}

fn stockholm_bbox() -> BoundingBox {
    let (min_x, min_y, max_x, max_y) = fixtures::places::STOCKHOLM_BBOX;
    BoundingBox::new(min_x, min_y, max_x, max_y)
}

fn stockholm_corridor() -> Corridor {
    let points = fixtures::places::STOCKHOLM_CORRIDOR
        .iter()
        .map(|&(x, y)| Sweref99Point::new(x, y))
        .collect();
    Corridor::new(points, 100.0).unwrap()
}

fn corridor_request(corridor: Corridor) -> AreaFeatureRequest {
    AreaFeatureRequest {
        corridor: Some(corridor),
        ..AreaFeatureRequest::default()
    }
}

// ---------------------------------------------------------------------------
// Bedrock polygon filter and fallback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_corridor_uses_polygon_filter() {
    let (mock, facade) =
        facade(MockTransport::new().push_json(fixtures::bedrock_feature_collection()));

    let result = facade
        .query_area_features("bedrock", corridor_request(stockholm_corridor()))
        .await
        .unwrap();

    assert!(result.used_polygon_filter);
    assert_eq!(result.features.len(), 2);
    assert_eq!(result.number_matched, Some(2));

    let urls = mock.urls();
    assert_eq!(urls.len(), 1);
    let filter = query_value(&urls[0], "filter").unwrap();
    assert!(filter.starts_with("INTERSECTS(geom,POLYGON(("), "{}", filter);
    assert_eq!(query_value(&urls[0], "filter-lang").as_deref(), Some("cql-text"));
    assert_eq!(query_value(&urls[0], "bbox"), None);
}

#[tokio::test]
async fn test_polygon_failure_falls_back_to_bbox() {
    let (mock, facade) = facade(
        MockTransport::new()
            .push_status(400)
            .push_json(fixtures::bedrock_feature_collection()),
    );

    let result = facade
        .query_area_features("bedrock", corridor_request(stockholm_corridor()))
        .await
        .unwrap();

    assert!(!result.used_polygon_filter);
    assert_eq!(result.features.len(), 2);

    let urls = mock.urls();
    assert_eq!(urls.len(), 2);
    assert!(query_value(&urls[0], "filter").is_some());
    assert_eq!(query_value(&urls[1], "filter"), None);
    assert_eq!(query_value(&urls[1], "filter-lang"), None);
    assert_eq!(
        query_value(&urls[1], "bbox").as_deref(),
        Some("669900,6569900,680100,6580100")
    );
}

#[tokio::test]
async fn test_fallback_failure_is_generic() {
    let (mock, facade) = facade(MockTransport::new().push_status(400).push_status(503));

    let err = facade
        .query_area_features("bedrock", corridor_request(stockholm_corridor()))
        .await
        .unwrap_err();

    assert_eq!(mock.request_count(), 2);
    match err {
        GeoError::UpstreamApi { status, message, .. } => {
            assert_eq!(status, 503);
            assert!(message.contains("with or without the polygon filter"), "{}", message);
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_degenerate_corridor_skips_polygon() {
    // Both vertices coincide: the outline cannot be built but the envelope can
    let corridor = Corridor::new(
        vec![
            Sweref99Point::new(674000.0, 6580000.0),
            Sweref99Point::new(674000.0, 6580000.0),
        ],
        250.0,
    )
    .unwrap();
    let (mock, facade) =
        facade(MockTransport::new().push_json(fixtures::empty_feature_collection()));

    let result = facade
        .query_area_features("bedrock", corridor_request(corridor))
        .await
        .unwrap();

    assert!(!result.used_polygon_filter);
    assert!(result.features.is_empty());
    let urls = mock.urls();
    assert_eq!(urls.len(), 1);
    assert_eq!(query_value(&urls[0], "filter"), None);
    assert_eq!(
        query_value(&urls[0], "bbox").as_deref(),
        Some("673750,6579750,674250,6580250")
    );
}

#[tokio::test]
async fn test_bbox_query_has_no_retry() {
    let (mock, facade) = facade(MockTransport::new().push_status(500));

    let err = facade
        .query_area_features(
            "bedrock",
            AreaFeatureRequest {
                bbox: Some(stockholm_bbox()),
                ..AreaFeatureRequest::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, GeoError::UpstreamApi { status: 500, .. }));
    assert_eq!(mock.request_count(), 1);
}

#[tokio::test]
async fn test_shaped_bedrock_records() {
    let (_, facade) =
        facade(MockTransport::new().push_json(fixtures::bedrock_feature_collection()));

    let result = facade
        .query_area_features(
            "bedrock",
            AreaFeatureRequest {
                bbox: Some(stockholm_bbox()),
                ..AreaFeatureRequest::default()
            },
        )
        .await
        .unwrap();

    let first = &result.features[0];
    assert_eq!(first.layer, "bedrock");
    assert_eq!(first.id.as_deref(), Some("berggrund.1001"));
    assert_eq!(first.field("rock_type"), Some(&json!("Granit")));
    assert!(first.geometry.is_some());

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["usedPolygonFilter"], json!(false));
}

#[tokio::test]
async fn test_limit_is_clamped() {
    let (mock, facade) = facade(
        MockTransport::new()
            .push_json(fixtures::empty_feature_collection())
            .push_json(fixtures::empty_feature_collection())
            .push_json(fixtures::empty_feature_collection()),
    );

    for limit in [Some(5000), Some(0), None] {
        facade
            .query_area_features(
                "bedrock",
                AreaFeatureRequest {
                    bbox: Some(stockholm_bbox()),
                    corridor: None,
                    limit,
                },
            )
            .await
            .unwrap();
    }

    let limits: Vec<_> = mock
        .urls()
        .iter()
        .map(|u| query_value(u, "limit").unwrap())
        .collect();
    assert_eq!(limits, vec!["1000", "1", "100"]);
}

// ---------------------------------------------------------------------------
// Validation before any network call
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_area_query_on_wms_only_layer() {
    let (mock, facade) = facade(MockTransport::new());
    let err = facade
        .query_area_features(
            "soil_types",
            AreaFeatureRequest {
                bbox: Some(stockholm_bbox()),
                ..AreaFeatureRequest::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, GeoError::Validation(_)));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_unknown_layer() {
    let (_, facade) = facade(MockTransport::new());
    let err = facade
        .query_point("magma", &Sweref99Point::new(674647.0, 6580824.0))
        .await
        .unwrap_err();
    assert!(matches!(err, GeoError::NotFound(_)));
}

#[tokio::test]
async fn test_inverted_bbox_rejected() {
    let (mock, facade) = facade(MockTransport::new());
    let err = facade
        .query_area_features(
            "bedrock",
            AreaFeatureRequest {
                bbox: Some(BoundingBox::new(680000.0, 6570000.0, 670000.0, 6590000.0)),
                ..AreaFeatureRequest::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GeoError::Validation(ref m) if m.contains("minX must be less than maxX")
    ));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_missing_area() {
    let (_, facade) = facade(MockTransport::new());
    let err = facade
        .query_area_features("bedrock", AreaFeatureRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, GeoError::Validation(_)));
}

// ---------------------------------------------------------------------------
// Point queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_point_query_current_wms() {
    let (mock, facade) = facade(MockTransport::new().push_json(fixtures::soil_feature_info()));

    let record = facade
        .query_point("soil_types", &Sweref99Point::new(674647.0, 6580824.0))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.layer, "soil_types");
    assert_eq!(record.field("soil_type"), Some(&json!("Sandig morän")));

    let url = &mock.urls()[0];
    assert_eq!(query_value(url, "VERSION").as_deref(), Some("1.3.0"));
    assert_eq!(query_value(url, "WIDTH").as_deref(), Some("256"));
    assert_eq!(query_value(url, "HEIGHT").as_deref(), Some("256"));
    assert_eq!(query_value(url, "I").as_deref(), Some("128"));
    assert_eq!(query_value(url, "J").as_deref(), Some("128"));
    assert_eq!(
        query_value(url, "BBOX").as_deref(),
        Some("6580724,674547,6580924,674747")
    );
}

#[tokio::test]
async fn test_point_query_legacy_wms() {
    let (mock, facade) = facade(MockTransport::new().push_json(fixtures::radon_feature_info()));

    let record = facade
        .query_point("radon", &Sweref99Point::new(674647.0, 6580824.0))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.field("uranium_ppm"), Some(&json!(4.2)));

    let url = &mock.urls()[0];
    assert_eq!(query_value(url, "SRS").as_deref(), Some("EPSG:3006"));
    assert_eq!(query_value(url, "X").as_deref(), Some("128"));
    assert_eq!(query_value(url, "Y").as_deref(), Some("128"));
    assert_eq!(
        query_value(url, "BBOX").as_deref(),
        Some("674547,6580724,674747,6580924")
    );
}

#[tokio::test]
async fn test_point_query_nothing_found() {
    let (_, facade) = facade(MockTransport::new().push_json(fixtures::empty_feature_info()));
    let record = facade
        .query_point("wells", &Sweref99Point::new(674647.0, 6580824.0))
        .await
        .unwrap();
    assert!(record.is_none());
}

#[tokio::test]
async fn test_point_query_upstream_failure() {
    let (_, facade) = facade(MockTransport::new().push_status(502));
    let err = facade
        .query_point("groundwater", &Sweref99Point::new(674647.0, 6580824.0))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GeoError::UpstreamApi { ref message, .. } if message.contains("may be unavailable")
    ));
}

#[tokio::test]
async fn test_point_query_wgs84() {
    let (mock, facade) = facade(MockTransport::new().push_json(fixtures::wells_feature_info()));
    let (lat, lon) = fixtures::places::STOCKHOLM_WGS84;
    let record = facade
        .query_point_wgs84("wells", &Wgs84Point::new(lat, lon))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.field("well_id"), Some(&json!(123456)));
    assert_eq!(mock.request_count(), 1);

    let (lat, lon) = fixtures::places::PARIS_WGS84;
    let err = facade
        .query_point_wgs84("wells", &Wgs84Point::new(lat, lon))
        .await
        .unwrap_err();
    assert!(matches!(err, GeoError::Validation(_)));
    assert_eq!(mock.request_count(), 1);
}

#[tokio::test]
async fn test_point_outside_grid_rejected() {
    let (mock, facade) = facade(MockTransport::new());
    let err = facade
        .query_point("wells", &Sweref99Point::new(100.0, 200.0))
        .await
        .unwrap_err();
    assert!(matches!(err, GeoError::Validation(_)));
    assert_eq!(mock.request_count(), 0);
}

// ---------------------------------------------------------------------------
// Pure operations
// ---------------------------------------------------------------------------

#[test]
fn test_map_image_urls() {
    let (mock, facade) = facade(MockTransport::new());

    let image = facade
        .query_map_image(
            "groundwater_vulnerability",
            &stockholm_bbox(),
            &MapImageOptions::default(),
        )
        .unwrap();

    assert_eq!(image.layers, vec!["SE.GOV.SGU.GRUNDVATTEN.SARBARHET"]);
    assert_eq!(image.coordinate_system, "EPSG:3006");
    assert_eq!(image.bbox, stockholm_bbox());
    assert!(image.map_url.starts_with("https://maps3.sgu.se/geoserver/wms?"));
    assert_eq!(query_value(&image.map_url, "SRS").as_deref(), Some("EPSG:3006"));
    assert_eq!(query_value(&image.map_url, "WIDTH").as_deref(), Some("800"));
    assert_eq!(
        query_value(&image.legend_url, "REQUEST").as_deref(),
        Some("GetLegendGraphic")
    );
    assert_eq!(mock.request_count(), 0);
}

#[test]
fn test_map_image_options() {
    let (_, facade) = facade(MockTransport::new());
    let options = MapImageOptions {
        width: Some(1024),
        height: Some(512),
        format: Some("image/jpeg".to_string()),
    };
    let image = facade
        .query_map_image("soil_types", &stockholm_bbox(), &options)
        .unwrap();
    assert_eq!(query_value(&image.map_url, "WIDTH").as_deref(), Some("1024"));
    assert_eq!(query_value(&image.map_url, "HEIGHT").as_deref(), Some("512"));
    assert_eq!(query_value(&image.map_url, "FORMAT").as_deref(), Some("image/jpeg"));

    let options = MapImageOptions {
        width: Some(0),
        ..MapImageOptions::default()
    };
    assert!(matches!(
        facade.query_map_image("soil_types", &stockholm_bbox(), &options),
        Err(GeoError::Validation(_))
    ));
}

#[test]
fn test_transform_point() {
    let (_, facade) = facade(MockTransport::new());

    let (lat, lon) = fixtures::places::STOCKHOLM_WGS84;
    let p = facade.transform_point(&Wgs84Point::new(lat, lon)).unwrap();
    assert!(p.x > 670_000.0 && p.x < 680_000.0);
    assert!(p.y > 6_575_000.0 && p.y < 6_585_000.0);

    let (lat, lon) = fixtures::places::PARIS_WGS84;
    let err = facade.transform_point(&Wgs84Point::new(lat, lon)).unwrap_err();
    assert!(err.to_string().contains("outside valid range for Sweden"));
}

#[test]
fn test_build_bounding_box() {
    let (_, facade) = facade(MockTransport::new());

    let bbox = facade
        .build_bounding_box(&AreaInput::Corridor(stockholm_corridor()))
        .unwrap();
    assert_eq!(bbox, BoundingBox::new(669900.0, 6569900.0, 680100.0, 6580100.0));

    let bbox = facade
        .build_bounding_box(&AreaInput::Wgs84Bbox(Wgs84BoundingBox::new(59.3, 18.0, 59.4, 18.1)))
        .unwrap();
    assert!(bbox.min_x < bbox.max_x && bbox.min_y < bbox.max_y);

    let err = facade
        .build_bounding_box(&AreaInput::Bbox(BoundingBox::new(
            680000.0, 6570000.0, 670000.0, 6590000.0,
        )))
        .unwrap_err();
    assert!(matches!(err, GeoError::Validation(_)));
}

#[test]
fn test_list_layers() {
    let (_, facade) = facade(MockTransport::new());
    let layers = facade.list_layers();
    assert!(layers.iter().any(|l| l.name == "bedrock" && l.supports_area_features));
    assert!(layers.iter().any(|l| l.name == "radon" && !l.supports_area_features));
}

#[tokio::test]
async fn test_describe_upstream_layers() {
    let (mock, facade) = facade(MockTransport::new().push_text(fixtures::capabilities_xml()));
    let layers = facade.describe_upstream_layers("soil_types").await.unwrap();
    assert_eq!(layers.len(), 2);
    assert!(mock.urls()[0]
        .starts_with("https://resource.sgu.se/service/wms/130/jordarter-25-100-tusen?"));
}
