//! Features client requests against a scripted upstream.

use std::sync::Arc;

use features_protocol::{CollectionList, Feature, FeatureCollection, FeaturesClient, ItemsQuery};
use geodata_common::{BoundingBox, GeoError};
use http_transport::HttpClient;
use test_utils::{fixtures, query_value, MockTransport};

const BASE: &str = "https://api.sgu.se/oppnadata/berggrund50k-250k/ogc/features/v1";

fn setup(mock: MockTransport) -> (Arc<MockTransport>, FeaturesClient) {
    let mock = Arc::new(mock);
    let client = FeaturesClient::new(HttpClient::new(BASE, mock.clone()));
    (mock, client)
}

fn bbox() -> BoundingBox {
    BoundingBox::new(670000.0, 6570000.0, 680000.0, 6590000.0)
}

#[tokio::test]
async fn test_bbox_items_query() {
    let (mock, client) =
        setup(MockTransport::new().push_json(fixtures::bedrock_feature_collection()));

    let fc: FeatureCollection = client
        .get_items("berggrund-ytor", &ItemsQuery::new().with_bbox(bbox()).with_limit(25))
        .await
        .unwrap();
    assert_eq!(fc.features.len(), 2);
    assert_eq!(fc.number_matched, Some(2));

    let url = &mock.urls()[0];
    assert!(url.starts_with(&format!("{}/collections/berggrund-ytor/items?", BASE)));
    assert_eq!(query_value(url, "limit").as_deref(), Some("25"));
    assert_eq!(query_value(url, "bbox").as_deref(), Some("670000,6570000,680000,6590000"));
    assert_eq!(query_value(url, "bbox-crs").as_deref(), Some("EPSG:3006"));
    assert_eq!(query_value(url, "filter"), None);
}

#[tokio::test]
async fn test_polygon_items_query_omits_bbox() {
    let (mock, client) =
        setup(MockTransport::new().push_json(fixtures::empty_feature_collection()));

    let query = ItemsQuery::new().with_bbox(bbox()).with_polygon(bbox().to_wkt());
    let fc: FeatureCollection = client.get_items("berggrund-ytor", &query).await.unwrap();
    assert!(fc.is_empty());

    let url = &mock.urls()[0];
    assert_eq!(query_value(url, "bbox"), None);
    assert!(query_value(url, "filter").unwrap().starts_with("INTERSECTS(geom,POLYGON(("));
    assert_eq!(query_value(url, "filter-lang").as_deref(), Some("cql-text"));
    assert_eq!(query_value(url, "filter-crs").as_deref(), Some("EPSG:3006"));
}

#[tokio::test]
async fn test_upstream_error_passes_through() {
    let (_, client) = setup(MockTransport::new().push_status(400));

    let err = client
        .get_items::<FeatureCollection>("berggrund-ytor", &ItemsQuery::new())
        .await
        .unwrap_err();
    assert!(matches!(err, GeoError::UpstreamApi { status: 400, .. }));
}

#[tokio::test]
async fn test_other_errors_become_upstream() {
    let (_, client) = setup(MockTransport::new().push_error(GeoError::validation("boom")));

    let err = client
        .get_items::<FeatureCollection>("berggrund-ytor", &ItemsQuery::new())
        .await
        .unwrap_err();
    match err {
        GeoError::UpstreamApi { status, url, .. } => {
            assert_eq!(status, 0);
            assert_eq!(url, BASE);
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_collections() {
    let (mock, client) =
        setup(MockTransport::new().push_json(fixtures::collections_document()));

    let list: CollectionList = client.get_collections().await.unwrap();
    assert!(list.find("berggrund-ytor").is_some());
    assert_eq!(mock.urls()[0], format!("{}/collections", BASE));
}

#[tokio::test]
async fn test_get_feature() {
    let first = fixtures::bedrock_feature_collection()["features"][0].clone();
    let (mock, client) = setup(MockTransport::new().push_json(first));

    let feature: Feature = client.get_feature("berggrund-ytor", "berggrund.1001").await.unwrap();
    assert_eq!(feature.id.unwrap().to_string(), "berggrund.1001");
    assert_eq!(
        mock.urls()[0],
        format!("{}/collections/berggrund-ytor/items/berggrund.1001", BASE)
    );
}

#[tokio::test]
async fn test_missing_feature_is_not_found() {
    let (_, client) = setup(MockTransport::new().push_status(404));

    let err = client
        .get_feature::<Feature>("berggrund-ytor", "nope")
        .await
        .unwrap_err();
    assert!(matches!(err, GeoError::NotFound(ref m) if m.contains("nope")));
}
