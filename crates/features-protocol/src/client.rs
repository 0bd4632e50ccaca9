//! OGC API - Features client.

use geodata_common::{GeoError, GeoResult};
use http_transport::{HttpClient, QueryParams, RequestOptions};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::collections::CollectionList;
use crate::query::ItemsQuery;

#[derive(Debug, Clone)]
pub struct FeaturesClient {
    http: HttpClient,
}

impl FeaturesClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Fetch one page of items from a collection.
    #[instrument(
        skip(self, query),
        fields(url = %self.http.base_url(), polygon = query.uses_polygon_filter())
    )]
    pub async fn get_items<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &ItemsQuery,
    ) -> GeoResult<T> {
        let path = format!("collections/{}/items", urlencoding::encode(collection));
        debug!(collection, limit = query.limit, offset = query.offset, "Fetching items");

        self.http
            .request(&path, RequestOptions::get(query.to_params()))
            .await
            .map_err(|e| self.as_upstream(e))
    }

    /// List the collections the endpoint publishes.
    #[instrument(skip(self), fields(url = %self.http.base_url()))]
    pub async fn get_collections(&self) -> GeoResult<CollectionList> {
        self.http
            .request("collections", RequestOptions::get(QueryParams::new()))
            .await
            .map_err(|e| self.as_upstream(e))
    }

    /// Fetch a single feature by id. A 404 from the server is `NotFound`.
    #[instrument(skip(self), fields(url = %self.http.base_url()))]
    pub async fn get_feature<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> GeoResult<T> {
        let path = format!(
            "collections/{}/items/{}",
            urlencoding::encode(collection),
            urlencoding::encode(id)
        );

        match self.http.request(&path, RequestOptions::default()).await {
            Ok(feature) => Ok(feature),
            Err(GeoError::UpstreamApi { status: 404, .. }) => Err(GeoError::not_found(format!(
                "Feature '{}' not found in collection '{}'",
                id, collection
            ))),
            Err(e) => Err(self.as_upstream(e)),
        }
    }

    fn as_upstream(&self, error: GeoError) -> GeoError {
        match error {
            e @ GeoError::UpstreamApi { .. } => {
                warn!(error = %e, "Features request failed");
                e
            }
            other => {
                warn!(error = %other, "Features request failed");
                GeoError::upstream(
                    0,
                    self.http.base_url(),
                    "The features service request failed. Try again later.",
                )
            }
        }
    }
}
