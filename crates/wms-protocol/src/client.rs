//! WMS client bound to one endpoint and one protocol version.

use geodata_common::{GeoError, GeoResult};
use http_transport::{HttpClient, QueryParams, RequestOptions};
use serde::de::DeserializeOwned;
use tracing::{instrument, warn};

use crate::capabilities::{layer_names, NamedLayer};
use crate::getfeatureinfo::{feature_info_params, GetFeatureInfoOptions};
use crate::getmap::{get_map_params, legend_params, GetMapOptions};
use crate::version::WmsVersion;

const UNAVAILABLE_MESSAGE: &str =
    "The map service may be unavailable right now. Please retry in a moment.";

#[derive(Debug, Clone)]
pub struct WmsClient {
    http: HttpClient,
    version: WmsVersion,
}

impl WmsClient {
    pub fn new(http: HttpClient, version: WmsVersion) -> Self {
        Self { http, version }
    }

    pub fn version(&self) -> WmsVersion {
        self.version
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Fully formed GetMap URL. Performs no I/O.
    pub fn get_map_url(&self, options: &GetMapOptions) -> String {
        self.http.url("", &get_map_params(self.version, options))
    }

    /// GetLegendGraphic URL for one layer. Performs no I/O.
    pub fn get_legend_url(&self, layer: &str, format: Option<&str>) -> String {
        self.http.url("", &legend_params(self.version, layer, format))
    }

    /// Query features at a pixel and decode the JSON response.
    ///
    /// Any failure is reported as an upstream error with a generic retry
    /// message; the underlying detail is only logged.
    #[instrument(skip(self, options), fields(url = %self.http.base_url(), version = %self.version))]
    pub async fn get_feature_info<T: DeserializeOwned>(
        &self,
        options: &GetFeatureInfoOptions,
    ) -> GeoResult<T> {
        self.http
            .request("", RequestOptions::get(feature_info_params(self.version, options)))
            .await
            .map_err(|e| self.unavailable("GetFeatureInfo", e))
    }

    /// Raw capabilities document.
    #[instrument(skip(self), fields(url = %self.http.base_url()))]
    pub async fn get_capabilities(&self) -> GeoResult<String> {
        let params = QueryParams::new()
            .with("SERVICE", "WMS")
            .with("VERSION", self.version.as_str())
            .with("REQUEST", "GetCapabilities");
        self.http.request("", RequestOptions::get(params)).await
    }

    /// Named layers advertised by the endpoint.
    pub async fn describe_layers(&self) -> GeoResult<Vec<NamedLayer>> {
        let xml = self.get_capabilities().await?;
        layer_names(&xml).map_err(|e| {
            warn!(error = %e, url = %self.http.base_url(), "Unreadable capabilities document");
            GeoError::upstream(
                0,
                self.http.base_url(),
                "The map service returned an unreadable capabilities document.",
            )
        })
    }

    fn unavailable(&self, operation: &str, error: GeoError) -> GeoError {
        warn!(operation, error = %error, "WMS request failed");
        let status = match error {
            GeoError::UpstreamApi { status, .. } => status,
            _ => 0,
        };
        GeoError::upstream(status, self.http.base_url(), UNAVAILABLE_MESSAGE)
    }
}
