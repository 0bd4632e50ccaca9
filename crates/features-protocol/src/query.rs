//! Items query parameters.

use geodata_common::{BoundingBox, CrsCode};
use http_transport::QueryParams;

pub const DEFAULT_LIMIT: u32 = 100;

/// Parameters for `GET /collections/{id}/items`.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsQuery {
    pub limit: u32,
    pub offset: u32,
    /// CRS of both the response geometry and the spatial filter
    pub crs: CrsCode,
    pub bbox: Option<BoundingBox>,
    /// WKT polygon for a CQL `INTERSECTS` filter; overrides `bbox`
    pub polygon_wkt: Option<String>,
}

impl Default for ItemsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
            crs: CrsCode::Epsg3006,
            bbox: None,
            polygon_wkt: None,
        }
    }
}

impl ItemsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn with_polygon(mut self, wkt: impl Into<String>) -> Self {
        self.polygon_wkt = Some(wkt.into());
        self
    }

    /// The same query with the polygon filter removed, leaving the bbox.
    pub fn without_polygon(mut self) -> Self {
        self.polygon_wkt = None;
        self
    }

    pub fn uses_polygon_filter(&self) -> bool {
        self.polygon_wkt.is_some()
    }

    /// Query parameters in the form the SGU API accepts.
    ///
    /// CRS values are always short-form `EPSG:nnnn`; the server rejects
    /// OGC CRS URIs.
    pub fn to_params(&self) -> QueryParams {
        let crs = self.crs.to_string();
        let mut params = QueryParams::new();
        params
            .push("limit", self.limit)
            .push("offset", self.offset)
            .push("crs", &crs)
            .push("bbox-crs", &crs);

        match (&self.polygon_wkt, &self.bbox) {
            (Some(wkt), _) => {
                params
                    .push("filter", format!("INTERSECTS(geom,{})", wkt))
                    .push("filter-lang", "cql-text")
                    .push("filter-crs", &crs);
            }
            (None, Some(bbox)) => {
                params.push("bbox", bbox.to_ogc_string());
            }
            (None, None) => {}
        }
        params
    }
}
