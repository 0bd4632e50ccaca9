//! Transverse Mercator projection (Gauss–Krüger series).
//!
//! Forward projection from geodetic latitude/longitude to easting/northing
//! on an ellipsoid, using Krüger's series expanded to the fourth order in
//! the third flattening `n`. This is the formulation Lantmäteriet publishes
//! for SWEREF99.
//!
//! The projection parameters include:
//! - Ellipsoid: semi-major axis and flattening
//! - Central meridian and scale factor on it
//! - False easting / northing

/// Transverse Mercator projection parameters with precomputed series terms.
#[derive(Debug, Clone)]
pub struct TransverseMercator {
    /// Central meridian in radians
    pub lon0: f64,
    /// Scale factor on the central meridian
    pub k0: f64,
    /// False easting (meters)
    pub false_easting: f64,
    /// False northing (meters)
    pub false_northing: f64,
    /// Rectifying radius scaled by k0
    k0_a_hat: f64,
    /// Conformal latitude series coefficients (A, B, C, D)
    conformal: [f64; 4],
    /// Krüger beta coefficients
    beta: [f64; 4],
}

impl TransverseMercator {
    /// Create a projection from ellipsoid and grid parameters.
    ///
    /// # Arguments
    /// * `semi_major` - Ellipsoid semi-major axis (meters)
    /// * `inverse_flattening` - Ellipsoid 1/f
    /// * `central_meridian_deg` - Central meridian (degrees)
    /// * `k0` - Scale factor on the central meridian
    /// * `false_easting` - False easting (meters)
    /// * `false_northing` - False northing (meters)
    pub fn new(
        semi_major: f64,
        inverse_flattening: f64,
        central_meridian_deg: f64,
        k0: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        let f = 1.0 / inverse_flattening;
        let e2 = f * (2.0 - f);
        let n = f / (2.0 - f);
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n3 * n;

        let a_hat = semi_major / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0);

        let conformal = [
            e2,
            (5.0 * e2.powi(2) - e2.powi(3)) / 6.0,
            (104.0 * e2.powi(3) - 45.0 * e2.powi(4)) / 120.0,
            (1237.0 * e2.powi(4)) / 1260.0,
        ];

        let beta = [
            n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0 + 41.0 * n4 / 180.0,
            13.0 * n2 / 48.0 - 3.0 * n3 / 5.0 + 557.0 * n4 / 1440.0,
            61.0 * n3 / 240.0 - 103.0 * n4 / 140.0,
            49561.0 * n4 / 161280.0,
        ];

        Self {
            lon0: central_meridian_deg.to_radians(),
            k0,
            false_easting,
            false_northing,
            k0_a_hat: k0 * a_hat,
            conformal,
            beta,
        }
    }

    /// SWEREF99TM (EPSG:3006): GRS80, central meridian 15°E, k0 = 0.9996,
    /// false easting 500 km. SWEREF99 coincides with WGS84 at the meter
    /// level, so no datum shift is applied.
    pub fn sweref99tm() -> Self {
        Self::new(6_378_137.0, 298.257_222_101, 15.0, 0.9996, 500_000.0, 0.0)
    }

    /// Project geographic coordinates (degrees) to (easting, northing) in meters.
    pub fn forward(&self, lat_deg: f64, lon_deg: f64) -> (f64, f64) {
        let lat = lat_deg.to_radians();
        let lon = lon_deg.to_radians();

        let sin_lat = lat.sin();
        let sin2 = sin_lat * sin_lat;
        let [a, b, c, d] = self.conformal;
        let lat_conformal =
            lat - sin_lat * lat.cos() * (a + b * sin2 + c * sin2.powi(2) + d * sin2.powi(3));

        let dlon = lon - self.lon0;
        let xi = (lat_conformal.tan() / dlon.cos()).atan();
        let eta = (lat_conformal.cos() * dlon.sin()).atanh();

        let mut northing = xi;
        let mut easting = eta;
        for (k, beta) in self.beta.iter().enumerate() {
            let m = 2.0 * (k as f64 + 1.0);
            northing += beta * (m * xi).sin() * (m * eta).cosh();
            easting += beta * (m * xi).cos() * (m * eta).sinh();
        }

        (
            self.k0_a_hat * easting + self.false_easting,
            self.k0_a_hat * northing + self.false_northing,
        )
    }
}
