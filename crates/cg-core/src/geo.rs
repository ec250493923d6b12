//! Geographic coordinate type and geodesic distance.
//!
//! `GeoPoint` stores double-precision latitude/longitude.  Node matching
//! compares haversine distances against a 1 m tolerance, so single-precision
//! (~1 m error at campus scale) is not an option here.

/// Mean Earth radius in metres, the default sphere for haversine distances.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres on the [`EARTH_RADIUS_M`]
    /// sphere.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        self.distance_m_with_radius(other, EARTH_RADIUS_M)
    }

    /// Haversine distance with an explicit sphere radius.
    ///
    /// Tolerance comparisons downstream depend on this exact formulation:
    /// `a = sin²(Δφ/2) + cos φ1·cos φ2·sin²(Δλ/2)`,
    /// `c = 2·atan2(√a, √(1−a))`, distance `R·c`.
    pub fn distance_m_with_radius(self, other: GeoPoint, radius_m: f64) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();

        let d_phi = (other.lat - self.lat).to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        let a = (d_phi * 0.5).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        radius_m * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
