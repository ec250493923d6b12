//! Graph-build configuration.
//!
//! The original campus pipeline hard-coded these three constants; they are
//! surfaced as an explicit config struct so callers and tests can override
//! them.  Pass by reference into the pipeline entry points.

use crate::geo::EARTH_RADIUS_M;

/// Tunable parameters for one graph build.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildConfig {
    /// Coordinates closer than this (metres) are merged into a single node.
    pub node_match_tolerance_m: f64,

    /// Average pedestrian speed; edge time is `distance / walking_speed_mps`.
    pub walking_speed_mps: f64,

    /// Sphere radius used by every haversine distance in the build.
    pub earth_radius_m: f64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            node_match_tolerance_m: 1.0,
            walking_speed_mps: 1.4,
            earth_radius_m: EARTH_RADIUS_M,
        }
    }
}
