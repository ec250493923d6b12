//! Classified map features, ready for graph construction.
//!
//! The graph builder consumes features in a fixed order — paths, then
//! buildings, then points — because attachment quality depends on path nodes
//! existing before buildings try to connect to them.  `FeatureSet` keeps the
//! three lists separate so the pipeline can enforce that order.

use cg_core::GeoPoint;

/// A `LineString` feature: a walkway traced vertex by vertex.
#[derive(Clone, Debug)]
pub struct PathFeature {
    pub coords: Vec<GeoPoint>,
}

/// A `Polygon` feature: a building footprint.
///
/// Only the outer ring is kept; interior rings (courtyards, holes) play no
/// role in the walk graph.
#[derive(Clone, Debug)]
pub struct BuildingFeature {
    /// Display name from `properties.name`; empty when absent.  Unnamed
    /// buildings are dropped during graph construction.
    pub name: String,
    pub outer_ring: Vec<GeoPoint>,
}

/// A `Point` feature: a freestanding point of interest.
#[derive(Clone, Debug)]
pub struct PointFeature {
    /// Display name; unnamed points are dropped during graph construction.
    pub name: String,
    pub position: GeoPoint,
}

/// All recognized features of one GeoJSON document, partitioned by geometry
/// type, with original relative order preserved within each list.
#[derive(Clone, Debug, Default)]
pub struct FeatureSet {
    pub paths: Vec<PathFeature>,
    pub buildings: Vec<BuildingFeature>,
    pub points: Vec<PointFeature>,
}

impl FeatureSet {
    /// Total number of recognized features.
    pub fn len(&self) -> usize {
        self.paths.len() + self.buildings.len() + self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
