//! Pipeline driver: runs the three build stages in their required order.
//!
//! Stage order is a behavioral contract, not an implementation detail:
//!
//! 1. paths (`LineString`) — establishes the walkable network,
//! 2. named buildings (`Polygon`) — perimeter loops, attached per vertex,
//! 3. named points (`Point`) — freestanding points of interest.
//!
//! Buildings and points attach to the nearest *non-building* node, so the
//! path network must be fully present before stage 2 begins.  Unnamed
//! buildings and points are dropped without creating any nodes or edges.

use cg_core::BuildConfig;
use cg_geojson::FeatureSet;

use crate::builder::GraphBuilder;
use crate::graph::Graph;

/// Build the campus graph from classified features.
///
/// Infallible by design: malformed input is rejected earlier, at intake, and
/// features with nothing to contribute (unnamed buildings and points,
/// unrecognized geometry) never reach the builder.  Zero features produce an
/// empty graph.
pub fn build_graph(features: &FeatureSet, config: &BuildConfig) -> Graph {
    let mut builder = GraphBuilder::new(config);

    for path in &features.paths {
        builder.add_path(&path.coords);
    }

    for building in &features.buildings {
        if building.name.is_empty() {
            continue;
        }
        builder.add_building(&building.name, &building.outer_ring);
    }

    for point in &features.points {
        if point.name.is_empty() {
            continue;
        }
        builder.add_point(&point.name, point.position);
    }

    builder.finish()
}
