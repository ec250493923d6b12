//! campusgraph — convert a campus GeoJSON export into a routable pedestrian
//! graph.
//!
//! One-shot batch run: read one GeoJSON file, write one node/edge JSON file.
//!
//! ```text
//! campusgraph [input.geojson] [output.json]
//! ```
//!
//! Defaults mirror the historical layout: `data/data.geojson` in,
//! `campus_nodes_edges.json` out.  Either the whole run succeeds and a
//! complete graph file appears, or the run aborts and nothing is written.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use cg_core::BuildConfig;
use cg_geojson::load_features;
use cg_graph::build_graph;

const DEFAULT_INPUT: &str = "data/data.geojson";
const DEFAULT_OUTPUT: &str = "campus_nodes_edges.json";

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_owned());
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_owned());

    let config = BuildConfig::default();

    println!("=== campusgraph ===");
    println!(
        "Match tolerance: {} m  |  Walking speed: {} m/s",
        config.node_match_tolerance_m, config.walking_speed_mps
    );

    let features = load_features(Path::new(&input))
        .with_context(|| format!("failed to load features from {input}"))?;
    println!(
        "Features: {} paths, {} buildings, {} points",
        features.paths.len(),
        features.buildings.len(),
        features.points.len()
    );

    let t0 = Instant::now();
    let graph = build_graph(&features, &config);
    let elapsed = t0.elapsed();

    graph
        .write_json(Path::new(&output))
        .with_context(|| format!("failed to write graph to {output}"))?;

    println!(
        "Wrote {output} ({} nodes, {} edges) in {:.3} s",
        graph.node_count(),
        graph.edge_count(),
        elapsed.as_secs_f64()
    );

    Ok(())
}
