//! Graph assembly: node deduplication, edge emission, and building/point
//! attachment.
//!
//! # Processing order
//!
//! Features must reach the builder in a fixed order: all paths first, then
//! building polygons, then freestanding points.  Attachment excludes
//! `building` nodes, so the path network has to exist before buildings and
//! points try to connect to it; feeding features in any other order silently
//! degrades the output (isolated buildings, points with nothing to attach
//! to).  The driver in [`crate::pipeline`] enforces the order — call the
//! `add_*` methods directly only if you preserve it.

use cg_core::{BuildConfig, GeoPoint, NodeId};

use crate::graph::{Edge, Graph, NodeKind};
use crate::store::NodeStore;

/// Accumulates nodes and edges for one graph build, then yields the finished
/// [`Graph`] via [`finish`](Self::finish).
pub struct GraphBuilder {
    store: NodeStore,
    edges: Vec<Edge>,
    config: BuildConfig,
}

impl GraphBuilder {
    pub fn new(config: &BuildConfig) -> Self {
        Self {
            store: NodeStore::new(config.earth_radius_m),
            edges: Vec::new(),
            config: config.clone(),
        }
    }

    // ── Node/edge primitives ──────────────────────────────────────────────

    /// Resolve `point` to an existing node within the match tolerance, or
    /// create a new one with the next ID.  An existing anonymous node adopts
    /// a non-empty `name`; a node that already has a name keeps it.  The
    /// kind and coordinates of an existing node are never rewritten.
    pub fn get_or_create_node(
        &mut self,
        point: GeoPoint,
        name: &str,
        accessible: bool,
        kind: NodeKind,
    ) -> NodeId {
        if let Some(id) = self
            .store
            .find_existing(point, self.config.node_match_tolerance_m)
        {
            self.store.backfill_name(id, name);
            return id;
        }
        self.store.insert(point, name.to_owned(), accessible, kind)
    }

    /// Connect `node` to the nearest eligible node with a reciprocal pair of
    /// unnamed edges.  `point` is the raw feature coordinate the node was
    /// resolved from; the emitted edge length is measured between the two
    /// nodes' canonical coordinates.  No-op when nothing is eligible (empty
    /// graph, or every candidate excluded).
    pub fn connect_to_nearest(
        &mut self,
        node: NodeId,
        point: GeoPoint,
        exclude_kinds: &[NodeKind],
        accessible: bool,
    ) {
        let Some(nearest) = self.store.find_nearest(point, Some(node), exclude_kinds) else {
            return;
        };
        if nearest == node {
            return;
        }

        let distance = self.store.distance_m(node, nearest);
        self.push_edge(node, nearest, distance, accessible, None);
        self.push_edge(nearest, node, distance, accessible, None);
    }

    /// Emit one directed edge per consecutive node pair.  With `close_loop`,
    /// also emit the wrap-around edge from the last node back to the first
    /// (building perimeters; open paths never close).
    ///
    /// Rings whose trailing vertex merged into the first node produce a
    /// zero-length self-loop as the wrap-around edge — consumers treat it as
    /// a free traversal.
    pub fn add_sequential_edges(
        &mut self,
        node_ids: &[NodeId],
        name: &str,
        accessible: bool,
        close_loop: bool,
    ) {
        for pair in node_ids.windows(2) {
            let distance = self.store.distance_m(pair[0], pair[1]);
            self.push_edge(pair[0], pair[1], distance, accessible, Some(name.to_owned()));
        }

        if close_loop && !node_ids.is_empty() {
            let (last, first) = (node_ids[node_ids.len() - 1], node_ids[0]);
            let distance = self.store.distance_m(last, first);
            self.push_edge(last, first, distance, accessible, Some(name.to_owned()));
        }
    }

    fn push_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        distance: f64,
        accessible: bool,
        name: Option<String>,
    ) {
        let time = distance / self.config.walking_speed_mps;
        self.edges.push(Edge {
            from,
            to,
            distance,
            time,
            accessible,
            name,
        });
    }

    // ── Per-feature stages ────────────────────────────────────────────────

    /// Stage 1 — a path feature.  Every coordinate becomes (or merges into)
    /// an anonymous `path` node; consecutive vertices are wired with unnamed
    /// one-directional edges.
    pub fn add_path(&mut self, coords: &[GeoPoint]) {
        let accessible = true; // reserved: derive from feature tags
        let node_ids: Vec<NodeId> = coords
            .iter()
            .map(|&p| self.get_or_create_node(p, "", accessible, NodeKind::Path))
            .collect();
        self.add_sequential_edges(&node_ids, "", accessible, false);
    }

    /// Stage 2 — a named building polygon.  Ring vertices become `building`
    /// nodes named after the feature; each vertex is attached to the nearest
    /// non-building node as soon as it is resolved (interleaved with ring
    /// construction, not after), then the perimeter is closed.
    pub fn add_building(&mut self, name: &str, outer_ring: &[GeoPoint]) {
        let accessible = true;
        let mut node_ids = Vec::with_capacity(outer_ring.len());

        for &point in outer_ring {
            let id = self.get_or_create_node(point, name, accessible, NodeKind::Building);
            node_ids.push(id);
            self.connect_to_nearest(id, point, &[NodeKind::Building], accessible);
        }

        self.add_sequential_edges(&node_ids, name, accessible, true);
    }

    /// Stage 3 — a named point of interest: a degenerate one-vertex
    /// building, attached to the path network like any building vertex.
    pub fn add_point(&mut self, name: &str, position: GeoPoint) {
        let accessible = true;
        let id = self.get_or_create_node(position, name, accessible, NodeKind::Building);
        self.connect_to_nearest(id, position, &[NodeKind::Building], accessible);
    }

    // ── Dimensions / finish ───────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// Consume the builder and produce the finished graph: nodes in ID
    /// order, edges in creation order.
    pub fn finish(self) -> Graph {
        Graph {
            nodes: self.store.into_nodes(),
            edges: self.edges,
        }
    }
}
