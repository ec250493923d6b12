//! Spatial node index: the growing set of graph nodes plus the two queries
//! node deduplication and attachment are built on.
//!
//! Both queries are deliberate linear scans over the creation-ordered node
//! vector.  The matching contract cares about *which* node wins, not just
//! how fast: [`NodeStore::find_existing`] returns the first (oldest) node
//! within tolerance, and [`NodeStore::find_nearest`] breaks distance ties in
//! favor of the oldest node.  Any substitute acceleration structure has to
//! preserve both guarantees; at campus scale the scans are cheap enough that
//! none is used.

use cg_core::{GeoPoint, NodeId};

use crate::graph::{Node, NodeKind};

/// Owned, append-only store of graph nodes in creation (ID) order.
#[derive(Debug)]
pub struct NodeStore {
    nodes: Vec<Node>,
    /// Sphere radius for every distance computed against this store.
    earth_radius_m: f64,
}

impl NodeStore {
    pub fn new(earth_radius_m: f64) -> Self {
        Self {
            nodes: Vec::new(),
            earth_radius_m,
        }
    }

    // ── Store dimensions / access ─────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Consume the store, yielding the nodes in ID order.
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    pub fn position(&self, id: NodeId) -> GeoPoint {
        let node = self.get(id);
        GeoPoint::new(node.lat, node.lng)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append a new node, allocating the next ID (1-based, creation order).
    pub fn insert(
        &mut self,
        point: GeoPoint,
        name: String,
        accessible: bool,
        kind: NodeKind,
    ) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node {
            id,
            name,
            lat: point.lat,
            lng: point.lon,
            accessible,
            kind,
        });
        id
    }

    /// Give an anonymous node a name.  Nodes that already carry a name keep
    /// it (first-assigned name wins), and an empty `name` is never assigned.
    pub fn backfill_name(&mut self, id: NodeId, name: &str) {
        let node = &mut self.nodes[id.index()];
        if node.name.is_empty() && !name.is_empty() {
            node.name = name.to_owned();
        }
    }

    // ── Distances ─────────────────────────────────────────────────────────

    /// Geodesic distance between two stored nodes, from their canonical
    /// (first-seen) coordinates.
    pub fn distance_m(&self, from: NodeId, to: NodeId) -> f64 {
        self.position(from)
            .distance_m_with_radius(self.position(to), self.earth_radius_m)
    }

    fn distance_to(&self, node: &Node, point: GeoPoint) -> f64 {
        GeoPoint::new(node.lat, node.lng).distance_m_with_radius(point, self.earth_radius_m)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The first node (in creation order) within `tolerance_m` of `point`,
    /// or `None` if every node is farther away.  The boundary is inclusive.
    pub fn find_existing(&self, point: GeoPoint, tolerance_m: f64) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|n| self.distance_to(n, point) <= tolerance_m)
            .map(|n| n.id)
    }

    /// The node with strictly minimal distance to `point`, skipping
    /// `exclude_id` and any node whose kind is in `exclude_kinds`.  Distance
    /// ties keep the oldest node.  `None` when no node is eligible.
    pub fn find_nearest(
        &self,
        point: GeoPoint,
        exclude_id: Option<NodeId>,
        exclude_kinds: &[NodeKind],
    ) -> Option<NodeId> {
        let mut best: Option<(NodeId, f64)> = None;

        for node in &self.nodes {
            if exclude_id == Some(node.id) || exclude_kinds.contains(&node.kind) {
                continue;
            }
            let d = self.distance_to(node, point);
            // Strict `<` keeps the oldest node on exact ties.
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((node.id, d));
            }
        }

        best.map(|(id, _)| id)
    }
}
