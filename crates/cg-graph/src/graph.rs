//! Output graph model: nodes, edges, and JSON serialization.
//!
//! Field names and ordering match the consumer's expected shape exactly:
//! nodes as `{id, name, lat, lng, accessible, type}`, edges as
//! `{from, to, distance, time, accessible, name}` with the `name` member
//! omitted entirely on attachment edges.

use std::path::Path;

use serde::{Deserialize, Serialize};

use cg_core::NodeId;

use crate::error::GraphError;

// ── NodeKind ──────────────────────────────────────────────────────────────────

/// What kind of physical location a node represents.
///
/// Freestanding points of interest are tagged [`NodeKind::Building`] too —
/// they behave as degenerate single-vertex buildings throughout the build,
/// including attachment-exclusion checks.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Path,
    Building,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Path => "path",
            NodeKind::Building => "building",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Node & Edge ───────────────────────────────────────────────────────────────

/// A deduplicated physical location: a path vertex, a building-boundary
/// vertex, or a point of interest.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Display label; empty for anonymous path vertices.  Once set, never
    /// overwritten (first-assigned name wins).
    pub name: String,
    /// Degrees, taken from the first coordinate that created the node.
    pub lat: f64,
    pub lng: f64,
    /// Always `true` in this version; reserved for accessibility tagging.
    pub accessible: bool,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

/// A directed traversal segment between two nodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Geodesic length in metres.
    pub distance: f64,
    /// Walking time in seconds: `distance / walking_speed_mps`.
    pub time: f64,
    pub accessible: bool,
    /// `Some("")` on path segments, the owning feature's name on perimeter
    /// edges, `None` (omitted from JSON) on attachment edges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// The finished graph: nodes in ID order, edges in creation order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The full pretty-printed JSON document
    /// (`{"nodes": [...], "edges": [...]}`).
    pub fn to_json_string(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize fully in memory, then write `path` in one shot, so a
    /// serialization failure leaves no partial file behind.
    pub fn write_json(&self, path: &Path) -> Result<(), GraphError> {
        let json = self.to_json_string()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
