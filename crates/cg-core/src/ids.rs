//! Strongly typed node identifier.
//!
//! Node IDs are **1-based** and assigned in creation order: the first node
//! of a build gets ID 1, and the IDs written to the output file are exactly
//! these values.  `index()` maps an ID to its slot in the creation-ordered
//! node vector.

use std::fmt;

/// Identifier of a graph node.  1-based, allocated in creation order, stable
/// for the life of a build.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// The ID of the node stored at `index` in creation order.
    #[inline]
    pub fn from_index(index: usize) -> NodeId {
        NodeId(index as u32 + 1)
    }

    /// Slot of this node in the creation-ordered vector (`id - 1`).
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}
