//! The model document: ordered nodes plus ordered edges.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::edge::DvEdge;
use crate::node::DvNode;

/// A Data Vault model document as produced by the generator and persisted
/// after repair.
///
/// Node order is generation order and edge order is append-only; neither is
/// semantically significant beyond display, but both are preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DvModel {
    /// Model nodes in generation order.
    pub nodes: Vec<DvNode>,
    /// Directed edges. Absent in the wire form defaults to empty.
    #[serde(default)]
    pub edges: Vec<DvEdge>,
}

impl DvModel {
    /// Returns the set of all node ids in the document.
    pub fn node_ids(&self) -> HashSet<&str> {
        self.nodes.iter().map(DvNode::id).collect()
    }

    /// Returns `true` when an edge with exactly this `(from, to)` pair exists.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to)
    }
}
