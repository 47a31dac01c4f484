//! Serializable, order-stable view of a graph.

use serde::{Deserialize, Serialize};

/// A plain value describing every node and edge of a graph.
///
/// Produced by [`DirectedGraph::snapshot`](crate::DirectedGraph::snapshot)
/// with both lists sorted by identifier. Converting back into a graph adds
/// the nodes first, then the edges, so endpoints missing from `nodes` are
/// created on the fly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Every node identifier.
    #[serde(default)]
    pub nodes: Vec<String>,
    /// Every `(source, destination)` pair.
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

impl GraphSnapshot {
    /// Number of nodes listed in the snapshot.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges listed in the snapshot.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
