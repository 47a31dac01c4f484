//! Fluent API for building DirectedGraph instances.

use super::DirectedGraph;

/// Fluent builder for constructing a DirectedGraph.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<String>,
    edges: Vec<(String, String)>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, even if no edge will reference it.
    pub fn node(&mut self, id: impl Into<String>) -> &mut Self {
        self.nodes.push(id.into());
        self
    }

    /// Add an edge from `source` to `target`.
    pub fn edge(&mut self, source: impl Into<String>, target: impl Into<String>) -> &mut Self {
        self.edges.push((source.into(), target.into()));
        self
    }

    /// Add every edge from `sources` to every node of `targets`.
    pub fn fan(&mut self, sources: &[&str], targets: &[&str]) -> &mut Self {
        for &source in sources {
            for &target in targets {
                self.edge(source, target);
            }
        }
        self
    }

    /// Add a chain of edges `a -> b -> c -> ...`.
    pub fn path(&mut self, ids: &[&str]) -> &mut Self {
        for pair in ids.windows(2) {
            self.edge(pair[0], pair[1]);
        }
        self
    }

    /// Build the final DirectedGraph.
    pub fn build(&mut self) -> DirectedGraph {
        let mut graph = DirectedGraph::new();
        for node in self.nodes.drain(..) {
            graph.add_node(node);
        }
        graph.extend(self.edges.drain(..));
        graph
    }
}
