//! reachgraph — an in-memory directed graph with reachability queries.
//!
//! Nodes are opaque string identifiers. The graph answers direct-neighbour
//! lookups, downstream/upstream closures, and subgraph extraction between
//! two node frontiers. Every operation is total: absent nodes read as empty
//! results and deletes of absent nodes or edges are no-ops.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::EdgeListReader;
pub use graph::{trace, DirectedGraph, Direction, GraphBuilder};
pub use types::{GraphError, GraphResult, GraphSnapshot, NodeId};
