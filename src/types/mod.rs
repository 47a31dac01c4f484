//! Shared data types for the reachgraph library.

pub mod error;
pub mod snapshot;

pub use error::{GraphError, GraphResult};
pub use snapshot::GraphSnapshot;

/// Node identifier. Opaque to the graph; equality is exact.
pub type NodeId = String;
