//! Reads edge lists into an in-memory graph.
//!
//! Text form, one entry per line:
//!
//! ```text
//! # comment
//! a -> b
//! b c
//! lonely
//! ```
//!
//! `a -> b` and `a b` are edges, a single token is an isolated node, blank
//! lines and `#` comments are skipped. The JSON form is a serialized
//! [`GraphSnapshot`].

use std::io::Read;
use std::path::Path;

use crate::graph::DirectedGraph;
use crate::types::{GraphError, GraphResult, GraphSnapshot};

/// Reader for edge-list files.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read a file, choosing JSON when the extension is `.json`.
    pub fn read_from_file(path: &Path) -> GraphResult<DirectedGraph> {
        let data = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let graph = if is_json {
            Self::parse_json(&data)?
        } else {
            Self::parse_text(&data)?
        };
        log::info!(
            "Loaded {} node(s) and {} edge(s) from {}",
            graph.node_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(graph)
    }

    /// Read a text edge list from any reader.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<DirectedGraph> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::parse_text(&data)
    }

    /// Parse a text edge list.
    pub fn parse_text(data: &str) -> GraphResult<DirectedGraph> {
        let mut graph = DirectedGraph::new();
        for (number, raw) in data.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            let spaced = line.replace("->", " -> ");
            let tokens: Vec<&str> = spaced.split_whitespace().collect();
            match tokens.as_slice() {
                ["->", ..] | [.., "->"] => {
                    return Err(GraphError::InvalidLine {
                        line: number + 1,
                        content: raw.to_string(),
                    })
                }
                [node] => graph.add_node(*node),
                [source, "->", target] | [source, target] => graph.add_edge(*source, *target),
                _ => {
                    return Err(GraphError::InvalidLine {
                        line: number + 1,
                        content: raw.to_string(),
                    })
                }
            }
        }
        Ok(graph)
    }

    /// Parse a JSON snapshot.
    pub fn parse_json(data: &str) -> GraphResult<DirectedGraph> {
        let snapshot: GraphSnapshot = serde_json::from_str(data)?;
        Ok(DirectedGraph::from(snapshot))
    }
}
