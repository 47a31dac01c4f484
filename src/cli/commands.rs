//! CLI command implementations.

use std::collections::BTreeSet;
use std::path::Path;

use crate::format::EdgeListReader;
use crate::graph::{DirectedGraph, Direction};
use crate::types::GraphResult;

/// List every node in the graph.
pub fn cmd_nodes(path: &Path, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let nodes = graph.all_nodes();
    if json {
        println!("{}", serde_json::json!({ "nodes": nodes }));
    } else {
        print_list(&nodes);
    }
    Ok(())
}

/// Direct neighbours of a node in one direction.
pub fn cmd_neighbours(
    path: &Path,
    node: &str,
    direction: Direction,
    json: bool,
) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let neighbours = graph.neighbours(node, direction);
    if json {
        println!(
            "{}",
            serde_json::json!({
                "node": node,
                "direction": direction,
                "neighbours": neighbours,
            })
        );
    } else {
        print_list(&neighbours);
    }
    Ok(())
}

/// Full closure of a node in one direction (downstreams or upstreams).
pub fn cmd_closure(path: &Path, node: &str, direction: Direction, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let reached = match direction {
        Direction::Successor => graph.downstreams(node),
        Direction::Predecessor => graph.upstreams(node),
    };
    if json {
        println!(
            "{}",
            serde_json::json!({
                "node": node,
                "direction": direction,
                "closure": reached,
            })
        );
    } else {
        print_list(&reached);
    }
    Ok(())
}

/// Nodes lying between two frontiers.
pub fn cmd_subgraph(
    path: &Path,
    initiators: &[String],
    terminators: &[String],
    json: bool,
) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let nodes = graph.subgraph(initiators, terminators);
    if json {
        println!(
            "{}",
            serde_json::json!({
                "initiators": initiators,
                "terminators": terminators,
                "nodes": nodes,
            })
        );
    } else {
        print_list(&nodes);
    }
    Ok(())
}

/// Summary counts, plus the full snapshot in JSON mode.
pub fn cmd_stats(path: &Path, json: bool) -> GraphResult<()> {
    let graph = EdgeListReader::read_from_file(path)?;
    let isolated = isolated_nodes(&graph);
    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "isolated": isolated,
            "snapshot": graph.snapshot(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Isolated: {}", isolated.len());
    }
    Ok(())
}

/// Nodes with neither predecessors nor successors.
fn isolated_nodes(graph: &DirectedGraph) -> BTreeSet<String> {
    graph
        .all_nodes()
        .into_iter()
        .filter(|n| graph.successors(n).is_empty() && graph.predecessors(n).is_empty())
        .collect()
}

fn print_list<'a>(ids: impl IntoIterator<Item = &'a String>) {
    for id in ids {
        println!("{}", id);
    }
}
