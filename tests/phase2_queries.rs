//! Phase 2 tests: neighbour, closure and subgraph queries.

use std::collections::BTreeSet;

use reachgraph::graph::{DirectedGraph, Direction, GraphBuilder};

// ==================== Helper ====================

fn set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

/// `{a,b,c} -> {p,q,r} -> {x,y,z}`, every layer fully connected to the next.
fn layered_graph() -> DirectedGraph {
    GraphBuilder::new()
        .fan(&["a", "b", "c"], &["p", "q", "r"])
        .fan(&["p", "q", "r"], &["x", "y", "z"])
        .build()
}

/// `a -> {x, y}`, `x -> {p, q}`, `y -> r`, `{p, r} -> z`.
fn diamond_graph() -> DirectedGraph {
    GraphBuilder::new()
        .edge("a", "x")
        .edge("a", "y")
        .edge("x", "p")
        .edge("x", "q")
        .edge("y", "r")
        .edge("p", "z")
        .edge("r", "z")
        .build()
}

// ==================== Neighbour Tests ====================

#[test]
fn test_succ_pred() {
    let mut g = DirectedGraph::new();
    g.add_edge("x", "p");
    g.add_edge("x", "q");
    g.add_edge("y", "r");
    g.add_edge("q", "r");

    assert_eq!(g.successors("x"), vec!["p", "q"]);
    assert_eq!(g.predecessors("r"), vec!["q", "y"]);
    assert!(g.successors("r").is_empty());
}

#[test]
fn test_neighbours_of_absent_node() {
    let g = diamond_graph();
    assert!(g.successors("missing").is_empty());
    assert!(g.predecessors("missing").is_empty());
    assert!(g.neighbours("missing", Direction::Successor).is_empty());
}

#[test]
fn test_neighbours_matches_named_queries() {
    let g = diamond_graph();
    for n in g.all_nodes() {
        assert_eq!(g.neighbours(&n, Direction::Successor), g.successors(&n));
        assert_eq!(g.neighbours(&n, Direction::Predecessor), g.predecessors(&n));
    }
}

// ==================== Closure Tests ====================

#[test]
fn test_downstreams() {
    let g = diamond_graph();
    assert_eq!(
        g.downstreams("a"),
        set(&["a", "x", "y", "z", "p", "q", "r"])
    );
    assert_eq!(g.downstreams("x"), set(&["x", "p", "q", "z"]));
    assert_eq!(g.downstreams("z"), set(&["z"]));
}

#[test]
fn test_upstreams() {
    let g = diamond_graph();
    assert_eq!(g.upstreams("z"), set(&["z", "p", "r", "x", "y", "a"]));
    assert_eq!(g.upstreams("q"), set(&["q", "x", "a"]));
    assert_eq!(g.upstreams("a"), set(&["a"]));
}

#[test]
fn test_closure_of_absent_node_is_itself() {
    let g = diamond_graph();
    assert_eq!(g.downstreams("ghost"), set(&["ghost"]));
    assert_eq!(g.upstreams("ghost"), set(&["ghost"]));
    assert!(!g.has_node("ghost"));
}

#[test]
fn test_cycle_terminates() {
    let mut g = DirectedGraph::new();
    g.add_edge("a", "b");
    g.add_edge("b", "a");
    assert_eq!(g.downstreams("a"), set(&["a", "b"]));
    assert_eq!(g.upstreams("a"), set(&["a", "b"]));
}

#[test]
fn test_long_cycle_with_tail() {
    let g = GraphBuilder::new()
        .path(&["a", "b", "c", "d", "a"])
        .edge("d", "tail")
        .build();
    assert_eq!(g.downstreams("c"), set(&["a", "b", "c", "d", "tail"]));
    assert_eq!(g.upstreams("tail"), set(&["a", "b", "c", "d", "tail"]));
}

#[test]
fn test_self_loop_closure() {
    let mut g = DirectedGraph::new();
    g.add_edge("a", "a");
    g.add_edge("a", "b");
    assert_eq!(g.downstreams("a"), set(&["a", "b"]));
    assert_eq!(g.upstreams("a"), set(&["a"]));
}

#[test]
fn test_multi_seed_closure() {
    let g = diamond_graph();
    assert_eq!(
        g.closure(["q", "r"], Direction::Predecessor),
        set(&["q", "r", "x", "y", "a"])
    );
    assert_eq!(
        g.closure(["p", "ghost"], Direction::Successor),
        set(&["p", "z", "ghost"])
    );
}

// ==================== Subgraph Tests ====================

#[test]
fn test_subgraph() {
    let g = layered_graph();
    assert_eq!(g.subgraph(["b"], ["y"]), set(&["b", "p", "q", "r", "y"]));
}

#[test]
fn test_subgraph_multiple_frontiers() {
    let g = layered_graph();
    assert_eq!(
        g.subgraph(["a", "c"], ["x", "z"]),
        set(&["a", "c", "p", "q", "r", "x", "z"])
    );
}

#[test]
fn test_subgraph_excludes_side_branches() {
    let g = diamond_graph();
    // q hangs off x but never reaches z.
    assert_eq!(g.subgraph(["a"], ["z"]), set(&["a", "x", "y", "p", "r", "z"]));
}

#[test]
fn test_subgraph_without_path_is_empty() {
    let g = diamond_graph();
    assert!(g.subgraph(["z"], ["a"]).is_empty());
    assert!(g.subgraph(["q"], ["r"]).is_empty());
    assert!(g.subgraph(Vec::<String>::new(), ["z"]).is_empty());
}

#[test]
fn test_subgraph_same_node_on_both_sides() {
    let g = diamond_graph();
    assert_eq!(g.subgraph(["x"], ["x"]), set(&["x"]));
    assert_eq!(g.subgraph(["ghost"], ["ghost"]), set(&["ghost"]));
}

#[test]
fn test_queries_after_deletion() {
    let mut g = diamond_graph();
    g.del_node("x");
    assert_eq!(g.downstreams("a"), set(&["a", "y", "r", "z"]));
    assert_eq!(g.upstreams("p"), set(&["p"]));
    assert_eq!(g.subgraph(["a"], ["z"]), set(&["a", "y", "r", "z"]));
}
