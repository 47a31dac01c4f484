//! Basic build -> query flow.

use reachgraph::*;

fn main() {
    // A small build pipeline: sources compile to objects, objects link to binaries.
    let mut graph = GraphBuilder::new()
        .fan(&["lexer.rs", "parser.rs"], &["frontend.o"])
        .edge("codegen.rs", "backend.o")
        .fan(&["frontend.o", "backend.o"], &["compiler"])
        .edge("frontend.o", "linter")
        .build();

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    // Everything that must be rebuilt when the parser changes
    println!("Downstream of parser.rs:");
    for id in graph.downstreams("parser.rs") {
        println!("  {}", id);
    }

    // Everything the compiler depends on
    println!("Upstream of compiler: {:?}", graph.upstreams("compiler"));

    // Only the nodes between the lexer and the compiler
    let between = graph.subgraph(["lexer.rs"], ["compiler"]);
    println!("Between lexer.rs and compiler: {:?}", between);

    // Dropping an intermediate node strips its edges
    graph.del_node("frontend.o");
    println!(
        "After removing frontend.o, compiler predecessors: {:?}",
        graph.predecessors("compiler")
    );
}
