//! CLI entry point for the `reach` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use reachgraph::cli::commands;
use reachgraph::graph::Direction;
use reachgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "reach",
    about = "reach — reachability queries over a directed graph edge list"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every node
    Nodes {
        /// Edge-list file (.json for a snapshot, text otherwise)
        file: PathBuf,
    },
    /// Direct successors of a node
    Successors {
        /// Edge-list file
        file: PathBuf,
        /// Node identifier
        node: String,
    },
    /// Direct predecessors of a node
    Predecessors {
        /// Edge-list file
        file: PathBuf,
        /// Node identifier
        node: String,
    },
    /// Every node reachable from a node along outgoing edges
    Downstreams {
        /// Edge-list file
        file: PathBuf,
        /// Node identifier
        node: String,
    },
    /// Every node that reaches a node along incoming edges
    Upstreams {
        /// Edge-list file
        file: PathBuf,
        /// Node identifier
        node: String,
    },
    /// Nodes on some path from the initiators to the terminators
    Subgraph {
        /// Edge-list file
        file: PathBuf,
        /// Comma-separated initiator nodes
        #[arg(long, value_delimiter = ',', required = true)]
        from: Vec<String>,
        /// Comma-separated terminator nodes
        #[arg(long, value_delimiter = ',', required = true)]
        to: Vec<String>,
    },
    /// Node and edge counts
    Stats {
        /// Edge-list file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    let result = match cli.command {
        Commands::Nodes { file } => commands::cmd_nodes(&file, json),
        Commands::Successors { file, node } => {
            commands::cmd_neighbours(&file, &node, Direction::Successor, json)
        }
        Commands::Predecessors { file, node } => {
            commands::cmd_neighbours(&file, &node, Direction::Predecessor, json)
        }
        Commands::Downstreams { file, node } => {
            commands::cmd_closure(&file, &node, Direction::Successor, json)
        }
        Commands::Upstreams { file, node } => {
            commands::cmd_closure(&file, &node, Direction::Predecessor, json)
        }
        Commands::Subgraph { file, from, to } => commands::cmd_subgraph(&file, &from, &to, json),
        Commands::Stats { file } => commands::cmd_stats(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) | GraphError::InvalidLine { .. } => 2,
        };
        process::exit(code);
    }
}
