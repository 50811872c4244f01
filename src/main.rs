use keliling::graph::{CostGraph, GraphDefinition};
use keliling::solver::GreedyTourBuilder;
use keliling::trace::TraceFormatter;
use std::env;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: cargo run -- <path/to/graph.json> <start-node>");
        std::process::exit(1);
    }

    let graph_path = &args[1];
    let start = &args[2];

    println!("Loading graph from: {}", graph_path);

    let definition = match GraphDefinition::from_file(graph_path) {
        Ok(definition) => definition,
        Err(e) => {
            eprintln!("Failed to load graph file '{}': {}", graph_path, e);
            std::process::exit(1);
        }
    };

    let graph = match CostGraph::from_definition(definition) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Invalid graph: {}", e);
            std::process::exit(1);
        }
    };

    println!("Solving greedy tour from '{}'...", start);

    let tour = match GreedyTourBuilder::new().solve(&graph, start) {
        Ok(tour) => tour,
        Err(e) => {
            eprintln!("Failed to build tour: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", TraceFormatter::format_tour(&tour));

    if tour.has_infinite_cost {
        println!();
        println!("Warning: the graph is not fully connected.");
        println!("Some transitions required a synthetic infinite-cost edge.");
    }
}
