use clap::Parser;
use keliling::graph::{Cost, EdgeDefinition, GraphDefinition};
use rand::Rng;
use std::fs;

/// A CLI tool to generate random graph instances for the Keliling solver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_graph.json")]
    output: String,

    /// The number of nodes to generate
    #[arg(short, long, default_value_t = 8)]
    nodes: usize,

    /// The probability that a directed edge exists between two distinct
    /// nodes; missing edges model disconnected pairs
    #[arg(long, default_value_t = 0.8)]
    density: f64,

    /// The maximum cost of a generated edge
    #[arg(long, default_value_t = 1000.0)]
    max_cost: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.nodes == 0 {
        eprintln!("Error: --nodes must be at least 1");
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.density) {
        eprintln!("Error: --density ({}) must be between 0 and 1", cli.density);
        std::process::exit(1);
    }

    println!(
        "Generating a {}-node graph (edge density {})...",
        cli.nodes, cli.density
    );

    let nodes: Vec<String> = (1..=cli.nodes).map(|i| format!("N{}", i)).collect();
    let mut edges = Vec::new();

    for from in &nodes {
        for to in &nodes {
            if from == to {
                // Zero self-edges on the diagonal, matrix convention.
                edges.push(EdgeDefinition {
                    from: from.clone(),
                    to: to.clone(),
                    cost: Cost::ZERO,
                });
            } else if rng.random_bool(cli.density) {
                edges.push(EdgeDefinition {
                    from: from.clone(),
                    to: to.clone(),
                    cost: Cost::new(rng.random_range(1.0..=cli.max_cost).round()),
                });
            }
        }
    }

    let definition = GraphDefinition { nodes, edges };

    let json_output = serde_json::to_string_pretty(&definition)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved graph instance to '{}'",
        cli.output
    );

    Ok(())
}
