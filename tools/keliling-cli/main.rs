use clap::Parser;
use keliling::prelude::*;
use serde::Deserialize;
use std::fs;
use std::time::Instant;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the matrix input format and are only used here for
// conversion.

/// A node list plus a full n-by-n cost matrix, the classic textbook input
/// shape. Cells may be numbers or any of the "no connection" spellings
/// ("inf", "infinity", "∞", an empty cell).
#[derive(Deserialize)]
struct RawMatrixGraph {
    nodes: Vec<String>,
    matrix: Vec<Vec<Cost>>,
}

// --- Converter Implementation ---
// This implements the conversion from the raw matrix model to Keliling's
// canonical GraphDefinition.

impl IntoGraph for RawMatrixGraph {
    fn into_graph(self) -> std::result::Result<GraphDefinition, GraphConversionError> {
        let n = self.nodes.len();
        if self.matrix.len() != n {
            return Err(GraphConversionError::ValidationError(format!(
                "matrix has {} rows but {} nodes were declared",
                self.matrix.len(),
                n
            )));
        }

        let mut edges = Vec::with_capacity(n * n);
        for (i, row) in self.matrix.into_iter().enumerate() {
            if row.len() != n {
                return Err(GraphConversionError::ValidationError(format!(
                    "matrix row {} has {} cells but {} nodes were declared",
                    i,
                    row.len(),
                    n
                )));
            }
            for (j, cost) in row.into_iter().enumerate() {
                edges.push(EdgeDefinition {
                    from: self.nodes[i].clone(),
                    to: self.nodes[j].clone(),
                    cost,
                });
            }
        }

        Ok(GraphDefinition {
            nodes: self.nodes,
            edges,
        })
    }
}

/// Build a greedy nearest-neighbor tour over a cost graph
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the graph JSON file
    graph: String,

    /// The node to start and end the tour at
    start: String,

    /// Interpret the input as a node list + cost matrix instead of an
    /// edge list
    #[arg(long)]
    matrix: bool,

    /// Fail instead of using synthetic infinite-cost edges when the graph
    /// is disconnected
    #[arg(long)]
    strict: bool,

    /// Emit the tour as JSON instead of the formatted trace
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let content = fs::read_to_string(&cli.graph)?;
    let definition = if cli.matrix {
        let raw: RawMatrixGraph = serde_json::from_str(&content)?;
        raw.into_graph()?
    } else {
        serde_json::from_str::<GraphDefinition>(&content)?
    };

    let graph = CostGraph::from_definition(definition)?;

    let solve_start = Instant::now();
    let tour = GreedyTourBuilder::new()
        .allow_disconnected(!cli.strict)
        .solve(&graph, &cli.start)?;
    let elapsed = solve_start.elapsed();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tour)?);
    } else {
        println!("{}", TraceFormatter::format_tour(&tour));
        if tour.has_infinite_cost {
            println!("Warning: the graph is not fully connected.");
        }
    }

    eprintln!("Solved {} nodes in {:?}", graph.len(), elapsed);

    Ok(())
}
