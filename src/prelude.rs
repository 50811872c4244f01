//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! keliling crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use keliling::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a graph definition and build the validated model
//! let definition = GraphDefinition::from_file("path/to/graph.json")?;
//! let graph = CostGraph::from_definition(definition)?;
//!
//! // Solve and print the trace
//! let tour = GreedyTourBuilder::new().solve(&graph, "Jakarta")?;
//! println!("{}", TraceFormatter::format_tour(&tour));
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::graph::{Cost, CostGraph, EdgeDefinition, GraphBuilder, GraphDefinition, IntoGraph};

// Solver
pub use crate::solver::{GreedyTourBuilder, Tour};

// Trace types and formatting
pub use crate::trace::{Step, TraceFormatter};

// Error types
pub use crate::error::{CostParseError, GraphBuildError, GraphConversionError, SolveError};

// Standard library re-exports commonly used with this crate
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
