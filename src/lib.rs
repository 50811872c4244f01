//! # Keliling - Greedy Tour Construction Engine
//!
//! **Keliling** builds Hamiltonian circuits over directed, possibly asymmetric,
//! possibly incomplete cost graphs using the nearest-unvisited-neighbor
//! heuristic. Disconnected node pairs are first-class citizens: a missing edge
//! is modeled as an infinite-cost candidate rather than excluded, so a complete
//! tour is still produced (and flagged) even when the graph is not fully
//! connected.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model of
//! a cost graph. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your custom graph format (a cost matrix, an
//!     edge list from JSON, etc.) into your own Rust structs.
//! 2.  **Convert to Keliling's Model**: Implement the `IntoGraph` trait for
//!     your structs to provide a translation layer into Keliling's
//!     `GraphDefinition`.
//! 3.  **Build**: Validate the definition into a `CostGraph`. Validation
//!     enforces that every edge endpoint is a declared node and that no edge
//!     carries a negative cost.
//! 4.  **Solve**: Run a `GreedyTourBuilder` against the graph from any start
//!     node. The result is a `Tour` carrying the route, the total cost, and a
//!     step-by-step trace of every decision the heuristic made.
//!
//! ## Quick Start
//!
//! ```rust
//! use keliling::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Symmetric three-city example. Costs at or above 999_999 (or an
//!     // explicit infinity) are treated as "no usable connection".
//!     let graph = CostGraph::builder()
//!         .node("Jakarta")
//!         .node("Bandung")
//!         .node("Surabaya")
//!         .edge("Jakarta", "Bandung", Cost::new(150.0))
//!         .edge("Bandung", "Jakarta", Cost::new(150.0))
//!         .edge("Jakarta", "Surabaya", Cost::new(800.0))
//!         .edge("Surabaya", "Jakarta", Cost::new(800.0))
//!         .edge("Bandung", "Surabaya", Cost::new(700.0))
//!         .edge("Surabaya", "Bandung", Cost::new(700.0))
//!         .build()?;
//!
//!     let tour = GreedyTourBuilder::new().solve(&graph, "Jakarta")?;
//!
//!     println!("{}", TraceFormatter::format_route(&tour.route));
//!     println!("Total cost: {}", tour.total_cost);
//!
//!     if tour.has_infinite_cost {
//!         println!("Warning: the graph is not fully connected.");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod graph;
pub mod prelude;
pub mod solver;
pub mod trace;
