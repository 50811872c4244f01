//! Step-by-step records of how a tour was constructed, and their
//! human-readable formatting.

mod formatter;

pub use formatter::TraceFormatter;

use crate::graph::Cost;
use serde::Serialize;

/// A record of one transition chosen during tour construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub from: String,
    pub to: String,
    /// The edge cost used, possibly infinite.
    pub cost: Cost,
    /// The accumulated tour cost after this step.
    pub running_total: Cost,
    /// Nodes still unvisited after this step, in graph node order.
    pub remaining: Vec<String>,
    /// True when no direct edge existed (or the edge carried the infinite
    /// sentinel) and a synthetic infinite cost was used instead.
    pub is_infinite: bool,
    /// True only for the final step that closes the circuit back to the
    /// start node.
    pub is_return: bool,
}
