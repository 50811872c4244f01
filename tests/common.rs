//! Common test utilities for building graph fixtures.
use keliling::prelude::*;

/// A fully connected, symmetric three-city graph.
///
/// Greedy from Jakarta: Jakarta -> Bandung (150) -> Surabaya (700) ->
/// Jakarta (800), total 1650.
#[allow(dead_code)]
pub fn create_cities_graph() -> CostGraph {
    CostGraph::builder()
        .node("Jakarta")
        .node("Bandung")
        .node("Surabaya")
        .edge("Jakarta", "Bandung", Cost::new(150.0))
        .edge("Bandung", "Jakarta", Cost::new(150.0))
        .edge("Jakarta", "Surabaya", Cost::new(800.0))
        .edge("Surabaya", "Jakarta", Cost::new(800.0))
        .edge("Bandung", "Surabaya", Cost::new(700.0))
        .edge("Surabaya", "Bandung", Cost::new(700.0))
        .build()
        .unwrap()
}

/// A directed graph where the greedy tour cannot avoid missing edges.
///
/// Only P->Q, P->R, Q->S and R->S exist; from S onwards every transition
/// needs a synthetic infinite-cost edge.
#[allow(dead_code)]
pub fn create_disconnected_graph() -> CostGraph {
    CostGraph::builder()
        .node("P")
        .node("Q")
        .node("R")
        .node("S")
        .edge("P", "Q", Cost::new(15.0))
        .edge("P", "R", Cost::new(25.0))
        .edge("Q", "S", Cost::new(20.0))
        .edge("R", "S", Cost::new(30.0))
        .build()
        .unwrap()
}

/// A single node with no edges at all.
#[allow(dead_code)]
pub fn create_single_node_graph() -> CostGraph {
    CostGraph::builder().node("A").build().unwrap()
}

/// Two equal-cost candidates from the start node; the earlier-declared node
/// (B) must win the tie.
#[allow(dead_code)]
pub fn create_tie_graph() -> CostGraph {
    CostGraph::builder()
        .node("A")
        .node("B")
        .node("C")
        .edge("A", "B", Cost::new(10.0))
        .edge("A", "C", Cost::new(10.0))
        .edge("B", "C", Cost::new(5.0))
        .edge("B", "A", Cost::new(7.0))
        .edge("C", "B", Cost::new(5.0))
        .edge("C", "A", Cost::new(7.0))
        .build()
        .unwrap()
}
