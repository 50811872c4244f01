//! The greedy nearest-neighbor tour construction engine.

use crate::error::SolveError;
use crate::graph::{Cost, CostGraph};
use crate::trace::Step;
use serde::Serialize;

/// The result of a successful solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    /// The visiting order, starting and ending at the start node.
    /// Length = number of nodes + 1.
    pub route: Vec<String>,
    /// The accumulated cost of the whole circuit, possibly infinite.
    pub total_cost: Cost,
    /// One record per transition, closing step included.
    pub steps: Vec<Step>,
    /// True when any step had to use an infinite cost. Informational: such a
    /// tour is a valid result, not a failure.
    pub has_infinite_cost: bool,
}

/// Constructs Hamiltonian circuits with the nearest-unvisited-neighbor
/// heuristic.
///
/// A `GreedyTourBuilder` holds only its configuration; `solve` is a pure
/// function over the graph and start node, so one builder can be reused
/// across graphs and across threads without coordination.
#[derive(Debug, Clone)]
pub struct GreedyTourBuilder {
    allow_disconnected: bool,
}

impl Default for GreedyTourBuilder {
    fn default() -> Self {
        Self {
            allow_disconnected: true,
        }
    }
}

impl GreedyTourBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Governs behavior when a candidate has no direct edge from the current
    /// node, or when the tour cannot close.
    ///
    /// When `true` (the default), the missing edge becomes a synthetic
    /// infinite-cost candidate and the tour completes with
    /// [`Tour::has_infinite_cost`] set. When `false`, the same situation is a
    /// hard [`SolveError`] instead of a degraded result.
    pub fn allow_disconnected(mut self, allow: bool) -> Self {
        self.allow_disconnected = allow;
        self
    }

    /// Builds a circuit over `graph` starting and ending at `start`.
    ///
    /// At every step the cheapest edge to an unvisited node wins; ties break
    /// in favor of the candidate encountered first, scanning unvisited nodes
    /// in graph declaration order, so identical inputs always produce an
    /// identical tour.
    pub fn solve(&self, graph: &CostGraph, start: &str) -> Result<Tour, SolveError> {
        if graph.is_empty() {
            return Err(SolveError::EmptyGraph);
        }
        if !graph.contains(start) {
            return Err(SolveError::StartNotInGraph(start.to_string()));
        }

        let mut route = vec![start.to_string()];
        let mut unvisited: Vec<String> = graph
            .nodes()
            .iter()
            .filter(|node| node.as_str() != start)
            .cloned()
            .collect();

        // Degenerate single-node graph: no edge traversal needed.
        if unvisited.is_empty() {
            route.push(start.to_string());
            return Ok(Tour {
                route,
                total_cost: Cost::ZERO,
                steps: Vec::new(),
                has_infinite_cost: false,
            });
        }

        let mut steps = Vec::with_capacity(unvisited.len() + 1);
        let mut total_cost = Cost::ZERO;
        let mut has_infinite_cost = false;
        let mut current = start.to_string();

        while !unvisited.is_empty() {
            let (next_index, edge_cost) = match self.pick_nearest(graph, &current, &unvisited) {
                Some(choice) => choice,
                None if self.allow_disconnected => {
                    // No traversable candidate at all: force the first
                    // unvisited node at infinite cost.
                    (0, Cost::INFINITE)
                }
                None => {
                    return Err(SolveError::Disconnected { node: current });
                }
            };

            let next = unvisited.remove(next_index);
            total_cost += edge_cost;
            has_infinite_cost |= edge_cost.is_infinite();
            steps.push(Step {
                from: current.clone(),
                to: next.clone(),
                cost: edge_cost,
                running_total: total_cost,
                remaining: unvisited.clone(),
                is_infinite: edge_cost.is_infinite(),
                is_return: false,
            });
            route.push(next.clone());
            current = next;
        }

        // Close the circuit back to the start node.
        let return_cost = match graph.edge(&current, start) {
            Some(cost) => cost,
            None if self.allow_disconnected => Cost::INFINITE,
            None => {
                return Err(SolveError::CannotCloseTour {
                    node: current,
                    start: start.to_string(),
                });
            }
        };

        total_cost += return_cost;
        has_infinite_cost |= return_cost.is_infinite();
        steps.push(Step {
            from: current,
            to: start.to_string(),
            cost: return_cost,
            running_total: total_cost,
            remaining: Vec::new(),
            is_infinite: return_cost.is_infinite(),
            is_return: true,
        });
        route.push(start.to_string());

        Ok(Tour {
            route,
            total_cost,
            steps,
            has_infinite_cost,
        })
    }

    /// Finds the cheapest candidate among `unvisited`, scanning in order so
    /// the first minimum encountered wins.
    ///
    /// Returns `None` when no node is traversable: with `allow_disconnected`
    /// every unvisited node is a candidate (missing edges cost infinity), so
    /// `None` can only occur in strict mode.
    fn pick_nearest(
        &self,
        graph: &CostGraph,
        current: &str,
        unvisited: &[String],
    ) -> Option<(usize, Cost)> {
        let mut best: Option<(usize, Cost)> = None;

        for (index, candidate) in unvisited.iter().enumerate() {
            let cost = match graph.edge(current, candidate) {
                Some(cost) => {
                    if cost.is_infinite() && !self.allow_disconnected {
                        continue;
                    }
                    cost
                }
                None if self.allow_disconnected => Cost::INFINITE,
                None => continue,
            };

            match best {
                Some((_, best_cost)) if cost >= best_cost => {}
                _ => best = Some((index, cost)),
            }
        }

        best
    }
}
