//! Tests for the greedy tour construction engine.
mod common;
use common::*;
use keliling::prelude::*;

#[test]
fn test_fully_connected_tour() {
    let graph = create_cities_graph();
    let tour = GreedyTourBuilder::new().solve(&graph, "Jakarta").unwrap();

    assert_eq!(tour.route, ["Jakarta", "Bandung", "Surabaya", "Jakarta"]);
    assert_eq!(tour.total_cost, Cost::new(1650.0));
    assert!(!tour.has_infinite_cost);
    assert_eq!(tour.steps.len(), 3);
}

#[test]
fn test_step_trace_details() {
    let graph = create_cities_graph();
    let tour = GreedyTourBuilder::new().solve(&graph, "Jakarta").unwrap();

    let first = &tour.steps[0];
    assert_eq!(first.from, "Jakarta");
    assert_eq!(first.to, "Bandung");
    assert_eq!(first.cost, Cost::new(150.0));
    assert_eq!(first.running_total, Cost::new(150.0));
    assert_eq!(first.remaining, ["Surabaya"]);
    assert!(!first.is_return);

    let second = &tour.steps[1];
    assert_eq!(second.running_total, Cost::new(850.0));
    assert!(second.remaining.is_empty());

    let closing = tour.steps.last().unwrap();
    assert!(closing.is_return);
    assert_eq!(closing.to, "Jakarta");
    assert_eq!(closing.running_total, tour.total_cost);
}

#[test]
fn test_route_shape_invariant() {
    // Route length = node count + 1, start bookends, every other node once.
    let graph = create_disconnected_graph();
    for start in ["P", "Q", "R", "S"] {
        let tour = GreedyTourBuilder::new().solve(&graph, start).unwrap();
        assert_eq!(tour.route.len(), graph.len() + 1);
        assert_eq!(tour.route.first().map(String::as_str), Some(start));
        assert_eq!(tour.route.last().map(String::as_str), Some(start));

        let mut visited: Vec<&str> = tour.route[..graph.len()]
            .iter()
            .map(String::as_str)
            .collect();
        visited.sort_unstable();
        assert_eq!(visited, ["P", "Q", "R", "S"]);
    }
}

#[test]
fn test_disconnected_tour_completes_with_infinite_cost() {
    let graph = create_disconnected_graph();
    let tour = GreedyTourBuilder::new().solve(&graph, "P").unwrap();

    assert_eq!(tour.route, ["P", "Q", "S", "R", "P"]);
    assert!(tour.has_infinite_cost);
    assert!(tour.total_cost.is_infinite());

    // The first two hops have real edges; S -> R and R -> P are synthetic.
    assert!(!tour.steps[0].is_infinite);
    assert!(!tour.steps[1].is_infinite);
    assert!(tour.steps[2].is_infinite);
    assert!(tour.steps[3].is_infinite);
}

#[test]
fn test_total_cost_is_sum_of_step_costs() {
    let graph = create_cities_graph();
    let tour = GreedyTourBuilder::new().solve(&graph, "Bandung").unwrap();

    let summed = tour
        .steps
        .iter()
        .fold(Cost::ZERO, |total, step| total + step.cost);
    assert_eq!(summed, tour.total_cost);
}

#[test]
fn test_solve_is_deterministic() {
    let graph = create_disconnected_graph();
    let solver = GreedyTourBuilder::new();
    let first = solver.solve(&graph, "P").unwrap();
    let second = solver.solve(&graph, "P").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_tie_breaks_by_declaration_order() {
    let graph = create_tie_graph();
    let tour = GreedyTourBuilder::new().solve(&graph, "A").unwrap();
    // B and C both cost 10 from A; B was declared first and must win.
    assert_eq!(tour.route, ["A", "B", "C", "A"]);
    assert_eq!(tour.total_cost, Cost::new(22.0));
}

#[test]
fn test_single_node_graph() {
    let graph = create_single_node_graph();
    let tour = GreedyTourBuilder::new().solve(&graph, "A").unwrap();

    assert_eq!(tour.route, ["A", "A"]);
    assert_eq!(tour.total_cost, Cost::ZERO);
    assert!(tour.steps.is_empty());
    assert!(!tour.has_infinite_cost);
}

#[test]
fn test_empty_graph_fails() {
    let graph = CostGraph::builder().build().unwrap();
    let err = GreedyTourBuilder::new().solve(&graph, "A").unwrap_err();
    assert_eq!(err, SolveError::EmptyGraph);
}

#[test]
fn test_unknown_start_fails() {
    let graph = create_cities_graph();
    let err = GreedyTourBuilder::new().solve(&graph, "Medan").unwrap_err();
    assert_eq!(err, SolveError::StartNotInGraph("Medan".to_string()));
}

#[test]
fn test_strict_mode_fails_on_disconnection() {
    let graph = create_disconnected_graph();
    let err = GreedyTourBuilder::new()
        .allow_disconnected(false)
        .solve(&graph, "P")
        .unwrap_err();

    // Greedy reaches S via P -> Q -> S, then has no edge to R.
    assert_eq!(
        err,
        SolveError::Disconnected {
            node: "S".to_string()
        }
    );
}

#[test]
fn test_strict_mode_fails_when_tour_cannot_close() {
    let graph = CostGraph::builder()
        .node("A")
        .node("B")
        .edge("A", "B", Cost::new(1.0))
        .build()
        .unwrap();

    let err = GreedyTourBuilder::new()
        .allow_disconnected(false)
        .solve(&graph, "A")
        .unwrap_err();
    assert_eq!(
        err,
        SolveError::CannotCloseTour {
            node: "B".to_string(),
            start: "A".to_string()
        }
    );
}

#[test]
fn test_strict_mode_skips_sentinel_edges_mid_tour() {
    // A -> B exists but carries the sentinel, so strict mode must route
    // through C first.
    let graph = CostGraph::builder()
        .node("A")
        .node("B")
        .node("C")
        .edge("A", "B", Cost::new(999_999.0))
        .edge("A", "C", Cost::new(50.0))
        .edge("C", "B", Cost::new(5.0))
        .edge("B", "A", Cost::new(2.0))
        .build()
        .unwrap();

    let tour = GreedyTourBuilder::new()
        .allow_disconnected(false)
        .solve(&graph, "A")
        .unwrap();
    assert_eq!(tour.route, ["A", "C", "B", "A"]);
    assert_eq!(tour.total_cost, Cost::new(57.0));
    assert!(!tour.has_infinite_cost);
}

#[test]
fn test_sentinel_edge_is_never_preferred_over_finite() {
    // A direct edge at the threshold loses to a cheaper real edge even
    // though both are "present".
    let graph = CostGraph::builder()
        .node("A")
        .node("B")
        .node("C")
        .edge("A", "B", Cost::new(1_500_000.0))
        .edge("A", "C", Cost::new(998_000.0))
        .edge("C", "B", Cost::new(1.0))
        .edge("B", "A", Cost::new(1.0))
        .build()
        .unwrap();

    let tour = GreedyTourBuilder::new().solve(&graph, "A").unwrap();
    assert_eq!(tour.route, ["A", "C", "B", "A"]);
    assert!(!tour.has_infinite_cost);
}
