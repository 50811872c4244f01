use crate::solver::Tour;
use crate::trace::Step;
use itertools::Itertools;

/// Formats construction traces into human-readable strings
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format a route as a single arrow-chained line.
    pub fn format_route(route: &[String]) -> String {
        route.iter().join(" -> ")
    }

    /// Format one construction step into a single explanatory line.
    pub fn format_step(step: &Step) -> String {
        let mut line = format!(
            "{} -> {} (cost {}, total {})",
            step.from, step.to, step.cost, step.running_total
        );
        if step.is_infinite {
            line.push_str(" [no direct edge]");
        }
        if step.is_return {
            line.push_str(" [return to start]");
        }
        line
    }

    /// Format a complete tour: numbered step lines, the route, and the total.
    pub fn format_tour(tour: &Tour) -> String {
        let mut output = String::new();
        for (index, step) in tour.steps.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, Self::format_step(step)));
        }
        output.push_str(&format!("Route: {}\n", Self::format_route(&tour.route)));
        output.push_str(&format!("Total cost: {}", tour.total_cost));
        output
    }
}
