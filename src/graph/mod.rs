//! The graph data model: costs, the serde-friendly exchange definition, and
//! the validated [`CostGraph`] the solver operates on.

mod cost;
mod definition;
mod model;

pub use cost::Cost;
pub use definition::{EdgeDefinition, GraphDefinition, IntoGraph};
pub use model::{CostGraph, GraphBuilder};
