use super::Cost;
use crate::error::GraphConversionError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The complete, canonical definition of a cost graph, ready for validation.
/// This is the target structure for any custom data model conversion.
///
/// The order of `nodes` is authoritative: it fixes the enumeration order used
/// everywhere downstream (candidate scanning, tie-breaking, trace output).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDefinition {
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeDefinition>,
}

/// A single directed edge with its traversal cost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub from: String,
    pub to: String,
    pub cost: Cost,
}

impl GraphDefinition {
    /// Load a graph definition from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let definition = serde_json::from_str(&content)?;
        Ok(definition)
    }
}

/// Conversion from a caller's custom graph format into Keliling's canonical
/// [`GraphDefinition`].
///
/// Implement this for whatever shape your data arrives in (an adjacency
/// matrix, a CSV row set, a foreign API response) and the rest of the engine
/// never needs to know about it.
pub trait IntoGraph {
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError>;
}

impl IntoGraph for GraphDefinition {
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
        Ok(self)
    }
}
