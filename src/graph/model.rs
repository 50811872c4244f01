use super::{Cost, GraphDefinition};
use crate::error::GraphBuildError;
use ahash::{AHashMap, AHashSet};

/// A validated, directed cost graph.
///
/// Nodes keep their insertion order, which makes every downstream enumeration
/// (and therefore tie-breaking in the solver) deterministic. The adjacency
/// structure is keyed by node name; a missing entry means "no direct edge",
/// which the solver models as an infinite-cost candidate.
#[derive(Debug, Clone)]
pub struct CostGraph {
    nodes: Vec<String>,
    adjacency: AHashMap<String, AHashMap<String, Cost>>,
}

impl CostGraph {
    /// Starts an empty [`GraphBuilder`].
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Validates a canonical definition into a graph.
    pub fn from_definition(definition: GraphDefinition) -> Result<Self, GraphBuildError> {
        let mut builder = Self::builder();
        for node in definition.nodes {
            builder = builder.node(node);
        }
        for edge in definition.edges {
            builder = builder.edge(edge.from, edge.to, edge.cost);
        }
        builder.build()
    }

    /// Node names in insertion order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// The cost of the direct edge `from -> to`, if one exists.
    pub fn edge(&self, from: &str, to: &str) -> Option<Cost> {
        self.adjacency.get(from)?.get(to).copied()
    }
}

/// Chainable builder for [`CostGraph`].
///
/// Nodes must be declared before (or independently of) the edges that
/// reference them; `build` rejects edges whose endpoints were never declared,
/// duplicate node names, and negative costs.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<String>,
    edges: Vec<(String, String, Cost)>,
}

impl GraphBuilder {
    /// Declares a node. Declaration order is preserved in the built graph.
    pub fn node(mut self, name: impl Into<String>) -> Self {
        self.nodes.push(name.into());
        self
    }

    /// Declares a directed edge. Self-edges are allowed (conventionally zero).
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>, cost: Cost) -> Self {
        self.edges.push((from.into(), to.into(), cost));
        self
    }

    pub fn build(self) -> Result<CostGraph, GraphBuildError> {
        let mut adjacency: AHashMap<String, AHashMap<String, Cost>> =
            AHashMap::with_capacity(self.nodes.len());
        let mut seen = AHashSet::with_capacity(self.nodes.len());

        for node in &self.nodes {
            if !seen.insert(node.as_str()) {
                return Err(GraphBuildError::DuplicateNode(node.clone()));
            }
            adjacency.insert(node.clone(), AHashMap::new());
        }

        for (from, to, cost) in self.edges {
            if !seen.contains(from.as_str()) {
                return Err(GraphBuildError::UnknownNode {
                    unknown: from.clone(),
                    from,
                    to,
                });
            }
            if !seen.contains(to.as_str()) {
                return Err(GraphBuildError::UnknownNode {
                    unknown: to.clone(),
                    from,
                    to,
                });
            }
            // Negative infinity also fails this test; it must never reach
            // minimum selection.
            if cost.value() < 0.0 {
                return Err(GraphBuildError::NegativeCost {
                    from,
                    to,
                    cost: cost.value(),
                });
            }
            // Last write wins when the same edge is declared twice.
            if let Some(neighbors) = adjacency.get_mut(&from) {
                neighbors.insert(to, cost);
            }
        }

        Ok(CostGraph {
            nodes: self.nodes,
            adjacency,
        })
    }
}
