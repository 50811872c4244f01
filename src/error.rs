use thiserror::Error;

/// Errors that can occur while assembling a `CostGraph` from nodes and edges.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphBuildError {
    #[error("Node '{0}' is declared more than once")]
    DuplicateNode(String),

    #[error("Edge '{from}' -> '{to}' references '{unknown}', which is not a declared node")]
    UnknownNode {
        from: String,
        to: String,
        unknown: String,
    },

    #[error("Edge '{from}' -> '{to}' has a negative cost ({cost}); negative weights are not supported")]
    NegativeCost { from: String, to: String, cost: f64 },
}

/// Errors that can occur during tour construction.
///
/// Every variant is recoverable by the caller: the solver reports failure
/// through `Err` with a readable message and never panics on bad input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("graph is empty")]
    EmptyGraph,

    #[error("start node '{0}' not in graph")]
    StartNotInGraph(String),

    #[error("graph is disconnected from {node}; cannot complete tour")]
    Disconnected { node: String },

    #[error("no edge from {node} back to start {start}; cannot close tour")]
    CannotCloseTour { node: String, start: String },
}

/// Errors that can occur when parsing a textual cost value.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("'{0}' is not a valid cost; expected a non-negative number, 'inf', 'infinity', '∞', or an empty cell")]
pub struct CostParseError(pub String);

/// Errors that can occur when converting a custom user format into a
/// Keliling `GraphDefinition`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}
