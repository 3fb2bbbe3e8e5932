use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the waypath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A weighted algorithm reached an edge that carries no weight.
    #[error("link between {from} and {to} is missing a weight")]
    MissingWeight { from: String, to: String },

    /// Raised when source and target sit in different connected components.
    #[error("no path exists between {from} and {to}")]
    NoPathExists { from: String, to: String },

    /// Raised when a journey names a city that is not part of the graph.
    #[error("unknown city name: {name}{}", format_suggestions(.suggestions))]
    InvalidWaypoint {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a journey lists fewer than two waypoints.
    #[error("journey must contain at least two cities, got {len}")]
    JourneyTooShort { len: usize },

    /// Wraps the failure of one leg of a multi-segment route.
    #[error("leg {index} from {from} to {to} failed: {cause}")]
    LegFailed {
        index: usize,
        from: String,
        to: String,
        #[source]
        cause: Box<Error>,
    },

    /// Raised when an edge references a node that was never declared.
    #[error("link references unknown city {name}")]
    UnknownNode { name: String },

    /// Raised when the same node identifier is declared twice.
    #[error("city {name} is declared more than once")]
    DuplicateNode { name: String },

    /// Raised when two edges join the same pair of nodes.
    #[error("duplicate link between {from} and {to}")]
    DuplicateEdge { from: String, to: String },

    /// Raised when an edge joins a node to itself.
    #[error("link from {name} to itself is not allowed")]
    SelfLoop { name: String },

    /// Raised when an edge weight is negative or not a finite number.
    #[error("link between {from} and {to} has invalid weight {weight}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Raised when a topology describes a graph shape the planner cannot use.
    #[error("unsupported topology: {reason}")]
    UnsupportedTopology { reason: String },

    /// Raised when a route steps between two nodes that share no edge.
    #[error("route steps from {from} to {to} but no such link exists")]
    MissingEdge { from: String, to: String },

    /// Raised when segments handed to a route are empty or not contiguous.
    #[error("invalid route: {reason}")]
    InvalidRoute { reason: String },

    /// Topology file could not be located at the resolved path.
    #[error("topology file not found at {path}")]
    TopologyNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for topology JSON parsing errors.
    #[error("failed to parse topology JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Unwrap [`Error::LegFailed`] wrappers down to the underlying failure.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::LegFailed { cause, .. } => cause.root_cause(),
            other => other,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
