//! Node/link topology descriptions and the JSON loader.
//!
//! The accepted shape is the node-link layout produced by common graph
//! tooling: a `nodes` array of `{ "id": ... }` objects and a `links` (or
//! `edges`) array of `{ "source", "target", "weight", "flight" }` objects.
//! Unknown keys such as `graph` are ignored.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Environment variable consulted when no topology path is given explicitly.
pub const TOPOLOGY_ENV_VAR: &str = "WAYPATH_TOPOLOGY";

/// Filename used when neither a path nor the environment variable is set.
pub const DEFAULT_TOPOLOGY_FILENAME: &str = "topology.json";

/// Serialisable description of a city graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub multigraph: bool,
    pub nodes: Vec<TopologyNode>,
    #[serde(default, alias = "edges")]
    pub links: Vec<TopologyLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyNode {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyLink {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub flight: bool,
}

impl Topology {
    /// Parse a topology from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Names of the declared nodes in declaration order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.id.as_str())
    }
}

/// Resolve the topology file location.
///
/// Precedence: the explicit path, then [`TOPOLOGY_ENV_VAR`], then
/// [`DEFAULT_TOPOLOGY_FILENAME`] in the working directory.
pub fn resolve_topology_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    match env::var_os(TOPOLOGY_ENV_VAR) {
        Some(value) if !value.is_empty() => {
            let path = PathBuf::from(value);
            debug!(path = %path.display(), "using topology path from {}", TOPOLOGY_ENV_VAR);
            path
        }
        _ => PathBuf::from(DEFAULT_TOPOLOGY_FILENAME),
    }
}

/// Load and parse a topology file.
pub fn load_topology(path: &Path) -> Result<Topology> {
    if !path.exists() {
        return Err(Error::TopologyNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let topology = Topology::from_json_str(&contents)?;
    info!(
        path = %path.display(),
        nodes = topology.nodes.len(),
        links = topology.links.len(),
        "loaded topology"
    );
    Ok(topology)
}
