use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::topology::Topology;

/// Dense identifier for a city, assigned in topology declaration order.
pub type NodeId = usize;

/// Classification for a link, derived from its `flight` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Ground,
    Flight,
}

impl EdgeKind {
    fn from_flight(flight: bool) -> Self {
        if flight {
            EdgeKind::Flight
        } else {
            EdgeKind::Ground
        }
    }
}

/// Half of an undirected link, stored in the adjacency list of one endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: Option<f64>,
    pub kind: EdgeKind,
}

impl Edge {
    pub fn is_flight(&self) -> bool {
        self.kind == EdgeKind::Flight
    }
}

/// Master record of an undirected link as it was declared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: Option<f64>,
    pub kind: EdgeKind,
}

/// Weighted undirected graph of named cities.
///
/// Topology is fixed once built; presentation data such as route highlights
/// lives in a separate overlay (see [`crate::highlight::Highlight`]).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: Vec<String>,
    name_to_id: HashMap<String, NodeId>,
    adjacency: Vec<Vec<Edge>>,
    edges: Vec<EdgeRecord>,
}

impl Graph {
    /// Lookup a node identifier by its case-sensitive name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a node name by identifier.
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Node name for display, falling back to a placeholder for foreign ids.
    pub fn display_name(&self, id: NodeId) -> String {
        self.node_name(id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("<unknown:{id}>"))
    }

    /// Return the neighbours for a given node in declaration order.
    pub fn neighbours(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The edge joining `a` and `b`, if any.
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.neighbours(a).iter().find(|edge| edge.target == b)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.names.len()
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Every node identifier in declaration order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        0..self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Links in declaration order.
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// City names sorted alphabetically.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Aggregate counts describing the loaded graph.
    pub fn summary(&self) -> GraphSummary {
        let flight_edges = self
            .edges
            .iter()
            .filter(|edge| edge.kind == EdgeKind::Flight)
            .count();
        let unweighted_edges = self
            .edges
            .iter()
            .filter(|edge| edge.weight.is_none())
            .count();
        let average_degree = if self.names.is_empty() {
            0.0
        } else {
            (2 * self.edges.len()) as f64 / self.names.len() as f64
        };

        GraphSummary {
            nodes: self.names.len(),
            edges: self.edges.len(),
            flight_edges,
            unweighted_edges,
            average_degree,
        }
    }
}

/// Counts reported when a graph is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub flight_edges: usize,
    pub unweighted_edges: usize,
    pub average_degree: f64,
}

/// Incremental constructor that enforces the graph invariants.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node. Names must be unique.
    pub fn add_node(&mut self, name: impl Into<String>) -> Result<NodeId> {
        let name = name.into();
        if self.graph.name_to_id.contains_key(&name) {
            return Err(Error::DuplicateNode { name });
        }

        let id = self.graph.names.len();
        self.graph.name_to_id.insert(name.clone(), id);
        self.graph.names.push(name);
        self.graph.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Declare an undirected link between two previously declared nodes.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        weight: Option<f64>,
        flight: bool,
    ) -> Result<()> {
        let source_id = self.resolve(source)?;
        let target_id = self.resolve(target)?;

        if source_id == target_id {
            return Err(Error::SelfLoop {
                name: source.to_string(),
            });
        }
        if let Some(weight) = weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidWeight {
                    from: source.to_string(),
                    to: target.to_string(),
                    weight,
                });
            }
        }
        if self.graph.edge_between(source_id, target_id).is_some() {
            return Err(Error::DuplicateEdge {
                from: source.to_string(),
                to: target.to_string(),
            });
        }

        let kind = EdgeKind::from_flight(flight);
        self.graph.adjacency[source_id].push(Edge {
            target: target_id,
            weight,
            kind,
        });
        self.graph.adjacency[target_id].push(Edge {
            target: source_id,
            weight,
            kind,
        });
        self.graph.edges.push(EdgeRecord {
            source: source_id,
            target: target_id,
            weight,
            kind,
        });
        Ok(())
    }

    pub fn build(self) -> Graph {
        self.graph
    }

    fn resolve(&self, name: &str) -> Result<NodeId> {
        self.graph.node_id(name).ok_or_else(|| Error::UnknownNode {
            name: name.to_string(),
        })
    }
}

/// Build the routing graph from a node/link topology description.
pub fn build_graph(topology: &Topology) -> Result<Graph> {
    if topology.directed {
        return Err(Error::UnsupportedTopology {
            reason: "directed graphs are not supported".to_string(),
        });
    }
    if topology.multigraph {
        return Err(Error::UnsupportedTopology {
            reason: "multigraphs are not supported".to_string(),
        });
    }

    let mut builder = GraphBuilder::new();
    for node in &topology.nodes {
        builder.add_node(node.id.clone())?;
    }
    for link in &topology.links {
        builder.add_edge(&link.source, &link.target, link.weight, link.flight)?;
    }

    let graph = builder.build();
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built routing graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut builder = GraphBuilder::new();
        builder.add_node("A").unwrap();
        builder.add_node("B").unwrap();
        builder.add_node("C").unwrap();
        builder.add_edge("A", "B", Some(1.0), false).unwrap();
        builder.add_edge("B", "C", Some(2.0), true).unwrap();
        builder.add_edge("C", "A", None, false).unwrap();
        builder.build()
    }

    #[test]
    fn edges_are_stored_in_both_directions() {
        let graph = triangle();
        let a = graph.node_id("A").unwrap();
        let b = graph.node_id("B").unwrap();

        assert_eq!(graph.edge_between(a, b).unwrap().weight, Some(1.0));
        assert_eq!(graph.edge_between(b, a).unwrap().weight, Some(1.0));
        let targets: Vec<_> = graph.neighbours(a).iter().map(|e| e.target).collect();
        assert_eq!(targets, vec![b, graph.node_id("C").unwrap()]);
    }

    #[test]
    fn summary_counts_flight_and_unweighted_links() {
        let summary = triangle().summary();
        assert_eq!(summary.nodes, 3);
        assert_eq!(summary.edges, 3);
        assert_eq!(summary.flight_edges, 1);
        assert_eq!(summary.unweighted_edges, 1);
        assert!((summary.average_degree - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_rejects_invalid_links() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A").unwrap();
        builder.add_node("B").unwrap();

        assert!(matches!(
            builder.add_node("A"),
            Err(Error::DuplicateNode { .. })
        ));
        assert!(matches!(
            builder.add_edge("A", "Z", Some(1.0), false),
            Err(Error::UnknownNode { name }) if name == "Z"
        ));
        assert!(matches!(
            builder.add_edge("A", "A", Some(1.0), false),
            Err(Error::SelfLoop { .. })
        ));
        assert!(matches!(
            builder.add_edge("A", "B", Some(-1.0), false),
            Err(Error::InvalidWeight { .. })
        ));
        assert!(matches!(
            builder.add_edge("A", "B", Some(f64::NAN), false),
            Err(Error::InvalidWeight { .. })
        ));

        builder.add_edge("A", "B", Some(1.0), false).unwrap();
        assert!(matches!(
            builder.add_edge("B", "A", Some(2.0), false),
            Err(Error::DuplicateEdge { .. })
        ));
    }

    #[test]
    fn unknown_ids_have_no_neighbours() {
        let graph = triangle();
        assert!(graph.neighbours(42).is_empty());
        assert!(graph.node_name(42).is_none());
        assert_eq!(graph.display_name(42), "<unknown:42>");
    }

    #[test]
    fn sorted_names_are_alphabetical() {
        let mut builder = GraphBuilder::new();
        for name in ["Paris", "Berlin", "Amsterdam"] {
            builder.add_node(name).unwrap();
        }
        let graph = builder.build();
        assert_eq!(graph.sorted_names(), vec!["Amsterdam", "Berlin", "Paris"]);
    }
}
