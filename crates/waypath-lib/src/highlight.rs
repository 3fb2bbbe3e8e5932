use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::routing::Route;

/// Colour applied to highlighted cities and links.
pub const HIGHLIGHT_COLOR: &str = "lightblue";

/// Pen width for highlighted flight links.
pub const FLIGHT_PEN_WIDTH: f64 = 15.0;

/// Pen width for highlighted ground links.
pub const GROUND_PEN_WIDTH: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeStyle {
    pub fill_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeStyle {
    pub color: &'static str,
    pub pen_width: f64,
}

/// Undirected link key with the smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey(NodeId, NodeId);

impl EdgeKey {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.0, self.1)
    }
}

/// Presentation overlay marking the cities and links of one route.
///
/// Kept apart from [`Graph`] so the topology stays untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Highlight {
    nodes: BTreeMap<NodeId, NodeStyle>,
    edges: BTreeMap<EdgeKey, EdgeStyle>,
}

impl Highlight {
    pub fn node(&self, node: NodeId) -> Option<&NodeStyle> {
        self.nodes.get(&node)
    }

    pub fn edge(&self, a: NodeId, b: NodeId) -> Option<&EdgeStyle> {
        self.edges.get(&EdgeKey::new(a, b))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Mark every city and link used by `route`.
///
/// Flight links get a thicker pen than ground links. Fails with
/// [`Error::MissingEdge`] if consecutive route nodes are not linked in
/// `graph`.
pub fn highlight_route(graph: &Graph, route: &Route) -> Result<Highlight> {
    let mut highlight = Highlight::default();

    for segment in route.segments() {
        for &node in segment.nodes() {
            highlight.nodes.insert(
                node,
                NodeStyle {
                    fill_color: HIGHLIGHT_COLOR,
                },
            );
        }

        for pair in segment.nodes().windows(2) {
            let edge = graph
                .edge_between(pair[0], pair[1])
                .ok_or_else(|| Error::MissingEdge {
                    from: graph.display_name(pair[0]),
                    to: graph.display_name(pair[1]),
                })?;
            let pen_width = if edge.is_flight() {
                FLIGHT_PEN_WIDTH
            } else {
                GROUND_PEN_WIDTH
            };
            highlight.edges.insert(
                EdgeKey::new(pair[0], pair[1]),
                EdgeStyle {
                    color: HIGHLIGHT_COLOR,
                    pen_width,
                },
            );
        }
    }

    Ok(highlight)
}
