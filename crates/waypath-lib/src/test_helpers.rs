// Test-only helpers for `waypath-lib` unit tests
#![allow(dead_code)]

use crate::graph::{Graph, GraphBuilder, NodeId};

/// Build a graph from `(source, target, weight, flight)` tuples, declaring
/// nodes in first-seen order unless listed in `nodes` up front.
pub fn graph_from(nodes: &[&str], links: &[(&str, &str, Option<f64>, bool)]) -> Graph {
    let mut declared: Vec<String> = Vec::new();
    let link_ends = links
        .iter()
        .flat_map(|&(source, target, _, _)| [source, target]);
    for name in nodes.iter().copied().chain(link_ends) {
        if !declared.iter().any(|known| known == name) {
            declared.push(name.to_string());
        }
    }

    let mut builder = GraphBuilder::new();
    for name in declared {
        builder.add_node(name).expect("unique node");
    }
    for &(source, target, weight, flight) in links {
        builder
            .add_edge(source, target, weight, flight)
            .expect("valid link");
    }
    builder.build()
}

/// A-B(1), B-C(1), C-D(1), A-D(10): the cheap route A-B-C-D beats the
/// direct link.
pub fn diamond_graph() -> Graph {
    graph_from(
        &["A", "B", "C", "D"],
        &[
            ("A", "B", Some(1.0), false),
            ("B", "C", Some(1.0), false),
            ("C", "D", Some(1.0), false),
            ("A", "D", Some(10.0), true),
        ],
    )
}

/// The diamond graph plus an isolated node E.
pub fn diamond_with_island() -> Graph {
    graph_from(
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", Some(1.0), false),
            ("B", "C", Some(1.0), false),
            ("C", "D", Some(1.0), false),
            ("A", "D", Some(10.0), true),
        ],
    )
}

/// Resolve several names at once.
pub fn ids<const N: usize>(graph: &Graph, names: [&str; N]) -> [NodeId; N] {
    names.map(|name| graph.node_id(name).expect("node exists"))
}

/// Convert node ids back into names for readable assertions.
pub fn names(graph: &Graph, path: &[NodeId]) -> Vec<String> {
    path.iter().map(|&id| graph.display_name(id)).collect()
}
