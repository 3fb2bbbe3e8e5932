//! Common test utilities and fixture helpers.
//!
//! Shared by the integration tests: fixture paths, topology loading and a
//! tiny inline graph builder for scenario tests.

use std::path::PathBuf;

use waypath_lib::{build_graph, load_topology, Graph, GraphBuilder};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the European city topology fixture.
#[allow(dead_code)]
pub fn fixture_topology_path() -> PathBuf {
    fixtures_dir().join("europe_topology.json")
}

/// Load the European fixture as a routing graph.
#[allow(dead_code)]
pub fn europe_graph() -> Graph {
    let topology = load_topology(&fixture_topology_path()).expect("fixture loads");
    build_graph(&topology).expect("fixture is a valid graph")
}

/// Build a graph from `(source, target, weight)` links, with optional
/// isolated nodes listed up front.
#[allow(dead_code)]
pub fn graph_with(isolated: &[&str], links: &[(&str, &str, Option<f64>)]) -> Graph {
    let mut builder = GraphBuilder::new();
    let mut declared: Vec<String> = Vec::new();
    let names = isolated
        .iter()
        .copied()
        .chain(links.iter().flat_map(|&(a, b, _)| [a, b]));
    for name in names {
        if !declared.iter().any(|known| known == name) {
            declared.push(name.to_string());
            builder.add_node(name).expect("unique node");
        }
    }
    for &(source, target, weight) in links {
        builder
            .add_edge(source, target, weight, false)
            .expect("valid link");
    }
    builder.build()
}

/// The four-city diamond: A-B(1), B-C(1), C-D(1), A-D(10).
#[allow(dead_code)]
pub fn diamond() -> Graph {
    graph_with(
        &[],
        &[
            ("A", "B", Some(1.0)),
            ("B", "C", Some(1.0)),
            ("C", "D", Some(1.0)),
            ("A", "D", Some(10.0)),
        ],
    )
}
