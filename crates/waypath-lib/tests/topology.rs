mod common;

use std::fs;

use tempfile::tempdir;
use waypath_lib::{build_graph, load_topology, Error};

use common::fixture_topology_path;

#[test]
fn fixture_topology_loads() {
    let topology = load_topology(&fixture_topology_path()).unwrap();

    assert!(!topology.directed);
    assert_eq!(topology.nodes.len(), 15);
    assert_eq!(topology.links.len(), 21);
    assert!(topology.node_names().any(|name| name == "Reykjavik"));
}

#[test]
fn missing_file_is_reported_with_its_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    match load_topology(&path) {
        Err(Error::TopologyNotFound { path: reported }) => assert_eq!(reported, path),
        other => panic!("expected TopologyNotFound, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"nodes\": [").unwrap();

    let err = load_topology(&path).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().starts_with("failed to parse topology JSON"));
}

#[test]
fn edges_key_loads_like_links() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edges.json");
    fs::write(
        &path,
        r#"{
            "nodes": [{"id": "Oslo"}, {"id": "Bergen"}],
            "edges": [{"source": "Oslo", "target": "Bergen", "weight": 7, "flight": true}]
        }"#,
    )
    .unwrap();

    let graph = build_graph(&load_topology(&path).unwrap()).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.summary().flight_edges, 1);
}
