//! Integration tests for general CLI behaviour.
//!
//! These tests use `assert_cmd` to verify:
//! - the `cities` listing in text and JSON form
//! - topology loading failures and exit codes
//! - help output

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Path to the European topology fixture.
fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/europe_topology.json")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("waypath-cli");
    cmd.env("RUST_LOG", "error").env_remove("WAYPATH_TOPOLOGY");
    cmd
}

#[test]
fn cities_are_listed_alphabetically() {
    let output = cli()
        .arg("--topology-file")
        .arg(fixture_path())
        .arg("cities")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).expect("utf-8 output");
    let cities: Vec<&str> = text.lines().collect();
    assert_eq!(cities.len(), 15);
    assert_eq!(cities.first(), Some(&"Amsterdam"));
    assert_eq!(cities.last(), Some(&"Zurich"));
    let mut sorted = cities.clone();
    sorted.sort_unstable();
    assert_eq!(cities, sorted);
}

#[test]
fn cities_json_is_an_array() {
    let output = cli()
        .args(["--format", "json", "cities", "--topology-file"])
        .arg(fixture_path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let cities = value.as_array().expect("array");
    assert_eq!(cities.len(), 15);
    assert_eq!(cities[0], "Amsterdam");
}

#[test]
fn missing_topology_fails() {
    let temp = TempDir::new().expect("create temp dir");
    cli()
        .current_dir(temp.path())
        .arg("cities")
        .assert()
        .failure()
        .stderr(predicate::str::contains("topology file not found"))
        .stderr(predicate::str::contains("topology.json"));
}

#[test]
fn malformed_topology_fails() {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("broken.json");
    fs::write(&path, "{ not json").expect("write topology");

    cli()
        .arg("--topology-file")
        .arg(&path)
        .arg("cities")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse topology JSON"));
}

#[test]
fn directed_topology_is_rejected() {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("directed.json");
    fs::write(
        &path,
        r#"{"directed": true, "nodes": [{"id": "A"}, {"id": "B"}, {"id": "C"}], "links": []}"#,
    )
    .expect("write topology");

    cli()
        .arg("--topology-file")
        .arg(&path)
        .args(["route", "--journey", "A,B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("directed graphs are not supported"));
}

#[test]
fn help_lists_subcommands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("cities"));
}
