//! Cities command handler listing every city in the topology.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use waypath_lib::{build_graph, load_topology};

use crate::output::OutputFormat;

/// Print every city name in alphabetical order.
pub fn handle_cities_command(topology_path: &Path, format: OutputFormat) -> Result<()> {
    let topology = load_topology(topology_path).with_context(|| {
        format!("failed to load topology from {}", topology_path.display())
    })?;
    let graph = build_graph(&topology).context("failed to build graph from topology")?;

    let mut stdout = io::stdout().lock();
    format
        .write_cities(&graph.sorted_names(), &mut stdout)
        .context("failed to write city list")
}
