//! Route command handler for planning a journey through the topology.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use tracing::{info, warn};

use waypath_lib::routing::{build_loose_route_with, build_strict_route_with, select_planner};
use waypath_lib::{
    build_graph, find_bounded_simple_route, find_coverage_route, highlight_route, load_topology,
    render_dot, CostMetric, Error as RouteError, Graph, Journey, NoProgress, NodeId, Route,
    RouteMode, RouteOutputKind, RouteSummary,
};

use crate::output::{DiagnosticOutcome, OutputFormat, RouteReport};
use crate::terminal::{supports_progress, ProgressLine};

/// Smallest topology the planner will route over.
const MIN_GRAPH_NODES: usize = 3;

/// Leg cost selected with `--metric`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MetricArg {
    /// Sum of link weights.
    #[default]
    Weight,
    /// Number of links, ignoring weights.
    Hops,
}

impl From<MetricArg> for CostMetric {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::Weight => CostMetric::Weight,
            MetricArg::Hops => CostMetric::Hops,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Comma separated list of cities to visit.
    pub journey: String,
    /// Visit the cities in the exact order given.
    pub strict: bool,
    /// Leg cost used by the strict and loose builders.
    pub metric: MetricArg,
    /// Also run the coverage and bounded simple-path searches.
    pub extra: bool,
    /// Maximum links per path in the bounded simple-path search.
    pub hop_cutoff: usize,
    /// Where to write a Graphviz DOT diagram of the chosen route.
    pub diagram_file: Option<PathBuf>,
}

impl RouteCommandArgs {
    pub fn mode(&self) -> RouteMode {
        if self.strict {
            RouteMode::Strict
        } else {
            RouteMode::Loose
        }
    }

    /// City names from `--journey`, trimmed, with empty entries dropped.
    pub fn city_names(&self) -> Vec<&str> {
        self.journey
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }
}

/// Handle the route subcommand.
///
/// Loads the topology, validates the journey, optionally runs the
/// diagnostic searches, then prints the primary route and writes the
/// diagram if one was requested.
pub fn handle_route_command(
    topology_path: &Path,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let names = args.city_names();
    if names.len() < 2 {
        return Err(RouteError::JourneyTooShort { len: names.len() })
            .context("journey list too short");
    }

    let topology = load_topology(topology_path).with_context(|| {
        format!("failed to load topology from {}", topology_path.display())
    })?;
    let graph = build_graph(&topology).context("failed to build graph from topology")?;
    let journey = Journey::resolve(&graph, &names).map_err(handle_route_failure)?;

    let details = graph.summary();
    info!(
        nodes = details.nodes,
        edges = details.edges,
        flights = details.flight_edges,
        unweighted = details.unweighted_edges,
        average_degree = details.average_degree,
        "graph details"
    );
    if details.nodes < MIN_GRAPH_NODES {
        bail!(
            "{} cities were loaded from the topology, at least {} are required",
            details.nodes,
            MIN_GRAPH_NODES
        );
    }

    let diagnostics = if args.extra {
        run_diagnostics(&graph, &journey, args.hop_cutoff, format)?
    } else {
        Vec::new()
    };

    let (kind, route) = build_primary_route(&graph, &journey, args)?;
    let summary = RouteSummary::from_route(kind, &graph, &route)
        .context("failed to build route summary for display")?;
    let report = RouteReport {
        graph: details,
        diagnostics,
        route: summary,
    };

    let mut stdout = io::stdout().lock();
    format
        .write_report(&report, &mut stdout)
        .context("failed to write route report")?;

    if let Some(path) = &args.diagram_file {
        write_diagram(&graph, &route, path)?;
    }

    Ok(())
}

fn build_primary_route(
    graph: &Graph,
    journey: &Journey,
    args: &RouteCommandArgs,
) -> Result<(RouteOutputKind, Route)> {
    let planner = select_planner(args.metric.into());
    let result = match args.mode() {
        RouteMode::Strict => build_strict_route_with(graph, journey, planner.as_ref())
            .map(|route| (RouteOutputKind::Strict, route)),
        RouteMode::Loose => build_loose_route_with(graph, journey, planner.as_ref())
            .map(|route| (RouteOutputKind::Loose, route)),
    };
    result.map_err(handle_route_failure)
}

/// Run the optional searches. A failing search is recorded in its outcome
/// and never stops the primary route.
fn run_diagnostics(
    graph: &Graph,
    journey: &Journey,
    hop_cutoff: usize,
    format: OutputFormat,
) -> Result<Vec<DiagnosticOutcome>> {
    let coverage = match find_coverage_route(graph, journey) {
        Ok(route) => summarise(graph, RouteOutputKind::Coverage, route)?,
        Err(err) => {
            let message = friendly_message(&err);
            warn!(error = %message, "coverage search failed");
            DiagnosticOutcome::failed(RouteOutputKind::Coverage, message)
        }
    };
    let mut outcomes = vec![coverage];

    warn!(hop_cutoff, "simple-path search is exhaustive and may take minutes");
    let targets: Vec<NodeId> = graph.node_ids().collect();
    let simple = if format == OutputFormat::Text && supports_progress() {
        let mut progress = ProgressLine::stderr(graph);
        let route = find_bounded_simple_route(graph, journey, &targets, hop_cutoff, &mut progress);
        progress.finish();
        route
    } else {
        find_bounded_simple_route(graph, journey, &targets, hop_cutoff, &mut NoProgress)
    };
    outcomes.push(summarise(graph, RouteOutputKind::Simple, simple)?);

    Ok(outcomes)
}

fn summarise(
    graph: &Graph,
    kind: RouteOutputKind,
    route: Option<Route>,
) -> Result<DiagnosticOutcome> {
    match route {
        Some(route) => {
            let summary = RouteSummary::from_route(kind, graph, &route)
                .context("failed to summarise diagnostic route")?;
            Ok(DiagnosticOutcome::found(summary))
        }
        None => Ok(DiagnosticOutcome::not_found(kind)),
    }
}

fn write_diagram(graph: &Graph, route: &Route, path: &Path) -> Result<()> {
    let highlight = highlight_route(graph, route).context("failed to highlight route")?;
    fs::write(path, render_dot(graph, Some(&highlight)))
        .with_context(|| format!("failed to write diagram to {}", path.display()))?;
    info!(path = %path.display(), "wrote route diagram");
    Ok(())
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err.root_cause() {
        RouteError::MissingWeight { .. } => anyhow::anyhow!(
            "{} Add one to the topology or use --metric hops.",
            friendly_message(&err)
        ),
        RouteError::InvalidWaypoint { .. } | RouteError::NoPathExists { .. } => {
            anyhow::anyhow!(friendly_message(&err))
        }
        _ => anyhow::Error::new(err),
    }
}

/// User-facing description of a routing failure, naming the leg when the
/// failure happened inside one.
fn friendly_message(err: &RouteError) -> String {
    let message = match err.root_cause() {
        RouteError::InvalidWaypoint { name, suggestions } => {
            format_unknown_city_message(name, suggestions)
        }
        RouteError::NoPathExists { from, to } => format_route_not_found_message(from, to),
        RouteError::MissingWeight { from, to } => {
            format!("Link between {} and {} has no weight.", from, to)
        }
        other => other.to_string(),
    };

    match err {
        RouteError::LegFailed {
            index, from, to, ..
        } => format!("Leg {} ({} -> {}) failed: {}", index + 1, from, to, message),
        _ => message,
    }
}

fn format_unknown_city_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown city '{}'.", name);
    if !suggestions.is_empty() {
        let formatted = match suggestions {
            [only] => format!("Did you mean '{only}'?"),
            _ => {
                let joined = suggestions
                    .iter()
                    .map(|s| format!("'{}'", s))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Did you mean one of: {}?", joined)
            }
        };
        message.push(' ');
        message.push_str(&formatted);
    }
    message
}

fn format_route_not_found_message(from: &str, to: &str) -> String {
    format!(
        "No route found between {} and {}. They are not connected in the topology; \
         run `cities` to check the available cities.",
        from, to
    )
}
