//! Route construction for multi-stop journeys.
//!
//! This module provides:
//! - [`Route`] and [`Segment`] - the multi-leg result of every builder
//! - [`build_strict_route`] - legs in the exact journey order
//! - [`build_loose_route`] - greedy nearest-waypoint sequencing
//! - [`find_coverage_route`] - one all-pairs shortest path threading every waypoint
//! - [`find_bounded_simple_route`] - exhaustive simple paths within a hop cutoff
//! - [`plan_route`] - main entry point dispatching on [`RouteMode`]
//!
//! # Strategy Pattern
//!
//! Individual legs are computed through the [`LegPlanner`] trait so the
//! strict and loose builders can run on weighted shortest paths (the
//! default) or on fewest-hop paths without duplicating their sequencing
//! logic.
//!
//! # Example
//!
//! ```ignore
//! use waypath_lib::{build_graph, load_topology, plan_route, RouteRequest};
//!
//! let topology = load_topology("topology.json".as_ref())?;
//! let graph = build_graph(&topology)?;
//! let route = plan_route(&graph, &RouteRequest::strict(["London", "Paris", "Rome"]))?;
//! println!("{} connection(s)", route.hop_count());
//! ```

mod coverage;
mod loose;
mod planner;
mod simple;
mod strict;

pub use coverage::find_coverage_route;
pub use loose::{build_loose_route, build_loose_route_with};
pub use planner::{select_planner, HopPlanner, LegPlanner, WeightedPlanner};
pub use simple::{find_bounded_simple_route, NoProgress, SearchProgress, DEFAULT_HOP_CUTOFF};
pub use strict::{build_strict_route, build_strict_route_with};

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::journey::Journey;
use crate::path::path_weight;

/// How waypoints are sequenced into legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteMode {
    /// Honour the journey order exactly.
    Strict,
    /// Fix only the origin and destination; order the rest greedily.
    #[default]
    Loose,
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteMode::Strict => "strict",
            RouteMode::Loose => "loose",
        };
        f.write_str(value)
    }
}

/// Cost minimised by each leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostMetric {
    /// Sum of link weights (Dijkstra). Every link used must carry a weight.
    #[default]
    Weight,
    /// Number of links (breadth-first search). Weights are ignored.
    Hops,
}

impl fmt::Display for CostMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CostMetric::Weight => "weight",
            CostMetric::Hops => "hops",
        };
        f.write_str(value)
    }
}

/// One leg of a route: a path between two consecutive anchor waypoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    nodes: Vec<NodeId>,
}

impl Segment {
    pub(crate) fn new(nodes: Vec<NodeId>) -> Self {
        debug_assert!(!nodes.is_empty(), "segments hold at least one node");
        Self { nodes }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn start(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn end(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Node names along the segment.
    pub fn names(&self, graph: &Graph) -> Vec<String> {
        self.nodes.iter().map(|&id| graph.display_name(id)).collect()
    }
}

/// Ordered, contiguous list of segments produced by one builder call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    segments: Vec<Segment>,
}

impl Route {
    /// Assemble a route from node paths. Each path must start where the
    /// previous one ended.
    pub fn from_paths(paths: Vec<Vec<NodeId>>) -> Result<Self> {
        if paths.is_empty() || paths.iter().any(Vec::is_empty) {
            return Err(Error::InvalidRoute {
                reason: "routes need at least one non-empty segment".to_string(),
            });
        }
        let segments: Vec<Segment> = paths.into_iter().map(Segment::new).collect();
        if let Some(pair) = segments
            .windows(2)
            .find(|pair| pair[0].end() != pair[1].start())
        {
            return Err(Error::InvalidRoute {
                reason: format!(
                    "segment ending at node {} is followed by one starting at node {}",
                    pair[0].end(),
                    pair[1].start()
                ),
            });
        }
        Ok(Self { segments })
    }

    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        debug_assert!(
            segments
                .windows(2)
                .all(|pair| pair[0].end() == pair[1].start()),
            "segments are contiguous"
        );
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total number of links travelled across all segments.
    pub fn hop_count(&self) -> usize {
        self.segments.iter().map(Segment::hop_count).sum()
    }

    /// Sum of link weights across all segments.
    pub fn total_weight(&self, graph: &Graph) -> Result<f64> {
        self.segments
            .iter()
            .try_fold(0.0, |total, segment| Ok(total + path_weight(graph, segment.nodes())?))
    }

    pub fn start(&self) -> Option<NodeId> {
        self.segments.first().map(Segment::start)
    }

    pub fn end(&self) -> Option<NodeId> {
        self.segments.last().map(Segment::end)
    }

    /// Every node visited, with the shared joints between segments listed once.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes = Vec::new();
        for segment in &self.segments {
            let skip = usize::from(nodes.last() == Some(&segment.start()));
            nodes.extend_from_slice(&segment.nodes()[skip..]);
        }
        nodes
    }

    /// Node names per segment.
    pub fn named_segments(&self, graph: &Graph) -> Vec<Vec<String>> {
        self.segments.iter().map(|segment| segment.names(graph)).collect()
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub journey: Vec<String>,
    pub mode: RouteMode,
    pub metric: CostMetric,
}

impl RouteRequest {
    /// Request a route honouring the journey order.
    pub fn strict<I, S>(journey: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            journey: journey.into_iter().map(Into::into).collect(),
            mode: RouteMode::Strict,
            metric: CostMetric::default(),
        }
    }

    /// Request a route with greedily ordered interior waypoints.
    pub fn loose<I, S>(journey: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            journey: journey.into_iter().map(Into::into).collect(),
            mode: RouteMode::Loose,
            metric: CostMetric::default(),
        }
    }

    pub fn with_metric(mut self, metric: CostMetric) -> Self {
        self.metric = metric;
        self
    }
}

/// Compute the primary route for a request.
///
/// Resolves the journey against the graph, selects the leg planner for the
/// requested metric and runs the strict or loose builder.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<Route> {
    let journey = Journey::resolve(graph, &request.journey)?;
    let planner = select_planner(request.metric);
    debug!(
        mode = %request.mode,
        metric = %request.metric,
        waypoints = journey.len(),
        "planning route"
    );

    match request.mode {
        RouteMode::Strict => build_strict_route_with(graph, &journey, planner.as_ref()),
        RouteMode::Loose => build_loose_route_with(graph, &journey, planner.as_ref()),
    }
}

/// Run one leg and attach its position to any failure.
fn plan_leg(
    graph: &Graph,
    planner: &dyn LegPlanner,
    index: usize,
    from: NodeId,
    to: NodeId,
) -> Result<Vec<NodeId>> {
    planner
        .find_leg(graph, from, to)
        .map_err(|cause| Error::LegFailed {
            index,
            from: graph.display_name(from),
            to: graph.display_name(to),
            cause: Box::new(cause),
        })
}
