//! Waypath library entry points.
//!
//! This crate loads city topologies, builds weighted undirected graphs and
//! turns a journey (an ordered list of cities) into a multi-segment route.
//! Higher-level consumers such as the CLI should only depend on the
//! functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dot;
pub mod error;
pub mod graph;
pub mod highlight;
pub mod journey;
pub mod output;
pub mod path;
pub mod routing;
pub mod topology;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use dot::render_dot;
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, EdgeKind, EdgeRecord, Graph, GraphBuilder, GraphSummary, NodeId};
pub use highlight::{highlight_route, EdgeStyle, Highlight, NodeStyle};
pub use journey::{suggest_cities, Journey};
pub use output::{RouteOutputKind, RouteRenderMode, RouteSummary, SegmentSummary};
pub use path::{fewest_hops_path, shortest_path};
pub use routing::{
    build_loose_route, build_strict_route, find_bounded_simple_route, find_coverage_route,
    plan_route, CostMetric, LegPlanner, NoProgress, Route, RouteMode, RouteRequest,
    SearchProgress, Segment, DEFAULT_HOP_CUTOFF,
};
pub use topology::{load_topology, resolve_topology_path, Topology, TopologyLink, TopologyNode};
