//! Leg planning strategies implementing the Strategy pattern.
//!
//! The strict and loose builders only decide which pairs of waypoints to
//! join; a [`LegPlanner`] decides how each pair is joined.

use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::path::{fewest_hops_path, shortest_path};

use super::CostMetric;

/// Trait for computing a single leg between two nodes.
pub trait LegPlanner: Send + Sync {
    /// The metric this planner minimises.
    fn metric(&self) -> CostMetric;

    /// Compute the path from `from` to `to`.
    ///
    /// Fails with [`crate::Error::NoPathExists`] when the nodes are
    /// disconnected.
    fn find_leg(&self, graph: &Graph, from: NodeId, to: NodeId) -> Result<Vec<NodeId>>;
}

/// Dijkstra planner minimising the sum of link weights.
///
/// Fails with [`crate::Error::MissingWeight`] when it reaches a link that
/// carries no weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedPlanner;

impl LegPlanner for WeightedPlanner {
    fn metric(&self) -> CostMetric {
        CostMetric::Weight
    }

    fn find_leg(&self, graph: &Graph, from: NodeId, to: NodeId) -> Result<Vec<NodeId>> {
        shortest_path(graph, from, to)
    }
}

/// Breadth-first planner minimising the number of links.
#[derive(Debug, Clone, Copy, Default)]
pub struct HopPlanner;

impl LegPlanner for HopPlanner {
    fn metric(&self) -> CostMetric {
        CostMetric::Hops
    }

    fn find_leg(&self, graph: &Graph, from: NodeId, to: NodeId) -> Result<Vec<NodeId>> {
        fewest_hops_path(graph, from, to)
    }
}

/// Select the planner for a metric.
pub fn select_planner(metric: CostMetric) -> Box<dyn LegPlanner> {
    match metric {
        CostMetric::Weight => Box::new(WeightedPlanner),
        CostMetric::Hops => Box::new(HopPlanner),
    }
}
