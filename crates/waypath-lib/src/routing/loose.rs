//! Greedy nearest-waypoint route construction.
//!
//! The origin and destination are fixed. Interior waypoints are visited in
//! the order produced by repeatedly travelling to the closest one still
//! outstanding, measured in nodes along its leg. This is a nearest-neighbour
//! heuristic: it does not search all orderings and can return a route that
//! is longer than the best possible ordering.

use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::journey::Journey;

use super::{plan_leg, LegPlanner, Route, Segment, WeightedPlanner};

/// Build a route with greedily ordered interior waypoints, using weighted
/// shortest paths for every leg.
pub fn build_loose_route(graph: &Graph, journey: &Journey) -> Result<Route> {
    build_loose_route_with(graph, journey, &WeightedPlanner)
}

/// Loose route construction with a caller-chosen leg planner.
///
/// The journey is only read; outstanding waypoints are tracked in a private
/// copy. Any infeasible leg, including a candidate leg that would not have
/// been chosen, aborts the whole route.
pub fn build_loose_route_with(
    graph: &Graph,
    journey: &Journey,
    planner: &dyn LegPlanner,
) -> Result<Route> {
    let mut remaining = Remaining::new(journey.interior());
    let mut current = journey.origin();
    let mut segments = Vec::with_capacity(journey.len() - 1);

    while !remaining.is_empty() {
        remaining.discard(current);
        if remaining.is_empty() {
            break;
        }

        let (position, path) = nearest(graph, planner, segments.len(), current, &remaining)?;
        let next = remaining.take(position);
        debug!(
            leg = segments.len(),
            from = %graph.display_name(current),
            to = %graph.display_name(next),
            hops = path.len() - 1,
            outstanding = remaining.len(),
            "chose nearest waypoint"
        );
        segments.push(Segment::new(path));
        current = next;
    }

    let final_leg = plan_leg(
        graph,
        planner,
        segments.len(),
        current,
        journey.destination(),
    )?;
    segments.push(Segment::new(final_leg));

    Ok(Route::from_segments(segments))
}

/// Interior waypoints not yet reached, kept in journey order.
#[derive(Debug, Clone)]
struct Remaining {
    waypoints: Vec<NodeId>,
}

impl Remaining {
    fn new(interior: &[NodeId]) -> Self {
        Self {
            waypoints: interior.to_vec(),
        }
    }

    fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    fn len(&self) -> usize {
        self.waypoints.len()
    }

    fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.waypoints.iter().copied()
    }

    /// Remove and return the waypoint at `position`, keeping the order of
    /// the rest.
    fn take(&mut self, position: usize) -> NodeId {
        self.waypoints.remove(position)
    }

    /// Drop waypoints equal to `node`; the traveller is already there.
    fn discard(&mut self, node: NodeId) {
        self.waypoints.retain(|&waypoint| waypoint != node);
    }
}

/// Position in `remaining` of the closest waypoint and the leg reaching it.
/// Ties keep the earliest waypoint.
fn nearest(
    graph: &Graph,
    planner: &dyn LegPlanner,
    leg: usize,
    current: NodeId,
    remaining: &Remaining,
) -> Result<(usize, Vec<NodeId>)> {
    let mut best: Option<(usize, Vec<NodeId>)> = None;

    for (position, candidate) in remaining.iter().enumerate() {
        let path = plan_leg(graph, planner, leg, current, candidate)?;
        let closer = best
            .as_ref()
            .map_or(true, |(_, best_path)| path.len() < best_path.len());
        if closer {
            best = Some((position, path));
        }
    }

    // `remaining` is non-empty, so at least one candidate was evaluated.
    best.ok_or_else(|| crate::Error::InvalidRoute {
        reason: "no outstanding waypoint to visit".to_string(),
    })
}
