use tracing::debug;

use crate::error::Result;
use crate::graph::Graph;
use crate::journey::Journey;

use super::{plan_leg, LegPlanner, Route, Segment, WeightedPlanner};

/// Build a route that visits the waypoints in exactly the given order,
/// one weighted shortest path per consecutive pair.
pub fn build_strict_route(graph: &Graph, journey: &Journey) -> Result<Route> {
    build_strict_route_with(graph, journey, &WeightedPlanner)
}

/// Strict route construction with a caller-chosen leg planner.
///
/// The first infeasible leg aborts the whole route; no partial route is
/// returned.
pub fn build_strict_route_with(
    graph: &Graph,
    journey: &Journey,
    planner: &dyn LegPlanner,
) -> Result<Route> {
    let mut segments = Vec::with_capacity(journey.len() - 1);

    for (index, pair) in journey.waypoints().windows(2).enumerate() {
        let path = plan_leg(graph, planner, index, pair[0], pair[1])?;
        debug!(
            leg = index,
            from = %graph.display_name(pair[0]),
            to = %graph.display_name(pair[1]),
            hops = path.len() - 1,
            "planned strict leg"
        );
        segments.push(Segment::new(path));
    }

    Ok(Route::from_segments(segments))
}
