use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::journey::Journey;
use crate::path::single_source_paths;

use super::{Route, Segment};

/// Search the weighted shortest paths from the first waypoint for one that
/// passes through every waypoint, in any order.
///
/// Among qualifying paths the one with the fewest nodes wins; ties keep the
/// path to the lowest target id. Returns `Ok(None)` when no shortest path
/// from the origin covers the journey, which includes the case where some
/// waypoint is unreachable. An unweighted link reachable from the first
/// waypoint fails with [`crate::Error::MissingWeight`].
pub fn find_coverage_route(graph: &Graph, journey: &Journey) -> Result<Option<Route>> {
    let tree = single_source_paths(graph, journey.origin())?;

    let mut best: Option<Vec<NodeId>> = None;
    for target in tree.reachable() {
        let Some(path) = tree.path_to(target) else {
            continue;
        };
        if !journey.is_covered_by(&path) {
            continue;
        }
        if best.as_ref().map_or(true, |known| path.len() < known.len()) {
            best = Some(path);
        }
    }

    match &best {
        Some(path) => debug!(hops = path.len() - 1, "coverage search found a path"),
        None => debug!("coverage search found no covering path"),
    }

    Ok(best.map(|path| Route::from_segments(vec![Segment::new(path)])))
}
