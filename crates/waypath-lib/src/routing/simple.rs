//! Exhaustive simple-path search bounded by a hop cutoff.
//!
//! Simple-path enumeration is exponential in the cutoff; this search is an
//! opt-in diagnostic and can take minutes on dense graphs.

use tracing::{debug, info};

use crate::graph::{Graph, NodeId};
use crate::journey::Journey;

use super::{Route, Segment};

/// Historical hop cutoff used by the command line when none is given.
pub const DEFAULT_HOP_CUTOFF: usize = 11;

/// Receives progress notifications from [`find_bounded_simple_route`].
pub trait SearchProgress {
    /// Called before the paths from `origin` to `target` are enumerated.
    /// `position` counts from zero up to `total - 1`.
    fn checking(&mut self, origin: NodeId, target: NodeId, position: usize, total: usize);
}

/// Progress sink that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl SearchProgress for NoProgress {
    fn checking(&mut self, _origin: NodeId, _target: NodeId, _position: usize, _total: usize) {}
}

impl<F> SearchProgress for F
where
    F: FnMut(NodeId, NodeId, usize, usize),
{
    fn checking(&mut self, origin: NodeId, target: NodeId, position: usize, total: usize) {
        self(origin, target, position, total)
    }
}

/// Enumerate simple paths from the first waypoint to every node in
/// `targets` with at most `hop_cutoff` links, and return the shortest one
/// (by node count) that contains every waypoint.
///
/// Targets are processed in the given order and paths in adjacency order;
/// a later path only replaces the current best when strictly shorter.
/// Returns `None` when no path within the cutoff covers the journey. Link
/// weights are not consulted.
pub fn find_bounded_simple_route(
    graph: &Graph,
    journey: &Journey,
    targets: &[NodeId],
    hop_cutoff: usize,
    progress: &mut dyn SearchProgress,
) -> Option<Route> {
    let origin = journey.origin();
    info!(
        origin = %graph.display_name(origin),
        targets = targets.len(),
        hop_cutoff,
        "starting bounded simple-path search"
    );

    let mut search = SimplePathSearch {
        graph,
        journey,
        hop_cutoff,
        visited: vec![false; graph.node_count()],
        stack: Vec::with_capacity(hop_cutoff + 1),
        best: None,
    };

    for (position, &target) in targets.iter().enumerate() {
        progress.checking(origin, target, position, targets.len());
        if target == origin || !graph.contains(target) || !graph.contains(origin) {
            continue;
        }
        search.run(origin, target);
    }

    if let Some(path) = &search.best {
        debug!(hops = path.len() - 1, "simple-path search found a path");
    }
    search
        .best
        .map(|path| Route::from_segments(vec![Segment::new(path)]))
}

struct SimplePathSearch<'a> {
    graph: &'a Graph,
    journey: &'a Journey,
    hop_cutoff: usize,
    visited: Vec<bool>,
    stack: Vec<NodeId>,
    best: Option<Vec<NodeId>>,
}

impl SimplePathSearch<'_> {
    fn run(&mut self, origin: NodeId, target: NodeId) {
        self.stack.clear();
        self.stack.push(origin);
        self.visited[origin] = true;
        self.extend(origin, target);
        self.visited[origin] = false;
    }

    fn extend(&mut self, current: NodeId, target: NodeId) {
        // Any completed path would be at least one node longer than the stack.
        if let Some(best) = &self.best {
            if self.stack.len() + 1 >= best.len() {
                return;
            }
        }
        if self.stack.len() > self.hop_cutoff {
            return;
        }

        let graph = self.graph;
        for edge in graph.neighbours(current) {
            let next = edge.target;
            if self.visited[next] {
                continue;
            }

            self.stack.push(next);
            if next == target {
                self.consider();
            } else if self.stack.len() <= self.hop_cutoff {
                self.visited[next] = true;
                self.extend(next, target);
                self.visited[next] = false;
            }
            self.stack.pop();
        }
    }

    fn consider(&mut self) {
        if !self.journey.is_covered_by(&self.stack) {
            return;
        }
        let shorter = self
            .best
            .as_ref()
            .map_or(true, |best| self.stack.len() < best.len());
        if shorter {
            self.best = Some(self.stack.clone());
        }
    }
}
