use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use tracing::trace;

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, NodeId};

/// Find the minimum-weight path between `source` and `target` using
/// Dijkstra's algorithm.
///
/// Every link relaxed on the way must carry a weight; an unweighted link
/// fails the search with [`Error::MissingWeight`] instead of being assigned
/// a default cost. Equal-cost alternatives resolve deterministically: the
/// queue pops lower node ids first and the first parent found is kept.
pub fn shortest_path(graph: &Graph, source: NodeId, target: NodeId) -> Result<Vec<NodeId>> {
    if source == target {
        return Ok(vec![source]);
    }

    let search = dijkstra(graph, source, Some(target))?;
    search
        .path_to(target)
        .ok_or_else(|| no_path(graph, source, target))
}

/// Find the path with the fewest links between `source` and `target` using
/// breadth-first search. Link weights are ignored.
pub fn fewest_hops_path(graph: &Graph, source: NodeId, target: NodeId) -> Result<Vec<NodeId>> {
    if source == target {
        return Ok(vec![source]);
    }

    let mut parents: Vec<Option<NodeId>> = vec![None; graph.node_count()];
    let mut seen = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();

    if !graph.contains(source) {
        return Err(no_path(graph, source, target));
    }
    seen[source] = true;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for edge in graph.neighbours(current) {
            let next = edge.target;
            if seen[next] {
                continue;
            }

            seen[next] = true;
            parents[next] = Some(current);
            if next == target {
                return Ok(reconstruct_path(&parents, source, target));
            }
            queue.push_back(next);
        }
    }

    Err(no_path(graph, source, target))
}

/// Total weight of the links along `path`.
pub fn path_weight(graph: &Graph, path: &[NodeId]) -> Result<f64> {
    path.windows(2).try_fold(0.0, |total, pair| {
        let edge = graph
            .edge_between(pair[0], pair[1])
            .ok_or_else(|| Error::MissingEdge {
                from: graph.display_name(pair[0]),
                to: graph.display_name(pair[1]),
            })?;
        Ok(total + edge_weight(graph, pair[0], edge)?)
    })
}

/// Shortest paths from one source to every reachable node.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeId,
    distances: Vec<Option<f64>>,
    parents: Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Weighted distance to `target`, if reachable.
    pub fn distance_to(&self, target: NodeId) -> Option<f64> {
        self.distances.get(target).copied().flatten()
    }

    /// Node sequence from the source to `target`, if reachable.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.distance_to(target)?;
        Some(reconstruct_path(&self.parents, self.source, target))
    }

    /// Reachable nodes (the source included) in ascending id order.
    pub fn reachable(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(node, distance)| distance.map(|_| node))
    }
}

/// Run Dijkstra from `source` to every node it can reach.
pub fn single_source_paths(graph: &Graph, source: NodeId) -> Result<ShortestPathTree> {
    dijkstra(graph, source, None)
}

/// Weighted shortest paths between every pair of connected nodes.
#[derive(Debug, Clone)]
pub struct AllPairsPaths {
    trees: Vec<ShortestPathTree>,
}

impl AllPairsPaths {
    /// The shortest-path tree rooted at `source`.
    pub fn from(&self, source: NodeId) -> Option<&ShortestPathTree> {
        self.trees.get(source)
    }

    pub fn path(&self, source: NodeId, target: NodeId) -> Option<Vec<NodeId>> {
        self.from(source)?.path_to(target)
    }

    pub fn distance(&self, source: NodeId, target: NodeId) -> Option<f64> {
        self.from(source)?.distance_to(target)
    }
}

/// Run Dijkstra from every node in the graph.
pub fn all_pairs_shortest_paths(graph: &Graph) -> Result<AllPairsPaths> {
    let trees = graph
        .node_ids()
        .map(|source| dijkstra(graph, source, None))
        .collect::<Result<Vec<_>>>()?;
    Ok(AllPairsPaths { trees })
}

fn dijkstra(graph: &Graph, source: NodeId, goal: Option<NodeId>) -> Result<ShortestPathTree> {
    let node_count = graph.node_count();
    let mut distances: Vec<Option<f64>> = vec![None; node_count];
    let mut parents: Vec<Option<NodeId>> = vec![None; node_count];
    let mut settled = vec![false; node_count];
    let mut queue = BinaryHeap::new();

    if graph.contains(source) {
        distances[source] = Some(0.0);
        queue.push(QueueEntry::new(source, 0.0));
    }

    while let Some(entry) = queue.pop() {
        if settled[entry.node] {
            continue;
        }
        settled[entry.node] = true;

        if Some(entry.node) == goal {
            break;
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            if settled[next] {
                continue;
            }

            let next_cost = entry.cost.0 + edge_weight(graph, entry.node, edge)?;
            let improves = distances[next].map_or(true, |known| next_cost < known);
            if improves {
                trace!(from = entry.node, to = next, cost = next_cost, "relaxed link");
                distances[next] = Some(next_cost);
                parents[next] = Some(entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    Ok(ShortestPathTree {
        source,
        distances,
        parents,
    })
}

fn edge_weight(graph: &Graph, from: NodeId, edge: &Edge) -> Result<f64> {
    edge.weight.ok_or_else(|| Error::MissingWeight {
        from: graph.display_name(from),
        to: graph.display_name(edge.target),
    })
}

fn no_path(graph: &Graph, source: NodeId, target: NodeId) -> Error {
    Error::NoPathExists {
        from: graph.display_name(source),
        to: graph.display_name(target),
    }
}

fn reconstruct_path(parents: &[Option<NodeId>], start: NodeId, goal: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use crate::test_helpers::{diamond_graph, ids};

    #[test]
    fn weighted_path_prefers_cheaper_detour() {
        let graph = diamond_graph();
        let [a, b, c, d] = ids(&graph, ["A", "B", "C", "D"]);

        assert_eq!(shortest_path(&graph, a, d).unwrap(), vec![a, b, c, d]);
        assert_eq!(path_weight(&graph, &[a, b, c, d]).unwrap(), 3.0);
    }

    #[test]
    fn fewest_hops_ignores_weights() {
        let graph = diamond_graph();
        let [a, d] = ids(&graph, ["A", "D"]);

        assert_eq!(fewest_hops_path(&graph, a, d).unwrap(), vec![a, d]);
    }

    #[test]
    fn same_endpoint_is_a_single_node_path() {
        let graph = diamond_graph();
        assert_eq!(shortest_path(&graph, 2, 2).unwrap(), vec![2]);
        assert_eq!(fewest_hops_path(&graph, 2, 2).unwrap(), vec![2]);
    }

    #[test]
    fn disconnected_nodes_have_no_path() {
        let mut builder = GraphBuilder::new();
        builder.add_node("A").unwrap();
        builder.add_node("B").unwrap();
        builder.add_node("E").unwrap();
        builder.add_edge("A", "B", Some(1.0), false).unwrap();
        let graph = builder.build();

        let err = shortest_path(&graph, 0, 2).unwrap_err();
        assert!(matches!(err, Error::NoPathExists { from, to } if from == "A" && to == "E"));
        assert!(matches!(
            fewest_hops_path(&graph, 0, 2),
            Err(Error::NoPathExists { .. })
        ));
    }

    #[test]
    fn unweighted_link_is_reported() {
        let mut builder = GraphBuilder::new();
        for name in ["A", "B", "C"] {
            builder.add_node(name).unwrap();
        }
        builder.add_edge("A", "B", Some(1.0), false).unwrap();
        builder.add_edge("B", "C", None, true).unwrap();
        let graph = builder.build();

        let err = shortest_path(&graph, 0, 2).unwrap_err();
        assert!(matches!(err, Error::MissingWeight { from, to } if from == "B" && to == "C"));
        // Hop counting does not need weights.
        assert_eq!(fewest_hops_path(&graph, 0, 2).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn equal_cost_ties_are_deterministic() {
        // Two routes of weight 2 from S to T: via L (id 1) and via R (id 2).
        let mut builder = GraphBuilder::new();
        for name in ["S", "L", "R", "T"] {
            builder.add_node(name).unwrap();
        }
        builder.add_edge("S", "R", Some(1.0), false).unwrap();
        builder.add_edge("S", "L", Some(1.0), false).unwrap();
        builder.add_edge("R", "T", Some(1.0), false).unwrap();
        builder.add_edge("L", "T", Some(1.0), false).unwrap();
        let graph = builder.build();

        let first = shortest_path(&graph, 0, 3).unwrap();
        for _ in 0..10 {
            assert_eq!(shortest_path(&graph, 0, 3).unwrap(), first);
        }
        assert_eq!(first, vec![0, 1, 3]);
    }

    #[test]
    fn single_source_tree_covers_component() {
        let graph = diamond_graph();
        let tree = single_source_paths(&graph, 0).unwrap();

        assert_eq!(tree.source(), 0);
        assert_eq!(tree.reachable().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(tree.distance_to(3), Some(3.0));
        assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(tree.path_to(0), Some(vec![0]));
    }

    #[test]
    fn all_pairs_is_symmetric_in_distance() {
        let graph = diamond_graph();
        let all = all_pairs_shortest_paths(&graph).unwrap();

        for a in graph.node_ids() {
            for b in graph.node_ids() {
                assert_eq!(all.distance(a, b), all.distance(b, a));
            }
        }
        assert_eq!(all.path(3, 0), Some(vec![3, 2, 1, 0]));
    }
}
