use strsim::normalized_levenshtein;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Number of "did you mean" suggestions attached to an unknown city.
const MAX_SUGGESTIONS: usize = 3;

/// Minimum similarity for a city to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.6;

/// Validated list of waypoints to visit, resolved against a graph.
///
/// A journey always holds at least two waypoints. The first and last may be
/// the same city (round trip).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    waypoints: Vec<NodeId>,
}

impl Journey {
    /// Resolve city names against `graph`.
    pub fn resolve<S: AsRef<str>>(graph: &Graph, names: &[S]) -> Result<Self> {
        if names.len() < 2 {
            return Err(Error::JourneyTooShort { len: names.len() });
        }

        let waypoints = names
            .iter()
            .map(|name| resolve_city(graph, name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { waypoints })
    }

    /// Parse a comma separated list such as `"London,Paris,Rome"`.
    pub fn parse(graph: &Graph, list: &str) -> Result<Self> {
        let names: Vec<&str> = list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();
        Self::resolve(graph, &names)
    }

    /// Build a journey from node identifiers that must exist in `graph`.
    pub fn from_ids(graph: &Graph, waypoints: Vec<NodeId>) -> Result<Self> {
        if waypoints.len() < 2 {
            return Err(Error::JourneyTooShort {
                len: waypoints.len(),
            });
        }
        if let Some(&unknown) = waypoints.iter().find(|&&id| !graph.contains(id)) {
            return Err(Error::InvalidWaypoint {
                name: format!("#{unknown}"),
                suggestions: Vec::new(),
            });
        }
        Ok(Self { waypoints })
    }

    pub fn waypoints(&self) -> &[NodeId] {
        &self.waypoints
    }

    pub fn origin(&self) -> NodeId {
        self.waypoints[0]
    }

    pub fn destination(&self) -> NodeId {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Waypoints strictly between the origin and the destination.
    pub fn interior(&self) -> &[NodeId] {
        &self.waypoints[1..self.waypoints.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false`; journeys hold at least two waypoints.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn is_round_trip(&self) -> bool {
        self.origin() == self.destination()
    }

    /// Whether every waypoint appears somewhere in `path`, in any order.
    pub fn is_covered_by(&self, path: &[NodeId]) -> bool {
        self.waypoints.iter().all(|waypoint| path.contains(waypoint))
    }
}

fn resolve_city(graph: &Graph, name: &str) -> Result<NodeId> {
    graph.node_id(name).ok_or_else(|| Error::InvalidWaypoint {
        name: name.to_string(),
        suggestions: suggest_cities(graph, name, MAX_SUGGESTIONS),
    })
}

/// City names that look like `name`, most similar first.
pub fn suggest_cities(graph: &Graph, name: &str, limit: usize) -> Vec<String> {
    let needle = name.to_lowercase();
    let mut scored: Vec<(f64, &str)> = graph
        .names()
        .iter()
        .map(|candidate| {
            (
                normalized_levenshtein(&needle, &candidate.to_lowercase()),
                candidate.as_str(),
            )
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
