use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::path::path_weight;
use crate::routing::Route;

/// Classifies the builder or search that produced a route summary.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutputKind {
    Strict,
    Loose,
    Coverage,
    Simple,
}

impl RouteOutputKind {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            RouteOutputKind::Strict => "strict",
            RouteOutputKind::Loose => "loose",
            RouteOutputKind::Coverage => "coverage",
            RouteOutputKind::Simple => "simple",
        }
    }
}

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Header line plus one line per segment.
    PlainText,
    /// Single arrow-separated line of the cities visited.
    Compact,
}

/// One leg of a summarised route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SegmentSummary {
    pub from: String,
    pub to: String,
    pub hops: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub nodes: Vec<String>,
}

/// Structured representation of a route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub kind: RouteOutputKind,
    pub hops: usize,
    /// Sum of link weights; absent when some link on the route has no weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<f64>,
    pub segments: Vec<SegmentSummary>,
}

impl RouteSummary {
    /// Convert a [`Route`] into a structured summary with resolved city names.
    pub fn from_route(kind: RouteOutputKind, graph: &Graph, route: &Route) -> Result<Self> {
        if route.segments().is_empty() {
            return Err(Error::InvalidRoute {
                reason: "route has no segments".to_string(),
            });
        }

        let segments = route
            .segments()
            .iter()
            .map(|segment| {
                let nodes = segment.names(graph);
                SegmentSummary {
                    from: nodes.first().cloned().unwrap_or_default(),
                    to: nodes.last().cloned().unwrap_or_default(),
                    hops: segment.hop_count(),
                    weight: path_weight(graph, segment.nodes()).ok(),
                    nodes,
                }
            })
            .collect::<Vec<_>>();

        let total_weight = segments
            .iter()
            .map(|segment| segment.weight)
            .sum::<Option<f64>>();

        Ok(Self {
            kind,
            hops: route.hop_count(),
            total_weight,
            segments,
        })
    }

    /// Render the summary using the requested presentation mode.
    pub fn render_with(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Compact => self.render_compact(),
        }
    }

    fn render_plain(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Shortest {} journey: {} connection(s)",
            self.kind.label(),
            self.hops
        );
        for segment in &self.segments {
            let _ = writeln!(
                out,
                "From {} to {} ({}): [{}]",
                segment.from,
                segment.to,
                segment.hops,
                segment.nodes.join(", ")
            );
        }
        if let Some(weight) = self.total_weight {
            let _ = writeln!(out, "Total weight: {}", weight);
        }
        out
    }

    fn render_compact(&self) -> String {
        let mut cities: Vec<&str> = Vec::new();
        for segment in &self.segments {
            for name in &segment.nodes {
                if cities.last() != Some(&name.as_str()) {
                    cities.push(name);
                }
            }
        }
        format!("{}\n", cities.join(" -> "))
    }
}
