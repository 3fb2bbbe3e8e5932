//! Graphviz DOT export of a graph with an optional route highlight.
//!
//! Only the document text is produced; running a layout engine over it is
//! left to the caller.

use std::fmt::Write;

use crate::graph::Graph;
use crate::highlight::Highlight;

/// Render `graph` as an undirected DOT document, applying `highlight`
/// styles to the cities and links it marks.
pub fn render_dot(graph: &Graph, highlight: Option<&Highlight>) -> String {
    let mut out = String::new();
    out.push_str("graph topology {\n");
    out.push_str("  node [shape=circle, style=filled];\n");

    for id in graph.node_ids() {
        let name = quote(&graph.display_name(id));
        match highlight.and_then(|h| h.node(id)) {
            Some(style) => {
                let _ = writeln!(out, "  {name} [fillcolor={}];", quote(style.fill_color));
            }
            None => {
                let _ = writeln!(out, "  {name};");
            }
        }
    }

    for edge in graph.edges() {
        let mut attributes = Vec::new();
        if let Some(weight) = edge.weight {
            attributes.push(format!("label={}", quote(&format_weight(weight))));
        }
        if let Some(style) = highlight.and_then(|h| h.edge(edge.source, edge.target)) {
            attributes.push(format!("color={}", quote(style.color)));
            attributes.push(format!("penwidth={}", quote(&format!("{:.1}", style.pen_width))));
        }

        let source = quote(&graph.display_name(edge.source));
        let target = quote(&graph.display_name(edge.target));
        if attributes.is_empty() {
            let _ = writeln!(out, "  {source} -- {target};");
        } else {
            let _ = writeln!(out, "  {source} -- {target} [{}];", attributes.join(", "));
        }
    }

    out.push_str("}\n");
    out
}

fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{weight:.0}")
    } else {
        weight.to_string()
    }
}

fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
