//! Output formatting for route reports.
//!
//! Text output goes through the library's plain-text renderer; JSON output
//! serialises the whole report in one document.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use waypath_lib::{GraphSummary, RouteOutputKind, RouteRenderMode, RouteSummary};

/// Report format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines, one per segment.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Outcome of one optional diagnostic search.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiagnosticOutcome {
    pub kind: RouteOutputKind,
    /// The covering route, or `None` when the search found nothing or failed.
    pub route: Option<RouteSummary>,
    /// Why the search failed, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DiagnosticOutcome {
    pub fn found(summary: RouteSummary) -> Self {
        Self {
            kind: summary.kind,
            route: Some(summary),
            error: None,
        }
    }

    pub fn not_found(kind: RouteOutputKind) -> Self {
        Self {
            kind,
            route: None,
            error: None,
        }
    }

    pub fn failed(kind: RouteOutputKind, error: impl Into<String>) -> Self {
        Self {
            kind,
            route: None,
            error: Some(error.into()),
        }
    }
}

/// Everything the `route` command reports.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteReport {
    pub graph: GraphSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<DiagnosticOutcome>,
    pub route: RouteSummary,
}

impl OutputFormat {
    /// Write `report` to `out` in this format.
    pub fn write_report<W: Write>(self, report: &RouteReport, out: &mut W) -> io::Result<()> {
        match self {
            OutputFormat::Text => render_text(report, out),
            OutputFormat::Json => render_json(report, out),
        }
    }

    /// Write the city list to `out` in this format.
    pub fn write_cities<W: Write>(self, cities: &[&str], out: &mut W) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                for city in cities {
                    writeln!(out, "{city}")?;
                }
                Ok(())
            }
            OutputFormat::Json => render_json(&cities, out),
        }
    }
}

/// Render the diagnostics (if any) followed by the primary route.
pub fn render_text<W: Write>(report: &RouteReport, out: &mut W) -> io::Result<()> {
    for outcome in &report.diagnostics {
        match (&outcome.route, &outcome.error) {
            (Some(summary), _) => {
                write!(out, "{}", summary.render_with(RouteRenderMode::PlainText))?
            }
            (None, Some(error)) => {
                writeln!(out, "The {} search failed: {}", outcome.kind.label(), error)?
            }
            (None, None) => writeln!(out, "No shortest {} journey found", outcome.kind.label())?,
        }
        writeln!(out)?;
    }
    write!(out, "{}", report.route.render_with(RouteRenderMode::PlainText))
}

/// Render any serialisable value as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize + ?Sized, W: Write>(value: &T, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")?;
    Ok(())
}
