//! Terminal capability detection and the in-place progress line used by
//! the bounded simple-path search.

use std::io::{self, IsTerminal, Write};

use waypath_lib::{Graph, NodeId, SearchProgress};

/// Width cleared before each progress update so shorter names do not leave
/// trailing characters behind.
const PROGRESS_CLEAR_WIDTH: usize = 48;

/// Check whether stderr can show an in-place progress line.
///
/// This function respects:
/// - Redirection (stderr must be a terminal)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_progress() -> bool {
    if !io::stderr().is_terminal() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Rewrites a single `Checking <origin> -> <target>` line on any writer.
pub struct ProgressLine<'a, W: Write> {
    graph: &'a Graph,
    out: W,
    dirty: bool,
}

impl<'a> ProgressLine<'a, io::Stderr> {
    /// Progress line on stderr, leaving stdout to the report.
    pub fn stderr(graph: &'a Graph) -> Self {
        Self::new(graph, io::stderr())
    }
}

impl<'a, W: Write> ProgressLine<'a, W> {
    pub fn new(graph: &'a Graph, out: W) -> Self {
        Self {
            graph,
            out,
            dirty: false,
        }
    }

    /// Clear the line and hand back the writer.
    pub fn finish(mut self) -> W {
        if self.dirty {
            let _ = write!(self.out, "{:width$}\r", "", width = PROGRESS_CLEAR_WIDTH);
            let _ = self.out.flush();
        }
        self.out
    }
}

impl<W: Write> SearchProgress for ProgressLine<'_, W> {
    fn checking(&mut self, origin: NodeId, target: NodeId, _position: usize, _total: usize) {
        // Write failures are ignored.
        let _ = write!(
            self.out,
            "{:width$}\rChecking {} -> {}\r",
            "",
            self.graph.display_name(origin),
            self.graph.display_name(target),
            width = PROGRESS_CLEAR_WIDTH
        );
        let _ = self.out.flush();
        self.dirty = true;
    }
}
