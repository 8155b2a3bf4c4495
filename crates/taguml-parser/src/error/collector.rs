//! Collector for accumulating diagnostics over a whole tag file.
//!
//! Parsing recovers from every bad line, so unlike a compiler's
//! collector this one never gates success: it accumulates warnings and
//! hands them back alongside the parsed records.

use log::trace;

use crate::error::Diagnostic;

/// Accumulates the diagnostics of one parsing pass.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        trace!(diagnostic = diagnostic.to_string(); "Collected diagnostic");
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and return everything emitted, in order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
