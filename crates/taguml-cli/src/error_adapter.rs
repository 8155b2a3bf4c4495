//! Adapters for rendering errors and parser warnings through miette.
//!
//! This module bridges the library's error and diagnostic types to
//! miette's rich formatting used in the CLI. Parser warnings carry spans
//! into the tag text and render with a source snippet; [`TagumlError`]
//! variants render as plain diagnostics.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use taguml::TagumlError;
use taguml_parser::error::{Diagnostic, Severity};

/// Adapter for a single parser warning.
///
/// Wraps a [`Diagnostic`] together with the tag-file text so the
/// rendered report can show the skipped line.
pub struct DiagnosticAdapter<'a> {
    /// The wrapped diagnostic
    diag: &'a Diagnostic,
    /// Tag-file text for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.diag.severity() {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for [`TagumlError`] variants.
///
/// These have no span into the tag text, so they render without a
/// source snippet.
pub struct ErrorAdapter<'a>(pub &'a TagumlError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TagumlError::Io(_) => "taguml::io",
            TagumlError::Config(_) => "taguml::config",
        };
        Some(Box::new(code))
    }
}

/// Wrap each parser warning with the tag text for rendering.
pub fn warning_reports<'a>(
    diagnostics: &'a [Diagnostic],
    src: &'a str,
) -> Vec<DiagnosticAdapter<'a>> {
    diagnostics
        .iter()
        .map(|diag| DiagnosticAdapter::new(diag, src))
        .collect()
}

/// Convert a parser [`Span`](taguml_parser::Span) to a miette [`SourceSpan`].
fn span_to_miette(span: taguml_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}
