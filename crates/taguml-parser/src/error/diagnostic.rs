//! The core diagnostic type for tag-file parsing.

use std::fmt;

use crate::{
    error::{DiagnosticCode, Label, Severity},
    span::Span,
};

/// A diagnostic message with a location in the tag file.
///
/// Diagnostics carry a severity, an optional code for searchability, a
/// primary message, one or more labeled spans, and optional help text.
/// The parser emits them for lines it had to skip; they are rendered by
/// the CLI but never abort a run.
///
/// # Example
///
/// ```
/// # use taguml_parser::error::{Diagnostic, DiagnosticCode};
/// # use taguml_parser::Span;
///
/// let span = Span::new(0..17);
/// let diag = Diagnostic::warning("line does not match the ctags tag format")
///     .with_code(DiagnosticCode::W001)
///     .with_label(span, "expected tab-separated columns")
///     .with_help("regenerate the index with a ctags-compatible tool");
///
/// assert_eq!(
///     diag.to_string(),
///     "warning[W001]: line does not match the ctags tag format"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<DiagnosticCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the diagnostic code, if any.
    pub fn code(&self) -> Option<DiagnosticCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "warning[W001]: message" or "warning: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_defaults() {
        let diag = Diagnostic::warning("skipped line");

        assert!(diag.severity().is_warning());
        assert_eq!(diag.message(), "skipped line");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_with_labels() {
        let diag = Diagnostic::warning("tag line carries no kind field")
            .with_label(Span::new(10..20), "here")
            .with_secondary_label(Span::new(0..5), "context");

        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::warning("tag line carries no kind field")
            .with_code(DiagnosticCode::W002);

        assert_eq!(
            diag.to_string(),
            "warning[W002]: tag line carries no kind field"
        );
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::error("unreadable input");

        assert_eq!(diag.to_string(), "error: unreadable input");
    }

    #[test]
    fn test_diagnostic_help() {
        let diag = Diagnostic::warning("skipped").with_help("check the tag generator");

        assert_eq!(diag.help(), Some("check the tag generator"));
    }
}
