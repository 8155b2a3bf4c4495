//! Diagnostic codes for tag-file parsing.
//!
//! Every recoverable problem the parser reports carries a `W`-prefixed
//! code, since skipping the offending line is always possible.

use std::fmt;

/// Codes categorizing parser diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// Line does not match the tag format.
    ///
    /// A non-comment line could not be split into the mandatory
    /// `name`, `file`, and `address` columns. The line is skipped.
    W001,

    /// Missing kind field.
    ///
    /// The line has the mandatory columns but none of its extension
    /// fields names a kind, so the record cannot be classified. The
    /// line is skipped.
    W002,
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCode::W001 => write!(f, "W001"),
            DiagnosticCode::W002 => write!(f, "W002"),
        }
    }
}
