//! Warning diagnostics for the tag-file parser.
//!
//! Tag parsing never fails outright: a line the parser cannot use is
//! skipped and reported as a warning, and processing continues with the
//! next line. This module provides the pieces of that reporting:
//! - Diagnostic codes for documentation and searchability
//! - Labeled byte spans pointing at the offending line
//! - Severity levels
//! - A collector for accumulating diagnostics over a whole file
//!
//! # Example
//!
//! ```
//! # use taguml_parser::error::{Diagnostic, DiagnosticCode};
//! # use taguml_parser::Span;
//!
//! let span = Span::new(40..62);
//!
//! let diag = Diagnostic::warning("tag line carries no kind field")
//!     .with_code(DiagnosticCode::W002)
//!     .with_label(span, "no kind letter after the address column")
//!     .with_help("run ctags with kind fields enabled");
//! ```

mod code;
mod collector;
mod diagnostic;
mod label;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use code::DiagnosticCode;
pub use diagnostic::Diagnostic;
pub use label::Label;
pub use severity::Severity;
