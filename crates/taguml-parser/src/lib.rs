//! Parser for ctags-style tag files.
//!
//! The input is the text of a tag file: one record per line, tab-separated
//! columns, comment lines starting with `!`. Parsing is a pure,
//! single-pass transformation with local recovery: a malformed line is
//! skipped and reported as a warning [`Diagnostic`](error::Diagnostic),
//! and no input ever makes parsing fail outright.
//!
//! [`records`] gives the lazy per-line sequence; [`parse`] is the eager
//! wrapper that collects records and diagnostics in one go.

pub mod error;

mod line;
mod span;

pub use span::Span;

use log::debug;

use taguml_core::record::TagRecord;

use error::{Diagnostic, DiagnosticCollector};

/// The result of parsing a whole tag file: the records of every usable
/// line, plus one warning diagnostic per skipped line.
#[derive(Debug)]
pub struct ParseOutcome {
    records: Vec<TagRecord>,
    diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    /// Records of the usable lines, in input order.
    pub fn records(&self) -> &[TagRecord] {
        &self.records
    }

    /// Warnings for the skipped lines, in input order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Split the outcome into records and diagnostics.
    pub fn into_parts(self) -> (Vec<TagRecord>, Vec<Diagnostic>) {
        (self.records, self.diagnostics)
    }
}

/// Lazy iterator over the tag records of a source text.
///
/// Yields `Ok(record)` for each usable line and `Err(diagnostic)` for
/// each line that had to be skipped; comment lines (leading `!`) and
/// blank lines produce nothing. Created by [`records`].
#[derive(Debug, Clone)]
pub struct Records<'s> {
    source: &'s str,
    offset: usize,
}

impl<'s> Iterator for Records<'s> {
    type Item = Result<TagRecord, Diagnostic>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset < self.source.len() {
            let start = self.offset;
            let rest = &self.source[start..];
            let (line_end, next_offset) = match rest.find('\n') {
                Some(newline) => (start + newline, start + newline + 1),
                None => (self.source.len(), self.source.len()),
            };
            self.offset = next_offset;

            let mut line = &self.source[start..line_end];
            if let Some(stripped) = line.strip_suffix('\r') {
                line = stripped;
            }
            if line.is_empty() || line.starts_with('!') {
                continue;
            }

            return Some(line::parse_line(line, start));
        }

        None
    }
}

/// Iterate lazily over the tag records of `source`.
///
/// # Examples
///
/// ```
/// let source = "!_TAG_FILE_FORMAT\t2\t/extended/\nfoo\tmain.go\t/^func foo/;\"\tf\n";
///
/// let names: Vec<_> = taguml_parser::records(source)
///     .filter_map(Result::ok)
///     .map(|record| record.name().to_string())
///     .collect();
///
/// assert_eq!(names, ["foo"]);
/// ```
pub fn records(source: &str) -> Records<'_> {
    Records { source, offset: 0 }
}

/// Parse a whole tag file eagerly.
///
/// Never fails: unusable lines become warning diagnostics in the
/// returned [`ParseOutcome`] while every other line still parses.
pub fn parse(source: &str) -> ParseOutcome {
    let mut collector = DiagnosticCollector::new();
    let mut parsed = Vec::new();

    for item in records(source) {
        match item {
            Ok(record) => parsed.push(record),
            Err(diagnostic) => collector.emit(diagnostic),
        }
    }

    let diagnostics = collector.into_diagnostics();
    debug!(records = parsed.len(), skipped = diagnostics.len(); "Tag file parsed");

    ParseOutcome {
        records: parsed,
        diagnostics,
    }
}

#[cfg(test)]
mod parser_tests;
