//! Parser for a single tag line.
//!
//! A well-formed line of the ctags extended format is
//!
//! ```text
//! name<TAB>file<TAB>address[<TAB>field]...
//! ```
//!
//! where `address` is an ex-command pattern (`/^func foo/;"`) or a line
//! number, and each extension field is either a bare kind token or a
//! `key:value` pair. Unrecognized keys are vendor extensions and are
//! ignored. Lines that do not fit this shape are reported as warning
//! diagnostics, never as hard failures.

use log::debug;
use winnow::{
    Parser,
    combinator::{preceded, repeat},
    error::{ContextError, ErrMode},
    token::take_till,
};

use taguml_core::{
    kind::TagKind,
    record::{Scope, TagRecord},
};

use crate::{
    error::{Diagnostic, DiagnosticCode},
    span::Span,
};

type PResult<O> = Result<O, ErrMode<ContextError>>;

/// The raw columns of one line, before field interpretation.
struct RawLine<'s> {
    name: &'s str,
    file: &'s str,
    fields: Vec<&'s str>,
}

/// Parse one mandatory tab-terminated column.
fn column<'s>(input: &mut &'s str) -> PResult<&'s str> {
    take_till(1.., '\t').parse_next(input)
}

/// Parse a tab separator.
fn tab(input: &mut &str) -> PResult<()> {
    '\t'.void().parse_next(input)
}

/// Split a line into its name, file, address, and extension-field columns.
fn raw_line<'s>(input: &mut &'s str) -> PResult<RawLine<'s>> {
    let name = column.parse_next(input)?;
    tab(input)?;
    let file = column.parse_next(input)?;
    tab(input)?;
    // The address (pattern or line number) is required but unused: the
    // diagrams only need names, kinds, and scopes.
    let _address = column.parse_next(input)?;
    let fields: Vec<&'s str> = repeat(0.., preceded('\t', take_till(0.., '\t'))).parse_next(input)?;

    Ok(RawLine { name, file, fields })
}

/// Interpreted extension fields of one line.
#[derive(Default)]
struct ExtFields<'s> {
    kind: Option<&'s str>,
    scope: Option<Scope>,
    signature: Option<&'s str>,
    line: Option<u32>,
    calls: Vec<String>,
}

impl<'s> ExtFields<'s> {
    fn interpret(&mut self, field: &'s str) {
        if field.is_empty() {
            return;
        }

        let Some((key, value)) = field.split_once(':') else {
            // A bare token is the kind column; only the first one counts.
            self.kind = self.kind.or(Some(field));
            return;
        };

        match key {
            "kind" => self.kind = self.kind.or(Some(value)),
            "class" | "struct" | "interface" | "union" | "enum" => {
                self.scope
                    .get_or_insert_with(|| Scope::Type(value.to_string()));
            }
            "package" | "namespace" | "module" => {
                self.scope
                    .get_or_insert_with(|| Scope::Package(value.to_string()));
            }
            "signature" => self.signature = self.signature.or(Some(value)),
            "line" => match value.parse() {
                Ok(line) => self.line = self.line.or(Some(line)),
                Err(_) => debug!(value; "Ignoring non-numeric line field"),
            },
            "calls" => self.calls.extend(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|callee| !callee.is_empty())
                    .map(str::to_string),
            ),
            _ => {} // vendor-specific field
        }
    }
}

/// Parse one non-comment line into a tag record.
///
/// `offset` is the byte offset of the line within the whole tag text,
/// used to attach spans to diagnostics.
pub(crate) fn parse_line(line: &str, offset: usize) -> Result<TagRecord, Diagnostic> {
    let span = Span::new(offset..offset + line.len());

    let mut input = line;
    let Ok(raw) = raw_line(&mut input) else {
        return Err(Diagnostic::warning("line does not match the ctags tag format")
            .with_code(DiagnosticCode::W001)
            .with_label(span, "expected name, file, and address columns separated by tabs")
            .with_help("regenerate the index with a ctags-compatible tool in extended format"));
    };

    let mut fields = ExtFields::default();
    for &field in &raw.fields {
        fields.interpret(field);
    }

    let Some(kind) = fields.kind else {
        return Err(Diagnostic::warning("tag line carries no kind field")
            .with_code(DiagnosticCode::W002)
            .with_label(span, "no kind token after the address column")
            .with_help("run ctags with kind fields enabled, e.g. `--fields=+K`"));
    };

    let mut record = TagRecord::new(
        raw.name,
        raw.file,
        TagKind::from_ctags(kind, fields.signature.is_some()),
    );
    if let Some(scope) = fields.scope {
        record = record.with_scope(scope);
    }
    if let Some(signature) = fields.signature {
        record = record.with_signature(signature);
    }
    if let Some(line_nr) = fields.line {
        record = record.with_line(line_nr);
    }

    Ok(record.with_calls(fields.calls))
}
