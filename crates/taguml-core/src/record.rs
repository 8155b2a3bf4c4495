//! One parsed tag entry.
//!
//! A [`TagRecord`] holds the fields of a single line from a ctags-style
//! index that the diagram pipeline cares about: the identifier, the
//! defining file, the classified [`TagKind`], and the optional scope,
//! signature, line number, and call-relationship fields. Records are
//! parsed independently per line; the only cross-line state is the
//! aggregation performed later by the diagram model.

use crate::kind::TagKind;

/// The enclosing scope of a tag, taken from a scope extension field.
///
/// ctags emits type scopes (`class:`, `struct:`, `interface:`, ...) for
/// members and methods, and package scopes (`package:`, `namespace:`,
/// `module:`) for top-level identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Enclosed by a class-like type, e.g. `struct:Point`.
    Type(String),

    /// Enclosed by a package or namespace, e.g. `package:main`.
    Package(String),
}

impl Scope {
    /// The name of the enclosing scope.
    pub fn name(&self) -> &str {
        match self {
            Scope::Type(name) | Scope::Package(name) => name,
        }
    }
}

/// A single entry of a ctags-style index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    name: String,
    file: String,
    kind: TagKind,
    scope: Option<Scope>,
    signature: Option<String>,
    line: Option<u32>,
    calls: Vec<String>,
}

impl TagRecord {
    /// Create a record from the three mandatory columns.
    ///
    /// Optional extension-field data is attached with the `with_*`
    /// builders.
    ///
    /// # Examples
    ///
    /// ```
    /// use taguml_core::{kind::TagKind, record::{Scope, TagRecord}};
    ///
    /// let record = TagRecord::new("area", "shapes.go", TagKind::Method)
    ///     .with_scope(Scope::Type("Circle".to_string()))
    ///     .with_signature("(self Circle)");
    ///
    /// assert_eq!(record.name(), "area");
    /// assert_eq!(record.scope().unwrap().name(), "Circle");
    /// ```
    pub fn new(name: impl Into<String>, file: impl Into<String>, kind: TagKind) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            kind,
            scope: None,
            signature: None,
            line: None,
            calls: Vec::new(),
        }
    }

    /// Attach the enclosing scope.
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Attach the `signature:` field text.
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Attach the `line:` field value.
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Append callee names from a `calls:` field.
    pub fn with_calls(mut self, calls: impl IntoIterator<Item = String>) -> Self {
        self.calls.extend(calls);
        self
    }

    /// The tagged identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The defining source file.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The classified kind.
    pub fn kind(&self) -> TagKind {
        self.kind
    }

    /// The enclosing scope, if a scope field was present.
    pub fn scope(&self) -> Option<&Scope> {
        self.scope.as_ref()
    }

    /// The `signature:` field text, if present.
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// The `line:` field value, if present.
    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// Callee names collected from `calls:` fields, in field order.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults() {
        let record = TagRecord::new("foo", "main.go", TagKind::Function);

        assert_eq!(record.name(), "foo");
        assert_eq!(record.file(), "main.go");
        assert_eq!(record.kind(), TagKind::Function);
        assert!(record.scope().is_none());
        assert!(record.signature().is_none());
        assert!(record.line().is_none());
        assert!(record.calls().is_empty());
    }

    #[test]
    fn test_record_builders() {
        let record = TagRecord::new("x", "point.go", TagKind::Field)
            .with_scope(Scope::Type("Point".to_string()))
            .with_line(12);

        assert_eq!(record.scope(), Some(&Scope::Type("Point".to_string())));
        assert_eq!(record.line(), Some(12));
    }

    #[test]
    fn test_calls_accumulate_in_order() {
        let record = TagRecord::new("main", "main.go", TagKind::Function)
            .with_calls(["setup".to_string(), "run".to_string()])
            .with_calls(["teardown".to_string()]);

        assert_eq!(record.calls(), ["setup", "run", "teardown"]);
    }
}
