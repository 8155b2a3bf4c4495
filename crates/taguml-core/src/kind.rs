//! Classification of tag entries.
//!
//! ctags-compatible tools describe the kind of an identifier either as a
//! single letter (`f`, `s`, `m`, ...) or as a long name (`function`,
//! `struct`, `member`, ...), depending on how the index was generated.
//! [`TagKind`] folds both notations into one tagged variant so the rest of
//! the pipeline never compares kind strings.

use std::fmt;

/// The kind of identifier a tag record describes.
///
/// Kinds that do not map onto a diagram element become [`TagKind::Other`]
/// and are excluded from both diagrams without failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// A free function.
    Function,

    /// A function owned by a type.
    Method,

    /// A class, struct, interface, union, or enum definition.
    Class,

    /// A data member of a class or struct.
    Field,

    /// A global variable or constant.
    Variable,

    /// A package, namespace, or module.
    Package,

    /// Any kind that has no diagram representation.
    Other,
}

impl TagKind {
    /// Classify a ctags kind field.
    ///
    /// Accepts both the one-letter kinds and the long kind names that
    /// `--kinds-...` output produces. The letter map follows the common
    /// ctags language maps:
    ///
    /// - `f` function, `c`/`s`/`i`/`u`/`g` type definitions,
    ///   `v`/`d` variables and defines, `p`/`n` packages and namespaces
    /// - `m`/`M` is a method when the record carries a `signature:` field
    ///   and a data member otherwise (the letter means method in some
    ///   language maps and member in others)
    ///
    /// Long names ending in `member` (`member`, `anonMember`, ...) are
    /// fields. Anything unrecognized is [`TagKind::Other`].
    ///
    /// # Examples
    ///
    /// ```
    /// use taguml_core::kind::TagKind;
    ///
    /// assert_eq!(TagKind::from_ctags("f", false), TagKind::Function);
    /// assert_eq!(TagKind::from_ctags("struct", false), TagKind::Class);
    /// assert_eq!(TagKind::from_ctags("m", true), TagKind::Method);
    /// assert_eq!(TagKind::from_ctags("m", false), TagKind::Field);
    /// assert_eq!(TagKind::from_ctags("zz", false), TagKind::Other);
    /// ```
    pub fn from_ctags(kind: &str, has_signature: bool) -> Self {
        if kind.len() == 1 {
            return Self::from_letter(kind, has_signature);
        }

        let lower = kind.to_ascii_lowercase();
        if lower.ends_with("member") {
            return TagKind::Field;
        }

        match lower.as_str() {
            "function" | "func" => TagKind::Function,
            "method" => TagKind::Method,
            "field" => TagKind::Field,
            "class" | "struct" | "interface" | "union" | "enum" => TagKind::Class,
            "variable" | "var" | "constant" | "const" => TagKind::Variable,
            "package" | "namespace" | "module" => TagKind::Package,
            _ => TagKind::Other,
        }
    }

    fn from_letter(kind: &str, has_signature: bool) -> Self {
        match kind {
            "f" => TagKind::Function,
            "c" | "s" | "i" | "u" | "g" => TagKind::Class,
            "m" | "M" if has_signature => TagKind::Method,
            "m" | "M" => TagKind::Field,
            "v" | "d" => TagKind::Variable,
            "p" | "n" => TagKind::Package,
            _ => TagKind::Other,
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TagKind::Function => "function",
            TagKind::Method => "method",
            TagKind::Class => "class",
            TagKind::Field => "field",
            TagKind::Variable => "variable",
            TagKind::Package => "package",
            TagKind::Other => "other",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_kinds() {
        assert_eq!(TagKind::from_ctags("f", false), TagKind::Function);
        assert_eq!(TagKind::from_ctags("s", false), TagKind::Class);
        assert_eq!(TagKind::from_ctags("c", false), TagKind::Class);
        assert_eq!(TagKind::from_ctags("v", false), TagKind::Variable);
        assert_eq!(TagKind::from_ctags("p", false), TagKind::Package);
    }

    #[test]
    fn test_member_letter_disambiguation() {
        assert_eq!(TagKind::from_ctags("m", true), TagKind::Method);
        assert_eq!(TagKind::from_ctags("m", false), TagKind::Field);
        assert_eq!(TagKind::from_ctags("M", false), TagKind::Field);
    }

    #[test]
    fn test_long_names() {
        assert_eq!(TagKind::from_ctags("function", false), TagKind::Function);
        assert_eq!(TagKind::from_ctags("func", false), TagKind::Function);
        assert_eq!(TagKind::from_ctags("struct", false), TagKind::Class);
        assert_eq!(TagKind::from_ctags("const", false), TagKind::Variable);
        assert_eq!(TagKind::from_ctags("namespace", false), TagKind::Package);
    }

    #[test]
    fn test_member_suffix_names_are_fields() {
        assert_eq!(TagKind::from_ctags("member", false), TagKind::Field);
        assert_eq!(TagKind::from_ctags("anonMember", false), TagKind::Field);
    }

    #[test]
    fn test_unknown_kinds_are_other() {
        assert_eq!(TagKind::from_ctags("z", false), TagKind::Other);
        assert_eq!(TagKind::from_ctags("typedef", false), TagKind::Other);
        assert_eq!(TagKind::from_ctags("", false), TagKind::Other);
    }
}
