//! Unit tests for the tag-file parser.
//!
//! These cover the ctags extended format variants the parser accepts,
//! the per-line recovery behavior, and two whole-input properties.

use proptest::prelude::*;

use taguml_core::{kind::TagKind, record::Scope};

use crate::{error::DiagnosticCode, parse, records};

#[test]
fn test_pattern_address_function() {
    let outcome = parse("foo\tmain.go\t/^func foo/;\"\tf\n");

    assert_eq!(outcome.records().len(), 1);
    assert!(outcome.diagnostics().is_empty());

    let record = &outcome.records()[0];
    assert_eq!(record.name(), "foo");
    assert_eq!(record.file(), "main.go");
    assert_eq!(record.kind(), TagKind::Function);
}

#[test]
fn test_line_number_address() {
    let outcome = parse("foo\tmain.go\t42\tf\n");

    assert_eq!(outcome.records().len(), 1);
    assert_eq!(outcome.records()[0].kind(), TagKind::Function);
}

#[test]
fn test_long_kind_name() {
    let outcome = parse("Point\tpoint.go\t/^type Point struct/;\"\tstruct\n");

    assert_eq!(outcome.records()[0].kind(), TagKind::Class);
}

#[test]
fn test_kind_key_form() {
    let outcome = parse("foo\tmain.go\t/^func foo/;\"\tkind:f\n");

    assert_eq!(outcome.records()[0].kind(), TagKind::Function);
}

#[test]
fn test_type_scope_field() {
    let outcome = parse("x\tpoint.go\t/^\\tx int$/;\"\tm\tstruct:Point\n");

    let record = &outcome.records()[0];
    assert_eq!(record.kind(), TagKind::Field);
    assert_eq!(record.scope(), Some(&Scope::Type("Point".to_string())));
}

#[test]
fn test_package_scope_field() {
    let outcome = parse("foo\tmain.go\t/^func foo/;\"\tf\tpackage:main\n");

    let record = &outcome.records()[0];
    assert_eq!(record.scope(), Some(&Scope::Package("main".to_string())));
}

#[test]
fn test_signature_turns_member_into_method() {
    let outcome = parse(
        "norm\tpoint.go\t/^func (p Point) norm/;\"\tm\tstruct:Point\tsignature:(p Point)\n",
    );

    let record = &outcome.records()[0];
    assert_eq!(record.kind(), TagKind::Method);
    assert_eq!(record.signature(), Some("(p Point)"));
}

#[test]
fn test_calls_fields_accumulate() {
    let outcome = parse("main\tmain.go\t/^func main/;\"\tf\tcalls:setup, run\tcalls:teardown\n");

    assert_eq!(outcome.records()[0].calls(), ["setup", "run", "teardown"]);
}

#[test]
fn test_line_field() {
    let outcome = parse("foo\tmain.go\t/^func foo/;\"\tf\tline:17\n");

    assert_eq!(outcome.records()[0].line(), Some(17));
}

#[test]
fn test_non_numeric_line_field_is_ignored() {
    let outcome = parse("foo\tmain.go\t/^func foo/;\"\tf\tline:abc\n");

    assert_eq!(outcome.records().len(), 1);
    assert_eq!(outcome.records()[0].line(), None);
}

#[test]
fn test_vendor_fields_are_tolerated() {
    let outcome = parse(
        "foo\tmain.go\t/^func foo/;\"\tf\taccess:public\tfile:\tlanguage:Go\tend:20\n",
    );

    assert_eq!(outcome.records().len(), 1);
    assert!(outcome.diagnostics().is_empty());
}

#[test]
fn test_comment_and_blank_lines_are_silent() {
    let source = "!_TAG_FILE_FORMAT\t2\t/extended/\n\nfoo\tmain.go\t/^func foo/;\"\tf\n";
    let outcome = parse(source);

    assert_eq!(outcome.records().len(), 1);
    assert!(outcome.diagnostics().is_empty());
}

#[test]
fn test_malformed_line_is_skipped_with_warning() {
    let source = "garbage without tabs\nfoo\tmain.go\t/^func foo/;\"\tf\n";
    let outcome = parse(source);

    assert_eq!(outcome.records().len(), 1);
    assert_eq!(outcome.records()[0].name(), "foo");
    assert_eq!(outcome.diagnostics().len(), 1);
    assert_eq!(outcome.diagnostics()[0].code(), Some(DiagnosticCode::W001));
}

#[test]
fn test_missing_kind_is_skipped_with_warning() {
    let source = "foo\tmain.go\t/^func foo/;\"\nbar\tmain.go\t/^func bar/;\"\tf\n";
    let outcome = parse(source);

    assert_eq!(outcome.records().len(), 1);
    assert_eq!(outcome.records()[0].name(), "bar");
    assert_eq!(outcome.diagnostics().len(), 1);
    assert_eq!(outcome.diagnostics()[0].code(), Some(DiagnosticCode::W002));
}

#[test]
fn test_warning_span_points_at_the_line() {
    let source = "good\ta.go\t1\tf\nbad line\n";
    let outcome = parse(source);

    let labels = outcome.diagnostics()[0].labels();
    assert_eq!(labels.len(), 1);
    let span = labels[0].span();
    assert_eq!(&source[span.start()..span.end()], "bad line");
}

#[test]
fn test_unknown_kind_is_kept_as_other() {
    // Unknown kinds are classified, not skipped; the model drops them later.
    let outcome = parse("foo\tmain.go\t/^func foo/;\"\tzz\n");

    assert_eq!(outcome.records().len(), 1);
    assert_eq!(outcome.records()[0].kind(), TagKind::Other);
    assert!(outcome.diagnostics().is_empty());
}

#[test]
fn test_crlf_input() {
    let outcome = parse("foo\tmain.go\t/^func foo/;\"\tf\r\nbar\tmain.go\t5\tf\r\n");

    assert_eq!(outcome.records().len(), 2);
    assert_eq!(outcome.records()[1].name(), "bar");
}

#[test]
fn test_missing_trailing_newline() {
    let outcome = parse("foo\tmain.go\t/^func foo/;\"\tf");

    assert_eq!(outcome.records().len(), 1);
}

#[test]
fn test_records_iterator_is_lazy_and_ordered() {
    let source = "a\tx.go\t1\tf\nb\tx.go\t2\tf\n";
    let mut iter = records(source);

    assert_eq!(iter.next().unwrap().unwrap().name(), "a");
    assert_eq!(iter.next().unwrap().unwrap().name(), "b");
    assert!(iter.next().is_none());
}

proptest! {
    #[test]
    fn parse_never_panics(source in any::<String>()) {
        let _ = parse(&source);
    }

    #[test]
    fn parse_is_deterministic(source in any::<String>()) {
        let first = parse(&source);
        let second = parse(&source);
        prop_assert_eq!(first.records(), second.records());
        prop_assert_eq!(first.diagnostics().len(), second.diagnostics().len());
    }
}
