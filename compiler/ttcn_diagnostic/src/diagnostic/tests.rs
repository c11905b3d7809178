use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_collects_labels() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("unexpected `}`")
        .with_secondary_label(Span::new(1, 2), "opened here")
        .with_label(Span::new(10, 11), "here");

    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.primary_span(), Some(Span::new(10, 11)));
}

#[test]
fn display_includes_position_when_known() {
    let diag = Diagnostic::error(ErrorCode::E1002).with_message("expected expression");
    assert_eq!(diag.to_string(), "error[E1002]: expected expression");

    let diag = diag.with_position(Some(Position {
        file: "a.ttcn3".into(),
        line: 3,
        column: 7,
    }));
    assert_eq!(diag.to_string(), "a.ttcn3:3:7: error[E1002]: expected expression");
}

#[test]
fn notes_are_not_errors() {
    let diag = Diagnostic::note(ErrorCode::E9002).with_message("too many errors");
    assert!(!diag.is_error());
    assert_eq!(diag.primary_span(), None);
    assert_eq!(diag.to_string(), "note[E9002]: too many errors");
}
