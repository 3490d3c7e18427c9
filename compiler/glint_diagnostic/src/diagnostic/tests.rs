use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("test error")
        .with_label(Span::new(0, 5), "here")
        .with_note("some context");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "test error");
    assert_eq!(diag.labels.len(), 1);
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_primary_span_skips_secondary_labels() {
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_secondary_label(Span::new(4, 4), "input ends here")
        .with_label(Span::new(0, 1), "unclosed `(`");

    assert_eq!(diag.primary_span(), Some(Span::new(0, 1)));
}

#[test]
fn test_primary_span_none_without_labels() {
    let diag = Diagnostic::error(ErrorCode::E6003);
    assert_eq!(diag.primary_span(), None);
}

#[test]
fn test_display_format() {
    let diag = Diagnostic::error(ErrorCode::E6003)
        .with_message("division by zero")
        .with_label(Span::new(0, 5), "divisor is zero")
        .with_note("glint does not produce Infinity from `/`");

    assert_eq!(
        diag.to_string(),
        "error [E6003]: division by zero\n  --> 0..5: divisor is zero\n  = note: glint does not produce Infinity from `/`"
    );
}
