use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_invalid_character_message_names_it() {
    let err = LexError::invalid_character('@', Span::new(6, 7));
    assert_eq!(err.to_string(), "invalid character `@`");
    assert_eq!(err.code(), ErrorCode::E0002);
}

#[test]
fn test_unterminated_string_diagnostic() {
    let err = LexError::unterminated_string(Span::new(6, 12));
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(diag.message, "unterminated string literal");
    assert_eq!(diag.primary_span(), Some(Span::point(6)));
    assert_eq!(diag.notes.len(), 1);
}
