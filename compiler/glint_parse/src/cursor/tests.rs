use super::*;
use pretty_assertions::assert_eq;

fn tokens_for(source: &str, interner: &StringInterner) -> TokenList {
    glint_lexer::lex(source, interner).unwrap_or_default()
}

#[test]
fn test_advance_returns_consumed_token() {
    let interner = StringInterner::new();
    let tokens = tokens_for("x = 1", &interner);
    let mut cursor = Cursor::new(&tokens, &interner);

    assert!(matches!(cursor.current_kind(), TokenKind::Ident(_)));
    let ident = cursor.advance();
    assert_eq!(ident.span, Span::new(0, 1));
    assert!(cursor.check(TokenKind::Eq));
    cursor.advance();
    assert_eq!(cursor.current_kind(), TokenKind::number(1.0));
}

#[test]
fn test_advance_stops_at_eof() {
    let interner = StringInterner::new();
    let tokens = tokens_for("1", &interner);
    let mut cursor = Cursor::new(&tokens, &interner);

    cursor.advance();
    assert!(cursor.is_at_end());
    let eof = cursor.advance();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.span, Span::point(1));
    assert_eq!(cursor.advance().span, Span::point(1));
}

#[test]
fn test_empty_list_reads_as_end() {
    let interner = StringInterner::new();
    let tokens = TokenList::new();
    let cursor = Cursor::new(&tokens, &interner);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current().span, Span::DUMMY);
}
