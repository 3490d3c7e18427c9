use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str, interner: &StringInterner) -> Vec<TokenKind> {
    match lex(source, interner) {
        Ok(tokens) => (&tokens).into_iter().map(|t| t.kind).collect(),
        Err(e) => panic!("lex failed on {source:?}: {e}"),
    }
}

/// Source text of every token except `Eof`.
fn texts(source: &str) -> Vec<&str> {
    let interner = StringInterner::new();
    let tokens = lex(source, &interner).unwrap_or_else(|e| panic!("{e}"));
    (&tokens)
        .into_iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| &source[t.span.to_range()])
        .collect()
}

#[test]
fn test_simple_assignment() {
    assert_eq!(texts("x = 1"), vec!["x", "=", "1"]);
}

#[test]
fn test_token_kinds() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    assert_eq!(
        kinds("x = + 1 (2)", &interner),
        vec![
            TokenKind::Ident(x),
            TokenKind::Eq,
            TokenKind::Plus,
            TokenKind::number(1.0),
            TokenKind::LParen,
            TokenKind::number(2.0),
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_empty_source_is_just_eof() {
    let interner = StringInterner::new();
    let tokens = lex("", &interner).unwrap_or_default();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].span, Span::point(0));
}

#[test]
fn test_eof_span_at_end_of_source() {
    let interner = StringInterner::new();
    let tokens = lex("print 1  ", &interner).unwrap_or_default();
    assert_eq!(tokens[tokens.len() - 1].span, Span::point(9));
}

#[test]
fn test_unicode_whitespace_is_skipped() {
    for separator in ['\u{a0}', '\u{b}', '\u{2028}', '\u{3000}', '\u{feff}'] {
        let source = format!("print{separator}1");
        assert_eq!(texts(&source), vec!["print", "1"], "separator {separator:?}");
    }
}

#[test]
fn test_leading_byte_order_mark() {
    let source = "\u{feff}print 1";
    assert_eq!(texts(source), vec!["print", "1"]);

    let interner = StringInterner::new();
    let tokens = lex(source, &interner).unwrap_or_default();
    assert_eq!(tokens[0].span, Span::new(3, 8));
}

#[test]
fn test_keywords() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("let print Haley BlueEgg_000 Nightmare_speakerman =>", &interner),
        vec![
            TokenKind::Let,
            TokenKind::Print,
            TokenKind::Haley,
            TokenKind::BlueEgg000,
            TokenKind::NightmareSpeakerman,
            TokenKind::FatArrow,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let interner = StringInterner::new();
    let letter = interner.intern("letter");
    let printer = interner.intern("printer");
    assert_eq!(
        kinds("letter printer", &interner),
        vec![
            TokenKind::Ident(letter),
            TokenKind::Ident(printer),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_fat_arrow_is_one_token() {
    assert_eq!(texts("a => = b"), vec!["a", "=>", "=", "b"]);
}

#[test]
fn test_operators_need_no_spaces() {
    assert_eq!(texts("+1(*2 3)"), vec!["+", "1", "(", "*", "2", "3", ")"]);
}

#[test]
fn test_line_comments_are_dropped() {
    assert_eq!(texts("x = 1 // set x\nprint x // show"), vec!["x", "=", "1", "print", "x"]);
}

#[test]
fn test_comment_only_source() {
    let interner = StringInterner::new();
    assert_eq!(kinds("// only a comment", &interner), vec![TokenKind::Eof]);
}

#[test]
fn test_comment_runs_to_end_of_line_only() {
    assert_eq!(texts("// first\n// second\n7"), vec!["7"]);
}

#[test]
fn test_division_is_not_a_comment() {
    assert_eq!(texts("/ 4 2"), vec!["/", "4", "2"]);
}

#[test]
fn test_string_strips_only_delimiters() {
    let interner = StringInterner::new();
    let tokens = lex(r#"print "a \"b\" c""#, &interner).unwrap_or_default();
    let TokenKind::String(name) = tokens[1].kind else {
        panic!("expected string token, got {:?}", tokens[1]);
    };
    assert_eq!(&*interner.lookup(name), r#"a \"b\" c"#);
}

#[test]
fn test_string_may_span_lines() {
    let interner = StringInterner::new();
    let tokens = lex("\"one\ntwo\"", &interner).unwrap_or_default();
    let TokenKind::String(name) = tokens[0].kind else {
        panic!("expected string token, got {:?}", tokens[0]);
    };
    assert_eq!(&*interner.lookup(name), "one\ntwo");
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds(r#""""#, &interner),
        vec![TokenKind::String(glint_ir::Name::EMPTY), TokenKind::Eof]
    );
}

#[test]
fn test_number_value() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("007 42", &interner),
        vec![TokenKind::number(7.0), TokenKind::number(42.0), TokenKind::Eof]
    );
}

#[test]
fn test_decimal_point_is_invalid() {
    let interner = StringInterner::new();
    let err = lex("2.5", &interner).err();
    assert_eq!(
        err,
        Some(LexError::invalid_character('.', Span::new(1, 2)))
    );
}

#[test]
fn test_invalid_character_names_it() {
    let interner = StringInterner::new();
    let Err(err) = lex("x = 5 @ 2", &interner) else {
        panic!("expected lex error");
    };
    assert_eq!(err.kind, LexErrorKind::InvalidCharacter { found: '@' });
    assert_eq!(err.span, Span::new(6, 7));
    assert!(err.to_string().contains('@'));
}

#[test]
fn test_invalid_multibyte_character_span() {
    let interner = StringInterner::new();
    let Err(err) = lex("x é", &interner) else {
        panic!("expected lex error");
    };
    assert_eq!(err.kind, LexErrorKind::InvalidCharacter { found: 'é' });
    assert_eq!(err.span, Span::new(2, 4));
}

#[test]
fn test_unterminated_string() {
    let interner = StringInterner::new();
    let Err(err) = lex("print \"hello", &interner) else {
        panic!("expected lex error");
    };
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span, Span::new(6, 12));
    assert_eq!(err.code(), glint_diagnostic::ErrorCode::E0001);
}

#[test]
fn test_identifiers_are_interned_once() {
    let interner = StringInterner::new();
    let tokens = lex("abc abc", &interner).unwrap_or_default();
    assert_eq!(tokens[0].kind, tokens[1].kind);
}

mod proptest_lexer {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn never_panics_and_ends_with_eof(source in "\\PC{0,64}") {
            let interner = StringInterner::new();
            if let Ok(tokens) = lex(&source, &interner) {
                let last = (&tokens).into_iter().last().map(|t| t.kind);
                prop_assert_eq!(last, Some(TokenKind::Eof));
            }
        }

        #[test]
        fn spans_are_ordered_and_in_bounds(
            source in "[a-z0-9 +*/=()\"\n-]{0,64}"
        ) {
            let interner = StringInterner::new();
            if let Ok(tokens) = lex(&source, &interner) {
                let mut prev_end = 0;
                for token in &tokens {
                    prop_assert!(token.span.start >= prev_end);
                    prop_assert!(token.span.end as usize <= source.len());
                    prev_end = token.span.end;
                }
            }
        }

        #[test]
        fn valid_alphabet_always_lexes(source in "[a-z0-9 +*/=()\n-]{0,64}") {
            let interner = StringInterner::new();
            prop_assert!(lex(&source, &interner).is_ok());
        }
    }
}
