//! Lexer for Glint using logos with string interning.
//!
//! Produces a [`TokenList`] terminated by `Eof`. Whitespace and `//` line
//! comments are dropped here, so the parser never sees trivia.

mod lex_error;

use glint_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use logos::Logos;

pub use lex_error::{LexError, LexErrorKind};

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[\s\x{FEFF}]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("=>")]
    FatArrow,

    #[token("let")]
    Let,
    #[token("print")]
    Print,
    #[token("Haley")]
    Haley,
    #[token("BlueEgg_000")]
    BlueEgg000,
    #[token("Nightmare_speakerman")]
    NightmareSpeakerman,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Eq,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[regex(r#""(?:\\.|[^\\"])*""#)]
    String,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Lex `source` into tokens, interning identifiers and string contents.
///
/// Stops at the first input that matches no token.
///
/// # Errors
/// Returns [`LexError`] for an unterminated string literal or a character
/// that starts no token.
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        let span = Span::from_range(range.clone());

        let Ok(raw) = token_result else {
            return Err(classify_error(source, range.start));
        };

        let kind = match raw {
            RawToken::LineComment => continue,
            RawToken::FatArrow => TokenKind::FatArrow,
            RawToken::Let => TokenKind::Let,
            RawToken::Print => TokenKind::Print,
            RawToken::Haley => TokenKind::Haley,
            RawToken::BlueEgg000 => TokenKind::BlueEgg000,
            RawToken::NightmareSpeakerman => TokenKind::NightmareSpeakerman,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Eq => TokenKind::Eq,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Number(value) => TokenKind::number(value),
            RawToken::String => {
                // Only the delimiters go; escapes stay as written.
                let slice = logos.slice();
                let content = &slice[1..slice.len() - 1];
                TokenKind::String(interner.intern(content))
            }
            RawToken::Ident => TokenKind::Ident(interner.intern(logos.slice())),
        };
        result.push(Token::new(kind, span));
    }

    result.push(Token::new(TokenKind::Eof, Span::from_range(source.len()..source.len())));
    Ok(result)
}

/// Work out why logos rejected the input starting at `start`.
///
/// A lone `"` means the string regex could not find its closing quote; any
/// other character starts no token at all.
#[cold]
fn classify_error(source: &str, start: usize) -> LexError {
    let rest = &source[start..];
    let found = rest.chars().next().unwrap_or('\0');
    if found == '"' {
        LexError::unterminated_string(Span::from_range(start..source.len()))
    } else {
        LexError::invalid_character(found, Span::from_range(start..start + found.len_utf8()))
    }
}

#[cfg(test)]
mod tests;
