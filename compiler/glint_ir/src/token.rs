//! Token types produced by the lexer.

use super::{Name, Span};
use std::fmt;

/// A token with its span in the source.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds for Glint.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    /// Integer literal, stored as `f64` bits: `42`
    Number(u64),
    /// String literal contents without the delimiting quotes (interned)
    String(Name),

    /// Identifier (interned)
    Ident(Name),

    // Keywords
    Let,
    Print,
    Haley,
    BlueEgg000,
    NightmareSpeakerman,

    // Operators and punctuation
    FatArrow, // =>
    Plus,     // +
    Minus,    // -
    Star,     // *
    Slash,    // /
    Eq,       // =
    LParen,   // (
    RParen,   // )

    /// End of input, always the last token of a `TokenList`.
    Eof,
}

impl TokenKind {
    /// Build a number token from its value.
    #[inline]
    pub fn number(value: f64) -> Self {
        TokenKind::Number(value.to_bits())
    }

    /// Human-readable name for error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "number",
            TokenKind::String(_) => "string",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Let => "`let`",
            TokenKind::Print => "`print`",
            TokenKind::Haley => "`Haley`",
            TokenKind::BlueEgg000 => "`BlueEgg_000`",
            TokenKind::NightmareSpeakerman => "`Nightmare_speakerman`",
            TokenKind::FatArrow => "`=>`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Eq => "`=`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Eof => "end of input",
        }
    }
}

/// Ordered token stream for one source string, terminated by `Eof`.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}
