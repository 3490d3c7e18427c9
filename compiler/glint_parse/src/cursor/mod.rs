//! Token cursor for navigating the token stream.

use glint_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

/// Returned once the cursor runs past the stream, so a list without a
/// trailing `Eof` still reads as ended.
static EOF: Token = Token::new(TokenKind::Eof, Span::DUMMY);

/// Cursor over a [`TokenList`].
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token and return it.
    ///
    /// Never moves past `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }
}

#[cfg(test)]
mod tests;
