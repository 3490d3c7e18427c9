//! Recursive descent parser for Glint.
//!
//! Operators are prefix (`+ 1 2`), so there is no precedence climbing: every
//! position is filled by one call to [`Parser::parse_node`], which looks at a
//! single token (two for assignment) and recurses for the operands.

mod cursor;
mod error;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use glint_ir::{
    BinaryOp, Expr, ExprArena, ExprId, ExprKind, Program, Span, StringInterner, TokenKind,
    TokenList, WrapperKeyword,
};
use glint_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

/// Parser state: the token cursor and the arena being filled.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::new(),
        }
    }

    /// Parse nodes until `Eof`, in source order.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while !self.cursor.is_at_end() {
            body.push(self.parse_node()?);
        }
        debug!(
            statements = body.len(),
            nodes = self.arena.expr_count(),
            "parsed program"
        );
        Ok(Program::new(body, self.arena))
    }

    /// Parse exactly one node at the cursor.
    ///
    /// Uses `ensure_sufficient_stack` so `+ + + ... 1 1` of any depth parses.
    pub fn parse_node(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_node_inner())
    }

    fn parse_node_inner(&mut self) -> Result<ExprId, ParseError> {
        let token = *self.cursor.current();
        trace!(kind = %token.kind.display_name(), "parse_node");

        match token.kind {
            TokenKind::Number(bits) => {
                self.cursor.advance();
                Ok(self.alloc(ExprKind::Number(bits), token.span))
            }
            TokenKind::String(name) => {
                self.cursor.advance();
                Ok(self.alloc(ExprKind::String(name), token.span))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                if !self.cursor.check(TokenKind::Eq) {
                    return Ok(self.alloc(ExprKind::Ident(name), token.span));
                }
                self.cursor.advance();
                trace!(name = %self.cursor.interner().lookup(name), "assignment");
                let value = self.parse_node()?;
                let span = token.span.merge(self.span_of(value));
                Ok(self.alloc(ExprKind::Assign { name, value }, span))
            }
            TokenKind::Print => {
                self.cursor.advance();
                let value = self.parse_node()?;
                let span = token.span.merge(self.span_of(value));
                Ok(self.alloc(ExprKind::Print(value), span))
            }
            TokenKind::LParen => self.parse_paren(token.span),
            TokenKind::Let | TokenKind::FatArrow => {
                Err(ParseError::reserved_token(&token.kind, token.span))
            }
            TokenKind::Eof => Err(ParseError::unexpected_eof(token.span)),
            kind => {
                if let Some(op) = BinaryOp::from_token(&kind) {
                    self.parse_binary(op, token.span)
                } else if let Some(keyword) = WrapperKeyword::from_token(&kind) {
                    self.parse_wrapper(keyword, token.span)
                } else {
                    Err(ParseError::unexpected_token(&kind, token.span))
                }
            }
        }
    }

    /// `( expr )`. The group yields its inner node; only the `)` is checked.
    fn parse_paren(&mut self, open_span: Span) -> Result<ExprId, ParseError> {
        self.cursor.advance();
        let inner = self.parse_node()?;
        let close = *self.cursor.current();
        if close.kind != TokenKind::RParen {
            return Err(ParseError::unclosed_paren(open_span, &close.kind, close.span));
        }
        self.cursor.advance();
        Ok(inner)
    }

    fn parse_binary(&mut self, op: BinaryOp, op_span: Span) -> Result<ExprId, ParseError> {
        self.cursor.advance();
        let left = self.parse_node()?;
        let right = self.parse_node()?;
        let span = op_span.merge(self.span_of(right));
        Ok(self.alloc(ExprKind::Binary { op, left, right }, span))
    }

    fn parse_wrapper(&mut self, keyword: WrapperKeyword, span: Span) -> Result<ExprId, ParseError> {
        self.cursor.advance();
        let value = self.parse_node()?;
        let span = span.merge(self.span_of(value));
        Ok(self.alloc(ExprKind::Wrapper { keyword, value }, span))
    }

    #[inline]
    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc(Expr::new(kind, span))
    }

    #[inline]
    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get(id).span
    }
}

/// Parse a token stream into a [`Program`].
///
/// # Errors
/// Returns the first [`ParseError`]; there is no recovery.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<Program, ParseError> {
    Parser::new(tokens, interner).parse_program()
}
