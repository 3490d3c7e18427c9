//! Parse error types.

use glint_diagnostic::{Diagnostic, ErrorCode};
use glint_ir::{Span, TokenKind};

/// A parse error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    /// A token that starts no expression, such as `)` or a stray `=`.
    #[error("unexpected token {found}")]
    UnexpectedToken { found: &'static str },
    /// Input ended where an expression was required.
    #[error("unexpected end of input, expected an expression")]
    UnexpectedEof,
    /// `(` followed by an expression and then something other than `)`.
    ///
    /// The error span is the `(`; `found_span` is where `)` was expected.
    #[error("unclosed parenthesis, expected `)` but found {found}")]
    UnclosedParen {
        found: &'static str,
        found_span: Span,
    },
    /// `let` or `=>`, which lex but have no grammar production.
    #[error("reserved token {found} cannot be used here")]
    ReservedToken { found: &'static str },
}

impl ParseError {
    #[cold]
    pub fn unexpected_token(kind: &TokenKind, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken {
                found: kind.display_name(),
            },
            span,
        }
    }

    #[cold]
    pub fn unexpected_eof(span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedEof,
            span,
        }
    }

    #[cold]
    pub fn unclosed_paren(open_span: Span, found: &TokenKind, found_span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnclosedParen {
                found: found.display_name(),
                found_span,
            },
            span: open_span,
        }
    }

    #[cold]
    pub fn reserved_token(kind: &TokenKind, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::ReservedToken {
                found: kind.display_name(),
            },
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::UnexpectedEof => ErrorCode::E1002,
            ParseErrorKind::UnclosedParen { .. } => ErrorCode::E1003,
            ParseErrorKind::ReservedToken { .. } => ErrorCode::E1004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => diag
                .with_label(self.span, "expected an expression")
                .with_note("an expression is a number, string, identifier, `( expr )` or `op expr expr`"),
            ParseErrorKind::UnexpectedEof => diag
                .with_label(self.span, "input ends here")
                .with_note("operators take two operands and `print` takes one"),
            ParseErrorKind::UnclosedParen { found_span, .. } => diag
                .with_label(self.span, "this `(` is never closed")
                .with_secondary_label(found_span, "expected `)` here")
                .with_note("parentheses hold exactly one expression"),
            ParseErrorKind::ReservedToken { .. } => diag
                .with_label(self.span, "reserved")
                .with_note("bind variables with `name = value`"),
        }
    }
}
