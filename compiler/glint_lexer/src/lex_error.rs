//! Lexer error types.

use glint_diagnostic::{Diagnostic, ErrorCode};
use glint_ir::Span;

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Missing closing `"` for a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Input that starts no token.
    #[error("invalid character `{found}`")]
    InvalidCharacter { found: char },
}

impl LexError {
    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            span,
        }
    }

    #[cold]
    pub fn invalid_character(found: char, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::InvalidCharacter { found },
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidCharacter { .. } => ErrorCode::E0002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self.kind {
            LexErrorKind::UnterminatedString => diag
                .with_label(Span::point(self.span.start), "string starts here")
                .with_note("strings may span lines; the closing `\"` was never found"),
            LexErrorKind::InvalidCharacter { .. } => diag
                .with_label(self.span, "not part of any token")
                .with_note("operators are `+ - * /` and numbers are whole digits only"),
        }
    }
}

#[cfg(test)]
mod tests;
