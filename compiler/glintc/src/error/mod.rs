//! Pipeline error: whichever phase failed first.

use glint_diagnostic::{Diagnostic, ErrorCode};
use glint_eval::EvalError;
use glint_ir::Span;
use glint_lexer::LexError;
use glint_parse::ParseError;

/// The first error a run hit. A run either yields output or one of these.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Human-readable message, without code or location.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn span(&self) -> Span {
        match self {
            Error::Lex(e) => e.span,
            Error::Parse(e) => e.span,
            Error::Eval(e) => e.span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Lex(e) => e.code(),
            Error::Parse(e) => e.code(),
            Error::Eval(e) => e.code(),
        }
    }

    /// Which phase failed: `"lex"`, `"parse"` or `"runtime"`.
    pub fn phase(&self) -> &'static str {
        match self {
            Error::Lex(_) => "lex",
            Error::Parse(_) => "parse",
            Error::Eval(_) => "runtime",
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Lex(e) => e.to_diagnostic(),
            Error::Parse(e) => e.to_diagnostic(),
            Error::Eval(e) => e.to_diagnostic(),
        }
    }
}
