//! Evaluation errors.
//!
//! Factory functions build an error without a location; the interpreter
//! attaches the span of the node that failed with [`EvalError::with_span`].

use glint_diagnostic::{Diagnostic, ErrorCode};
use glint_ir::{BinaryOp, Span};

use crate::Value;

/// Result of evaluating one node.
pub type EvalResult = Result<Value, EvalError>;

/// Which side of a binary operator an error refers to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operand {
    Left,
    Right,
}

impl Operand {
    pub fn as_str(self) -> &'static str {
        match self {
            Operand::Left => "left",
            Operand::Right => "right",
        }
    }
}

/// Typed error category.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("undefined identifier `{name}`")]
    UndefinedIdentifier { name: String },
    #[error("operator `{}` expects numbers, but its {} operand is {} {found}", .op.as_symbol(), .side.as_str(), article(.found))]
    NotNumeric {
        op: BinaryOp,
        side: Operand,
        found: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
}

/// An evaluation error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// `Span::DUMMY` until the interpreter attaches a location.
    pub span: Span,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::UndefinedIdentifier { .. } => ErrorCode::E6001,
            EvalErrorKind::NotNumeric { .. } => ErrorCode::E6002,
            EvalErrorKind::DivisionByZero => ErrorCode::E6003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match &self.kind {
            EvalErrorKind::UndefinedIdentifier { name } => diag
                .with_label(self.span, "not bound yet")
                .with_note(format!("assign it first, e.g. `{name} = 0`")),
            EvalErrorKind::NotNumeric { found, .. } => {
                diag.with_label(self.span, format!("this is {} {found}", article(found)))
            }
            EvalErrorKind::DivisionByZero => diag.with_label(self.span, "divisor is zero"),
        }
    }
}

/// Indefinite article for a type name.
fn article(noun: &str) -> &'static str {
    match noun.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Reference to a name with no binding.
#[cold]
pub fn undefined_identifier(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedIdentifier {
        name: name.to_owned(),
    })
}

/// Arithmetic on something other than a number.
#[cold]
pub fn not_numeric(op: BinaryOp, side: Operand, found: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotNumeric {
        op,
        side,
        found: found.type_name(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}
