//! Error codes for all Glint diagnostics.
//!
//! The first digit of a code names the phase that raised it.

use std::fmt;

/// Error codes for all Glint diagnostics.
///
/// Format: E#### where the first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Unexpected end of input
    E1002,
    /// Unclosed parenthesis
    E1003,
    /// Reserved token with no grammar production
    E1004,

    // Evaluation Errors (E6xxx)
    /// Undefined identifier
    E6001,
    /// Operand is not numeric
    E6002,
    /// Division by zero
    E6003,
}

impl ErrorCode {
    /// Every error code, in numeric order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
    ];

    /// The code as written in diagnostics and docs, e.g. `"E1003"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
        }
    }

    /// One-line summary, used as the heading of `glint explain` listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "unexpected end of input",
            ErrorCode::E1003 => "unclosed parenthesis",
            ErrorCode::E1004 => "reserved token",
            ErrorCode::E6001 => "undefined identifier",
            ErrorCode::E6002 => "operand is not numeric",
            ErrorCode::E6003 => "division by zero",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1003"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
