//! Glint IR - shared data structures for the Glint front-end.
//!
//! This crate contains the types every pipeline stage agrees on:
//! - Spans for source locations
//! - Names for interned identifiers and string literals
//! - Tokens and `TokenList` for lexer output
//! - The expression arena and `Program` produced by the parser
//!
//! Numbers are stored as `u64` bits wherever a type needs `Eq`/`Hash`.

mod ast;
pub mod dump;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{BinaryOp, Expr, ExprArena, ExprId, ExprKind, Program, WrapperKeyword};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
