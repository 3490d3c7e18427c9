//! Tree-walking evaluator for Glint.
//!
//! [`evaluate_program`] runs a parsed [`Program`](glint_ir::Program) against
//! an [`Environment`] and returns one [`StatementOutput`] per top-level
//! statement. Turning those outputs into text is the job of the
//! [`render`] module; evaluation itself never produces markup.

mod environment;
mod errors;
mod interpreter;
mod operators;
pub mod render;
mod value;

pub use environment::Environment;
pub use errors::{
    division_by_zero, not_numeric, undefined_identifier, EvalError, EvalErrorKind, EvalResult,
    Operand,
};
pub use interpreter::{evaluate_program, Interpreter};
pub use operators::evaluate_binary;
pub use render::{render_program, HtmlMarkup, PlainText, Render};
pub use value::{StatementOutput, Value};
