//! Diagnostic system for Glint errors.
//!
//! Every phase reports failures as a [`Diagnostic`]: an [`ErrorCode`] for
//! searchability, a message, a primary span and optional notes. The CLI turns
//! these into terminal reports; `glint explain` reads [`ErrorDocs`].

mod diagnostic;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
