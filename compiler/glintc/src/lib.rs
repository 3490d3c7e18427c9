//! The Glint pipeline driver.
//!
//! Wires lexer, parser, evaluator and renderer together behind a
//! [`Session`], and hosts the `glint` command-line interface.
//!
//! ```text
//! let html = glintc::run("x = 5\nprint x")?;
//! assert_eq!(html, "<br><span class=\"keyword\">print</span> <span class=\"number\">5</span>");
//! ```

pub mod commands;
mod error;
mod options;
mod output;
pub mod reporting;
mod session;
mod tracing_setup;

pub use error::Error;
pub use options::{parse_run_args, ArgsError, OutputFormat, RunOptions};
pub use output::{BufferOutput, OutputHandler};
pub use session::{run, run_with_format, Session};
pub use tracing_setup::init_tracing;

pub use glint_eval::{HtmlMarkup, PlainText, Render, StatementOutput, Value};

/// Run `source` in a fresh session and send the rendered result to `out`.
///
/// Nothing is written when the program produces no text or fails.
pub fn execute(source: &str, options: &RunOptions, out: &OutputHandler) -> Result<(), Error> {
    let rendered = run_with_format(source, options.format)?;
    if !rendered.is_empty() {
        out.println(&rendered);
    }
    Ok(())
}
