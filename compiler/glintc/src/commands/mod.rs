//! Command handlers for the `glint` CLI.
//!
//! Handlers print and exit the process on failure; the `format_*` helpers
//! they are built on return strings so they can be tested.

mod debug;
mod explain;
mod run;

pub use debug::{format_ast, format_tokens, lex_file, parse_file};
pub use explain::{explain_error, explanation, list_error_codes};
pub use run::run_file;

/// Display name for a source path in reports.
pub(crate) fn source_name(path: &str) -> &str {
    if path == "-" {
        "<stdin>"
    } else {
        path
    }
}

/// Read a source file, or standard input when `path` is `-`.
///
/// Exits with status 1 and a message on failure.
pub(crate) fn read_source(path: &str) -> String {
    let result = if path == "-" {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(path)
    };

    match result {
        Ok(content) => content,
        Err(e) => {
            let name = source_name(path);
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{name}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{name}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{name}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{name}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Report a pipeline error against its source and exit with status 1.
pub(crate) fn fail(error: &crate::Error, source: &str, path: &str) -> ! {
    crate::reporting::emit_diagnostic(&error.to_diagnostic(), source, source_name(path));
    std::process::exit(1);
}
