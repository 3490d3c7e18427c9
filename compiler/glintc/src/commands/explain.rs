//! The `explain` command: documentation for error codes.

use glint_diagnostic::{ErrorCode, ErrorDocs};

/// Documentation text for `code_str`, e.g. `"E1003"` or `"e1003"`.
pub fn explanation(code_str: &str) -> Option<&'static str> {
    code_str.parse::<ErrorCode>().ok().and_then(ErrorDocs::get)
}

/// Every error code with its one-line description.
pub fn list_error_codes() -> String {
    ErrorCode::ALL
        .iter()
        .map(|code| format!("  {code}  {}\n", code.description()))
        .collect()
}

/// Print the documentation for an error code, or exit 1 if unknown.
pub fn explain_error(code_str: &str) {
    if let Some(doc) = explanation(code_str) {
        println!("{doc}");
        return;
    }
    eprintln!("Unknown error code: {code_str}");
    eprintln!();
    eprintln!("Known codes:");
    eprint!("{}", list_error_codes());
    std::process::exit(1);
}
