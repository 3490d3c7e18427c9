//! Glint Playground WASM Bindings
//!
//! Exposes the Glint pipeline to the playground page. The page calls
//! [`run_glint`] with the editor contents and gets back a JSON object; on
//! success `output` is markup ready for `innerHTML`.

use glintc::{OutputHandler, RunOptions};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Import console.log from JavaScript
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Result of running Glint code, serialized as JSON for JavaScript.
#[derive(Serialize, Debug, PartialEq)]
pub struct RunResult {
    pub success: bool,
    /// Rendered markup, or an escaped `Error: ...` line on failure.
    pub output: String,
    pub error: Option<String>,
    /// `"lex"`, `"parse"` or `"runtime"`.
    pub error_type: Option<&'static str>,
    /// Error code such as `"E6003"`.
    pub code: Option<&'static str>,
    /// Byte range of the error in the source.
    pub span: Option<[u32; 2]>,
}

/// Initialize the WASM module (called once on load).
#[wasm_bindgen(start)]
pub fn init() {
    std::panic::set_hook(Box::new(console_error_panic_hook));
}

fn console_error_panic_hook(info: &std::panic::PanicHookInfo) {
    log(&info.to_string());
}

/// Run Glint source code and return the result as JSON.
#[wasm_bindgen]
pub fn run_glint(source: &str) -> String {
    let result = run_glint_internal(source);
    serde_json::to_string(&result).unwrap_or_else(|e| {
        format!(r#"{{"success":false,"error":"Serialization error: {e}","error_type":"internal"}}"#)
    })
}

fn run_glint_internal(source: &str) -> RunResult {
    let out = OutputHandler::buffer();
    match glintc::execute(source, &RunOptions::default(), &out) {
        Ok(()) => {
            let printed = out.get_output();
            RunResult {
                success: true,
                output: printed.strip_suffix('\n').unwrap_or(&printed).to_owned(),
                error: None,
                error_type: None,
                code: None,
                span: None,
            }
        }
        Err(e) => {
            let message = e.message();
            let span = e.span();
            RunResult {
                success: false,
                output: format!("Error: {}", escape_html(&message)),
                error: Some(message),
                error_type: Some(e.phase()),
                code: Some(e.code().as_str()),
                span: Some([span.start, span.end]),
            }
        }
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Get version information.
#[wasm_bindgen]
pub fn version() -> String {
    format!("Glint {}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests;
