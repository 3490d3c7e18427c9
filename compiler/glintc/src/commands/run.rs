//! The `run` command.

use tracing::debug;

use super::{fail, read_source};
use crate::{execute, OutputHandler, RunOptions};

/// Evaluate a file (or stdin for `-`) and print the rendered output.
pub fn run_file(path: &str, options: &RunOptions) {
    let source = read_source(path);
    debug!(path, format = %options.format, bytes = source.len(), "run");

    if let Err(error) = execute(&source, options, &OutputHandler::stdout()) {
        fail(&error, &source, path);
    }
}
