//! Options for `glint run`, parsed by hand from the argument list.

use std::fmt;

/// How rendered output is formatted.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// `<span class="...">` markup joined with `<br>`.
    #[default]
    Html,
    /// Bare values, one statement per line.
    Plain,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Plain => write!(f, "plain"),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RunOptions {
    pub format: OutputFormat,
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ArgsError {
    #[error("missing file path (use `-` to read standard input)")]
    MissingPath,
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Parse the arguments after `run` into a path and options.
///
/// Flags may come before or after the path; the last format flag wins.
pub fn parse_run_args(args: &[String]) -> Result<(String, RunOptions), ArgsError> {
    let mut options = RunOptions::default();
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--plain" => options.format = OutputFormat::Plain,
            "--html" => options.format = OutputFormat::Html,
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(ArgsError::UnknownOption(arg.clone()));
            }
            _ => {
                if path.replace(arg.clone()).is_some() {
                    return Err(ArgsError::UnexpectedArgument(arg.clone()));
                }
            }
        }
    }

    let path = path.ok_or(ArgsError::MissingPath)?;
    Ok((path, options))
}

#[cfg(test)]
mod tests;
