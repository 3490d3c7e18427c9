//! Sessions: one interner and one environment, reused across runs.

use glint_eval::{
    evaluate_program, render_program, Environment, HtmlMarkup, PlainText, Render, StatementOutput,
};
use glint_ir::StringInterner;
use tracing::debug;

use crate::{Error, OutputFormat};

/// Interner and variable bindings owned by one caller.
///
/// A fresh session per program gives the usual one-shot semantics. Reusing a
/// session carries bindings from one successful run into the next; a failed
/// run leaves the bindings as they were before it started.
#[derive(Default)]
pub struct Session {
    interner: StringInterner,
    env: Environment,
}

impl Session {
    pub fn new() -> Self {
        Session {
            interner: StringInterner::new(),
            env: Environment::new(),
        }
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Lex, parse and evaluate `source`, returning one output per statement.
    pub fn evaluate(&mut self, source: &str) -> Result<Vec<StatementOutput>, Error> {
        let tokens = glint_lexer::lex(source, &self.interner)?;
        debug!(tokens = tokens.len(), "lexed");
        let program = glint_parse::parse(&tokens, &self.interner)?;
        debug!(statements = program.body.len(), "parsed");

        let mut env = self.env.clone();
        let outputs = evaluate_program(&program, &self.interner, &mut env)?;
        self.env = env;
        debug!(bindings = self.env.len(), "evaluated");
        Ok(outputs)
    }

    /// Evaluate `source` and render the outputs with `renderer`.
    ///
    /// On error nothing is rendered and only the error is returned.
    pub fn run(&mut self, source: &str, renderer: &impl Render) -> Result<String, Error> {
        let outputs = self.evaluate(source)?;
        Ok(render_program(&outputs, renderer))
    }

    pub fn run_with_format(&mut self, source: &str, format: OutputFormat) -> Result<String, Error> {
        match format {
            OutputFormat::Html => self.run(source, &HtmlMarkup),
            OutputFormat::Plain => self.run(source, &PlainText),
        }
    }
}

/// Run `source` in a fresh session and render it as HTML markup.
///
/// # Errors
/// Returns the first lex, parse or evaluation error.
pub fn run(source: &str) -> Result<String, Error> {
    Session::new().run(source, &HtmlMarkup)
}

/// Run `source` in a fresh session with the given output format.
pub fn run_with_format(source: &str, format: OutputFormat) -> Result<String, Error> {
    Session::new().run_with_format(source, format)
}
