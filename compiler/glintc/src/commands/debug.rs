//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::fmt::Write as _;

use glint_ir::{dump::dump_program, TokenKind};

use super::{fail, read_source};
use crate::{Error, Session};

/// One line per token: span, kind and source text.
pub fn format_tokens(source: &str) -> Result<String, Error> {
    let session = Session::new();
    let tokens = glint_lexer::lex(source, session.interner())?;

    let mut out = String::new();
    for token in &tokens {
        let _ = write!(out, "{:<10} {}", format!("{:?}", token.span), token.kind.display_name());
        if token.kind != TokenKind::Eof {
            let _ = write!(out, " {:?}", &source[token.span.to_range()]);
        }
        out.push('\n');
    }
    Ok(out)
}

/// The parsed program as s-expressions, one statement per line.
pub fn format_ast(source: &str) -> Result<String, Error> {
    let session = Session::new();
    let interner = session.interner();
    let tokens = glint_lexer::lex(source, interner)?;
    let program = glint_parse::parse(&tokens, interner)?;
    Ok(dump_program(&program, interner))
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let source = read_source(path);
    match format_tokens(&source) {
        Ok(text) => print!("{text}"),
        Err(error) => fail(&error, &source, path),
    }
}

/// Parse a file and display its syntax tree.
pub fn parse_file(path: &str) {
    let source = read_source(path);
    match format_ast(&source) {
        Ok(text) if text.is_empty() => {}
        Ok(text) => println!("{text}"),
        Err(error) => fail(&error, &source, path),
    }
}
