//! Renderers from evaluated outputs to text.
//!
//! [`HtmlMarkup`] produces the `<span class="...">` markup the playground
//! page styles; [`PlainText`] is for terminals.

use crate::{StatementOutput, Value};

/// Turns values and statement outputs into text.
///
/// Implementors supply the three leaf forms and the statement separator; the
/// provided methods assemble them.
pub trait Render {
    fn number(&self, out: &mut String, value: f64);

    /// `value` is the string contents without quotes.
    fn string(&self, out: &mut String, value: &str);

    fn keyword(&self, out: &mut String, keyword: &str);

    /// Placed between consecutive statement outputs.
    fn separator(&self) -> &'static str;

    fn value(&self, out: &mut String, value: &Value) {
        match value {
            Value::Number(n) => self.number(out, *n),
            Value::Str(s) => self.string(out, s),
            Value::Empty => {}
        }
    }

    fn statement(&self, out: &mut String, output: &StatementOutput) {
        match output {
            StatementOutput::Empty => {}
            StatementOutput::Value(value) => self.value(out, value),
            StatementOutput::Keyword { keyword, value } => {
                self.keyword(out, keyword);
                out.push(' ');
                self.value(out, value);
            }
        }
    }
}

/// Span-tagged HTML, one statement per `<br>`.
#[derive(Copy, Clone, Debug, Default)]
pub struct HtmlMarkup;

impl Render for HtmlMarkup {
    fn number(&self, out: &mut String, value: f64) {
        out.push_str("<span class=\"number\">");
        out.push_str(&format_number(value));
        out.push_str("</span>");
    }

    fn string(&self, out: &mut String, value: &str) {
        out.push_str("<span class=\"string\">\"");
        escape_html(out, value);
        out.push_str("\"</span>");
    }

    fn keyword(&self, out: &mut String, keyword: &str) {
        out.push_str("<span class=\"keyword\">");
        escape_html(out, keyword);
        out.push_str("</span>");
    }

    fn separator(&self) -> &'static str {
        "<br>"
    }
}

/// Unadorned text, one statement per line.
#[derive(Copy, Clone, Debug, Default)]
pub struct PlainText;

impl Render for PlainText {
    fn number(&self, out: &mut String, value: f64) {
        out.push_str(&format_number(value));
    }

    fn string(&self, out: &mut String, value: &str) {
        out.push('"');
        out.push_str(value);
        out.push('"');
    }

    fn keyword(&self, out: &mut String, keyword: &str) {
        out.push_str(keyword);
    }

    fn separator(&self) -> &'static str {
        "\n"
    }
}

/// Render every statement output, separated by the renderer's separator.
///
/// Empty outputs still take a slot, so `x = 5` then `print x` renders as
/// an empty first entry followed by the print.
pub fn render_program(outputs: &[StatementOutput], renderer: &impl Render) -> String {
    let mut out = String::new();
    for (i, output) in outputs.iter().enumerate() {
        if i > 0 {
            out.push_str(renderer.separator());
        }
        renderer.statement(&mut out, output);
    }
    out
}

/// Format a number the way a browser prints it.
///
/// Integral values have no fractional part, `-0` prints as `0`, and very
/// large or very small magnitudes switch to exponent form (`1e+21`, `1e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}

fn escape_html(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
