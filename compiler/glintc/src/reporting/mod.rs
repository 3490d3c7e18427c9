//! Terminal rendering of diagnostics with `ariadne`.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use glint_diagnostic::Diagnostic;
use glint_ir::Span;

/// Render `diag` against `source` as a terminal report.
///
/// `path` names the source in the report header. `color` toggles ANSI
/// escapes.
pub fn render_diagnostic(diag: &Diagnostic, source: &str, path: &str, color: bool) -> String {
    let offset = diag.primary_span().map_or(0, |span| span.start as usize);

    let mut report = Report::build(ReportKind::Error, path, offset)
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        )
        .with_code(diag.code)
        .with_message(&diag.message);

    for label in &diag.labels {
        let color = if label.is_primary {
            Color::Red
        } else {
            Color::Blue
        };
        report = report.with_label(
            Label::new((path, label_range(label.span, source)))
                .with_message(&label.message)
                .with_color(color),
        );
    }
    for note in &diag.notes {
        report = report.with_note(note);
    }

    let mut out = Vec::new();
    if report
        .finish()
        .write((path, Source::from(source)), &mut out)
        .is_err()
    {
        // Writing to a Vec cannot fail short of a broken cache; fall back to
        // the plain rendering.
        return diag.to_string();
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Print `diag` to stderr, colored when stderr is a terminal.
pub fn emit_diagnostic(diag: &Diagnostic, source: &str, path: &str) {
    use std::io::IsTerminal;

    let color = std::io::stderr().is_terminal();
    eprint!("{}", render_diagnostic(diag, source, path, color));
}

/// Byte range for a label, widened to one character when `span` is empty so
/// the report still has something to underline.
fn label_range(span: Span, source: &str) -> Range<usize> {
    let range = span.to_range();
    let end = range.end.min(source.len());
    let start = range.start.min(end);
    if start < end {
        return start..end;
    }
    if let Some(ch) = source[start..].chars().next() {
        return start..start + ch.len_utf8();
    }
    match source[..start].char_indices().next_back() {
        Some((prev, _)) => prev..start,
        None => start..start,
    }
}
