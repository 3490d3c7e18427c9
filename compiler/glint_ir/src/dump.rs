//! S-expression dump of a parsed program, used by `glint parse`.

use std::fmt::Write as _;

use glint_stack::ensure_sufficient_stack;

use crate::{ExprId, ExprKind, Program, StringInterner};

/// Render every top-level statement of `program` on its own line.
///
/// ```text
/// x = 5
/// print + x 1
/// ```
/// dumps as
/// ```text
/// (assign x (number 5))
/// (print (binary + (ident x) (number 1)))
/// ```
pub fn dump_program(program: &Program, interner: &StringInterner) -> String {
    let mut out = String::new();
    for (i, id) in program.body.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        dump_expr(program, interner, *id, &mut out);
    }
    out
}

fn dump_expr(program: &Program, interner: &StringInterner, id: ExprId, out: &mut String) {
    ensure_sufficient_stack(|| match program.arena.get(id).kind {
        ExprKind::Number(bits) => {
            let _ = write!(out, "(number {})", f64::from_bits(bits));
        }
        ExprKind::String(name) => {
            let _ = write!(out, "(string \"{}\")", interner.lookup(name));
        }
        ExprKind::Ident(name) => {
            let _ = write!(out, "(ident {})", interner.lookup(name));
        }
        ExprKind::Assign { name, value } => {
            let _ = write!(out, "(assign {} ", interner.lookup(name));
            dump_expr(program, interner, value, out);
            out.push(')');
        }
        ExprKind::Print(value) => {
            out.push_str("(print ");
            dump_expr(program, interner, value, out);
            out.push(')');
        }
        ExprKind::Wrapper { keyword, value } => {
            let _ = write!(out, "(wrapper {} ", keyword.as_str());
            dump_expr(program, interner, value, out);
            out.push(')');
        }
        ExprKind::Binary { op, left, right } => {
            let _ = write!(out, "(binary {} ", op.as_symbol());
            dump_expr(program, interner, left, out);
            out.push(' ');
            dump_expr(program, interner, right, out);
            out.push(')');
        }
    });
}

#[cfg(test)]
mod tests;
