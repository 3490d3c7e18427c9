use super::*;
use crate::{BinaryOp, Expr, ExprArena, Span, WrapperKeyword};
use pretty_assertions::assert_eq;

#[test]
fn test_dump_nested_program() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut arena = ExprArena::new();

    let five = arena.alloc(Expr::new(ExprKind::number(5.0), Span::new(4, 5)));
    let assign = arena.alloc(Expr::new(
        ExprKind::Assign { name: x, value: five },
        Span::new(0, 5),
    ));
    let ident = arena.alloc(Expr::new(ExprKind::Ident(x), Span::new(14, 15)));
    let one = arena.alloc(Expr::new(ExprKind::number(1.0), Span::new(16, 17)));
    let sum = arena.alloc(Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Add,
            left: ident,
            right: one,
        },
        Span::new(12, 17),
    ));
    let print = arena.alloc(Expr::new(ExprKind::Print(sum), Span::new(6, 17)));
    let program = Program::new(vec![assign, print], arena);

    assert_eq!(
        dump_program(&program, &interner),
        "(assign x (number 5))\n(print (binary + (ident x) (number 1)))"
    );
}

#[test]
fn test_dump_string_and_wrapper() {
    let interner = StringInterner::new();
    let hi = interner.intern("hi");
    let mut arena = ExprArena::new();
    let text = arena.alloc(Expr::new(ExprKind::String(hi), Span::new(6, 10)));
    let wrapper = arena.alloc(Expr::new(
        ExprKind::Wrapper {
            keyword: WrapperKeyword::Haley,
            value: text,
        },
        Span::new(0, 10),
    ));
    let program = Program::new(vec![wrapper], arena);

    assert_eq!(
        dump_program(&program, &interner),
        "(wrapper Haley (string \"hi\"))"
    );
}

#[test]
fn test_dump_empty_program() {
    let interner = StringInterner::new();
    assert_eq!(dump_program(&Program::default(), &interner), "");
}
