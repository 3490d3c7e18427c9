use super::*;
use crate::TokenKind;

#[test]
fn test_arena_alloc_and_get() {
    let mut arena = ExprArena::new();
    let one = arena.alloc(Expr::new(ExprKind::number(1.0), Span::new(2, 3)));
    let two = arena.alloc(Expr::new(ExprKind::number(2.0), Span::new(4, 5)));
    let sum = arena.alloc(Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Add,
            left: one,
            right: two,
        },
        Span::new(0, 5),
    ));

    assert_eq!(arena.expr_count(), 3);
    assert_eq!(sum.index(), 2);
    assert_eq!(arena.get(one).span, Span::new(2, 3));
    assert!(matches!(
        arena.get(sum).kind,
        ExprKind::Binary { op: BinaryOp::Add, .. }
    ));
}

#[test]
fn test_program_statements_keep_order() {
    let mut arena = ExprArena::new();
    let a = arena.alloc(Expr::new(ExprKind::number(1.0), Span::new(0, 1)));
    let b = arena.alloc(Expr::new(ExprKind::number(2.0), Span::new(2, 3)));
    let program = Program::new(vec![b, a], arena);

    let spans: Vec<Span> = program.body.iter().map(|id| program.arena.get(*id).span).collect();
    assert_eq!(spans, vec![Span::new(2, 3), Span::new(0, 1)]);
    assert!(Program::default().body.is_empty());
}

#[test]
fn test_binary_op_from_token() {
    assert_eq!(BinaryOp::from_token(&TokenKind::Plus), Some(BinaryOp::Add));
    assert_eq!(BinaryOp::from_token(&TokenKind::Minus), Some(BinaryOp::Sub));
    assert_eq!(BinaryOp::from_token(&TokenKind::Star), Some(BinaryOp::Mul));
    assert_eq!(BinaryOp::from_token(&TokenKind::Slash), Some(BinaryOp::Div));
    assert_eq!(BinaryOp::from_token(&TokenKind::Eq), None);
    assert_eq!(BinaryOp::Div.as_symbol(), "/");
}

#[test]
fn test_wrapper_keyword_text() {
    assert_eq!(
        WrapperKeyword::from_token(&TokenKind::BlueEgg000),
        Some(WrapperKeyword::BlueEgg000)
    );
    assert_eq!(WrapperKeyword::BlueEgg000.as_str(), "BlueEgg_000");
    assert_eq!(WrapperKeyword::NightmareSpeakerman.as_str(), "Nightmare_speakerman");
    assert_eq!(WrapperKeyword::from_token(&TokenKind::Print), None);
}
