use super::*;
use crate::{Span, Spanned};

fn ident(name: &str, start: u32) -> Expr {
    let end = start + u32::try_from(name.len()).unwrap_or(0);
    Expr::new(ExprKind::Ident(name.into()), Span::new(start, end))
}

#[test]
fn selectors_and_indexes_are_references() {
    let base = ident("a", 1);
    let sel = Expr::new(
        ExprKind::Selector {
            base: Box::new(base.clone()),
            field: Ident::new("b", Span::new(3, 4)),
        },
        Span::new(1, 4),
    );
    let idx = Expr::new(
        ExprKind::Index {
            base: Box::new(sel.clone()),
            index: Box::new(Expr::new(
                ExprKind::Literal(Literal::Int("1".into())),
                Span::new(5, 6),
            )),
        },
        Span::new(1, 7),
    );
    assert!(base.is_reference());
    assert!(sel.is_reference());
    assert!(idx.is_reference());

    let call = Expr::new(
        ExprKind::Call {
            callee: Box::new(ident("f", 1)),
            modifier: None,
            args: Vec::new(),
        },
        Span::new(1, 4),
    );
    assert!(!call.is_reference());
    let through_call = Expr::new(
        ExprKind::Selector {
            base: Box::new(call),
            field: Ident::new("x", Span::new(5, 6)),
        },
        Span::new(1, 6),
    );
    assert!(!through_call.is_reference());
}

#[test]
fn node_span_delegates_to_payload() {
    let stmt = Stmt::new(StmtKind::Break, Span::new(10, 16));
    let node = Node::Stmt(stmt);
    assert_eq!(node.span(), Span::new(10, 16));
    assert!(node.as_module().is_none());
}

#[test]
fn type_spec_span_covers_constraints() {
    let base = TypeSpec::Ref(ident("integer", 1));
    let constrained = TypeSpec::Constrained {
        base: Box::new(base.clone()),
        constraints: vec![ident("x", 10)],
        span: Span::new(1, 12),
    };
    assert!(constrained.span().contains_span(base.span()));
}

#[test]
fn operator_spellings() {
    assert_eq!(BinaryOp::Rotl.as_str(), "<@");
    assert_eq!(BinaryOp::Concat.as_str(), "&");
    assert_eq!(UnaryOp::Not4b.as_str(), "not4b");
    assert_eq!(CommKind::Getreply.as_str(), "getreply");
}
