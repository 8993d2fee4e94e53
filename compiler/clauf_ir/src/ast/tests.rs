use super::*;
use crate::{AstArena, DeclRange, ExprId, Name, Named, Span, Spanned, StmtId, TypeId};

#[test]
fn test_operator_symbols() {
    assert_eq!(UnaryOp::LogicalNot.as_symbol(), "!");
    assert_eq!(BinaryOp::Rem.as_symbol(), "%");
    assert_eq!(BinaryOp::Shr.as_symbol(), ">>");
    assert_eq!(SequencedOp::Comma.as_symbol(), ",");
    assert_eq!(AssignOp::None.as_symbol(), "=");
}

#[test]
fn test_short_circuit_ops() {
    assert!(SequencedOp::LogicalAnd.is_short_circuit());
    assert!(SequencedOp::LogicalOr.is_short_circuit());
    assert!(!SequencedOp::Comma.is_short_circuit());
}

#[test]
fn test_expr_debug() {
    let expr = Expr::new(ExprKind::IntegerConstant(7), TypeId::new(0), Span::new(3, 4));
    assert_eq!(format!("{expr:?}"), "IntegerConstant(7) @ 3..4");
}

#[test]
fn test_decl_type_accessor() {
    let mut arena = AstArena::new();
    let int = arena.builtin_type(BuiltinKind::Int);
    let func = arena.function_type(int);

    let var = Decl::new(Name::from_raw(1), DeclKind::Variable { ty: int }, Span::new(4, 5));
    assert_eq!(var.ty(), int);
    assert!(!var.is_function());

    let main = Decl::new(
        Name::from_raw(2),
        DeclKind::Function {
            ty: func,
            body: StmtId::new(0),
        },
        Span::new(4, 10),
    );
    assert_eq!(main.ty(), func);
    assert!(main.is_function());
}

#[test]
fn test_nodes_expose_span_and_name() {
    let stmt = Stmt::new(StmtKind::Expr(ExprId::new(0)), Span::new(12, 18));
    assert_eq!(stmt.span(), Span::new(12, 18));

    let decl = Decl::new(
        Name::from_raw(3),
        DeclKind::Variable { ty: TypeId::new(0) },
        Span::new(8, 9),
    );
    assert_eq!(decl.name(), Name::from_raw(3));
    assert_eq!(decl.span(), Span::new(8, 9));
}

#[test]
fn test_builtin_keywords() {
    assert_eq!(BuiltinStmtKind::Print.keyword(), "__clauf_print");
    assert_eq!(BuiltinStmtKind::Assert.keyword(), "__clauf_assert");
    assert_eq!(BuiltinKind::Int.as_str(), "int");
}

#[test]
fn test_structural_equality() {
    let a = ExprKind::Binary {
        op: BinaryOp::Add,
        left: ExprId::new(0),
        right: ExprId::new(1),
    };
    let b = a.clone();
    assert_eq!(a, b);
    assert_eq!(TranslationUnit::default().declarations, DeclRange::EMPTY);
}
