use pretty_assertions::assert_eq;

use clauf_ir::{BuiltinKind, ExprId, ExprKind, Span, StmtKind, Type};

use super::parse_source;

/// Dump of the expression in `int main() { int a, b, c; <expr>; }`.
///
/// `a`, `b` and `c` are declarations `#0`, `#1` and `#2`.
fn expr_tree(expr: &str) -> String {
    let parsed = parse_source(&format!("int main() {{ int a, b, c; {expr}; }}"));
    assert_eq!(parsed.diagnostics, vec![], "unexpected diagnostics for {expr:?}");
    let dump = parsed.dump();
    let Some((_, tree)) = dump.split_once("      ExprStmt\n") else {
        panic!("no expression statement in:\n{dump}");
    };
    tree.lines()
        .map(|line| format!("{}\n", &line[8..]))
        .collect()
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        expr_tree("1 + 2 * 3"),
        "\
Binary +
  IntegerConstant 1
  Binary *
    IntegerConstant 2
    IntegerConstant 3
"
    );
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(
        expr_tree("10 - 4 - 3"),
        "\
Binary -
  Binary -
    IntegerConstant 10
    IntegerConstant 4
  IntegerConstant 3
"
    );
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(
        expr_tree("(1 + 2) % 3"),
        "\
Binary %
  Binary +
    IntegerConstant 1
    IntegerConstant 2
  IntegerConstant 3
"
    );
}

#[test]
fn test_shift_relational_equality_nesting() {
    assert_eq!(
        expr_tree("1 << 2 < 3 == 1"),
        "\
Binary ==
  Binary <
    Binary <<
      IntegerConstant 1
      IntegerConstant 2
    IntegerConstant 3
  IntegerConstant 1
"
    );
}

#[test]
fn test_bitwise_levels_are_left_associative() {
    assert_eq!(
        expr_tree("1 | 2 | 3"),
        "\
Binary |
  Binary |
    IntegerConstant 1
    IntegerConstant 2
  IntegerConstant 3
"
    );
    assert_eq!(
        expr_tree("a & b & 4 ^ c ^ 5"),
        "\
Binary ^
  Binary ^
    Binary &
      Binary &
        Identifier a -> #0
        Identifier b -> #1
      IntegerConstant 4
    Identifier c -> #2
  IntegerConstant 5
"
    );
}

#[test]
fn test_bitwise_and_xor_or_nesting() {
    assert_eq!(
        expr_tree("1 | 2 ^ 3 & 4"),
        "\
Binary |
  IntegerConstant 1
  Binary ^
    IntegerConstant 2
    Binary &
      IntegerConstant 3
      IntegerConstant 4
"
    );
}

#[test]
fn test_logical_or_is_sequenced_and_never_evaluated() {
    assert_eq!(
        expr_tree("1 || (2 / 0)"),
        "\
SequencedBinary ||
  IntegerConstant 1
  Binary /
    IntegerConstant 2
    IntegerConstant 0
"
    );
}

#[test]
fn test_logical_and_binds_tighter_than_or() {
    assert_eq!(
        expr_tree("a || b && c"),
        "\
SequencedBinary ||
  Identifier a -> #0
  SequencedBinary &&
    Identifier b -> #1
    Identifier c -> #2
"
    );
}

#[test]
fn test_unary_chain_is_right_to_left() {
    assert_eq!(
        expr_tree("-~!+a * b"),
        "\
Binary *
  Unary -
    Unary ~
      Unary !
        Unary +
          Identifier a -> #0
  Identifier b -> #1
"
    );
}

#[test]
fn test_conditional_is_right_associative() {
    assert_eq!(
        expr_tree("a ? b : c ? 1 : 2"),
        "\
Conditional
  Identifier a -> #0
  Identifier b -> #1
  Conditional
    Identifier c -> #2
    IntegerConstant 1
    IntegerConstant 2
"
    );
}

#[test]
fn test_conditional_middle_accepts_comma() {
    assert_eq!(
        expr_tree("a ? b, c : 1"),
        "\
Conditional
  Identifier a -> #0
  SequencedBinary ,
    Identifier b -> #1
    Identifier c -> #2
  IntegerConstant 1
"
    );
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(
        expr_tree("a = b = 1"),
        "\
Assignment =
  Identifier a -> #0
  Assignment =
    Identifier b -> #1
    IntegerConstant 1
"
    );
}

#[test]
fn test_assignment_binds_looser_than_conditional() {
    assert_eq!(
        expr_tree("a = 1 ? 2 : 3"),
        "\
Assignment =
  Identifier a -> #0
  Conditional
    IntegerConstant 1
    IntegerConstant 2
    IntegerConstant 3
"
    );
}

#[test]
fn test_assignment_target_is_not_checked() {
    assert_eq!(
        expr_tree("1 = 2"),
        "\
Assignment =
  IntegerConstant 1
  IntegerConstant 2
"
    );
}

#[test]
fn test_comma_is_right_associative_and_loosest() {
    assert_eq!(
        expr_tree("a = 1, b = 2, c"),
        "\
SequencedBinary ,
  Assignment =
    Identifier a -> #0
    IntegerConstant 1
  SequencedBinary ,
    Assignment =
      Identifier b -> #1
      IntegerConstant 2
    Identifier c -> #2
"
    );
}

#[test]
fn test_literal_bases() {
    for (literal, value) in [("0x10", 16), ("0b10", 2), ("010", 8), ("16", 16)] {
        assert_eq!(expr_tree(literal), format!("IntegerConstant {value}\n"));
    }
}

#[test]
fn test_every_expression_is_int() {
    let parsed = parse_source("int main() { int a; a = -(1 + a) ? a : 2, 3; }");
    let arena = &parsed.output.arena;
    assert!(arena.expr_count() > 0);
    for index in 0..arena.expr_count() {
        let id = ExprId::new(u32::try_from(index).unwrap_or(u32::MAX));
        let expr = arena.get_expr(id);
        assert_eq!(arena.get_type(expr.ty), &Type::Builtin(BuiltinKind::Int));
    }
}

#[test]
fn test_binary_span_covers_operands() {
    let parsed = parse_source("int main() { 1 + 2; }");
    let arena = &parsed.output.arena;
    let stmts = parsed.body_stmts();
    let stmt = arena.get_stmt(stmts[0]);
    assert_eq!(stmt.span, Span::new(13, 19));
    let StmtKind::Expr(expr) = stmt.kind else {
        panic!("expected expression statement");
    };
    let expr = arena.get_expr(expr);
    assert!(matches!(expr.kind, ExprKind::Binary { .. }));
    assert_eq!(expr.span, Span::new(13, 18));
}
