//! Property-based tests for the compile pipeline.
//!
//! - Arithmetic built from `+ - * / %` and parentheses parses with the
//!   usual precedence: evaluating the AST agrees with a reference
//!   evaluator over the generated source.
//! - Compiling the same text twice gives identical results.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use clauf_ir::{BinaryOp, DeclKind, ExprId, ExprKind, StmtKind};
use claufc::{compile, Compilation, SourceFile};
use proptest::prelude::*;

// -- Arithmetic source generation --

#[derive(Clone, Debug)]
enum Operand {
    Lit(u8),
    Group(Box<Flat>),
}

/// `first op operand op operand ...` with no implied grouping.
#[derive(Clone, Debug)]
struct Flat {
    first: Operand,
    rest: Vec<(char, Operand)>,
}

fn flat_of(operand: BoxedStrategy<Operand>) -> impl Strategy<Value = Flat> {
    let op = prop::sample::select(vec!['+', '-', '*', '/', '%']);
    (
        operand.clone(),
        prop::collection::vec((op, operand), 0..5),
    )
        .prop_map(|(first, rest)| Flat { first, rest })
}

fn flat_strategy() -> impl Strategy<Value = Flat> {
    let leaf = (0u8..20).prop_map(Operand::Lit);
    let operand = leaf
        .prop_recursive(3, 24, 4, |inner| {
            flat_of(inner).prop_map(|flat| Operand::Group(Box::new(flat)))
        })
        .boxed();
    flat_of(operand)
}

fn render(flat: &Flat) -> String {
    let mut out = render_operand(&flat.first);
    for (op, operand) in &flat.rest {
        out.push_str(&format!(" {op} {}", render_operand(operand)));
    }
    out
}

fn render_operand(operand: &Operand) -> String {
    match operand {
        Operand::Lit(n) => n.to_string(),
        Operand::Group(inner) => format!("({})", render(inner)),
    }
}

// -- Reference evaluation: products bind tighter than sums --

fn apply(op: char, left: i64, right: i64) -> Option<i64> {
    match op {
        '+' => Some(left.wrapping_add(right)),
        '-' => Some(left.wrapping_sub(right)),
        '*' => Some(left.wrapping_mul(right)),
        '/' => left.checked_div(right),
        '%' => left.checked_rem(right),
        _ => unreachable!("generated operator {op}"),
    }
}

fn eval_flat(flat: &Flat) -> Option<i64> {
    let mut total = 0i64;
    let mut sign = '+';
    let mut term = eval_operand(&flat.first)?;
    for (op, operand) in &flat.rest {
        let value = eval_operand(operand)?;
        if matches!(op, '+' | '-') {
            total = apply(sign, total, term)?;
            sign = *op;
            term = value;
        } else {
            term = apply(*op, term, value)?;
        }
    }
    apply(sign, total, term)
}

fn eval_operand(operand: &Operand) -> Option<i64> {
    match operand {
        Operand::Lit(n) => Some(i64::from(*n)),
        Operand::Group(inner) => eval_flat(inner),
    }
}

// -- AST evaluation --

fn eval_ast(compilation: &Compilation, id: ExprId) -> Option<i64> {
    let arena = &compilation.arena;
    match arena.get_expr(id).kind {
        ExprKind::IntegerConstant(value) => Some(i64::try_from(value).unwrap()),
        ExprKind::Binary { op, left, right } => {
            let left = eval_ast(compilation, left)?;
            let right = eval_ast(compilation, right)?;
            let op = match op {
                BinaryOp::Add => '+',
                BinaryOp::Sub => '-',
                BinaryOp::Mul => '*',
                BinaryOp::Div => '/',
                BinaryOp::Rem => '%',
                other => panic!("unexpected operator {other:?}"),
            };
            apply(op, left, right)
        }
        ref other => panic!("unexpected expression {other:?}"),
    }
}

/// The expression of the single `__clauf_print` in `main`.
fn printed_expr(compilation: &Compilation) -> ExprId {
    let arena = &compilation.arena;
    let main = arena.get_decl_list(compilation.unit.declarations)[0];
    let DeclKind::Function { body, .. } = arena.get_decl(main).kind else {
        panic!("main is not a function");
    };
    let StmtKind::Block(stmts) = arena.get_stmt(body).kind else {
        panic!("body is not a block");
    };
    let StmtKind::Builtin { expr, .. } = arena.get_stmt(arena.get_stmt_list(stmts)[0]).kind else {
        panic!("first statement is not a builtin");
    };
    expr
}

// -- Statement soup for determinism --

fn snippet_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "int a;",
        "int b, c;",
        "a = b;",
        "__clauf_print a + 1;",
        "{ int d; }",
        "d;",
        "__clauf_assert c || a;",
        "b = c ? a : 0x10;",
        "int f();",
        "1 +",
    ])
}

proptest! {
    #[test]
    fn arithmetic_follows_standard_precedence(expr in flat_strategy()) {
        let text = render(&expr);
        let source = SourceFile::new("prop.c", format!("int main() {{ __clauf_print {text}; }}"));
        let compilation = compile(&source).unwrap();
        prop_assert_eq!(eval_ast(&compilation, printed_expr(&compilation)), eval_flat(&expr));
    }

    #[test]
    fn compiling_twice_is_identical(snippets in prop::collection::vec(snippet_strategy(), 0..12)) {
        let text = format!("int main() {{ {} }}", snippets.join(" "));
        let source = SourceFile::new("soup.c", text);
        match (compile(&source), compile(&source)) {
            (Ok(first), Ok(second)) => {
                prop_assert!(first.warnings.is_empty());
                prop_assert_eq!(first.dump(), second.dump());
                prop_assert_eq!(first.arena, second.arena);
            }
            (Err(first), Err(second)) => {
                prop_assert!(first.error_count() > 0);
                prop_assert_eq!(first, second);
            }
            _ => prop_assert!(false, "outcomes differ"),
        }
    }
}
