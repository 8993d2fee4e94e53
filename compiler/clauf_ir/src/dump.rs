//! Indented text rendering of a translation unit.
//!
//! One node per line, children indented by two spaces, in source order.
//! The output is deterministic for a given arena, so two compilations of
//! the same input dump identically.

use std::fmt::Write;

use clauf_stack::ensure_sufficient_stack;

use super::ast::{DeclKind, ExprKind, StmtKind, TranslationUnit, Type};
use super::{AstArena, DeclId, ExprId, Named, StmtId, StringLookup, TypeId};

/// Render `unit` as an indented tree.
pub fn dump_translation_unit(
    arena: &AstArena,
    unit: &TranslationUnit,
    names: &impl StringLookup,
) -> String {
    let mut dumper = Dumper {
        arena,
        names,
        out: String::new(),
        depth: 0,
    };
    dumper.line(format_args!("TranslationUnit"));
    dumper.nested(|d| {
        for &decl in arena.get_decl_list(unit.declarations) {
            d.decl(decl);
        }
    });
    dumper.out
}

/// Render a type as C-like text: `int`, `int()`.
pub fn type_to_string(arena: &AstArena, ty: TypeId) -> String {
    match arena.get_type(ty) {
        Type::Builtin(kind) => kind.as_str().to_owned(),
        Type::Function { return_type } => format!("{}()", type_to_string(arena, *return_type)),
    }
}

struct Dumper<'a, L> {
    arena: &'a AstArena,
    names: &'a L,
    out: String,
    depth: usize,
}

impl<L: StringLookup> Dumper<'_, L> {
    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        // Writing into a String cannot fail.
        let _ = self.out.write_fmt(args);
        self.out.push('\n');
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    fn decl(&mut self, id: DeclId) {
        let (arena, names) = (self.arena, self.names);
        let decl = arena.get_decl(id);
        let name = names.lookup(decl.name());
        let ty = type_to_string(arena, decl.ty());
        match decl.kind {
            DeclKind::Variable { .. } => {
                self.line(format_args!("VariableDecl #{} {name}: {ty}", id.raw()));
            }
            DeclKind::Function { body, .. } => {
                self.line(format_args!("FunctionDecl #{} {name}: {ty}", id.raw()));
                self.nested(|d| d.stmt(body));
            }
        }
    }

    fn stmt(&mut self, id: StmtId) {
        let arena = self.arena;
        ensure_sufficient_stack(|| match &arena.get_stmt(id).kind {
            StmtKind::Expr(expr) => {
                self.line(format_args!("ExprStmt"));
                self.nested(|d| d.expr(*expr));
            }
            StmtKind::Builtin { kind, expr } => {
                self.line(format_args!("BuiltinStmt {}", kind.keyword()));
                self.nested(|d| d.expr(*expr));
            }
            StmtKind::Decl(decls) => {
                self.line(format_args!("DeclStmt"));
                let decls = *decls;
                self.nested(|d| {
                    for &decl in arena.get_decl_list(decls) {
                        d.decl(decl);
                    }
                });
            }
            StmtKind::Block(stmts) => {
                self.line(format_args!("BlockStmt"));
                let stmts = *stmts;
                self.nested(|d| {
                    for &stmt in arena.get_stmt_list(stmts) {
                        d.stmt(stmt);
                    }
                });
            }
        });
    }

    fn expr(&mut self, id: ExprId) {
        let (arena, names) = (self.arena, self.names);
        ensure_sufficient_stack(|| match &arena.get_expr(id).kind {
            ExprKind::IntegerConstant(value) => {
                self.line(format_args!("IntegerConstant {value}"));
            }
            ExprKind::Identifier { name, declaration } => {
                let name = names.lookup(*name);
                match declaration {
                    Some(decl) => self.line(format_args!("Identifier {name} -> #{}", decl.raw())),
                    None => self.line(format_args!("Identifier {name} -> <unresolved>")),
                }
            }
            ExprKind::Unary { op, operand } => {
                self.line(format_args!("Unary {}", op.as_symbol()));
                let operand = *operand;
                self.nested(|d| d.expr(operand));
            }
            ExprKind::Binary { op, left, right } => {
                self.line(format_args!("Binary {}", op.as_symbol()));
                let (left, right) = (*left, *right);
                self.nested(|d| {
                    d.expr(left);
                    d.expr(right);
                });
            }
            ExprKind::SequencedBinary { op, left, right } => {
                self.line(format_args!("SequencedBinary {}", op.as_symbol()));
                let (left, right) = (*left, *right);
                self.nested(|d| {
                    d.expr(left);
                    d.expr(right);
                });
            }
            ExprKind::Conditional {
                cond,
                if_true,
                if_false,
            } => {
                self.line(format_args!("Conditional"));
                let (cond, if_true, if_false) = (*cond, *if_true, *if_false);
                self.nested(|d| {
                    d.expr(cond);
                    d.expr(if_true);
                    d.expr(if_false);
                });
            }
            ExprKind::Assignment { op, target, value } => {
                self.line(format_args!("Assignment {}", op.as_symbol()));
                let (target, value) = (*target, *value);
                self.nested(|d| {
                    d.expr(target);
                    d.expr(value);
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BuiltinKind, Decl, Expr, SequencedOp, Stmt};
    use crate::{Span, StringInterner};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dump_function_with_locals() {
        let mut interner = StringInterner::new();
        let main = interner.intern("main");
        let x = interner.intern("x");
        let y = interner.intern("y");

        let mut arena = AstArena::new();
        let int = arena.builtin_type(BuiltinKind::Int);
        let x_decl = arena.alloc_decl(Decl::new(x, DeclKind::Variable { ty: int }, Span::new(17, 18)));
        let decls = arena.alloc_decl_list([x_decl]);
        let decl_stmt = arena.alloc_stmt(Stmt::new(StmtKind::Decl(decls), Span::new(13, 19)));

        let x_ref = arena.alloc_expr(Expr::new(
            ExprKind::Identifier {
                name: x,
                declaration: Some(x_decl),
            },
            int,
            Span::new(20, 21),
        ));
        let y_ref = arena.alloc_expr(Expr::new(
            ExprKind::Identifier {
                name: y,
                declaration: None,
            },
            int,
            Span::new(25, 26),
        ));
        let or = arena.alloc_expr(Expr::new(
            ExprKind::SequencedBinary {
                op: SequencedOp::LogicalOr,
                left: x_ref,
                right: y_ref,
            },
            int,
            Span::new(20, 26),
        ));
        let expr_stmt = arena.alloc_stmt(Stmt::new(StmtKind::Expr(or), Span::new(20, 27)));
        let stmts = arena.alloc_stmt_list([decl_stmt, expr_stmt]);
        let body = arena.alloc_stmt(Stmt::new(StmtKind::Block(stmts), Span::new(11, 29)));
        let fn_ty = arena.function_type(int);
        let main_decl = arena.alloc_decl(Decl::new(
            main,
            DeclKind::Function { ty: fn_ty, body },
            Span::new(4, 10),
        ));
        let declarations = arena.alloc_decl_list([main_decl]);
        let unit = TranslationUnit { declarations };

        let expected = "\
TranslationUnit
  FunctionDecl #1 main: int()
    BlockStmt
      DeclStmt
        VariableDecl #0 x: int
      ExprStmt
        SequencedBinary ||
          Identifier x -> #0
          Identifier y -> <unresolved>
";
        assert_eq!(dump_translation_unit(&arena, &unit, &interner), expected);
    }
}
