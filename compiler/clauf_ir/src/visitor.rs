//! AST visitor.
//!
//! The visitor may mutate its own state; the AST stays immutable.
//! Default `visit_*` methods call the matching `walk_*` function, which
//! visits children in source order. Override a `visit_*` method to act on
//! a node and call `walk_*` to keep descending.
//!
//! # Example
//!
//! ```text
//! struct CountConstants(usize);
//!
//! impl<'ast> Visitor<'ast> for CountConstants {
//!     fn visit_expr(&mut self, id: ExprId, arena: &'ast AstArena) {
//!         if let ExprKind::IntegerConstant(_) = arena.get_expr(id).kind {
//!             self.0 += 1;
//!         }
//!         walk_expr(self, id, arena);
//!     }
//! }
//! ```

use super::ast::{DeclKind, ExprKind, StmtKind, TranslationUnit};
use super::{AstArena, DeclId, ExprId, StmtId};

pub trait Visitor<'ast> {
    fn visit_translation_unit(&mut self, unit: &'ast TranslationUnit, arena: &'ast AstArena) {
        walk_translation_unit(self, unit, arena);
    }

    fn visit_decl(&mut self, id: DeclId, arena: &'ast AstArena) {
        walk_decl(self, id, arena);
    }

    fn visit_stmt(&mut self, id: StmtId, arena: &'ast AstArena) {
        walk_stmt(self, id, arena);
    }

    fn visit_expr(&mut self, id: ExprId, arena: &'ast AstArena) {
        walk_expr(self, id, arena);
    }
}

pub fn walk_translation_unit<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    unit: &'ast TranslationUnit,
    arena: &'ast AstArena,
) {
    for &decl in arena.get_decl_list(unit.declarations) {
        visitor.visit_decl(decl, arena);
    }
}

pub fn walk_decl<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: DeclId,
    arena: &'ast AstArena,
) {
    match arena.get_decl(id).kind {
        DeclKind::Variable { .. } => {}
        DeclKind::Function { body, .. } => visitor.visit_stmt(body, arena),
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: StmtId,
    arena: &'ast AstArena,
) {
    match &arena.get_stmt(id).kind {
        StmtKind::Expr(expr) | StmtKind::Builtin { expr, .. } => visitor.visit_expr(*expr, arena),
        StmtKind::Decl(decls) => {
            for &decl in arena.get_decl_list(*decls) {
                visitor.visit_decl(decl, arena);
            }
        }
        StmtKind::Block(stmts) => {
            for &stmt in arena.get_stmt_list(*stmts) {
                visitor.visit_stmt(stmt, arena);
            }
        }
    }
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    id: ExprId,
    arena: &'ast AstArena,
) {
    match &arena.get_expr(id).kind {
        ExprKind::IntegerConstant(_) | ExprKind::Identifier { .. } => {}
        ExprKind::Unary { operand, .. } => visitor.visit_expr(*operand, arena),
        ExprKind::Binary { left, right, .. } | ExprKind::SequencedBinary { left, right, .. } => {
            visitor.visit_expr(*left, arena);
            visitor.visit_expr(*right, arena);
        }
        ExprKind::Conditional {
            cond,
            if_true,
            if_false,
        } => {
            visitor.visit_expr(*cond, arena);
            visitor.visit_expr(*if_true, arena);
            visitor.visit_expr(*if_false, arena);
        }
        ExprKind::Assignment { target, value, .. } => {
            visitor.visit_expr(*target, arena);
            visitor.visit_expr(*value, arena);
        }
    }
}
