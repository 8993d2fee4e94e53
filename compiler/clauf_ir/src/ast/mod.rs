//! AST node model.
//!
//! The node set is closed: each family is one `enum` with a variant per
//! node kind, and nodes refer to children through arena handles.
//!
//! # Module Structure
//!
//! - `ty`: Type nodes (`int`, function types)
//! - `operators`: Unary, binary, sequenced and assignment operators
//! - `expr`: Expression nodes
//! - `stmt`: Statement nodes
//! - `decl`: Declarations and the translation unit root

mod decl;
mod expr;
mod operators;
mod stmt;
mod ty;

pub use decl::{Decl, DeclKind, TranslationUnit};
pub use expr::{Expr, ExprKind};
pub use operators::{AssignOp, BinaryOp, SequencedOp, UnaryOp};
pub use stmt::{BuiltinStmtKind, Stmt, StmtKind};
pub use ty::{BuiltinKind, Type};

#[cfg(test)]
mod tests;
