//! clauf IR - syntax tree and supporting types
//!
//! This crate holds the data every other front-end crate shares:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - The AST node model (types, expressions, statements, declarations)
//! - `AstArena`, the single owner of every node of one compilation
//!
//! # Design
//!
//! - **Intern identifiers**: `&str` becomes `Name(u32)`
//! - **Flatten the tree**: children are `ExprId`/`StmtId`/`DeclId` indices, never `Box`
//! - **Non-owning references**: `Identifier` points at its declaration by `DeclId`

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
pub mod dump;
mod ids;
mod interner;
mod name;
mod span;
mod token;
mod traits;
pub mod visitor;

pub use arena::AstArena;
pub use ast::{
    AssignOp, BinaryOp, BuiltinKind, BuiltinStmtKind, Decl, DeclKind, Expr, ExprKind,
    SequencedOp, Stmt, StmtKind, TranslationUnit, Type, UnaryOp,
};
pub use ids::{DeclId, DeclRange, ExprId, StmtId, StmtRange, TypeId};
pub use interner::{InternError, StringInterner, StringLookup};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use traits::{Named, Spanned};
