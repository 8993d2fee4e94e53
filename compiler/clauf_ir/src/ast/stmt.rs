//! Statement nodes.

use std::fmt;

use crate::{DeclRange, ExprId, Span, Spanned, StmtRange};

/// Builtin statements recognised by keyword.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinStmtKind {
    /// `__clauf_print expr;` evaluates and displays the value.
    Print,
    /// `__clauf_assert expr;` evaluates and fails at runtime on zero.
    Assert,
}

impl BuiltinStmtKind {
    /// Keyword spelling.
    pub const fn keyword(self) -> &'static str {
        match self {
            BuiltinStmtKind::Print => "__clauf_print",
            BuiltinStmtKind::Assert => "__clauf_assert",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `expr;`
    Expr(ExprId),
    /// `__clauf_print expr;` or `__clauf_assert expr;`
    Builtin { kind: BuiltinStmtKind, expr: ExprId },
    /// `int a, b;` with declarations in source order.
    Decl(DeclRange),
    /// `{ ... }` with statements in source order.
    Block(StmtRange),
}
