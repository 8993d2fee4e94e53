//! Expression nodes.

use std::fmt;

use crate::{DeclId, ExprId, Name, Span, Spanned, TypeId};

use super::operators::{AssignOp, BinaryOp, SequencedOp, UnaryOp};

/// Expression node: kind, resolved type and source span.
///
/// `ty` is assigned at construction; every expression currently has the
/// builtin `int` type.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: TypeId,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, ty: TypeId, span: Span) -> Self {
        Expr { kind, ty, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Expression variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal, already converted from its source base.
    IntegerConstant(u64),

    /// Reference to a local declaration.
    ///
    /// `declaration` is `None` only when the name was unknown; that case is
    /// always accompanied by an error diagnostic.
    Identifier {
        name: Name,
        declaration: Option<DeclId>,
    },

    /// `op operand`
    Unary { op: UnaryOp, operand: ExprId },

    /// `left op right`, operands unsequenced.
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// `left op right`, left evaluated first.
    SequencedBinary {
        op: SequencedOp,
        left: ExprId,
        right: ExprId,
    },

    /// `cond ? if_true : if_false`
    Conditional {
        cond: ExprId,
        if_true: ExprId,
        if_false: ExprId,
    },

    /// `target = value`
    Assignment {
        op: AssignOp,
        target: ExprId,
        value: ExprId,
    },
}
