//! Declarations and the translation unit root.

use std::fmt;

use crate::{DeclRange, Name, Named, Span, Spanned, StmtId, TypeId};

/// A named declaration.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Decl {
    pub name: Name,
    pub kind: DeclKind,
    /// Span of the declarator naming this declaration.
    pub span: Span,
}

impl Decl {
    pub fn new(name: Name, kind: DeclKind, span: Span) -> Self {
        Decl { name, kind, span }
    }

    /// Declared type: the variable type, or the function type.
    pub fn ty(&self) -> TypeId {
        match self.kind {
            DeclKind::Variable { ty } | DeclKind::Function { ty, .. } => ty,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, DeclKind::Function { .. })
    }
}

impl fmt::Debug for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {:?}", self.kind, self.name, self.span)
    }
}

impl Spanned for Decl {
    fn span(&self) -> Span {
        self.span
    }
}

impl Named for Decl {
    fn name(&self) -> Name {
        self.name
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    /// Local variable of the declaration's base type.
    Variable { ty: TypeId },
    /// Function definition; `ty` is a `Type::Function`, `body` a block statement.
    Function { ty: TypeId, body: StmtId },
}

/// Root of a parsed file: function definitions in source order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TranslationUnit {
    pub declarations: DeclRange,
}
