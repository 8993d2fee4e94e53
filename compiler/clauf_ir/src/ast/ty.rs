//! Type nodes.

use crate::TypeId;

/// Builtin scalar types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinKind {
    Int,
}

impl BuiltinKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            BuiltinKind::Int => "int",
        }
    }
}

/// A type node stored in the arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    /// `int`
    Builtin(BuiltinKind),
    /// Function taking no parameters and returning `return_type`.
    Function { return_type: TypeId },
}
