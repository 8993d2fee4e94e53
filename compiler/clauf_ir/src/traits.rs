//! Small capability traits shared by tokens and AST nodes.

use super::{Name, Span};

/// Anything with a source location.
pub trait Spanned {
    fn span(&self) -> Span;
}

/// Anything that declares a name.
pub trait Named {
    fn name(&self) -> Name;
}

impl Spanned for super::Token {
    fn span(&self) -> Span {
        self.span
    }
}
