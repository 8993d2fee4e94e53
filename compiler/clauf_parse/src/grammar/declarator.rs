//! Declarators: the name-and-shape part of a declaration.
//!
//! ```text
//! declarator := direct ( "(" ")" )*
//! direct     := identifier | "(" declarator ")"
//! ```
//!
//! The parsed [`Declarator`] is a plain value that never enters the arena;
//! callers classify it with [`Declarator::shape`] and build the matching
//! `Decl`.

use clauf_ir::{Name, Span, TokenKind};
use clauf_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

/// A parsed declarator.
///
/// Grouping parentheses add nothing to the meaning, so only the declared
/// name and the number of `()` suffixes applied to it are kept.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Declarator {
    pub name: Name,
    pub name_span: Span,
    /// How many `()` suffixes wrap the name.
    pub function_depth: u32,
    /// From the first token of the declarator to its last `)` suffix.
    pub span: Span,
}

/// What a declarator declares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclaratorShape {
    /// A bare (possibly parenthesized) name.
    Variable,
    /// `name()`
    Function,
    /// `name()()` and deeper: a function returning a function.
    FunctionReturningFunction,
}

impl Declarator {
    pub fn shape(&self) -> DeclaratorShape {
        match self.function_depth {
            0 => DeclaratorShape::Variable,
            1 => DeclaratorShape::Function,
            _ => DeclaratorShape::FunctionReturningFunction,
        }
    }
}

impl Parser<'_> {
    pub(crate) fn parse_declarator(&mut self) -> Result<Declarator, ParseError> {
        ensure_sufficient_stack(|| self.parse_declarator_inner())
            .map_err(|e| e.with_context(ErrorContext::Declarator))
    }

    fn parse_declarator_inner(&mut self) -> Result<Declarator, ParseError> {
        let start = self.current_span();
        let mut declarator = match self.current_kind() {
            TokenKind::Ident(name) => {
                let span = self.advance().span;
                Declarator {
                    name,
                    name_span: span,
                    function_depth: 0,
                    span,
                }
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_declarator()?;
                self.expect(&TokenKind::RParen)?;
                inner
            }
            _ => return Err(self.cursor.make_expect_error("declarator")),
        };

        while self.check(&TokenKind::LParen) {
            self.advance();
            self.expect(&TokenKind::RParen)?;
            declarator.function_depth = declarator.function_depth.saturating_add(1);
            declarator.span = start.merge(self.previous_span());
        }

        Ok(declarator)
    }
}
