//! Recursive descent parser for the clauf C subset.
//!
//! Produces a flat AST in an [`AstArena`]. Identifiers are resolved against
//! a flat per-function [`Scope`] while parsing.
//!
//! Two kinds of failure:
//! - structural errors (`ParseError`) stop the parse; [`parse`] reports
//!   them into the sink and returns no translation unit
//! - name resolution and unsupported-construct errors are reported into the
//!   sink and parsing continues, so later constructs still get checked

mod cursor;
mod error;
mod grammar;
mod scope;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind};
pub use grammar::{Declarator, DeclaratorShape};
pub use scope::Scope;

use clauf_diagnostic::DiagnosticSink;
use clauf_ir::{
    AstArena, BuiltinKind, Span, StringInterner, Token, TokenKind, TokenList, TranslationUnit,
    TypeId,
};

/// Result of parsing one translation unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    /// `None` when a structural error stopped the parse.
    pub unit: Option<TranslationUnit>,
    /// Every node allocated, including those of a partial parse.
    pub arena: AstArena,
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: AstArena,
    scope: Scope,
    interner: &'a StringInterner,
    sink: &'a mut DiagnosticSink,
    /// The one `int` type node shared by every expression.
    int_type: TypeId,
}

impl<'a> Parser<'a> {
    pub fn new(
        tokens: &'a TokenList,
        interner: &'a StringInterner,
        sink: &'a mut DiagnosticSink,
    ) -> Self {
        let source_len = tokens.as_slice().last().map_or(0, |t| t.span.to_range().end);
        let mut arena = AstArena::with_capacity(source_len);
        let int_type = arena.builtin_type(BuiltinKind::Int);
        Parser {
            cursor: Cursor::new(tokens),
            arena,
            scope: Scope::new(),
            interner,
            sink,
            int_type,
        }
    }

    /// Parse a whole translation unit, consuming the parser.
    pub fn parse_translation_unit(mut self) -> ParseOutput {
        let unit = match self.parse_unit() {
            Ok(unit) => Some(unit),
            Err(err) => {
                tracing::debug!(code = %err.code(), span = %err.span, "structural parse error");
                self.sink.report(err.to_diagnostic());
                None
            }
        };
        ParseOutput {
            unit,
            arena: self.arena,
        }
    }

    // Cursor delegation

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &Token {
        self.cursor.advance()
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind) -> Result<&Token, ParseError> {
        self.cursor.expect(kind)
    }
}

/// Parse `tokens` into a translation unit.
///
/// Diagnostics go to `sink`. A `Some` unit with `sink.has_errors()` set is
/// a structurally complete parse that still failed name resolution.
pub fn parse(
    tokens: &TokenList,
    interner: &StringInterner,
    sink: &mut DiagnosticSink,
) -> ParseOutput {
    Parser::new(tokens, interner, sink).parse_translation_unit()
}
