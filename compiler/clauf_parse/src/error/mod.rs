//! Structural parse errors.
//!
//! A `ParseError` aborts the production that raised it and is propagated
//! with `?` up to [`crate::parse`], which reports it into the sink. Name
//! resolution and unsupported-construct errors are not `ParseError`s; they
//! are reported directly and parsing carries on.

mod context;


pub use context::ErrorContext;

use clauf_diagnostic::{expected_expression, unexpected_token, Diagnostic, ErrorCode};
use clauf_ir::{Span, TokenKind};

/// The grammar mismatch behind a [`ParseError`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A specific token (or token class) was required.
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
    },
    /// An expression was required but `found` cannot start one.
    ExpectedExpression { found: TokenKind },
}

/// A structural parse error.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    /// Innermost construct being parsed, if known.
    pub context: Option<ErrorContext>,
}

impl ParseError {
    pub fn unexpected_token(expected: &'static str, found: TokenKind, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken { expected, found },
            span,
            context: None,
        }
    }

    pub fn expected_expression(found: TokenKind, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::ExpectedExpression { found },
            span,
            context: None,
        }
    }

    /// Attach a context unless an inner production already did.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        if self.context.is_none() {
            self.context = Some(context);
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                unexpected_token(self.span, expected, found.display_name())
            }
            ParseErrorKind::ExpectedExpression { found } => {
                expected_expression(self.span, found.display_name())
            }
        };
        match self.context {
            Some(context) => diag.with_note(format!("while parsing {}", context.description())),
            None => diag,
        }
    }
}
