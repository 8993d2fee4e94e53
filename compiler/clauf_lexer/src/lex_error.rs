//! Lexer error types.

use clauf_diagnostic::{Diagnostic, ErrorCode};
use clauf_ir::Span;

/// Error type produced inside the logos state machine.
///
/// `Default` is what logos reports for input no token matches.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum RawLexError {
    #[default]
    InvalidCharacter,
    UnterminatedComment,
    IntegerOverflow,
}

/// A lexer error with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What went wrong while lexing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// `/*` without a matching `*/`.
    UnterminatedComment,
    /// A character no token starts with.
    InvalidCharacter(char),
    /// Integer literal value does not fit in `u64`.
    IntegerOverflow,
    /// The buffer is longer than `u32::MAX` bytes.
    SourceTooLarge { len: usize },
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }

    /// Build the [`LexError`] for a logos error at `span`, matched text `slice`.
    pub(crate) fn from_raw(raw: RawLexError, span: Span, slice: &str) -> Self {
        let kind = match raw {
            RawLexError::InvalidCharacter => {
                LexErrorKind::InvalidCharacter(slice.chars().next().unwrap_or('\u{FFFD}'))
            }
            RawLexError::UnterminatedComment => LexErrorKind::UnterminatedComment,
            RawLexError::IntegerOverflow => LexErrorKind::IntegerOverflow,
        };
        LexError { span, kind }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match &self.kind {
            LexErrorKind::UnterminatedComment => Diagnostic::error(ErrorCode::E0001)
                .with_message("unterminated block comment")
                .with_label(Span::new(self.span.start, self.span.start + 2), "comment starts here")
                .with_note("block comments end with `*/` and do not nest"),
            LexErrorKind::InvalidCharacter(c) => Diagnostic::error(ErrorCode::E0002)
                .with_message(format!("invalid character {c:?} in source"))
                .with_label(self.span, "not valid here"),
            LexErrorKind::IntegerOverflow => Diagnostic::error(ErrorCode::E0003)
                .with_message("integer literal is too large")
                .with_label(self.span, "does not fit in 64 bits"),
            LexErrorKind::SourceTooLarge { len } => Diagnostic::error(ErrorCode::E0004)
                .with_message(format!(
                    "source is {len} bytes, larger than the supported {} bytes",
                    u32::MAX
                ))
                .with_label(self.span, "input starts here"),
        }
    }
}
