//! Token cursor for navigating the token stream.

use clauf_ir::{Span, Token, TokenKind, TokenList};

use crate::ParseError;

/// Cursor over a [`TokenList`].
///
/// The position is always valid: the lexer terminates every list with a
/// single `Eof`, and [`Cursor::advance`] never moves past it.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

static EOF: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    /// Get the current token.
    ///
    /// An empty list reads as a lone `Eof`.
    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token matches `kind`.
    ///
    /// Payload-carrying kinds compare by discriminant only, so
    /// `check(&TokenKind::Int(0))` matches any integer literal.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current_kind()) == std::mem::discriminant(kind)
    }

    /// Consume the current token and return it. Stays put on `Eof`.
    pub fn advance(&mut self) -> &Token {
        let pos = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.tokens.get(pos).unwrap_or(&EOF)
    }

    /// Expect and consume a token of the given kind.
    #[inline]
    pub fn expect(&mut self, kind: &TokenKind) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind.display_name()))
        }
    }

    #[cold]
    #[inline(never)]
    pub fn make_expect_error(&self, expected: &'static str) -> ParseError {
        ParseError::unexpected_token(expected, self.current_kind(), self.current_span())
    }
}
