//! Lexer for the clauf C subset, built on logos with identifier interning.
//!
//! Whitespace, `//` line comments and `/* */` block comments are skipped.
//! Keywords win over identifiers of the same spelling; integer literals are
//! decimal, `0x` hexadecimal, `0b` binary or leading-`0` octal, all with
//! optional `'` digit separators.
//!
//! Lexer errors are structural: the driver reports them and does not parse.

mod lex_error;
mod parse_helpers;
mod raw_token;

use logos::Logos;

use clauf_ir::{Span, StringInterner, Token, TokenKind, TokenList};

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Tokens plus any lexer errors, in source order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LexOutput {
    /// Always ends with exactly one `Eof` token.
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Tokenize `source`, interning identifiers into `interner`.
pub fn lex(source: &str, interner: &mut StringInterner) -> LexOutput {
    let Ok(eof_pos) = u32::try_from(source.len()) else {
        let mut tokens = TokenList::new();
        tokens.push(Token::new(TokenKind::Eof, Span::point(0)));
        return LexOutput {
            tokens,
            errors: vec![LexError::new(
                Span::point(0),
                LexErrorKind::SourceTooLarge { len: source.len() },
            )],
        };
    };

    let mut output = LexOutput {
        tokens: TokenList::with_capacity(source.len() / 3 + 1),
        errors: Vec::new(),
    };
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        // In range: every offset is at most `eof_pos`.
        let span = Span::try_from_range(logos.span()).unwrap_or(Span::point(eof_pos));
        let slice = logos.slice();

        match token_result {
            Ok(raw) => {
                if let Some(kind) = convert_token(raw, slice, interner) {
                    output.tokens.push(Token::new(kind, span));
                }
            }
            Err(raw) => output.errors.push(LexError::from_raw(raw, span, slice)),
        }
    }

    output
        .tokens
        .push(Token::new(TokenKind::Eof, Span::point(eof_pos)));
    output
}

/// Convert a raw token to a `TokenKind`, interning identifiers.
///
/// Comments yield `None`.
fn convert_token(raw: RawToken, slice: &str, interner: &mut StringInterner) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::LineComment | RawToken::BlockComment => return None,

        // Literals
        RawToken::HexInt(n) | RawToken::BinInt(n) | RawToken::OctInt(n) | RawToken::DecInt(n) => {
            TokenKind::Int(n)
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        // Keywords
        RawToken::KwInt => TokenKind::KwInt,
        RawToken::KwPrint => TokenKind::KwPrint,
        RawToken::KwAssert => TokenKind::KwAssert,

        // Delimiters
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,

        // Operators
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Shl => TokenKind::Shl,
        RawToken::Shr => TokenKind::Shr,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::Question => TokenKind::Question,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Eq => TokenKind::Eq,
    };
    Some(kind)
}
