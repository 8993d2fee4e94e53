//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! identifier interning and final token conversion.

use logos::{Lexer, Logos};

use crate::lex_error::RawLexError;
use crate::parse_helpers::parse_int_skip_separators;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = RawLexError)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    // Keywords
    #[token("int")]
    KwInt,
    #[token("__clauf_print")]
    KwPrint,
    #[token("__clauf_assert")]
    KwAssert,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("~")]
    Tilde,
    #[token("!")]
    Bang,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("&")]
    Amp,
    #[token("^")]
    Caret,
    #[token("|")]
    Pipe,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("=")]
    Eq,

    // Integer literals. A leading `0` selects the base; a lone `0` is octal.
    #[regex(r"0[xX][0-9a-fA-F]('?[0-9a-fA-F])*", |lex| int_literal(lex, 2, 16))]
    HexInt(u64),
    #[regex(r"0[bB][01]('?[01])*", |lex| int_literal(lex, 2, 2))]
    BinInt(u64),
    #[regex(r"0('?[0-7])*", |lex| int_literal(lex, 1, 8))]
    OctInt(u64),
    #[regex(r"[1-9]('?[0-9])*", |lex| int_literal(lex, 0, 10))]
    DecInt(u64),

    #[regex(r"[\p{XID_Start}_]\p{XID_Continue}*")]
    Ident,
}

/// Convert the matched literal after skipping its `prefix_len`-byte base prefix.
fn int_literal(lex: &Lexer<'_, RawToken>, prefix_len: usize, radix: u32) -> Result<u64, RawLexError> {
    let digits = lex.slice().get(prefix_len..).unwrap_or("");
    if digits.is_empty() {
        // Lone `0`.
        return Ok(0);
    }
    parse_int_skip_separators(digits, radix).ok_or(RawLexError::IntegerOverflow)
}

/// Consume a `/* ... */` comment; the opening `/*` is already matched.
///
/// Comments do not nest. Without a closing `*/` the rest of the input is
/// consumed and reported as one unterminated comment.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> Result<(), RawLexError> {
    let rest = lex.remainder();
    if let Some(end) = memchr::memmem::find(rest.as_bytes(), b"*/") {
        lex.bump(end + 2);
        Ok(())
    } else {
        lex.bump(rest.len());
        Err(RawLexError::UnterminatedComment)
    }
}
