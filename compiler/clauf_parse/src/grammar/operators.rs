//! Operator matching helpers for the left-associative binary levels.

use clauf_ir::{BinaryOp, TokenKind, UnaryOp};

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(UnaryOp::Plus),
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            TokenKind::Bang => Some(UnaryOp::LogicalNot),
            _ => None,
        }
    }

    /// `||` lexes as its own token and never reaches this level.
    pub(crate) fn match_bitwise_or_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Pipe => Some(BinaryOp::BitOr),
            _ => None,
        }
    }

    pub(crate) fn match_bitwise_xor_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Caret => Some(BinaryOp::BitXor),
            _ => None,
        }
    }

    pub(crate) fn match_bitwise_and_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Amp => Some(BinaryOp::BitAnd),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Rem),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_shift_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Shl => Some(BinaryOp::Shl),
            TokenKind::Shr => Some(BinaryOp::Shr),
            _ => None,
        }
    }

    /// `<<` and `>>` are single tokens, so a `Lt` here is never half of a shift.
    pub(crate) fn match_relational_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            _ => None,
        }
    }

    pub(crate) fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            _ => None,
        }
    }
}
