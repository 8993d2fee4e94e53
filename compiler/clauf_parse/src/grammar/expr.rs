//! Expression parsing.
//!
//! One method per precedence level, loosest first:
//!
//! ```text
//! comma        a , b            right-assoc, sequenced
//! assignment   a = b            right-assoc
//! conditional  c ? a : b        right-assoc, middle is a full expression
//! logical or   a || b           sequenced
//! logical and  a && b           sequenced
//! bitwise      |  then ^  then &
//! equality     == !=
//! relational   < <= > >=
//! shift        << >>
//! additive     + -
//! multiplicative * / %
//! unary        + - ~ !          prefix, right-assoc
//! atom         literal, identifier, ( expr )
//! ```

use clauf_diagnostic::unknown_identifier;
use clauf_ir::{
    AssignOp, BinaryOp, Expr, ExprId, ExprKind, SequencedOp, Span, Spanned, TokenKind,
};
use clauf_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, Parser};

/// Generates a left-associative binary level: `next (op next)*`.
macro_rules! binary_level {
    ($(#[$meta:meta])* $name:ident, $next:ident, $matcher:ident) => {
        $(#[$meta])*
        fn $name(&mut self) -> Result<ExprId, ParseError> {
            let mut left = self.$next()?;
            while let Some(op) = self.$matcher() {
                self.advance();
                let right = self.$next()?;
                left = self.alloc_binary(op, left, right);
            }
            Ok(left)
        }
    };
}

impl Parser<'_> {
    /// Parse a full expression, comma operator included.
    #[inline]
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_comma())
    }

    fn parse_comma(&mut self) -> Result<ExprId, ParseError> {
        let left = self.parse_assignment()?;
        if !self.check(&TokenKind::Comma) {
            return Ok(left);
        }
        self.advance();
        let right = self.parse_expr()?;
        Ok(self.alloc_sequenced(SequencedOp::Comma, left, right))
    }

    /// Parse `target = value`.
    ///
    /// The target is not checked for being assignable here.
    fn parse_assignment(&mut self) -> Result<ExprId, ParseError> {
        let target = self.parse_conditional()?;
        if !self.check(&TokenKind::Eq) {
            return Ok(target);
        }
        self.advance();
        let value = ensure_sufficient_stack(|| self.parse_assignment())?;
        let span = self.span_of(target).merge(self.span_of(value));
        Ok(self.alloc_expr(
            ExprKind::Assignment {
                op: AssignOp::None,
                target,
                value,
            },
            span,
        ))
    }

    fn parse_conditional(&mut self) -> Result<ExprId, ParseError> {
        let cond = self.parse_logical_or()?;
        if !self.check(&TokenKind::Question) {
            return Ok(cond);
        }
        self.advance();
        let if_true = self.parse_expr()?;
        self.expect(&TokenKind::Colon)
            .map_err(|e| e.with_context(ErrorContext::Conditional))?;
        let if_false = ensure_sufficient_stack(|| self.parse_conditional())?;
        let span = self.span_of(cond).merge(self.span_of(if_false));
        Ok(self.alloc_expr(
            ExprKind::Conditional {
                cond,
                if_true,
                if_false,
            },
            span,
        ))
    }

    /// Parse `||`. The right operand is only evaluated if the left is zero.
    fn parse_logical_or(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_logical_and()?;
        while self.check(&TokenKind::PipePipe) {
            self.advance();
            let right = self.parse_logical_and()?;
            left = self.alloc_sequenced(SequencedOp::LogicalOr, left, right);
        }
        Ok(left)
    }

    /// Parse `&&`. The right operand is only evaluated if the left is nonzero.
    fn parse_logical_and(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_bitwise_or()?;
        while self.check(&TokenKind::AmpAmp) {
            self.advance();
            let right = self.parse_bitwise_or()?;
            left = self.alloc_sequenced(SequencedOp::LogicalAnd, left, right);
        }
        Ok(left)
    }

    binary_level!(parse_bitwise_or, parse_bitwise_xor, match_bitwise_or_op);
    binary_level!(parse_bitwise_xor, parse_bitwise_and, match_bitwise_xor_op);
    binary_level!(parse_bitwise_and, parse_equality, match_bitwise_and_op);
    binary_level!(
        /// Parse `==` and `!=`.
        parse_equality, parse_relational, match_equality_op
    );
    binary_level!(
        /// Parse `<`, `<=`, `>` and `>=`.
        parse_relational, parse_shift, match_relational_op
    );
    binary_level!(parse_shift, parse_additive, match_shift_op);
    binary_level!(parse_additive, parse_multiplicative, match_additive_op);
    binary_level!(parse_multiplicative, parse_unary, match_multiplicative_op);

    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_atom();
        };
        let start = self.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = start.merge(self.span_of(operand));
        Ok(self.alloc_expr(ExprKind::Unary { op, operand }, span))
    }

    fn parse_atom(&mut self) -> Result<ExprId, ParseError> {
        let span = self.current_span();
        match self.current_kind() {
            TokenKind::Int(value) => {
                self.advance();
                Ok(self.alloc_expr(ExprKind::IntegerConstant(value), span))
            }
            TokenKind::Ident(name) => {
                self.advance();
                let declaration = self.scope.lookup(name);
                if declaration.is_none() {
                    self.sink
                        .report(unknown_identifier(span, self.interner.lookup(name)));
                }
                Ok(self.alloc_expr(ExprKind::Identifier { name, declaration }, span))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen)
                    .map_err(|e| e.with_context(ErrorContext::Parenthesized))?;
                Ok(inner)
            }
            found => Err(ParseError::expected_expression(found, span)),
        }
    }

    // Allocation helpers

    #[inline]
    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span()
    }

    /// Every expression is typed `int`.
    fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, self.int_type, span))
    }

    fn alloc_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.span_of(left).merge(self.span_of(right));
        self.alloc_expr(ExprKind::Binary { op, left, right }, span)
    }

    fn alloc_sequenced(&mut self, op: SequencedOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.span_of(left).merge(self.span_of(right));
        self.alloc_expr(ExprKind::SequencedBinary { op, left, right }, span)
    }
}
