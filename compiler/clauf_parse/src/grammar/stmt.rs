//! Statements and local declarations.

use clauf_diagnostic::{
    duplicate_local_declaration, function_returning_function, unsupported_function_declaration,
};
use clauf_ir::{
    BuiltinStmtKind, Decl, DeclId, DeclKind, Spanned, Stmt, StmtId, StmtKind, TokenKind, TypeId,
};
use clauf_stack::ensure_sufficient_stack;

use super::{Declarator, DeclaratorShape};
use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse `{ stmt* }`.
    pub(crate) fn parse_block(&mut self) -> Result<StmtId, ParseError> {
        let start = self
            .expect(&TokenKind::LBrace)
            .map_err(|e| e.with_context(ErrorContext::Block))?
            .span;

        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            stmts.push(self.parse_stmt()?);
        }
        self.expect(&TokenKind::RBrace)
            .map_err(|e| e.with_context(ErrorContext::Block))?;

        let span = start.merge(self.previous_span());
        let range = self.arena.alloc_stmt_list(stmts);
        Ok(self.arena.alloc_stmt(Stmt::new(StmtKind::Block(range), span)))
    }

    /// Alternatives in order: block, builtin, declaration, expression.
    fn parse_stmt(&mut self) -> Result<StmtId, ParseError> {
        tracing::trace!(token = ?self.current_kind(), "statement");
        ensure_sufficient_stack(|| match self.current_kind() {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::KwPrint => self.parse_builtin_stmt(BuiltinStmtKind::Print),
            TokenKind::KwAssert => self.parse_builtin_stmt(BuiltinStmtKind::Assert),
            kind if kind.is_type_specifier() => self.parse_decl_stmt(),
            _ => self.parse_expr_stmt(),
        })
    }

    /// Parse `__clauf_print expr ;` or `__clauf_assert expr ;`.
    fn parse_builtin_stmt(&mut self, kind: BuiltinStmtKind) -> Result<StmtId, ParseError> {
        let start = self.advance().span;
        let expr = self
            .parse_expr()
            .map_err(|e| e.with_context(ErrorContext::BuiltinStmt))?;
        self.expect(&TokenKind::Semicolon)
            .map_err(|e| e.with_context(ErrorContext::BuiltinStmt))?;
        let span = start.merge(self.previous_span());
        Ok(self.arena.alloc_stmt(Stmt::new(StmtKind::Builtin { kind, expr }, span)))
    }

    fn parse_expr_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.current_span();
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::Semicolon)
            .map_err(|e| e.with_context(ErrorContext::ExprStmt))?;
        let span = start.merge(self.previous_span());
        Ok(self.arena.alloc_stmt(Stmt::new(StmtKind::Expr(expr), span)))
    }

    /// Parse `int declarator (, declarator)* ;`.
    fn parse_decl_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.current_span();
        let ty = self.parse_type_specifier()?;

        let mut decls = Vec::new();
        loop {
            let declarator = self
                .parse_declarator()
                .map_err(|e| e.with_context(ErrorContext::Declaration))?;
            if let Some(decl) = self.declare_local(ty, &declarator) {
                decls.push(decl);
            }
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        self.expect(&TokenKind::Semicolon)
            .map_err(|e| e.with_context(ErrorContext::Declaration))?;

        let span = start.merge(self.previous_span());
        let range = self.arena.alloc_decl_list(decls);
        Ok(self.arena.alloc_stmt(Stmt::new(StmtKind::Decl(range), span)))
    }

    /// The type at the start of a declaration or definition.
    pub(crate) fn parse_type_specifier(&mut self) -> Result<TypeId, ParseError> {
        if self.current_kind().is_type_specifier() {
            self.advance();
            Ok(self.int_type)
        } else {
            Err(self.cursor.make_expect_error("type specifier"))
        }
    }

    /// Create a local variable for `declarator` and bind it in the scope.
    ///
    /// Function declarators are reported and produce no declaration.
    fn declare_local(&mut self, ty: TypeId, declarator: &Declarator) -> Option<DeclId> {
        let name = declarator.name;
        match declarator.shape() {
            DeclaratorShape::Variable => {
                let span = declarator.name_span;
                let decl = self
                    .arena
                    .alloc_decl(Decl::new(name, DeclKind::Variable { ty }, span));
                if let Some(previous) = self.scope.insert_or_shadow(name, decl) {
                    let previous_span = self.arena.get_decl(previous).span();
                    self.sink.report(duplicate_local_declaration(
                        span,
                        previous_span,
                        self.interner.lookup(name),
                    ));
                }
                Some(decl)
            }
            DeclaratorShape::Function => {
                self.sink.report(unsupported_function_declaration(
                    declarator.span,
                    self.interner.lookup(name),
                ));
                None
            }
            DeclaratorShape::FunctionReturningFunction => {
                self.sink.report(function_returning_function(
                    declarator.span,
                    self.interner.lookup(name),
                ));
                None
            }
        }
    }
}
