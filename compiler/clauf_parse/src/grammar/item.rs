//! File-scope items: function definitions and the translation unit.

use clauf_diagnostic::{function_returning_function, not_a_function_definition};
use clauf_ir::{Decl, DeclId, DeclKind, TranslationUnit};

use super::DeclaratorShape;
use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse function definitions until end of input.
    pub(crate) fn parse_unit(&mut self) -> Result<TranslationUnit, ParseError> {
        let mut declarations = Vec::new();
        while !self.is_at_end() {
            if let Some(decl) = self.parse_function_definition()? {
                declarations.push(decl);
            }
        }
        tracing::debug!(functions = declarations.len(), "translation unit parsed");
        Ok(TranslationUnit {
            declarations: self.arena.alloc_decl_list(declarations),
        })
    }

    /// Parse `int declarator { ... }`.
    ///
    /// The declarator must be exactly `name()`. Any other shape is reported,
    /// the body is still parsed for its own diagnostics, and no declaration
    /// is produced.
    fn parse_function_definition(&mut self) -> Result<Option<DeclId>, ParseError> {
        let start = self.current_span();
        let return_type = self
            .parse_type_specifier()
            .map_err(|e| e.with_context(ErrorContext::FunctionDef))?;
        let declarator = self
            .parse_declarator()
            .map_err(|e| e.with_context(ErrorContext::FunctionDef))?;

        let name = declarator.name;
        let shape = declarator.shape();
        tracing::debug!(name = self.interner.lookup(name), ?shape, "function definition");
        match shape {
            DeclaratorShape::Function => {}
            DeclaratorShape::Variable => self.sink.report(not_a_function_definition(
                declarator.span,
                self.interner.lookup(name),
            )),
            DeclaratorShape::FunctionReturningFunction => {
                self.sink.report(function_returning_function(
                    declarator.span,
                    self.interner.lookup(name),
                ));
            }
        }

        // Bodies only see their own locals.
        self.scope.reset();
        let body = self
            .parse_block()
            .map_err(|e| e.with_context(ErrorContext::FunctionDef))?;

        if shape != DeclaratorShape::Function {
            return Ok(None);
        }
        let span = start.merge(self.previous_span());
        let ty = self.arena.function_type(return_type);
        Ok(Some(self.arena.alloc_decl(Decl::new(
            name,
            DeclKind::Function { ty, body },
            span,
        ))))
    }
}
