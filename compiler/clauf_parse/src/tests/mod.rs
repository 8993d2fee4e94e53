//! Parser tests, driven through the real lexer.

mod expr;
mod item;

use clauf_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode};
use clauf_ir::dump::dump_translation_unit;
use clauf_ir::{StmtId, StmtKind, StringInterner, TranslationUnit};

use crate::{parse, ParseOutput};

struct Parsed {
    output: ParseOutput,
    interner: StringInterner,
    errored: bool,
    diagnostics: Vec<Diagnostic>,
}

fn parse_source(source: &str) -> Parsed {
    let mut interner = StringInterner::new();
    let lexed = clauf_lexer::lex(source, &mut interner);
    assert!(!lexed.has_errors(), "lexer errors: {:?}", lexed.errors);

    let mut sink = DiagnosticSink::new();
    let output = parse(&lexed.tokens, &interner, &mut sink);
    Parsed {
        output,
        interner,
        errored: sink.has_errors(),
        diagnostics: sink.into_diagnostics(),
    }
}

impl Parsed {
    fn unit(&self) -> TranslationUnit {
        let Some(unit) = self.output.unit else {
            panic!("structural parse error: {:?}", self.diagnostics);
        };
        unit
    }

    fn dump(&self) -> String {
        dump_translation_unit(&self.output.arena, &self.unit(), &self.interner)
    }

    fn codes(&self) -> Vec<ErrorCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    /// Statements of the first function's body.
    fn body_stmts(&self) -> Vec<StmtId> {
        let arena = &self.output.arena;
        let Some(&main) = arena.get_decl_list(self.unit().declarations).first() else {
            panic!("no function parsed");
        };
        let clauf_ir::DeclKind::Function { body, .. } = arena.get_decl(main).kind else {
            panic!("first declaration is not a function");
        };
        let StmtKind::Block(stmts) = arena.get_stmt(body).kind else {
            panic!("function body is not a block");
        };
        arena.get_stmt_list(stmts).to_vec()
    }
}
