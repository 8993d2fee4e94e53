//! The clauf front end.
//!
//! [`compile`] turns a [`SourceFile`] into a [`Compilation`]: the root
//! [`TranslationUnit`] plus the arena and interner that own everything it
//! refers to. On failure the ordered diagnostic log is all that is
//! returned.
//!
//! Pipeline: lex, then (only if lexing succeeded) parse with name
//! resolution. A compilation succeeds only when the parse was structurally
//! complete and no error was reported.

pub mod commands;
mod source;

pub use source::{SourceError, SourceFile};

use std::sync::Once;

use clauf_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticSink};
use clauf_ir::dump::dump_translation_unit;
use clauf_ir::{AstArena, StringInterner, TranslationUnit};

/// Options for one compilation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompileConfig {
    pub diagnostics: DiagnosticConfig,
}

/// A successful compilation. Owns every node and symbol the unit refers to.
#[derive(Clone, Debug)]
pub struct Compilation {
    pub unit: TranslationUnit,
    pub arena: AstArena,
    pub interner: StringInterner,
    /// Non-error diagnostics reported along the way.
    pub warnings: Vec<Diagnostic>,
}

impl Compilation {
    pub fn function_count(&self) -> usize {
        self.arena.get_decl_list(self.unit.declarations).len()
    }

    /// Indented text rendering of the AST.
    pub fn dump(&self) -> String {
        dump_translation_unit(&self.arena, &self.unit, &self.interner)
    }
}

/// A failed compilation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("compilation failed with {} diagnostic(s)", .diagnostics.len())]
pub struct CompileFailure {
    /// Every kept diagnostic, in report order.
    pub diagnostics: Vec<Diagnostic>,
    /// Errors dropped by the configured error limit.
    pub suppressed: usize,
}

impl CompileFailure {
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count() + self.suppressed
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| !d.is_error()).count()
    }

    fn from_sink(sink: DiagnosticSink) -> Self {
        let suppressed = sink.suppressed_count();
        CompileFailure {
            diagnostics: sink.into_diagnostics(),
            suppressed,
        }
    }
}

/// Compile `source` with the default configuration.
pub fn compile(source: &SourceFile) -> Result<Compilation, CompileFailure> {
    compile_with_config(source, &CompileConfig::default())
}

pub fn compile_with_config(
    source: &SourceFile,
    config: &CompileConfig,
) -> Result<Compilation, CompileFailure> {
    let _span = tracing::debug_span!("compile", file = %source.name).entered();

    let mut interner = StringInterner::new();
    let mut sink = DiagnosticSink::with_config(config.diagnostics.clone());

    let lexed = clauf_lexer::lex(&source.text, &mut interner);
    tracing::debug!(tokens = lexed.tokens.len(), errors = lexed.errors.len(), "lexed");
    if lexed.has_errors() {
        for error in &lexed.errors {
            sink.report(error.to_diagnostic());
        }
        return Err(CompileFailure::from_sink(sink));
    }

    let output = clauf_parse::parse(&lexed.tokens, &interner, &mut sink);
    tracing::debug!(
        complete = output.unit.is_some(),
        errors = sink.error_count(),
        "parsed"
    );
    match output.unit {
        Some(unit) if !sink.has_errors() => Ok(Compilation {
            unit,
            arena: output.arena,
            interner,
            warnings: sink.into_diagnostics(),
        }),
        _ => Err(CompileFailure::from_sink(sink)),
    }
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber if `CLAUF_LOG` or `RUST_LOG` is set.
///
/// `CLAUF_LOG` takes precedence and uses the same filter syntax, e.g.
/// `CLAUF_LOG=clauf_parse=trace`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if let Ok(directives) = std::env::var("CLAUF_LOG") {
            EnvFilter::new(directives)
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
