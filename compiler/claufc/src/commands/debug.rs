//! Debug commands: `parse` and `lex` for inspecting front-end output.

use std::process::ExitCode;

use clauf_ir::{StringInterner, TokenKind};
use clauf_lexer::LexError;

use super::{read_source, report_failure, CliOptions};
use crate::{compile_with_config, CompileFailure};

/// Compile a file and print its AST.
pub fn parse_file(path: &str, options: &CliOptions) -> ExitCode {
    let Some(source) = read_source(path) else {
        return ExitCode::FAILURE;
    };

    match compile_with_config(&source, &options.compile_config()) {
        Ok(compilation) => {
            print!("{}", compilation.dump());
            ExitCode::SUCCESS
        }
        Err(failure) => report_failure(&source, &failure, options),
    }
}

/// Lex a file and print the token stream.
pub fn lex_file(path: &str, options: &CliOptions) -> ExitCode {
    let Some(source) = read_source(path) else {
        return ExitCode::FAILURE;
    };

    let mut interner = StringInterner::new();
    let lexed = clauf_lexer::lex(&source.text, &mut interner);

    println!("Tokens for '{path}' ({} tokens):", lexed.tokens.len());
    for token in lexed.tokens.iter() {
        println!("  {} @ {}", describe_token(token.kind, &interner), token.span);
    }

    if lexed.has_errors() {
        let failure = CompileFailure {
            diagnostics: lexed.errors.iter().map(LexError::to_diagnostic).collect(),
            suppressed: 0,
        };
        return report_failure(&source, &failure, options);
    }
    ExitCode::SUCCESS
}

/// Token text for the `lex` listing, with identifier spellings resolved.
pub fn describe_token(kind: TokenKind, interner: &StringInterner) -> String {
    match kind {
        TokenKind::Ident(name) => format!("identifier `{}`", interner.lookup(name)),
        TokenKind::Int(value) => format!("integer literal {value}"),
        other => other.display_name().to_string(),
    }
}
