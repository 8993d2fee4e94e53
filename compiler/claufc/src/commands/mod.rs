//! Command handlers for the `clauf` CLI.
//!
//! Each handler returns the process exit code; `main` only dispatches.
//! Shared flag parsing and diagnostic rendering live here.

mod check;
mod debug;

pub use check::check_file;
pub use debug::{describe_token, lex_file, parse_file};

use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use clauf_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use clauf_diagnostic::{errors_suppressed, DiagnosticConfig};

use crate::{CompileConfig, CompileFailure, SourceFile};

/// Flags shared by the file commands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub color: ColorMode,
    /// Maximum errors shown (0 = unlimited).
    pub error_limit: usize,
}

impl CliOptions {
    pub fn compile_config(&self) -> CompileConfig {
        CompileConfig {
            diagnostics: DiagnosticConfig::with_error_limit(self.error_limit),
        }
    }
}

/// Split `args` (everything after the command name) into the file path and
/// flags. Flags may appear before or after the path.
pub fn parse_file_args(args: &[String]) -> Result<(String, CliOptions), String> {
    let mut path = None;
    let mut options = CliOptions::default();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::from_flag(value)
                .ok_or_else(|| format!("invalid value for --color: '{value}'"))?;
        } else if let Some(value) = arg.strip_prefix("--error-limit=") {
            options.error_limit = value
                .parse()
                .map_err(|_| format!("invalid value for --error-limit: '{value}'"))?;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok((path, options))
}

/// Load `path`, printing the error and returning `None` on failure.
fn read_source(path: &str) -> Option<SourceFile> {
    match SourceFile::load(path) {
        Ok(source) => Some(source),
        Err(e) => {
            eprintln!("error: {e}");
            None
        }
    }
}

/// Render a failed compilation to stderr with source snippets.
fn report_failure(source: &SourceFile, failure: &CompileFailure, options: &CliOptions) -> ExitCode {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(options.color, is_tty)
        .with_source(source.name.as_str(), source.text.as_str());
    render_failure(&mut emitter, failure);
    ExitCode::FAILURE
}

/// Emit every kept diagnostic, a note for any the error limit dropped, and
/// the summary line.
pub fn render_failure<W: Write>(emitter: &mut TerminalEmitter<W>, failure: &CompileFailure) {
    emitter.emit_all(&failure.diagnostics);
    if failure.suppressed > 0 {
        emitter.emit(&errors_suppressed(failure.suppressed));
    }
    emitter.emit_summary(failure.error_count(), failure.warning_count());
    emitter.flush();
}
