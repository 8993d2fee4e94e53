//! Diagnostic emitters.
//!
//! An emitter renders [`Diagnostic`]s to some output. The front end ships
//! a human-readable [`TerminalEmitter`].

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for rendering diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a closing summary line of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}
