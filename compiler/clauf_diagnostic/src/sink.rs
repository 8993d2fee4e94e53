//! Ordered diagnostic log with a sticky errored flag.
//!
//! Diagnostics are kept in report order. Reporting any error-severity
//! diagnostic sets the errored flag, and nothing clears it again.

use crate::{Diagnostic, Severity};

/// Configuration for diagnostic collection.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept in the log (0 = unlimited).
    ///
    /// Errors past the limit are counted and still set the errored flag,
    /// but are not stored.
    pub error_limit: usize,
}

impl DiagnosticConfig {
    pub fn with_error_limit(error_limit: usize) -> Self {
        DiagnosticConfig { error_limit }
    }
}

/// Collects diagnostics for one compilation.
///
/// # Example
///
/// ```text
/// let mut sink = DiagnosticSink::new();
/// sink.report(unknown_identifier(span, "y"));
/// assert!(sink.has_errors());
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
    errored: bool,
    error_count: usize,
    warning_count: usize,
    suppressed: usize,
    config: DiagnosticConfig,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticSink {
            config,
            ..Self::default()
        }
    }

    /// Append `diagnostic` to the log.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => {
                self.errored = true;
                self.error_count += 1;
                if self.config.error_limit > 0 && self.error_count > self.config.error_limit {
                    self.suppressed += 1;
                    return;
                }
            }
            Severity::Warning => self.warning_count += 1,
            Severity::Note => {}
        }
        self.diagnostics.push(diagnostic);
    }

    /// True once any error was reported.
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.errored
    }

    /// Errors reported, including any past the error limit.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Errors dropped because of the error limit.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the sink, returning the log in report order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
