use std::fmt;

use clauf_ir::Span;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A labeled span with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub is_primary: bool,
}

impl Label {
    /// The main error location.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Related context, such as an earlier declaration.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A diagnostic: severity, message and the source spans it refers to.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    pub fn note(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Note)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add a primary label at the error location.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Span of the first primary label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {} {:?}: {}", marker, label.span, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        Ok(())
    }
}

/// Create an "unexpected token" diagnostic.
pub fn unexpected_token(span: Span, expected: &str, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001)
        .with_message(format!("expected {expected}, found {found}"))
        .with_label(span, format!("expected {expected}"))
}

/// Create an "expected expression" diagnostic.
pub fn expected_expression(span: Span, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message(format!("expected expression, found {found}"))
        .with_label(span, "expected expression here")
}

/// Create an "unknown identifier" diagnostic.
pub fn unknown_identifier(span: Span, name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2001)
        .with_message(format!("unknown identifier '{name}'"))
        .with_label(span, "not found in this scope")
}

/// Create a "duplicate local declaration" diagnostic pointing at both declarations.
pub fn duplicate_local_declaration(span: Span, previous: Span, name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E2002)
        .with_message(format!("duplicate local declaration '{name}'"))
        .with_label(span, "declared again here")
        .with_secondary_label(previous, format!("'{name}' first declared here"))
}

/// Create a diagnostic for `int f();` style declarations.
pub fn unsupported_function_declaration(span: Span, name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E3001)
        .with_message("unsupported: function declaration without body")
        .with_label(span, format!("'{name}' is declared as a function here"))
        .with_note("functions must be defined with a body at file scope")
}

/// Create a diagnostic for `int f()() { ... }`.
pub fn function_returning_function(span: Span, name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E3002)
        .with_message(format!("function '{name}' cannot return a function"))
        .with_label(span, "function declarator applied twice")
}

/// Create a diagnostic for a definition like `int x { ... }`.
pub fn not_a_function_definition(span: Span, name: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E3003)
        .with_message(format!("'{name}' is not declared as a function"))
        .with_label(span, "expected a function declarator such as `name()`")
        .with_note("only function definitions are allowed at file scope")
}

/// Create the note that stands in for errors dropped by the error limit.
#[cold]
pub fn errors_suppressed(count: usize) -> Diagnostic {
    let plural = if count == 1 { "" } else { "s" };
    Diagnostic::note(ErrorCode::E9001)
        .with_message(format!("{count} more error{plural} not shown"))
        .with_note("use --error-limit=0 to show every error")
}
