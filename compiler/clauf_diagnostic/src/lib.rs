//! Diagnostic reporting for the clauf front end.
//!
//! - Error codes for searchability
//! - A message saying what went wrong
//! - A primary span saying where
//! - Optional secondary labels and notes for context
//!
//! Diagnostics are collected in a [`DiagnosticSink`]. Reporting an error
//! sets the sink's sticky errored flag; compilation succeeds only while
//! that flag is unset.

mod diagnostic;
pub mod emitter;
mod error_code;
mod sink;
pub mod span_utils;

pub use diagnostic::{
    duplicate_local_declaration, errors_suppressed, expected_expression, function_returning_function,
    not_a_function_definition, unexpected_token, unknown_identifier,
    unsupported_function_declaration, Diagnostic, Label, Severity,
};
pub use error_code::ErrorCode;
pub use sink::{DiagnosticConfig, DiagnosticSink};
