//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! With a source attached, labels are rendered as `path:line:col`
//! followed by the source line and an underline.

use std::io::{self, Write};

use clauf_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` flag value.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Source text the spans of emitted diagnostics point into.
struct SourceView {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceView>,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` decides coloring for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source text so labels render with line/column and a snippet.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        self.source = Some(SourceView {
            path: path.into(),
            lines: LineOffsetTable::build(&text),
            text,
        });
        self
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_label(&mut self, label: &Label) {
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };

        let Some(view) = self.source.as_ref() else {
            let marker = if label.is_primary { "-->" } else { "   " };
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
            return;
        };

        let (line, col) = view.lines.offset_to_line_col(&view.text, label.span.start);
        let text = view.lines.line_text(&view.text, line).unwrap_or("").to_owned();
        let width = underline_width(view, label.span, line, &text);
        let path = view.path.clone();
        let gutter = line.to_string().len();
        let pad = " ".repeat(gutter);

        let marker = if label.is_primary { "-->" } else { ":::" };
        let _ = writeln!(self.writer, "{pad}{marker} {path}:{line}:{col}");
        let _ = writeln!(self.writer, "{pad} |");
        let _ = writeln!(self.writer, "{line} | {text}");
        let _ = write!(self.writer, "{pad} | {}", " ".repeat(col as usize - 1));
        let mark = if label.is_primary { "^" } else { "-" };
        self.write_colored(&mark.repeat(width), color);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, color);
        }
        let _ = writeln!(self.writer);
    }
}

/// Number of characters to underline, clipped to the label's first line.
fn underline_width(view: &SourceView, span: Span, line: u32, line_text: &str) -> usize {
    let line_start = view.lines.line_start_offset(line).unwrap_or(0) as usize;
    let line_end = line_start + line_text.len();
    let start = (span.start as usize).min(line_end);
    let end = (span.end as usize).clamp(start, line_end);
    view.text
        .get(start..end)
        .map_or(0, |s| s.chars().count())
        .max(1)
}

impl TerminalEmitter<io::Stderr> {
    /// Terminal emitter writing to stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };
            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}
