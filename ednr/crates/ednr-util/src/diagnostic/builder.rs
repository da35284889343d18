//! Fluent construction of diagnostics, and the source snippet they render.

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::span::{SourceFile, Span};

/// The source line under a diagnostic, with the offending columns marked.
///
/// # Examples
///
/// ```
/// use ednr_util::diagnostic::SourceSnippet;
/// use ednr_util::{SourceFile, Span};
///
/// let file = SourceFile::new("a.edn", "[1 2 42abc]");
/// let snippet = SourceSnippet::from_span(&file, Span::new(6, 9, 1, 6)).unwrap();
/// assert_eq!(snippet.format(), "  1 | [1 2 42abc]\n    |      ^^^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// Text of the line, without its terminator
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Build the snippet for a span of a source file
    ///
    /// Spans crossing a line break are cut at the end of their first line.
    /// Returns `None` when the span does not map into the file.
    pub fn from_span(file: &SourceFile, span: Span) -> Option<Self> {
        let (line_number, start_column) = file.offset_to_line_col(span.start);
        let line = file.line_at(line_number)?;
        let line_len = line.chars().count();
        let end_column = (start_column + span.len()).min(line_len + 1);
        Some(Self {
            line: line.to_string(),
            line_number,
            start_column,
            end_column,
        })
    }

    /// Two lines: the numbered source line, then carets under the span.
    /// Empty spans still get one caret.
    pub fn format(&self) -> String {
        let gutter = self.line_number.to_string().len().max(3);
        let marker_len = self.end_column.saturating_sub(self.start_column).max(1);
        format!(
            "{:>gutter$} | {}\n{:>gutter$} | {}{}",
            self.line_number,
            self.line,
            "",
            " ".repeat(self.start_column.saturating_sub(1)),
            "^".repeat(marker_len),
        )
    }
}

/// Builder for error diagnostics
///
/// # Examples
///
/// ```
/// use ednr_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use ednr_util::Span;
///
/// let diag = DiagnosticBuilder::error("invalid keyword")
///     .code(DiagnosticCode::E_LEX_INVALID_KEYWORD)
///     .span(Span::new(1, 4, 1, 1))
///     .help("keywords take at most two leading colons")
///     .build();
///
/// assert_eq!(diag.code, Some(DiagnosticCode::E_LEX_INVALID_KEYWORD));
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Start an error diagnostic with the given message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help message
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
