//! Diagnostic module - Error reporting infrastructure.
//!
//! The lexer never aborts on malformed input: it produces an error token and
//! reports a [`Diagnostic`] to a [`Handler`]. Callers decide afterwards
//! whether to stop, collect, or keep going.
//!
//! # Examples
//!
//! ```
//! use ednr_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use ednr_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("invalid number format")
//!     .code(DiagnosticCode::E_LEX_INVALID_NUMBER)
//!     .span(Span::new(1, 4, 1, 1))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;
mod color;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use color::{ColorConfig, ANSI_ERROR, ANSI_RESET};

use std::cell::RefCell;

use crate::span::{SourceFile, Span};

/// A lexical error with its location and explanation.
///
/// Built with [`DiagnosticBuilder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// One-line description, e.g. `invalid number format`
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Context lines, rendered as `= note: ...`
    pub notes: Vec<String>,
    /// Suggested fixes, rendered as `= help: ...`
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Render the diagnostic against the file its span points into
    ///
    /// The output has the shape
    ///
    /// ```text
    /// error[E1001]: invalid number format
    ///  --> data.edn:1:6
    ///   1 | [1 2 42abc]
    ///     |      ^^^
    /// ```
    pub fn render(&self, file: &SourceFile, color: bool) -> String {
        let mut out = String::new();

        let (head_start, head_end) = if color {
            (ANSI_ERROR, ANSI_RESET)
        } else {
            ("", "")
        };
        match self.code {
            Some(code) => out.push_str(&format!(
                "{}error[{}]{}: {}\n",
                head_start, code, head_end, self.message
            )),
            None => out.push_str(&format!(
                "{}error{}: {}\n",
                head_start, head_end, self.message
            )),
        }

        let (line, column) = file.offset_to_line_col(self.span.start);
        out.push_str(&format!(" --> {}:{}:{}\n", file.name(), line, column));

        if let Some(snippet) = SourceSnippet::from_span(file, self.span) {
            out.push_str(&snippet.format());
            out.push('\n');
        }

        for note in &self.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }

        out
    }
}

/// Collects the diagnostics of one lexing session
///
/// Diagnostics sit behind a `RefCell`, so a lexer can report through a
/// shared reference while it hands out tokens. A handler belongs to one
/// thread; parallel sessions each get their own.
///
/// # Examples
///
/// ```
/// use ednr_util::diagnostic::{DiagnosticBuilder, Handler};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unrecognized character").emit(&handler);
///
/// if handler.has_errors() {
///     eprintln!("lexing failed with {} errors", handler.error_count());
/// }
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Whether anything has been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Number of reported errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get a copy of all collected diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Take all collected diagnostics, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_number(span: Span) -> Diagnostic {
        DiagnosticBuilder::error("invalid number format")
            .code(DiagnosticCode::E_LEX_INVALID_NUMBER)
            .span(span)
            .build()
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_handler_counts_in_order() {
        let handler = Handler::new();
        handler.emit_diagnostic(invalid_number(Span::new(1, 3, 1, 1)));
        handler.emit_diagnostic(invalid_number(Span::new(5, 7, 1, 5)));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        let starts: Vec<usize> = handler.diagnostics().iter().map(|d| d.span.start).collect();
        assert_eq!(starts, vec![1, 5]);
    }

    #[test]
    fn test_take_diagnostics_empties_handler() {
        let handler = Handler::new();
        handler.emit_diagnostic(invalid_number(Span::DUMMY));
        assert_eq!(handler.take_diagnostics().len(), 1);
        assert!(!handler.has_errors());
        assert!(handler.take_diagnostics().is_empty());
    }

    #[test]
    fn test_render_without_color() {
        let file = SourceFile::new("data.edn", "[1 2 42abc]");
        let mut diag = invalid_number(Span::new(6, 9, 1, 6));
        diag.notes.push("found `42a`".to_string());
        let rendered = diag.render(&file, false);
        assert_eq!(
            rendered,
            "error[E1001]: invalid number format\n \
             --> data.edn:1:6\n  \
             1 | [1 2 42abc]\n    \
             |      ^^^\n  \
             = note: found `42a`\n"
        );
    }

    #[test]
    fn test_render_without_code() {
        let file = SourceFile::new("a.edn", "\"abc");
        let diag = DiagnosticBuilder::error("unterminated string literal")
            .span(Span::new(1, 5, 1, 1))
            .help("add a closing `\"`")
            .build();
        let rendered = diag.render(&file, false);
        assert!(rendered.starts_with("error: unterminated string literal\n"));
        assert!(rendered.ends_with("  = help: add a closing `\"`\n"));
    }

    #[test]
    fn test_render_with_color_wraps_header() {
        let file = SourceFile::new("a.edn", "#(");
        let diag = DiagnosticBuilder::error("bad dispatch")
            .span(Span::new(1, 3, 1, 1))
            .build();
        assert!(diag
            .render(&file, true)
            .starts_with("\x1b[1;31merror\x1b[0m: bad dispatch"));
    }
}
