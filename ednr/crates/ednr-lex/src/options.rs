//! Lexer configuration.

/// Options controlling one lexing session.
///
/// The defaults give the lenient reader behavior: every `\u` or `\o`
/// character literal is accepted as written, and each `lex-error` token is
/// also reported to the diagnostic handler.
///
/// ```
/// use ednr_lex::LexerOptions;
///
/// let options = LexerOptions::new().strict_char_escapes(true);
/// assert!(options.is_strict());
/// assert!(options.reports_diagnostics());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerOptions {
    /// Validate the digits of `\uXXXX` and `\oNNN` character literals.
    pub strict_char_escapes: bool,
    /// Emit a diagnostic for every `lex-error` token.
    pub report_diagnostics: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            strict_char_escapes: false,
            report_diagnostics: true,
        }
    }
}

impl LexerOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables strict character escape validation.
    pub fn strict_char_escapes(mut self, strict: bool) -> Self {
        self.strict_char_escapes = strict;
        self
    }

    /// Enables or disables diagnostic reporting.
    pub fn report_diagnostics(mut self, report: bool) -> Self {
        self.report_diagnostics = report;
        self
    }

    /// Returns true if character escapes are validated.
    pub fn is_strict(&self) -> bool {
        self.strict_char_escapes
    }

    /// Returns true if lex errors are reported to the handler.
    pub fn reports_diagnostics(&self) -> bool {
        self.report_diagnostics
    }
}
