//! Diagnostic codes for categorizing reader errors.
//!
//! Codes follow the format `{prefix}{number:04}`. Lexer codes live in the
//! `E1xxx` range.
//!
//! # Examples
//!
//! ```
//! use ednr_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_INVALID_NUMBER;
//! assert_eq!(code.number, 1001);
//! assert_eq!(code.to_string(), "E1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// Letter prefix, `E` for errors
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Malformed number literal (`42abc`)
    pub const E_LEX_INVALID_NUMBER: DiagnosticCode = DiagnosticCode::new("E", 1001);
    /// Keyword with too many leading colons (`:::a`)
    pub const E_LEX_INVALID_KEYWORD: DiagnosticCode = DiagnosticCode::new("E", 1002);
    /// Unknown `#` dispatch macro (`#(`, `#'`)
    pub const E_LEX_INVALID_DISPATCH: DiagnosticCode = DiagnosticCode::new("E", 1003);
    /// String literal without a closing quote
    pub const E_LEX_UNTERMINATED_STRING: DiagnosticCode = DiagnosticCode::new("E", 1004);
    /// Character that cannot start any token
    pub const E_LEX_UNRECOGNIZED_CHAR: DiagnosticCode = DiagnosticCode::new("E", 1005);
    /// `\u` / `\o` character literal with invalid digits (strict mode)
    pub const E_LEX_INVALID_CHAR_ESCAPE: DiagnosticCode = DiagnosticCode::new("E", 1006);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self)
    }
}
