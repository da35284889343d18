//! Character literal lexing.
//!
//! A character literal is a backslash followed by one of:
//!
//! - a named character: `\newline`, `\return`, `\space`, `\tab`
//! - a Unicode escape: `\u` and four more characters, as in `\u03BB`
//! - an octal escape: `\o` and three more characters, as in `\o101`
//! - any single character: `\a`, `\(`, `\λ`
//!
//! Named characters are matched longest first and as a prefix, so
//! `\newlines` lexes as `\newline` followed by the symbol `s`. Escapes
//! always consume their full width (clamped at end of input); whether the
//! digits are valid is only checked when strict escapes are enabled.

use crate::chars::{is_octal_digit, NAMED_CHARACTERS};
use crate::token::{ErrorType, Token, TokenKind};
use crate::Lexer;

/// Characters after `\u` in a Unicode escape.
const UNICODE_DIGITS: usize = 4;

/// Characters after `\o` in an octal escape.
const OCTAL_DIGITS: usize = 3;

impl<'src, 'h> Lexer<'src, 'h> {
    /// Lexes a character literal starting at the backslash.
    pub fn lex_character(&mut self) -> Token<'src> {
        self.cursor.advance();

        let remaining = self.cursor.remaining();
        if let Some(name) = NAMED_CHARACTERS
            .iter()
            .find(|name| remaining.starts_with(**name))
        {
            self.cursor.advance_n(name.len());
            return self.finish(TokenKind::Character);
        }

        match self.cursor.current_char() {
            Some('u') => self.lex_escape(UNICODE_DIGITS, |c| c.is_ascii_hexdigit()),
            Some('o') => self.lex_escape(OCTAL_DIGITS, is_octal_digit),
            _ => {
                self.cursor.advance();
                self.finish(TokenKind::Character)
            },
        }
    }

    /// Consumes an escape marker plus `width` characters.
    ///
    /// In strict mode the escape must have exactly `width` characters left
    /// in the input, all accepted by `is_digit`.
    fn lex_escape(&mut self, width: usize, is_digit: impl Fn(char) -> bool) -> Token<'src> {
        self.cursor.advance();
        let digits = self.cursor.peek(width);
        self.cursor.advance_n(width);

        if self.options().strict_char_escapes {
            let valid = digits.chars().count() == width && digits.chars().all(is_digit);
            if !valid {
                return self.error(Some(ErrorType::InvalidCharacterEscape));
            }
        }
        self.finish(TokenKind::Character)
    }
}
