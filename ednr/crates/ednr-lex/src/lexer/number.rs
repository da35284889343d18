//! Number literal lexing.
//!
//! Numbers are kept as text; no value is computed. The accepted shape is
//!
//! ```text
//! sign? digits ('.' digits)? (('E' | 'e') digits | 'r' alnum*)? 'M'?
//! ```
//!
//! which covers `42`, `-7`, `2.5`, `.5`, `1e10`, `16rFF` and `1.5M`. The
//! exponent takes no sign of its own.

use crate::chars::is_symbol_punctuation;
use crate::token::{ErrorType, Token, TokenKind};
use crate::Lexer;

impl<'src, 'h> Lexer<'src, 'h> {
    /// Lexes a number literal.
    ///
    /// A number directly followed by a letter or symbol punctuation is
    /// malformed: exactly one more character is consumed and the result is a
    /// `lex-error` with `invalid-number-format`, so `42abc` yields `42a`.
    pub fn lex_number(&mut self) -> Token<'src> {
        if matches!(self.cursor.current_char(), Some('+' | '-')) {
            self.cursor.advance();
        }
        self.eat_digits();

        if self.cursor.eat('.') {
            self.eat_digits();
        }

        match self.cursor.current_char() {
            Some('E' | 'e') => {
                self.cursor.advance();
                self.eat_digits();
            },
            Some('r') => {
                self.cursor.advance();
                self.cursor.eat_while(|c| c.is_ascii_alphanumeric());
            },
            _ => {},
        }

        self.cursor.eat('M');

        match self.cursor.current_char() {
            Some(c) if c.is_ascii_alphabetic() || is_symbol_punctuation(c) => {
                self.cursor.advance();
                self.error(Some(ErrorType::InvalidNumberFormat))
            },
            _ => self.finish(TokenKind::Number),
        }
    }

    fn eat_digits(&mut self) -> usize {
        self.cursor.eat_while(|c| c.is_ascii_digit())
    }
}
