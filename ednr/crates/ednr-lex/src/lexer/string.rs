//! String literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'src, 'h> Lexer<'src, 'h> {
    /// Lexes a string literal.
    ///
    /// Escapes are not interpreted: a backslash simply consumes itself and
    /// the character after it, so `\"` never closes the string. Reaching the
    /// end of input before the closing quote yields a `lex-error` token
    /// without an `error-type`, covering everything consumed.
    pub fn lex_string(&mut self) -> Token<'src> {
        self.cursor.advance();

        loop {
            match self.cursor.current_char() {
                None => return self.error(None),
                Some('"') => {
                    self.cursor.advance();
                    return self.finish(TokenKind::String);
                },
                Some('\\') => {
                    self.cursor.advance();
                    self.cursor.advance();
                },
                Some(_) => self.cursor.advance(),
            }
        }
    }
}
