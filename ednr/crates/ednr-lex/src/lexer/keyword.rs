//! Keyword lexing.

use crate::chars::is_symbol_rest;
use crate::token::{ErrorType, Token, TokenKind};
use crate::Lexer;

impl<'src, 'h> Lexer<'src, 'h> {
    /// Lexes a keyword such as `:a`, `::auto-resolved` or `:ns/name`.
    ///
    /// Up to two leading colons are accepted. A third colon is consumed and
    /// the token becomes a `lex-error` with `invalid-keyword`, leaving the
    /// rest of the name to be lexed separately. A bare `:` is a keyword.
    pub fn lex_keyword(&mut self) -> Token<'src> {
        self.cursor.advance();
        self.cursor.eat(':');

        if self.cursor.eat(':') {
            return self.error(Some(ErrorType::InvalidKeyword));
        }

        self.cursor.eat_while(is_symbol_rest);
        self.finish(TokenKind::Keyword)
    }
}
