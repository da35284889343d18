//! Dispatch macro lexing.
//!
//! Forms introduced by `#`:
//!
//! | input   | token     |
//! |---------|-----------|
//! | `#{`    | `set`     |
//! | `#_`    | `discard` |
//! | `#inst` | `tag`     |
//!
//! Anything else after `#` is malformed. The error token swallows the run
//! of non-separator characters that follows, so `#(inc %)` produces a single
//! `#(inc` error rather than one error per character.

use crate::chars::{is_symbol_rest, is_symbol_start, is_whitespace};
use crate::token::{ErrorType, Token, TokenKind};
use crate::Lexer;

impl<'src, 'h> Lexer<'src, 'h> {
    /// Lexes a `#` dispatch macro.
    pub fn lex_dispatch(&mut self) -> Token<'src> {
        self.cursor.advance();

        match self.cursor.current_char() {
            Some('{') => {
                self.cursor.advance();
                self.finish(TokenKind::Set)
            },
            Some('_') => {
                self.cursor.advance();
                self.finish(TokenKind::Discard)
            },
            Some(c) if is_symbol_start(c, true) => {
                self.cursor.advance();
                self.cursor.eat_while(is_symbol_rest);
                self.finish(TokenKind::Tag)
            },
            _ => {
                self.cursor.eat_while(|c| !is_whitespace(c));
                self.error(Some(ErrorType::InvalidHashtagDispatcher))
            },
        }
    }
}
