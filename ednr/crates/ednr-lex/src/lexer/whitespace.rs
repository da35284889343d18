//! Whitespace lexing.
//!
//! Commas count as whitespace in EDN, so `[1, 2]` holds a `, ` whitespace
//! token between its numbers.

use crate::chars::is_whitespace;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'src, 'h> Lexer<'src, 'h> {
    /// Lexes a maximal run of separators into one `whitespace` token.
    ///
    /// Must be called with the cursor on a separator, so the token is never
    /// empty.
    pub fn lex_whitespace(&mut self) -> Token<'src> {
        self.cursor.eat_while(is_whitespace);
        self.finish(TokenKind::Whitespace)
    }
}
