//! Comment lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'src, 'h> Lexer<'src, 'h> {
    /// Lexes a line comment.
    ///
    /// The token runs from `;` through the end of the line and includes the
    /// terminating newline when there is one.
    pub fn lex_comment(&mut self) -> Token<'src> {
        self.cursor.eat_while(|c| c != '\n');
        self.cursor.eat('\n');
        self.finish(TokenKind::Comment)
    }
}
