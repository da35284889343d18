//! Symbol lexing.
//!
//! This module handles symbols and the three reserved literals `nil`,
//! `true` and `false`.

use crate::chars::is_symbol_rest;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'src, 'h> Lexer<'src, 'h> {
    /// Lexes a symbol or reserved literal.
    ///
    /// Consumes the start character and then a maximal run of symbol-rest
    /// characters. Only exact, case-sensitive matches of `nil`, `true` and
    /// `false` become literal tokens; `nilly` and `True` stay symbols.
    pub fn lex_symbol(&mut self) -> Token<'src> {
        self.cursor.advance();
        self.cursor.eat_while(is_symbol_rest);
        self.finish(reserved_kind(self.token_text()))
    }
}

fn reserved_kind(text: &str) -> TokenKind {
    match text {
        "nil" => TokenKind::Nil,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        _ => TokenKind::Symbol,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ednr_util::Handler;

    fn lex_sym(source: &str) -> Token<'_> {
        let handler = Handler::new();
        let mut lexer = crate::Lexer::new(source, &handler);
        lexer.lex_symbol()
    }

    #[test]
    fn test_simple_symbols() {
        for (source, text) in [
            ("foo", "foo"),
            ("+ 1", "+"),
            ("inc)", "inc"),
            ("foo/bar baz", "foo/bar"),
            ("->> x", "->>"),
            ("a.b.c", "a.b.c"),
            (".method", ".method"),
            ("*ns*", "*ns*"),
            ("valid?", "valid?"),
        ] {
            let token = lex_sym(source);
            assert_eq!(token.kind, TokenKind::Symbol, "{:?}", source);
            assert_eq!(token.text, text, "{:?}", source);
        }
    }

    #[test]
    fn test_symbol_rest_takes_digits_colon_hash() {
        assert_eq!(lex_sym("x1:y#z").text, "x1:y#z");
        assert_eq!(lex_sym("gensym__123#").text, "gensym__123#");
    }

    #[test]
    fn test_reserved_literals() {
        assert_eq!(lex_sym("nil").kind, TokenKind::Nil);
        assert_eq!(lex_sym("true]").kind, TokenKind::True);
        assert_eq!(lex_sym("false ").kind, TokenKind::False);
    }

    #[test]
    fn test_reserved_match_is_exact() {
        assert_eq!(lex_sym("nilly").kind, TokenKind::Symbol);
        assert_eq!(lex_sym("True").kind, TokenKind::Symbol);
        assert_eq!(lex_sym("false?").kind, TokenKind::Symbol);
    }

    #[test]
    fn test_stops_at_string_and_non_ascii() {
        assert_eq!(lex_sym("str\"x\"").text, "str");
        assert_eq!(lex_sym("abλ").text, "ab");
    }
}
