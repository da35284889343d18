//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the classifier that picks a
//! scanner for the current character, and the helpers scanners use to close
//! off a token.

use ednr_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::chars::{is_number_start, is_symbol_start, is_whitespace};
use crate::cursor::Cursor;
use crate::options::LexerOptions;
use crate::token::{ErrorType, Token, TokenKind};

/// Lexer for EDN / Clojure reader syntax.
///
/// The lexer turns source text into a gapless stream of tokens. Every input
/// character belongs to exactly one token, whitespace and comments included;
/// malformed input becomes a `lex-error` token and lexing carries on.
///
/// # Example
///
/// ```
/// use ednr_lex::{Lexer, TokenKind};
/// use ednr_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("(inc 1)", &handler);
///
/// let kinds: Vec<TokenKind> = lexer.by_ref().map(|t| t.kind).collect();
/// assert_eq!(kinds[0], TokenKind::LParen);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'src, 'h> {
    /// Character cursor for source traversal.
    pub cursor: Cursor<'src>,

    /// Error handler for reporting lexical errors.
    handler: &'h Handler,

    /// Session options.
    options: LexerOptions,

    /// Byte offset where the current token starts.
    token_start: usize,

    /// Character position (1-based) where the current token starts.
    token_start_position: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'src, 'h> Lexer<'src, 'h> {
    /// Creates a new lexer with default options.
    pub fn new(source: &'src str, handler: &'h Handler) -> Self {
        Self::with_options(source, handler, LexerOptions::default())
    }

    /// Creates a new lexer with the given options.
    pub fn with_options(source: &'src str, handler: &'h Handler, options: LexerOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            options,
            token_start: 0,
            token_start_position: 1,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token.
    ///
    /// At end of input this returns an `eof` token with empty text and does
    /// not move, so calling it again yields the same `eof` token.
    pub fn next_token(&mut self) -> Token<'src> {
        self.begin_token();

        let Some(c) = self.cursor.current_char() else {
            return Token::eof(self.cursor.position());
        };

        if is_whitespace(c) {
            return self.lex_whitespace();
        }
        if let Some(kind) = TokenKind::from_delimiter(c) {
            self.cursor.advance();
            return self.finish(kind);
        }
        if is_number_start(c, self.cursor.char_at(1)) {
            return self.lex_number();
        }
        if is_symbol_start(c, false) {
            return self.lex_symbol();
        }

        match c {
            '"' => self.lex_string(),
            '\\' => self.lex_character(),
            ':' => self.lex_keyword(),
            ';' => self.lex_comment(),
            '#' => self.lex_dispatch(),
            _ => {
                self.cursor.advance();
                self.error(Some(ErrorType::UnrecognizedCharacter))
            },
        }
    }

    /// Records the cursor as the start of the next token.
    fn begin_token(&mut self) {
        self.token_start = self.cursor.offset();
        self.token_start_position = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Text consumed since the start of the current token.
    pub(crate) fn token_text(&self) -> &'src str {
        self.cursor.slice_from(self.token_start)
    }

    /// Builds a token of `kind` over everything consumed so far.
    pub(crate) fn finish(&self, kind: TokenKind) -> Token<'src> {
        Token::new(kind, self.token_text(), self.token_start_position)
    }

    /// Builds a `lex-error` token over everything consumed so far and
    /// reports it.
    pub(crate) fn error(&self, error_type: Option<ErrorType>) -> Token<'src> {
        let token = Token::error(self.token_text(), self.token_start_position, error_type);
        tracing::trace!(
            start = token.start,
            text = token.text,
            error_type = error_type.map_or("none", ErrorType::as_str),
            "lex error"
        );
        if self.options.report_diagnostics {
            self.report_error(&token, error_type);
        }
        token
    }

    /// Reports a lexical error for `token` to the handler.
    fn report_error(&self, token: &Token<'src>, error_type: Option<ErrorType>) {
        let span = Span::new(
            self.token_start_position,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        let (message, code, help) = describe(error_type);
        let mut builder = DiagnosticBuilder::error(message)
            .code(code)
            .span(span)
            .note(format!("found `{}`", token.text.escape_debug()));
        if let Some(help) = help {
            builder = builder.help(help);
        }
        builder.emit(self.handler);
    }

    /// Returns the session options.
    pub fn options(&self) -> LexerOptions {
        self.options
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current character position (1-based).
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Message, code and optional help for a lexical error.
fn describe(error_type: Option<ErrorType>) -> (&'static str, DiagnosticCode, Option<&'static str>) {
    match error_type {
        Some(ErrorType::InvalidNumberFormat) => (
            "invalid number format",
            DiagnosticCode::E_LEX_INVALID_NUMBER,
            Some("separate the number from what follows it with whitespace"),
        ),
        Some(ErrorType::InvalidKeyword) => (
            "invalid keyword",
            DiagnosticCode::E_LEX_INVALID_KEYWORD,
            Some("keywords take at most two leading colons"),
        ),
        Some(ErrorType::InvalidHashtagDispatcher) => (
            "invalid dispatch macro",
            DiagnosticCode::E_LEX_INVALID_DISPATCH,
            Some("`#` must be followed by `{`, `_` or a tag name"),
        ),
        Some(ErrorType::UnrecognizedCharacter) => (
            "unrecognized character",
            DiagnosticCode::E_LEX_UNRECOGNIZED_CHAR,
            None,
        ),
        Some(ErrorType::InvalidCharacterEscape) => (
            "invalid character escape",
            DiagnosticCode::E_LEX_INVALID_CHAR_ESCAPE,
            Some("use `\\uXXXX` with four hex digits or `\\oNNN` with three octal digits"),
        ),
        None => (
            "unterminated string literal",
            DiagnosticCode::E_LEX_UNTERMINATED_STRING,
            Some("add a closing `\"`"),
        ),
    }
}

impl<'src, 'h> Iterator for Lexer<'src, 'h> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eof_on_empty_input() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("", &handler);
        let token = lexer.next_token();
        assert_eq!(token, Token::eof(1));
        assert_eq!(lexer.next_token(), Token::eof(1));
    }

    #[test]
    fn test_delimiters() {
        let handler = Handler::new();
        let kinds: Vec<TokenKind> = Lexer::new("()[]{}", &handler).map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::LBrace,
                TokenKind::RBrace,
            ]
        );
    }

    #[test]
    fn test_unrecognized_character_consumes_one() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("@x", &handler);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::LexError);
        assert_eq!(token.text, "@");
        assert_eq!(token.error_type(), Some(ErrorType::UnrecognizedCharacter));
        assert_eq!(lexer.next_token().text, "x");
    }

    #[test]
    fn test_non_ascii_start_is_unrecognized() {
        let handler = Handler::new();
        let token = Lexer::new("λ", &handler).next_token();
        assert_eq!(token.text, "λ");
        assert_eq!(token.error_type(), Some(ErrorType::UnrecognizedCharacter));
    }

    #[test]
    fn test_sign_without_digit_is_symbol() {
        let handler = Handler::new();
        let token = Lexer::new("-x", &handler).next_token();
        assert_eq!(token.kind, TokenKind::Symbol);
        assert_eq!(token.text, "-x");
    }

    #[test]
    fn test_error_reports_diagnostic() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("[1 ~]", &handler);
        let errors: Vec<Token> = lexer.by_ref().filter(|t| t.is_error()).collect();
        assert_eq!(errors.len(), 1);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEX_UNRECOGNIZED_CHAR));
        assert_eq!(diags[0].span, Span::new(4, 5, 1, 4));
        assert_eq!(diags[0].notes, vec!["found `~`".to_string()]);
    }

    #[test]
    fn test_diagnostic_span_tracks_lines() {
        let handler = Handler::new();
        let _: Vec<Token> = Lexer::new("a\n  \"open", &handler).collect();
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEX_UNTERMINATED_STRING));
        assert_eq!(diags[0].span.start, 5);
        assert_eq!(diags[0].span.end, 10);
        assert_eq!(diags[0].span.line, 2);
        assert_eq!(diags[0].span.column, 3);
    }

    #[test]
    fn test_diagnostics_can_be_disabled() {
        let handler = Handler::new();
        let options = LexerOptions::new().report_diagnostics(false);
        let tokens: Vec<Token> = Lexer::with_options("42abc", &handler, options).collect();
        assert!(tokens[0].is_error());
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_position_accessors() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("a\nb", &handler);
        lexer.next_token();
        lexer.next_token();
        assert_eq!(lexer.position(), 3);
        assert_eq!(lexer.line(), 2);
        assert_eq!(lexer.column(), 1);
    }
}
