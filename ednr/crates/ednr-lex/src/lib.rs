//! ednr-lex - Lexical Analyzer for EDN and Clojure reader syntax
//!
//! This crate turns EDN / Clojure source text into a flat, gapless stream of
//! typed tokens. It is meant for tools that work on source as written:
//! syntax highlighters, structural editors, formatters and linters.
//!
//! # Overview
//!
//! Unlike a reader, the lexer keeps everything. Whitespace (commas
//! included) and comments are tokens, every token records the exact text it
//! covers, and concatenating the token texts gives back the input. Malformed
//! input never stops lexing; it becomes a `lex-error` token and the stream
//! continues after it, so half-typed source can still be highlighted.
//!
//! # Example Usage
//!
//! ```
//! use ednr_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("(+ 1 2.5)");
//! let kinds: Vec<&str> = tokens.iter().map(|t| t.kind.as_str()).collect();
//! assert_eq!(
//!     kinds,
//!     ["lparen", "symbol", "whitespace", "number", "whitespace", "number", "rparen", "eof"]
//! );
//! assert_eq!(tokens[5].text, "2.5");
//! assert_eq!(tokens[5].start, 6);
//! ```
//!
//! With a handler, every `lex-error` token is also reported as a diagnostic:
//!
//! ```
//! use ednr_lex::{tokenize_with, LexerOptions};
//! use ednr_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = tokenize_with("[42abc]", &handler, LexerOptions::default());
//! assert_eq!(tokens[1].text, "42a");
//! assert_eq!(handler.error_count(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, kind and error type definitions
//! - [`lexer`] - Classifier and per-family scanners
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes of the grammar
//! - [`options`] - Lexer options
//!
//! # Token Kinds
//!
//! ## Leaves
//!
//! `whitespace`, `comment`, `number`, `nil`, `true`, `false`, `symbol`,
//! `keyword`, `string`, `character`
//!
//! ## Structure
//!
//! `lparen`, `rparen`, `lbracket`, `rbracket`, `lbrace`, `rbrace`,
//! `set` (`#{`), `discard` (`#_`), `tag` (`#inst`)
//!
//! ## Terminal
//!
//! - **eof**: End of input, empty text, repeated on every further call
//! - **lex-error**: Malformed input, optionally classified by `error-type`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod options;
pub mod token;

mod edge_cases;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use options::LexerOptions;
pub use token::{Attributes, ErrorType, Token, TokenKind, UnknownName};

use ednr_util::Handler;

/// Lexes all of `source`, ending with the `eof` token.
///
/// Diagnostics are not collected; inspect `lex-error` tokens instead, or use
/// [`tokenize_with`].
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let handler = Handler::new();
    let options = LexerOptions::default().report_diagnostics(false);
    tokenize_with(source, &handler, options)
}

/// Lexes all of `source` with `options`, reporting errors to `handler`.
///
/// The returned tokens end with the `eof` token.
pub fn tokenize_with<'src>(
    source: &'src str,
    handler: &Handler,
    options: LexerOptions,
) -> Vec<Token<'src>> {
    let mut lexer = Lexer::with_options(source, handler, options);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    tracing::debug!(
        tokens = tokens.len(),
        errors = tokens.iter().filter(|t| t.is_error()).count(),
        chars = lexer.position() - 1,
        strict = options.strict_char_escapes,
        "tokenized input"
    );
    tokens
}
