//! Token definitions for the EDN lexer.
//!
//! A [`Token`] is an immutable record of one span of input: its
//! [`TokenKind`], the exact text it covers, the 1-based character offset it
//! starts at, and an ordered attribute map. Tokens tile the input: the start
//! of each token is the start of the previous one plus the character length
//! of its text.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

/// The closed set of token kinds.
///
/// ```
/// use ednr_lex::TokenKind;
///
/// assert!(TokenKind::Number.is_leaf());
/// assert!(!TokenKind::LParen.is_leaf());
/// assert!(TokenKind::RBrace.is_closing());
/// assert_eq!(TokenKind::LexError.as_str(), "lex-error");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // ===== Leaves =====
    /// Run of spaces, tabs, newlines, carriage returns and commas
    Whitespace,
    /// `;` through end of line
    Comment,
    /// Number literal, kept as text
    Number,
    /// `nil`
    Nil,
    /// `true`
    True,
    /// `false`
    False,
    /// Symbol such as `+`, `foo/bar`, `.method`
    Symbol,
    /// Keyword such as `:a`, `::b`, `:ns/c`
    Keyword,
    /// String literal including quotes
    String,
    /// Character literal such as `\a`, `\newline`, `λ`
    Character,

    // ===== Structure =====
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `#{`
    Set,
    /// `#_`
    Discard,
    /// Reader tag such as `#inst`
    Tag,

    // ===== Terminal =====
    /// End of input; always has empty text
    Eof,
    /// Recognized but malformed input
    LexError,
}

impl TokenKind {
    /// All kinds, in declaration order.
    pub const ALL: [TokenKind; 21] = [
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::Number,
        TokenKind::Nil,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Symbol,
        TokenKind::Keyword,
        TokenKind::String,
        TokenKind::Character,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Set,
        TokenKind::Discard,
        TokenKind::Tag,
        TokenKind::Eof,
        TokenKind::LexError,
    ];

    /// Returns true for kinds that cannot contain nested structure.
    pub const fn is_leaf(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Comment
                | TokenKind::Number
                | TokenKind::Nil
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Symbol
                | TokenKind::Keyword
                | TokenKind::String
                | TokenKind::Character
        )
    }

    /// Returns true for kinds that close a form: `)`, `]`, `}`.
    pub const fn is_closing(self) -> bool {
        matches!(
            self,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace
        )
    }

    /// Stable kebab-case name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Number => "number",
            TokenKind::Nil => "nil",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Symbol => "symbol",
            TokenKind::Keyword => "keyword",
            TokenKind::String => "string",
            TokenKind::Character => "character",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::LBracket => "lbracket",
            TokenKind::RBracket => "rbracket",
            TokenKind::LBrace => "lbrace",
            TokenKind::RBrace => "rbrace",
            TokenKind::Set => "set",
            TokenKind::Discard => "discard",
            TokenKind::Tag => "tag",
            TokenKind::Eof => "eof",
            TokenKind::LexError => "lex-error",
        }
    }

    /// Kind of a single-character structural delimiter.
    pub const fn from_delimiter(c: char) -> Option<TokenKind> {
        match c {
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownName(pub String);

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown name `{}`", self.0)
    }
}

impl std::error::Error for UnknownName {}

impl FromStr for TokenKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// Classification of a `lex-error` token, stored under the `error-type`
/// attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// A number directly followed by a letter or symbol punctuation (`42abc`)
    InvalidNumberFormat,
    /// Three leading colons (`:::a`)
    InvalidKeyword,
    /// `#` followed by something that is not `{`, `_` or a letter
    InvalidHashtagDispatcher,
    /// A character that cannot start any token
    UnrecognizedCharacter,
    /// `\u` / `\o` literal with invalid digits; strict mode only
    InvalidCharacterEscape,
}

impl ErrorType {
    /// Stable kebab-case name, the value of the `error-type` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorType::InvalidNumberFormat => "invalid-number-format",
            ErrorType::InvalidKeyword => "invalid-keyword",
            ErrorType::InvalidHashtagDispatcher => "invalid-hashtag-dispatcher",
            ErrorType::UnrecognizedCharacter => "unrecognized-character",
            ErrorType::InvalidCharacterEscape => "invalid-character-escape",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorType {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invalid-number-format" => Ok(ErrorType::InvalidNumberFormat),
            "invalid-keyword" => Ok(ErrorType::InvalidKeyword),
            "invalid-hashtag-dispatcher" => Ok(ErrorType::InvalidHashtagDispatcher),
            "unrecognized-character" => Ok(ErrorType::UnrecognizedCharacter),
            "invalid-character-escape" => Ok(ErrorType::InvalidCharacterEscape),
            _ => Err(UnknownName(s.to_string())),
        }
    }
}

/// Ordered key/value attributes attached to a token.
///
/// Only `error-type` is populated today, on `lex-error` tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<&'static str, String>);

impl Attributes {
    /// Key of the error classification attribute.
    pub const ERROR_TYPE: &'static str = "error-type";

    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    /// Looks up a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A typed, positioned span of input text.
///
/// # Example
///
/// ```
/// use ednr_lex::{ErrorType, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Keyword, ":foo/bar", 1);
/// assert_eq!(token.len(), 8);
/// assert_eq!(token.end(), 9);
///
/// let error = Token::error(":::", 4, Some(ErrorType::InvalidKeyword));
/// assert!(error.is_error());
/// assert_eq!(error.error_type(), Some(ErrorType::InvalidKeyword));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token kind.
    pub kind: TokenKind,
    /// Exact input text covered, including delimiters.
    pub text: &'a str,
    /// 1-based character offset of the first character.
    pub start: usize,
    /// Extra attributes.
    pub attributes: Attributes,
}

impl<'a> Token<'a> {
    /// Creates a token without attributes.
    pub fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        Self {
            kind,
            text,
            start,
            attributes: Attributes::new(),
        }
    }

    /// Creates a `lex-error` token, recording `error_type` if given.
    pub fn error(text: &'a str, start: usize, error_type: Option<ErrorType>) -> Self {
        let mut token = Self::new(TokenKind::LexError, text, start);
        if let Some(error_type) = error_type {
            token
                .attributes
                .insert(Attributes::ERROR_TYPE, error_type.as_str());
        }
        token
    }

    /// Creates the end-of-input token at `position`.
    pub fn eof(position: usize) -> Self {
        Self::new(TokenKind::Eof, "", position)
    }

    /// Length of the text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns true if the text is empty (only ever the case for `eof`).
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Offset just past the token; the start of the next token.
    pub fn end(&self) -> usize {
        self.start + self.len()
    }

    /// Returns true for `lex-error` tokens.
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::LexError
    }

    /// Returns true for the `eof` token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The parsed `error-type` attribute, if any.
    pub fn error_type(&self) -> Option<ErrorType> {
        self.attributes
            .get(Attributes::ERROR_TYPE)
            .and_then(|value| value.parse().ok())
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} {:?}", self.kind, self.start, self.text)?;
        if let Some(error_type) = self.error_type() {
            write!(f, " [{}]", error_type)?;
        }
        Ok(())
    }
}
