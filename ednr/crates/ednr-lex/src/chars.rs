//! Character classes of the EDN lexical grammar.
//!
//! Classification is ASCII-only: non-ASCII characters never start or
//! continue a symbol.

/// Punctuation allowed at the start of a symbol.
pub const SYMBOL_PUNCTUATION: &[char] = &[
    '.', '*', '+', '!', '-', '_', '?', '$', '%', '&', '=', '<', '>', '/',
];

/// Named character literals, longest name first.
pub const NAMED_CHARACTERS: &[&str] = &["newline", "return", "space", "tab"];

/// Checks if a character is an EDN separator.
///
/// Commas are whitespace in EDN.
///
/// # Example
///
/// ```
/// use ednr_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(','));
/// assert!(is_whitespace('\r'));
/// assert!(!is_whitespace('\u{a0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | ',')
}

/// Checks if a character is symbol punctuation (`. * + ! - _ ? $ % & = < > /`).
#[inline]
pub fn is_symbol_punctuation(c: char) -> bool {
    SYMBOL_PUNCTUATION.contains(&c)
}

/// Checks if a character can start a symbol.
///
/// With `alpha_only` set, only ASCII letters qualify; this is the rule for
/// reader tag names after `#`.
///
/// # Example
///
/// ```
/// use ednr_lex::chars::is_symbol_start;
///
/// assert!(is_symbol_start('a', false));
/// assert!(is_symbol_start('*', false));
/// assert!(!is_symbol_start('*', true));
/// assert!(!is_symbol_start('1', false));
/// ```
#[inline]
pub fn is_symbol_start(c: char, alpha_only: bool) -> bool {
    c.is_ascii_alphabetic() || (!alpha_only && is_symbol_punctuation(c))
}

/// Checks if a character can continue a symbol, keyword or tag name.
///
/// Symbol-start characters, digits, `:` and `#`.
#[inline]
pub fn is_symbol_rest(c: char) -> bool {
    is_symbol_start(c, false) || c.is_ascii_digit() || c == ':' || c == '#'
}

/// Checks if `first` (followed by `second`) begins a number.
///
/// A digit, or one of `- + .` directly followed by a digit.
///
/// # Example
///
/// ```
/// use ednr_lex::chars::is_number_start;
///
/// assert!(is_number_start('4', None));
/// assert!(is_number_start('-', Some('1')));
/// assert!(is_number_start('.', Some('5')));
/// assert!(!is_number_start('-', Some('a')));
/// assert!(!is_number_start('+', None));
/// ```
#[inline]
pub fn is_number_start(first: char, second: Option<char>) -> bool {
    first.is_ascii_digit()
        || (matches!(first, '-' | '+' | '.') && second.is_some_and(|c| c.is_ascii_digit()))
}

/// Checks if a character is a single-character structural delimiter.
#[inline]
pub fn is_delimiter(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '{' | '}')
}

/// Checks if a character is a valid octal digit.
#[inline]
pub fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}
