//! Character cursor for traversing reader input.
//!
//! This module provides the `Cursor` struct which owns the position state of
//! one lexing session. Positions are 1-based character offsets: a fresh
//! cursor sits at position 1 and the end-of-input position is `len + 1`.
//! The cursor also keeps the matching byte offset so token text can be
//! sliced out of the input without copying, and the line/column of the
//! current position for diagnostics.

/// A cursor over reader input.
///
/// The position only ever moves forward. Advancing at end of input is a
/// no-op.
///
/// # Example
///
/// ```
/// use ednr_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("(+ 1 2)");
/// assert_eq!(cursor.current_char(), Some('('));
/// assert_eq!(cursor.peek(3), "(+ ");
/// cursor.advance();
/// assert_eq!(cursor.position(), 2);
/// assert_eq!(cursor.current_char(), Some('+'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The input being traversed.
    source: &'a str,

    /// Byte offset of the current position.
    offset: usize,

    /// Current position (1-based, in characters).
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at position 1 of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            position: 1,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the current position, or `None` at end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        let b = *self.source.as_bytes().get(self.offset)?;
        if b < 128 {
            return Some(b as char);
        }
        self.source[self.offset..].chars().next()
    }

    /// Returns the character `n` characters ahead of the current one.
    ///
    /// `char_at(0)` is the current character.
    ///
    /// ```
    /// use ednr_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("-1");
    /// assert_eq!(cursor.char_at(1), Some('1'));
    /// assert_eq!(cursor.char_at(2), None);
    /// ```
    #[inline]
    pub fn char_at(&self, n: usize) -> Option<char> {
        if n == 0 {
            return self.current_char();
        }
        self.remaining().chars().nth(n)
    }

    /// Returns up to `n` characters starting at the current position without
    /// consuming them. Fewer characters are returned near the end of input.
    ///
    /// ```
    /// use ednr_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("\\tab");
    /// assert_eq!(cursor.peek(2), "\\t");
    /// assert_eq!(cursor.peek(10), "\\tab");
    /// ```
    pub fn peek(&self, n: usize) -> &'a str {
        let rest = self.remaining();
        match rest.char_indices().nth(n) {
            Some((end, _)) => &rest[..end],
            None => rest,
        }
    }

    /// Advances the cursor by one character.
    ///
    /// Updates line and column tracking. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.current_char() else {
            return;
        };
        self.offset += c.len_utf8();
        self.position += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances the cursor by `count` characters, stopping at end of input.
    ///
    /// ```
    /// use ednr_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("abc");
    /// cursor.advance_n(10);
    /// assert!(cursor.at_eof());
    /// assert_eq!(cursor.position(), 4);
    /// ```
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.at_eof() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while `pred` holds for the current character.
    ///
    /// Returns the number of characters consumed.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut eaten = 0;
        while let Some(c) = self.current_char() {
            if !pred(c) {
                break;
            }
            self.advance();
            eaten += 1;
        }
        eaten
    }

    /// Consumes `expected` if it is the current character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of input.
    #[inline]
    pub fn at_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Returns true if the current character is an EDN separator: space,
    /// tab, newline, carriage return or comma.
    #[inline]
    pub fn at_whitespace(&self) -> bool {
        self.current_char().is_some_and(crate::chars::is_whitespace)
    }

    /// Returns the current position (1-based, in characters).
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the byte offset of the current position.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the input from byte offset `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }

    /// Returns the input from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Returns the full input.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
