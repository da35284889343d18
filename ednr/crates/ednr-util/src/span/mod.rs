//! Span module - Source location tracking.
//!
//! This module provides types for representing source locations: character
//! offsets, line/column information, and file identification.
//!
//! # Examples
//!
//! ```
//! use ednr_util::span::{FileId, Span};
//!
//! // `(+ 1 2)` -> the `+` symbol
//! let span = Span::new(2, 3, 1, 2);
//! assert_eq!(span.len(), 1);
//! assert_eq!(span.in_file(FileId(1)).file_id, FileId(1));
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the [`SourceMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// Create a new FileId
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw index value
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// A dummy FileId for testing
    pub const DUMMY: FileId = FileId(0);
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// Source location span
///
/// A `Span` covers the half-open range `start..end` of 1-based character
/// offsets, together with the line and column of `start` and the file it
/// belongs to.
///
/// # Examples
///
/// ```
/// use ednr_util::span::Span;
///
/// let span = Span::new(1, 4, 1, 1);
/// assert_eq!(span.len(), 3);
/// assert!(Span::new(7, 7, 2, 3).is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start offset (1-based, in characters)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    /// Line number of `start` (1-based)
    pub line: u32,
    /// Column number of `start` (1-based, in characters)
    pub column: u32,
    /// File identifier
    pub file_id: FileId,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start offset (1-based)
    /// * `end` - End offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Number of characters covered by the span
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no characters
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the same span re-homed into another file
    #[inline]
    pub fn in_file(self, file_id: FileId) -> Self {
        Self { file_id, ..self }
    }
}
