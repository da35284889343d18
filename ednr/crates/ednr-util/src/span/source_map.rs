//! Source map for managing source files and computing source locations.
//!
//! Offsets are 1-based character offsets, the unit tokens are positioned in.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::{FileId, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// Start of a line, recorded in both offset units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct LineStart {
    /// 1-based character offset of the first character of the line
    offset: usize,
    /// Byte index of the first character of the line
    byte: usize,
}

/// A source file with its content and line index
///
/// # Examples
///
/// ```
/// use ednr_util::span::SourceFile;
///
/// let file = SourceFile::new("deps.edn", "{:paths\n [\"src\"]}");
/// assert_eq!(file.name(), "deps.edn");
/// assert_eq!(file.offset_to_line_col(10), (2, 2));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Length of the content in characters
    char_len: usize,
    /// Precomputed line starts
    line_starts: Arc<[LineStart]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let (line_starts, char_len) = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            char_len,
            line_starts,
        }
    }

    /// Compute line starts from content, returning them with the character count
    fn line_starts(content: &str) -> (Arc<[LineStart]>, usize) {
        let mut line_starts = vec![LineStart { offset: 1, byte: 0 }];
        let mut count = 0;

        for (byte, ch) in content.char_indices() {
            count += 1;
            if ch == '\n' {
                line_starts.push(LineStart {
                    offset: count + 1,
                    byte: byte + 1,
                });
            }
        }

        (line_starts.into(), count)
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Convert a 1-based character offset to 1-based (line, column)
    ///
    /// Offsets past the end are clamped to the end-of-input position.
    ///
    /// # Examples
    ///
    /// ```
    /// use ednr_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.edn", "(ns foo)\n(def x 1)");
    /// assert_eq!(file.offset_to_line_col(1), (1, 1));
    /// assert_eq!(file.offset_to_line_col(11), (2, 2));
    /// assert_eq!(file.offset_to_line_col(99), (2, 10));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.clamp(1, self.char_len + 1);
        let line = self.line_index(offset);
        let col = offset - self.line_starts[line].offset + 1;
        (line + 1, col)
    }

    /// 0-based index of the line containing a (clamped) offset
    fn line_index(&self, offset: usize) -> usize {
        match self
            .line_starts
            .binary_search_by_key(&offset, |start| start.offset)
        {
            Ok(line) => line,
            // line_starts[0].offset == 1 and offset >= 1, so insert_point >= 1
            Err(insert_point) => insert_point - 1,
        }
    }

    /// Get the text of a 1-based line, without its line terminator
    ///
    /// ```
    /// use ednr_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.edn", "first\r\nsecond");
    /// assert_eq!(file.line_at(1), Some("first"));
    /// assert_eq!(file.line_at(2), Some("second"));
    /// assert_eq!(file.line_at(3), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_starts.get(line - 1)?.byte;
        let end = self
            .line_starts
            .get(line)
            .map(|next| next.byte)
            .unwrap_or(self.content.len());
        let text = &self.content[start..end];
        Some(text.trim_end_matches('\n').trim_end_matches('\r'))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("chars", &self.char_len)
            .field("lines", &self.line_starts.len())
            .finish()
    }
}

/// The files of one tool run, addressed by [`FileId`] or by name
///
/// # Examples
///
/// ```
/// use ednr_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let id = map.add_file("config.edn", "{:port 8080}");
/// let file = map.get_file(id).unwrap();
/// assert_eq!(file.name(), "config.edn");
/// assert_eq!(map.lookup("config.edn"), Some(id));
/// ```
#[derive(Debug, Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
    by_name: FxHashMap<String, FileId>,
}

impl SourceMap {
    /// Create an empty source map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file and return its id
    ///
    /// Adding a second file under a name already present gives it a new id;
    /// [`lookup`](Self::lookup) then finds the newer file.
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let name = name.into();
        let id = FileId(self.files.len());
        self.by_name.insert(name.clone(), id);
        self.files.push(Arc::new(SourceFile::new(name, content)));
        id
    }

    /// Get a file by id
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }

    /// Get a file by id, failing for unknown ids
    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.get(id).ok_or(SourceMapError::UnknownFileId(id.0))
    }

    /// Find a file id by name
    pub fn lookup(&self, name: &str) -> Option<FileId> {
        self.by_name.get(name).copied()
    }

    /// Number of files in the map
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Format a span as `name:line:column`
    pub fn format_span(&self, span: Span) -> Option<String> {
        let file = self.get(span.file_id)?;
        let (line, column) = file.offset_to_line_col(span.start);
        Some(format!("{}:{}:{}", file.name(), line, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_line_col() {
        let file = SourceFile::new("a", "ab\ncd\n\nef");
        assert_eq!(file.offset_to_line_col(1), (1, 1));
        assert_eq!(file.offset_to_line_col(3), (1, 3));
        assert_eq!(file.offset_to_line_col(4), (2, 1));
        assert_eq!(file.offset_to_line_col(7), (3, 1));
        assert_eq!(file.offset_to_line_col(8), (4, 1));
        assert_eq!(file.offset_to_line_col(10), (4, 3));
    }

    #[test]
    fn test_offset_counts_characters_not_bytes() {
        let file = SourceFile::new("a", "λx\nµ");
        assert_eq!(file.offset_to_line_col(2), (1, 2));
        assert_eq!(file.offset_to_line_col(4), (2, 1));
        assert_eq!(file.line_at(2), Some("µ"));
    }

    #[test]
    fn test_offset_zero_and_empty_file_clamp() {
        let file = SourceFile::new("a", "");
        assert_eq!(file.offset_to_line_col(0), (1, 1));
        assert_eq!(file.offset_to_line_col(5), (1, 1));
        assert_eq!(file.line_at(1), Some(""));
        assert_eq!(file.line_at(0), None);
    }

    #[test]
    fn test_source_map_unknown_id() {
        let map = SourceMap::new();
        assert_eq!(
            map.get_file(FileId(4)).unwrap_err(),
            SourceMapError::UnknownFileId(4)
        );
        assert!(map.get(FileId(0)).is_none());
        assert_eq!(map.lookup("missing.edn"), None);
    }

    #[test]
    fn test_source_map_lookup_by_name() {
        let mut map = SourceMap::new();
        let a = map.add_file("a.edn", "1");
        let b = map.add_file("b.edn", "2");
        assert_eq!(map.lookup("a.edn"), Some(a));
        assert_eq!(map.lookup("b.edn"), Some(b));
        assert_eq!(map.file_count(), 2);
    }

    #[test]
    fn test_source_map_format_span() {
        let mut map = SourceMap::new();
        let id = map.add_file("core.clj", "(ns core)\n(defn f [])");
        let span = Span::new(12, 16, 0, 0).in_file(id);
        assert_eq!(map.format_span(span), Some("core.clj:2:2".to_string()));
        assert_eq!(map.format_span(Span::new(1, 1, 1, 1).in_file(FileId(9))), None);
    }
}
