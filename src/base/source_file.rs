//! Expression source files and the line/column positions of offsets inside them.

use std::{
    fmt::Debug,
    ops::Range,
    path::{Path, PathBuf},
    str::CharIndices,
    sync::Arc,
};

use getset::Getters;

use super::{file_provider::FileProvider, Error};

/// An expression source held in memory, with its line boundaries precomputed.
#[derive(Clone, Getters)]
pub struct SourceFile {
    /// Get the path the source was loaded from.
    #[get = "pub"]
    path: PathBuf,
    /// Get the full text of the source.
    #[get = "pub"]
    content: String,
    lines: Vec<Range<usize>>,
}

#[allow(clippy::missing_fields_in_debug)]
impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("path", &self.path)
            .field("lines", &self.lines)
            .finish()
    }
}

impl SourceFile {
    /// Creates a source file from text that is already in memory.
    #[must_use]
    pub fn new(path: PathBuf, content: String) -> Arc<Self> {
        let lines = line_ranges(&content);

        Arc::new(Self {
            path,
            content,
            lines,
        })
    }

    /// Get a line, terminator included, by its 1-based number.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }

        let line = line - 1;
        self.lines
            .get(line)
            .map(|range| &self.content()[range.clone()])
    }

    /// Iterates the characters of the file with their byte offsets, ready to feed a
    /// [`Lexer`](crate::Lexer).
    #[must_use]
    pub fn iter(&self) -> SourceIterator<'_> {
        SourceIterator {
            iterator: self.content.char_indices(),
        }
    }

    /// Get the number of lines, counting the (possibly empty) text after the last line break.
    #[must_use]
    pub fn line_amount(&self) -> usize {
        self.lines.len()
    }

    /// Reads the source at `path` through `provider`.
    ///
    /// # Errors
    /// - [`Error::IoError`] if the provider cannot read `path`.
    /// - [`Error::Utf8Error`] if the text is not UTF-8.
    pub fn load(path: &Path, provider: &impl FileProvider) -> Result<Arc<Self>, Error> {
        let source = provider.read_str(path)?;
        Ok(Self::new(path.to_path_buf(), source.into_owned()))
    }

    /// Maps a byte offset, such as [`Token::start`](crate::Token), to its line and column.
    ///
    /// The offset just past the last character is valid and points behind it. Returns [`None`]
    /// for offsets beyond the text or inside a multi-byte character.
    #[must_use]
    pub fn get_location(&self, byte_index: usize) -> Option<Location> {
        if !self.content.is_char_boundary(byte_index) {
            return None;
        }

        let line = self
            .lines
            .partition_point(|range| range.start <= byte_index)
            .checked_sub(1)?;
        let column = self.content[self.lines[line].start..byte_index].chars().count() + 1;

        Some(Location {
            line: line + 1,
            column,
        })
    }

    /// Get the relative path of the source file from the current working directory.
    #[must_use]
    pub fn path_relative(&self) -> Option<PathBuf> {
        pathdiff::diff_paths(&self.path, std::env::current_dir().ok()?)
    }
}

/// A 1-based line and column, counted in characters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// Line number of the location (starts at 1).
    pub line: usize,

    /// Column number of the location (starts at 1).
    pub column: usize,
}

/// Yields the characters of a [`SourceFile`] together with their byte offsets.
#[derive(Debug, Clone)]
pub struct SourceIterator<'a> {
    iterator: CharIndices<'a>,
}

impl Iterator for SourceIterator<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        self.iterator.next()
    }
}

/// Splits `text` into line ranges, each keeping its `\n`, `\r\n` or lone `\r` terminator.
///
/// There is always a final range after the last terminator, possibly empty.
fn line_ranges(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while index < bytes.len() {
        let end = match bytes[index] {
            b'\r' if bytes.get(index + 1) == Some(&b'\n') => index + 2,
            b'\r' | b'\n' => index + 1,
            _ => {
                index += 1;
                continue;
            }
        };
        ranges.push(start..end);
        start = end;
        index = end;
    }
    ranges.push(start..bytes.len());

    ranges
}
