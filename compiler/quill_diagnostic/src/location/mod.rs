//! Source lines and reported locations.
//!
//! A cursor on a newline is already counted on the line that newline
//! starts, which is never where a human would look for the mistake. Fatal
//! reports therefore go through [`Location::resolve`], which moves positions
//! on a line break (or at end of input right after one) back to the end of
//! the previous line.

use quill_scan::{Position, SourceFile};

/// Pre-computed line start table.
///
/// Byte offsets of each line start; `starts[0]` is always 0. Lines are split
/// on `\n` only.
#[derive(Clone, Debug)]
pub struct LineTable<'a> {
    text: &'a str,
    starts: Vec<usize>,
}

impl<'a> LineTable<'a> {
    /// Scan `text` once for newlines.
    pub fn new(text: &'a str) -> Self {
        let starts = std::iter::once(0)
            .chain(memchr::memchr_iter(b'\n', text.as_bytes()).map(|i| i + 1))
            .collect();
        LineTable { text, starts }
    }

    /// Number of lines, counting the (possibly empty) line after a trailing
    /// newline.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Always `false`: even empty text has one empty line.
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Text of the 0-based line `index`, without its newline.
    pub fn line(&self, index: usize) -> Option<&'a str> {
        let start = *self.starts.get(index)?;
        let end = self
            .starts
            .get(index + 1)
            .map_or(self.text.len(), |next| next - 1);
        self.text.get(start..end)
    }
}

/// A position adjusted for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    /// 0-based line.
    pub line: usize,
    /// 1-based column the caret points at.
    pub column: usize,
    /// 0-based index, within the line, of the character to underline.
    pub highlight: Option<usize>,
}

impl Location {
    /// Adjust `position` for a fatal report.
    ///
    /// If the character at `position` is a newline, or `position` is end of
    /// input right after a trailing newline, the location moves to the
    /// previous line with the column one past its last character. A
    /// character that merely follows a newline stays on its own line.
    ///
    /// Returns `None` when no line can be shown: the source is empty or the
    /// line would underflow.
    pub fn resolve(source: &SourceFile, position: Position) -> Option<Location> {
        if source.is_empty() {
            return None;
        }
        let chars = source.chars();
        let on_newline = chars.get(position.index) == Some(&'\n');
        let after_trailing_newline = position.index >= chars.len() && chars.last() == Some(&'\n');

        if on_newline || after_trailing_newline {
            let line = position.line.checked_sub(1)?;
            let len = LineTable::new(source.text()).line(line)?.chars().count();
            return Some(Location {
                line,
                column: len + 1,
                highlight: None,
            });
        }

        Some(Location {
            line: position.line,
            column: position.display_column(),
            highlight: position.column.checked_sub(1),
        })
    }

    /// 1-based line for display.
    pub fn display_line(&self) -> usize {
        self.line + 1
    }
}
