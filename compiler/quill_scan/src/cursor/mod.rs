//! Code point cursor with incremental line/column tracking.
//!
//! The cursor advances through a [`SourceFile`] one code point at a time.
//! Line and column are updated on every advance instead of being recomputed
//! from an offset, so reporting a position is O(1) no matter how far the scan
//! has run.
//!
//! # End of Input
//!
//! Past the last code point [`current()`](Cursor::current) is `None`. That
//! sentinel is distinct from every valid code point (including U+0000, which
//! is ordinary content here). Advancing at end of input keeps incrementing
//! the index, but line and column stop changing and every lookup saturates
//! to `None`.
//!
//! # Column Convention
//!
//! `column` counts the characters consumed on the current line. Advancing
//! onto a newline resets it to 0 and bumps `line`, so the newline belongs to
//! the line it starts. Advancing onto the first character of a line sets it
//! to 1; in other words, for any non-newline character `column` is its
//! 1-based column.

use std::fmt;

use bitflags::bitflags;

use crate::SourceFile;

bitflags! {
    /// Characters that look-ahead walks over.
    ///
    /// [`Cursor::peek`] and [`Cursor::match_ahead`](crate::Cursor::match_ahead)
    /// treat these as formatting, not content. The empty set gives exact
    /// adjacency.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SkipSet: u8 {
        const SPACE = 1 << 0;
        const TAB = 1 << 1;
        const NEWLINE = 1 << 2;
        const CARRIAGE_RETURN = 1 << 3;
    }
}

impl SkipSet {
    /// Space, tab and newline.
    pub const WHITESPACE: SkipSet = SkipSet::SPACE.union(SkipSet::TAB).union(SkipSet::NEWLINE);

    /// Returns `true` if `c` belongs to the set.
    #[inline]
    pub fn matches(self, c: char) -> bool {
        match c {
            ' ' => self.contains(SkipSet::SPACE),
            '\t' => self.contains(SkipSet::TAB),
            '\n' => self.contains(SkipSet::NEWLINE),
            '\r' => self.contains(SkipSet::CARRIAGE_RETURN),
            _ => false,
        }
    }
}

impl Default for SkipSet {
    fn default() -> Self {
        SkipSet::WHITESPACE
    }
}

/// Walk direction for [`Cursor::peek`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    #[inline]
    fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

/// Snapshot of a cursor's place in the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Code point index.
    pub index: usize,
    /// 0-based line.
    pub line: usize,
    /// Characters consumed on the line (see the module docs).
    pub column: usize,
}

impl Position {
    /// 1-based line for display.
    pub fn display_line(&self) -> usize {
        self.line + 1
    }

    /// 1-based column for display.
    ///
    /// A newline position has column 0; it is shown as column 1 of the line
    /// it starts.
    pub fn display_column(&self) -> usize {
        self.column.max(1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.display_line(), self.display_column())
    }
}

/// Convert a code point index to the signed domain used by lookups.
#[inline]
fn signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

/// Cursor over the code points of a [`SourceFile`].
///
/// The cursor is [`Copy`], so a caller can snapshot it before a speculative
/// read and restore it by assignment.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a SourceFile,
    /// Code point index of `current`.
    index: usize,
    /// Code point at `index`, or `None` past the end.
    current: Option<char>,
    /// 0-based line of `current`.
    line: usize,
    /// Characters consumed on `line`.
    column: usize,
    /// Characters look-ahead walks over.
    skip: SkipSet,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned on the first code point of `source`.
    ///
    /// State starts before the first code point and performs one
    /// [`advance`](Self::advance), so a leading newline is already counted.
    pub fn new(source: &'a SourceFile) -> Self {
        let first = source.chars().first().copied();
        let (line, column) = match first {
            Some('\n') => (1, 0),
            Some(_) => (0, 1),
            None => (0, 0),
        };
        Cursor {
            source,
            index: 0,
            current: first,
            line,
            column,
            skip: SkipSet::default(),
        }
    }

    /// Replace the set of characters look-ahead skips.
    #[must_use]
    pub fn with_skip_set(mut self, skip: SkipSet) -> Self {
        self.skip = skip;
        self
    }

    /// The source being scanned.
    #[inline]
    pub fn source(&self) -> &'a SourceFile {
        self.source
    }

    /// The code point under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns `true` once every code point has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Code point index of the cursor.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// 0-based line of the cursor.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Characters consumed on the current line.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Characters look-ahead skips for this cursor.
    #[inline]
    pub fn skip_set(&self) -> SkipSet {
        self.skip
    }

    /// Snapshot of index, line and column.
    #[inline]
    pub fn position(&self) -> Position {
        Position {
            index: self.index,
            line: self.line,
            column: self.column,
        }
    }

    /// Move to the next code point.
    pub fn advance(&mut self) {
        self.index = self.index.saturating_add(1);
        match self.source.chars().get(self.index) {
            Some(&c) => {
                self.current = Some(c);
                if c == '\n' {
                    self.column = 0;
                    self.line += 1;
                } else {
                    self.column += 1;
                }
            }
            None => self.current = None,
        }
    }

    /// Advance `n` times.
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Bounds-checked lookup by code point index.
    ///
    /// `-1` is accepted as "start of file" and yields the first code point.
    /// Any other out-of-range index yields `None`.
    pub fn char_at(&self, i: isize) -> Option<char> {
        if i == -1 {
            return self.source.chars().first().copied();
        }
        usize::try_from(i)
            .ok()
            .and_then(|i| self.source.chars().get(i).copied())
    }

    /// Code point `offset` positions away from the cursor, walking past
    /// characters in the cursor's skip set.
    ///
    /// The walk starts exactly `offset` away and, while the character there
    /// is skippable, keeps stepping in `direction`. The result is therefore
    /// the first non-skippable code point at or beyond the requested
    /// distance. Returns `None` when the walk leaves the source.
    pub fn peek(&self, offset: usize, direction: Direction) -> Option<char> {
        self.peek_with(offset, direction, self.skip)
    }

    /// [`peek`](Self::peek) with an explicit skip set.
    pub fn peek_with(&self, offset: usize, direction: Direction, skip: SkipSet) -> Option<char> {
        let step = direction.step();
        let mut i = signed(self.index).saturating_add(step.saturating_mul(signed(offset)));
        loop {
            let c = self.char_at(i)?;
            if !skip.matches(c) {
                return Some(c);
            }
            i = i.checked_add(step)?;
        }
    }

    /// Forward [`peek`](Self::peek).
    #[inline]
    pub fn next_char(&self, offset: usize) -> Option<char> {
        self.peek(offset, Direction::Forward)
    }

    /// Reverse [`peek`](Self::peek).
    #[inline]
    pub fn prev_char(&self, offset: usize) -> Option<char> {
        self.peek(offset, Direction::Reverse)
    }
}
