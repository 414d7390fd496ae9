//! Literal token matching and run collectors.
//!
//! Matching never fails: every method either consumes a full match and
//! reports `true`, or reports `false` and leaves the cursor untouched.
//! Deciding that a mismatch is an error is the caller's business.

use tracing::trace;

use crate::Cursor;

/// Case-insensitive comparison of two code points.
#[inline]
fn eq_ignore_case(found: char, expected: char) -> bool {
    found == expected || found.to_lowercase().eq(expected.to_lowercase())
}

/// Offset `n` positions past `index`, in the signed domain of
/// [`Cursor::char_at`].
#[inline]
fn offset_index(index: usize, n: usize) -> isize {
    isize::try_from(index.saturating_add(n)).unwrap_or(isize::MAX)
}

impl Cursor<'_> {
    /// Match `pattern` starting exactly at the cursor.
    ///
    /// The first character is compared case-insensitively, the rest exactly.
    /// On a match the cursor advances past the whole pattern.
    pub fn match_here(&mut self, pattern: impl AsRef<str>) -> bool {
        let pattern = pattern.as_ref();
        let mut expected = pattern.chars();
        let (Some(first), Some(current)) = (expected.next(), self.current()) else {
            return false;
        };
        if !eq_ignore_case(current, first) {
            return false;
        }
        let index = self.index();
        let mut len = 1;
        for c in expected {
            if self.char_at(offset_index(index, len)) != Some(c) {
                return false;
            }
            len += 1;
        }
        trace!(pattern, index, "match_here");
        self.advance_by(len);
        true
    }

    /// Match `pattern` against the upcoming input, ignoring formatting.
    ///
    /// Characters of the skip set are transparent on both sides: in the
    /// pattern they are wildcards for any amount of whitespace (including
    /// none), and in the input they may separate any two pattern characters.
    /// The first pattern character must sit on the cursor itself and is
    /// compared case-insensitively; later ones are compared exactly.
    ///
    /// On a match the cursor advances past the last matched input character,
    /// so `"go: build"` consumes `go:build` and `go:   build` alike.
    pub fn match_ahead(&mut self, pattern: impl AsRef<str>) -> bool {
        let pattern = pattern.as_ref();
        let skip = self.skip_set();
        let index = self.index();
        // Input offset just past the last matched character.
        let mut consumed = 0;

        for (i, expected) in pattern.chars().enumerate() {
            if skip.matches(expected) {
                continue;
            }
            let matched = if i == 0 {
                self.current().is_some_and(|c| eq_ignore_case(c, expected))
            } else {
                let mut at = consumed;
                while self
                    .char_at(offset_index(index, at))
                    .is_some_and(|c| skip.matches(c))
                {
                    at += 1;
                }
                let found = self.char_at(offset_index(index, at)) == Some(expected);
                consumed = at;
                found
            };
            if !matched {
                return false;
            }
            consumed += 1;
        }

        if consumed == 0 {
            return false;
        }
        trace!(pattern, index, consumed, "match_ahead");
        self.advance_by(consumed);
        true
    }

    /// [`match_ahead`](Self::match_ahead) over several patterns, stopping at
    /// the first that matches.
    pub fn match_any_ahead<I>(&mut self, patterns: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        patterns.into_iter().any(|p| self.match_ahead(p))
    }

    /// Consume and return everything up to (not including) `stop` or end of
    /// input.
    pub fn collect_until(&mut self, stop: char) -> String {
        let mut collected = String::new();
        while let Some(c) = self.current() {
            if c == stop {
                break;
            }
            collected.push(c);
            self.advance();
        }
        collected
    }

    /// Consume and return a run of numeric literal characters
    /// (`0-9`, `.`, `-`).
    pub fn collect_integer(&mut self) -> String {
        let mut collected = String::new();
        while let Some(c) = self.current() {
            if !(c.is_ascii_digit() || c == '.' || c == '-') {
                break;
            }
            collected.push(c);
            self.advance();
        }
        collected
    }

    /// Consume a double-quoted string body; the opening quote must already be
    /// consumed.
    ///
    /// Stops at the first `"` not preceded by `\`. A `\"` pair is kept
    /// verbatim in the result. Leading and trailing spaces are trimmed and
    /// the closing quote is consumed. Unterminated input runs to end of
    /// input.
    pub fn collect_string(&mut self) -> String {
        let mut collected = String::new();
        while let Some(c) = self.current() {
            match c {
                '"' => break,
                '\\' if self.char_at(offset_index(self.index(), 1)) == Some('"') => {
                    collected.push_str("\\\"");
                    self.advance_by(2);
                }
                _ => {
                    collected.push(c);
                    self.advance();
                }
            }
        }
        self.advance();
        collected.trim_matches(' ').to_owned()
    }

    /// Preview the text from the cursor up to and including `until`, without
    /// moving.
    ///
    /// The preview is lower-cased and trimmed of spaces, tabs and newlines,
    /// which makes it suitable for keyword checks like
    /// `cursor.look_ahead(' ') == "const"`.
    pub fn look_ahead(&self, until: char) -> String {
        let mut ahead = String::new();
        for &c in self.source().chars().iter().skip(self.index()) {
            ahead.push(c);
            if c == until {
                break;
            }
        }
        ahead
            .to_lowercase()
            .trim_matches(|c| matches!(c, ' ' | '\t' | '\n'))
            .to_owned()
    }
}
