//! Terminal Emitter
//!
//! Warnings are a single yellow line. Fatal errors show the offending line
//! between its neighbours, with the character at fault underlined and a caret
//! beneath it:
//!
//! ```text
//! unexpected character '?', expected a value
//!
//! ----- config.q:2:9
//! 1 | let x = 1
//! 2 | let y = ?
//!             ^
//! 3 | let z = 3
//! -----
//! ```

use std::io::{self, Write};

use quill_scan::{Cursor, SourceFile};
use tracing::debug;

use super::{paint, ColorMode, Style};
use crate::location::{LineTable, Location};
use crate::{Diagnostic, Severity};

const RULE: &str = "-----";

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Whether output carries ANSI codes.
    pub fn colors(&self) -> bool {
        self.colors
    }

    /// Render `diagnostic` against the source it points into.
    pub fn emit(&mut self, source: &SourceFile, diagnostic: &Diagnostic) {
        let rendered = match diagnostic.severity {
            Severity::Warning => self.render_warning(source, diagnostic),
            Severity::Error => match Location::resolve(source, diagnostic.position) {
                Some(location) => self.render_snippet(source, diagnostic, location),
                None => {
                    debug!(position = %diagnostic.position, "no source line for diagnostic");
                    render_unlocated(source, diagnostic)
                }
            },
        };
        let _ = self.writer.write_all(rendered.as_bytes());
    }

    /// Write the one-line description of the code point under `cursor`.
    pub fn emit_inspect(&mut self, cursor: &Cursor<'_>) {
        let mut out = String::new();
        let position = cursor.position();
        paint(&mut out, self.colors, &format!("[{position}]"), &[Style::Bold]);
        out.push(' ');
        out.push_str(&describe(cursor.current()));
        if let Some(c) = cursor.current() {
            out.push(' ');
            paint(&mut out, self.colors, &u32::from(c).to_string(), &[Style::Dim]);
        }
        out.push('\n');
        let _ = self.writer.write_all(out.as_bytes());
    }

    /// Write a line of plain output.
    pub fn emit_line(&mut self, line: &str) {
        let _ = writeln!(self.writer, "{line}");
    }

    /// Flush any buffered output.
    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn render_warning(&self, source: &SourceFile, diagnostic: &Diagnostic) -> String {
        let text = format!(
            "{}: {} {}:{}",
            diagnostic.severity,
            diagnostic.message,
            source.path().display(),
            diagnostic.position
        );
        let mut out = String::from("\n");
        paint(&mut out, self.colors, &text, &[Style::Yellow]);
        out.push('\n');
        out
    }

    fn render_snippet(
        &self,
        source: &SourceFile,
        diagnostic: &Diagnostic,
        location: Location,
    ) -> String {
        let colors = self.colors;
        let lines = LineTable::new(source.text());
        let previous = location.line.checked_sub(1).and_then(|l| lines.line(l));
        let current = lines.line(location.line).unwrap_or_default();
        let next = lines.line(location.line + 1);
        let width = digits(location.line + usize::from(next.is_some()) + 1);

        let mut out = String::from("\n");
        paint(&mut out, colors, &diagnostic.message, &[Style::Red, Style::Bold]);
        out.push_str("\n\n");
        paint(&mut out, colors, &format!("{RULE} "), &[Style::Dim]);
        out.push_str(&format!(
            "{}:{}:{}\n",
            source.path().display(),
            location.display_line(),
            location.column
        ));

        if let Some(text) = previous {
            paint(&mut out, colors, &gutter(location.line, width, text), &[Style::Dim]);
            out.push('\n');
        }

        let erroring = [Style::Red, Style::Bold];
        match location.highlight.and_then(|h| split_at_char(current, h)) {
            Some((before, at, after)) => {
                paint(&mut out, colors, &gutter(location.display_line(), width, before), &erroring);
                paint(&mut out, colors, at, &[Style::Red, Style::Bold, Style::Underline]);
                paint(&mut out, colors, after, &erroring);
            }
            None => paint(&mut out, colors, &gutter(location.display_line(), width, current), &erroring),
        }
        out.push('\n');

        let mut caret = " ".repeat(width + 3);
        caret.extend(
            current
                .chars()
                .take(location.column.saturating_sub(1))
                .map(|c| if c == '\t' { '\t' } else { ' ' }),
        );
        caret.push('^');
        paint(&mut out, colors, &caret, &[Style::Red]);
        out.push('\n');

        if let Some(text) = next {
            paint(&mut out, colors, &gutter(location.display_line() + 1, width, text), &[Style::Dim]);
            out.push('\n');
        }
        paint(&mut out, colors, RULE, &[Style::Dim]);
        out.push('\n');

        for note in &diagnostic.notes {
            out.push_str("  = ");
            paint(&mut out, colors, "note", &[Style::Bold]);
            out.push_str(&format!(": {note}\n"));
        }
        out.push('\n');
        out
    }
}

impl TerminalEmitter<io::Stdout> {
    /// Create a terminal emitter for stdout.
    pub fn stdout(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stdout(), mode, is_tty)
    }
}

/// Fallback when no source line can be shown.
fn render_unlocated(source: &SourceFile, diagnostic: &Diagnostic) -> String {
    format!(
        "{}: {} {}:{}\n",
        diagnostic.severity,
        diagnostic.message,
        source.path().display(),
        diagnostic.position
    )
}

/// `"{n} | {text}"` with `n` right-aligned to `width`.
fn gutter(n: usize, width: usize, text: &str) -> String {
    format!("{n:>width$} | {text}")
}

fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Split `line` around its `index`-th character.
fn split_at_char(line: &str, index: usize) -> Option<(&str, &str, &str)> {
    let (start, c) = line.char_indices().nth(index)?;
    let end = start + c.len_utf8();
    Some((&line[..start], &line[start..end], &line[end..]))
}

/// Printable name for a code point; whitespace gets a descriptor.
pub(crate) fn describe(c: Option<char>) -> String {
    match c {
        Some('\t') => "TAB".to_owned(),
        Some('\n') => "NEW LINE (\\n)".to_owned(),
        Some('\r') => "CARRIAGE RETURN (\\r)".to_owned(),
        Some(' ') => "SPACE".to_owned(),
        Some(c) => c.to_string(),
        None => "EOF".to_owned(),
    }
}
