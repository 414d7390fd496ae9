//! Reporting against one source file.
//!
//! A [`Reporter`] pairs a [`SourceFile`] with a [`TerminalEmitter`]. Warnings
//! are written and forgotten. Fatal reports hand back a [`Fatal`], a proof
//! value that can only be obtained by writing a fatal diagnostic. Whoever
//! holds it decides whether the process ends.

use std::fmt;
use std::io::{self, Write};

use quill_scan::{Cursor, ScanError, SourceFile};
use tracing::debug;

use crate::emitter::describe;
use crate::{ColorMode, Diagnostic, TerminalEmitter};

/// Process exit status used by [`Fatal::exit`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// Proof that a fatal diagnostic was written.
///
/// Cannot be constructed outside this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[must_use = "a fatal diagnostic was written; return it or call `exit`"]
pub struct Fatal(());

impl Fatal {
    fn new() -> Self {
        Fatal(())
    }

    /// Terminate the process with [`FATAL_EXIT_CODE`].
    pub fn exit(self) -> ! {
        std::process::exit(FATAL_EXIT_CODE)
    }
}

impl fmt::Display for Fatal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fatal error emitted")
    }
}

/// Writes diagnostics for one source file.
pub struct Reporter<'src, W: Write> {
    source: &'src SourceFile,
    emitter: TerminalEmitter<W>,
    warnings: usize,
}

impl<'src, W: Write> Reporter<'src, W> {
    pub fn new(source: &'src SourceFile, emitter: TerminalEmitter<W>) -> Self {
        Reporter {
            source,
            emitter,
            warnings: 0,
        }
    }

    pub fn source(&self) -> &'src SourceFile {
        self.source
    }

    /// Number of warnings written so far.
    pub fn warning_count(&self) -> usize {
        self.warnings
    }

    /// Write a warning at the cursor. The cursor is not touched.
    pub fn warn(&mut self, cursor: &Cursor<'_>, message: impl Into<String>) {
        self.warning(&Diagnostic::warning(message).at(cursor));
    }

    /// Write a fatal diagnostic at the cursor.
    pub fn fail(&mut self, cursor: &Cursor<'_>, message: impl Into<String>) -> Fatal {
        self.fatal(&Diagnostic::error(message).at(cursor))
    }

    /// Write a fatal diagnostic for a scan error.
    pub fn report(&mut self, err: &ScanError) -> Fatal {
        self.fatal(&Diagnostic::from_scan_error(err))
    }

    /// Write a diagnostic of any severity.
    ///
    /// Returns a [`Fatal`] for errors.
    pub fn emit(&mut self, diagnostic: &Diagnostic) -> Option<Fatal> {
        if diagnostic.is_error() {
            return Some(self.fatal(diagnostic));
        }
        self.warning(diagnostic);
        None
    }

    /// Write the debug description of the code point under the cursor.
    pub fn inspect(&mut self, cursor: &Cursor<'_>) {
        self.emitter.emit_inspect(cursor);
    }

    /// Write a line of plain output.
    pub fn line(&mut self, text: &str) {
        self.emitter.emit_line(text);
    }

    pub fn flush(&mut self) {
        self.emitter.flush();
    }

    fn warning(&mut self, diagnostic: &Diagnostic) {
        self.warnings += 1;
        self.emitter.emit(self.source, diagnostic);
    }

    fn fatal(&mut self, diagnostic: &Diagnostic) -> Fatal {
        debug!(
            path = %self.source.path().display(),
            position = %diagnostic.position,
            message = %diagnostic.message,
            "fatal diagnostic"
        );
        self.emitter.emit(self.source, diagnostic);
        self.emitter.flush();
        Fatal::new()
    }
}

impl<'src> Reporter<'src, io::Stdout> {
    /// Reporter writing to stdout.
    pub fn stdout(source: &'src SourceFile, mode: ColorMode, is_tty: bool) -> Self {
        Reporter::new(source, TerminalEmitter::stdout(mode, is_tty))
    }
}

/// Plain `[line:col] CHAR CODE` description of the code point under the
/// cursor. Whitespace is named (`TAB`, `SPACE`, ...) and end of input is
/// `EOF` with no code.
pub fn inspect(cursor: &Cursor<'_>) -> String {
    let position = cursor.position();
    let name = describe(cursor.current());
    match cursor.current() {
        Some(c) => format!("[{position}] {name} {}", u32::from(c)),
        None => format!("[{position}] {name}"),
    }
}
