//! Core diagnostic types.
//!
//! Defines [`Diagnostic`] and [`Severity`], the values every scan reports
//! through.

use std::fmt;

use quill_scan::{Cursor, Position, ScanError};

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// Stops the scan.
    Error,
    /// Informational; the scan continues unchanged.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
        }
    }
}

/// A message anchored at a source position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Where the diagnostic points. Defaults to the start of the source.
    pub position: Position,
    /// Extra context printed after the source snippet.
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(severity: Severity, message: impl Into<String>) -> Self {
        Diagnostic {
            severity,
            message: message.into(),
            position: Position::default(),
            notes: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    #[cold]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new_with_severity(Severity::Error, message)
    }

    /// Create a new warning diagnostic.
    #[cold]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new_with_severity(Severity::Warning, message)
    }

    /// Error diagnostic for a scan error, at the error's position.
    #[cold]
    pub fn from_scan_error(err: &ScanError) -> Self {
        Self::error(err.message()).at_position(err.position)
    }

    /// Anchor at the cursor's current position.
    pub fn at(self, cursor: &Cursor<'_>) -> Self {
        self.at_position(cursor.position())
    }

    pub fn at_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Add a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<&ScanError> for Diagnostic {
    fn from(err: &ScanError) -> Self {
        Diagnostic::from_scan_error(err)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.severity, self.message, self.position)
    }
}
