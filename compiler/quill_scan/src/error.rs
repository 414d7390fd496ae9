//! Scan error types.
//!
//! Low-level primitives never fail; they return booleans or best-effort
//! strings. A [`ScanError`] is produced by the structured-value reader or by
//! a caller's step closure, and stops the scan. Rendering it with source
//! context is left to the top-level driver.

use thiserror::Error;

use crate::{Cursor, LoadError, Position};

/// What went wrong during a scan.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// A character that cannot start or continue the construct being read.
    #[error("unexpected character '{found}', expected {expected}")]
    UnexpectedChar { found: char, expected: &'static str },
    /// Input ended inside a construct.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    /// Unknown `\x` escape inside a string literal.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    /// Malformed or unpaired `\uXXXX` escape.
    #[error("invalid unicode escape")]
    InvalidUnicodeEscape,
    /// Number literal that does not parse.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    /// Error raised by a caller's step closure.
    #[error("{0}")]
    Custom(String),
}

/// A scan error anchored at a source position.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind} at {position}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub position: Position,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, position: Position) -> Self {
        ScanError { kind, position }
    }

    /// Caller-raised error at the cursor's current position.
    #[cold]
    pub fn custom(cursor: &Cursor<'_>, message: impl Into<String>) -> Self {
        ScanError::new(ScanErrorKind::Custom(message.into()), cursor.position())
    }

    /// The message without the position suffix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Failure of [`scan_file`](crate::scan_file): either the file could not be
/// loaded or the scan itself stopped with an error.
#[derive(Debug, Error)]
pub enum ScanFileError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Scan(#[from] ScanError),
}
