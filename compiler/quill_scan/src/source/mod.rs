//! Source text decoded into code points.
//!
//! A [`SourceFile`] is loaded once, fully into memory, and is immutable for
//! the rest of the scan. The cursor indexes into the decoded code point
//! sequence rather than the UTF-8 bytes, so every position the engine reports
//! counts characters, not bytes.
//!
//! # Encoding
//!
//! Input is expected to be UTF-8. Invalid sequences are not an error: they
//! decode to U+FFFD so that a scan can still report a position for them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Cursor;

/// Failure to load a source file from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No file exists at the path.
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },
    /// The file exists but could not be read.
    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path } | LoadError::Read { path, .. } => path,
        }
    }
}

/// Immutable source text plus its code point sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
    chars: Vec<char>,
}

impl SourceFile {
    /// Create a source file from in-memory text.
    ///
    /// `path` is only used for reporting.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        let chars = text.chars().collect();
        SourceFile {
            path: path.into(),
            text,
            chars,
        }
    }

    /// Read the whole file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        };
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded source");
        Ok(Self::new(path, text))
    }

    /// Path the source was loaded from (or labelled with).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The decoded code points.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of code points.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the source has no code points.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Create a [`Cursor`] positioned on the first code point.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }
}
