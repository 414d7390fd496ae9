//! Rune-level scanning toolkit.
//!
//! The crate is the engine a hand-written, grammar-specific lexer is built
//! on. It does not know any grammar; it only knows how to move over text:
//!
//! - [`SourceFile`] owns the text and its decoded code points.
//! - [`Cursor`] tracks the scan position, line and column, and offers
//!   bounded lookups and whitespace-skipping look-ahead.
//! - Token matching and collectors (`match_here`, `match_ahead`,
//!   `collect_string`, ...) are methods on the cursor.
//! - [`Cursor::extract_array`] and [`Cursor::extract_dictionary`] read
//!   embedded JSON literals into a [`Value`].
//! - [`scan`] and [`scan_file`] drive a caller-supplied step closure once
//!   per position until end of input.
//!
//! Errors carry a [`Position`]; rendering them with source context is the
//! job of `quill_diagnostic`.
//!
//! ```
//! use quill_scan::{scan, ScanError, SourceFile, Value};
//!
//! let source = SourceFile::new("inline", "tags = [\"a\", \"b\"]");
//! let mut tags = None;
//! scan(&source, |cursor| {
//!     if cursor.match_here("[") {
//!         tags = Some(cursor.extract_array()?);
//!     }
//!     Ok::<(), ScanError>(())
//! })
//! .ok();
//! assert_eq!(tags.and_then(|v| v.as_array().map(<[Value]>::len)), Some(2));
//! ```

mod cursor;
mod drive;
mod error;
mod matcher;
pub mod pattern;
mod source;
mod value;

pub use cursor::{Cursor, Direction, Position, SkipSet};
pub use drive::{scan, scan_file, scan_with, ScanOptions};
pub use error::{ScanError, ScanErrorKind, ScanFileError};
pub use pattern::{Token, TokenPattern};
pub use source::{LoadError, SourceFile};
pub use value::Value;
