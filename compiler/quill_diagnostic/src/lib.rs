//! Diagnostics for scans.
//!
//! A [`Diagnostic`] is a severity, a message and a [`Position`]. The
//! [`TerminalEmitter`] renders it against the [`SourceFile`] it refers to:
//! warnings as a single line, fatal errors with the surrounding lines and a
//! caret under the offending character. The [`Reporter`] ties an emitter to a
//! source and hands out a [`Fatal`] proof for every fatal diagnostic.
//!
//! # Fatal Errors
//!
//! Nothing here exits the process. `Fatal` proves a fatal diagnostic was
//! written; the driver decides what to do with it:
//!
//! ```text
//! let fatal = reporter.report(&err);
//! fatal.exit(); // status 1
//! ```
//!
//! [`Position`]: quill_scan::Position
//! [`SourceFile`]: quill_scan::SourceFile

mod diagnostic;
pub mod emitter;
mod location;
mod reporter;

pub use diagnostic::{Diagnostic, Severity};
pub use emitter::{ColorMode, TerminalEmitter};
pub use location::{LineTable, Location};
pub use reporter::{inspect, Fatal, Reporter, FATAL_EXIT_CODE};
