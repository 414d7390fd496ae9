//! Command handlers for the quill CLI.
//!
//! Each submodule implements one subcommand. Shared pieces (settings and
//! source loading) live here.

use std::io::{self, Write};
use std::path::Path;

use quill_diagnostic::{ColorMode, Reporter, TerminalEmitter};
use quill_scan::{LoadError, SourceFile};

mod inspect;
mod values;

pub use inspect::inspect_file;
pub use values::extract_values;

/// Settings shared by every command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub color: ColorMode,
    /// Whether the output is a terminal; consulted for `ColorMode::Auto`.
    pub is_tty: bool,
}

impl Settings {
    fn reporter<'src, W: Write>(&self, source: &'src SourceFile, out: W) -> Reporter<'src, W> {
        Reporter::new(
            source,
            TerminalEmitter::with_color_mode(out, self.color, self.is_tty),
        )
    }
}

/// Read a source file, exiting the process with status 1 on failure.
pub fn read_source(path: &Path) -> SourceFile {
    match SourceFile::load(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{}", load_error_message(&err));
            std::process::exit(1);
        }
    }
}

/// User-facing message for a load failure.
pub fn load_error_message(err: &LoadError) -> String {
    let path = err.path().display();
    match err {
        LoadError::NotFound { .. } => format!("cannot find file '{path}'"),
        LoadError::Read { source, .. } if source.kind() == io::ErrorKind::PermissionDenied => {
            format!("permission denied reading '{path}'")
        }
        LoadError::Read { source, .. } => format!("error reading '{path}': {source}"),
    }
}
