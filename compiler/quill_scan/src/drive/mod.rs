//! Top-level scan loop.
//!
//! The driver owns the loop; the caller owns the grammar. A step closure is
//! called once per position with the cursor. It may consume any amount of
//! input. If it consumed nothing, the driver advances one code point so the
//! loop always makes progress. The first error stops the scan and is
//! returned unchanged.

use std::path::Path;

use tracing::debug;

use crate::{Cursor, ScanError, ScanFileError, SkipSet, SourceFile};

/// Knobs for a scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Characters look-ahead treats as formatting.
    pub skip: SkipSet,
}

impl ScanOptions {
    #[must_use]
    pub fn with_skip_set(mut self, skip: SkipSet) -> Self {
        self.skip = skip;
        self
    }
}

/// Scan `source` with default options.
pub fn scan<F>(source: &SourceFile, step: F) -> Result<(), ScanError>
where
    F: FnMut(&mut Cursor<'_>) -> Result<(), ScanError>,
{
    scan_with(source, &ScanOptions::default(), step)
}

/// Scan `source`, calling `step` until end of input.
pub fn scan_with<F>(source: &SourceFile, options: &ScanOptions, mut step: F) -> Result<(), ScanError>
where
    F: FnMut(&mut Cursor<'_>) -> Result<(), ScanError>,
{
    debug!(path = %source.path().display(), chars = source.len(), "scan started");
    let mut cursor = source.cursor().with_skip_set(options.skip);
    let mut steps = 0usize;

    while !cursor.is_eof() {
        let before = cursor.index();
        if let Err(err) = step(&mut cursor) {
            debug!(position = %err.position, steps, "scan stopped");
            return Err(err);
        }
        if cursor.index() == before {
            cursor.advance();
        }
        steps += 1;
    }

    debug!(steps, lines = cursor.line() + 1, "scan finished");
    Ok(())
}

/// Load `path` and scan it with default options.
///
/// The source is loaded once and dropped when the scan returns; use
/// [`SourceFile::load`] and [`scan_with`] to keep it for error rendering.
pub fn scan_file<F>(path: impl AsRef<Path>, step: F) -> Result<(), ScanFileError>
where
    F: FnMut(&mut Cursor<'_>) -> Result<(), ScanError>,
{
    let source = SourceFile::load(path)?;
    scan(&source, step)?;
    Ok(())
}

#[cfg(test)]
mod tests;
