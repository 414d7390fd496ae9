//! `quill inspect`: one line per code point.

use std::io::Write;

use quill_diagnostic::Fatal;
use quill_scan::{scan, SourceFile};

use super::Settings;

/// Write `[line:col] CHAR CODE` for every code point of `source`.
pub fn inspect_file<W: Write>(source: &SourceFile, settings: &Settings, out: W) -> Result<(), Fatal> {
    let mut reporter = settings.reporter(source, out);
    let result = scan(source, |cursor| {
        reporter.inspect(cursor);
        Ok(())
    });
    match result {
        Ok(()) => {
            reporter.flush();
            Ok(())
        }
        Err(err) => Err(reporter.report(&err)),
    }
}
