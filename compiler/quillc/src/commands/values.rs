//! `quill values`: extract embedded array and object literals.

use std::io::Write;

use quill_diagnostic::Fatal;
use quill_scan::pattern::{LEFT_BRACE, LEFT_BRACKET};
use quill_scan::{scan, ScanError, SourceFile};
use tracing::debug;

use super::Settings;

/// Print every top-level `[...]` and `{...}` literal in `source` as compact
/// JSON, prefixed with the `line:col` of its opening bracket.
///
/// A stray closing bracket is a warning. A malformed literal is fatal.
/// Returns the number of values printed.
pub fn extract_values<W: Write>(
    source: &SourceFile,
    settings: &Settings,
    out: W,
) -> Result<usize, Fatal> {
    let mut reporter = settings.reporter(source, out);
    let mut count = 0;

    let result = scan(source, |cursor| {
        let start = cursor.position();
        let value = if cursor.match_here(LEFT_BRACKET) {
            cursor.extract_array()?
        } else if cursor.match_here(LEFT_BRACE) {
            cursor.extract_dictionary()?
        } else {
            if let Some(c @ (']' | '}')) = cursor.current() {
                reporter.warn(cursor, format!("unmatched '{c}'"));
            }
            return Ok(());
        };

        let json = serde_json::to_string(&value)
            .map_err(|err| ScanError::custom(cursor, format!("cannot render value: {err}")))?;
        reporter.line(&format!("{start} {json}"));
        count += 1;
        Ok(())
    });

    match result {
        Ok(()) => {
            debug!(count, warnings = reporter.warning_count(), "values extracted");
            reporter.flush();
            Ok(count)
        }
        Err(err) => Err(reporter.report(&err)),
    }
}
