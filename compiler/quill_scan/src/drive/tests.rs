use pretty_assertions::assert_eq;

use super::*;
use crate::{LoadError, ScanErrorKind};

fn src(text: &str) -> SourceFile {
    SourceFile::new("test.q", text)
}

#[test]
fn visits_every_position_when_step_consumes_nothing() {
    let source = src("abc");
    let mut seen = Vec::new();
    let result = scan(&source, |cursor| {
        seen.push(cursor.current());
        Ok(())
    });
    assert_eq!(result, Ok(()));
    assert_eq!(seen, [Some('a'), Some('b'), Some('c')]);
}

#[test]
fn step_that_consumes_is_not_advanced_again() {
    let source = src("ab ab x");
    let mut hits = Vec::new();
    scan(&source, |cursor| {
        let at = cursor.index();
        if cursor.match_here("ab") {
            hits.push(at);
        }
        Ok(())
    })
    .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(hits, [0, 3]);
}

#[test]
fn empty_source_never_calls_step() {
    let source = src("");
    let mut calls = 0;
    let result = scan(&source, |_| {
        calls += 1;
        Ok(())
    });
    assert_eq!(result, Ok(()));
    assert_eq!(calls, 0);
}

#[test]
fn first_error_stops_scan() {
    let source = src("ok\nbad here");
    let mut calls = 0;
    let err = scan(&source, |cursor| {
        calls += 1;
        if cursor.match_here("bad") {
            return Err(ScanError::custom(cursor, "bad keyword"));
        }
        Ok(())
    })
    .err()
    .unwrap_or_else(|| panic!("expected error"));

    assert_eq!(err.kind, ScanErrorKind::Custom("bad keyword".to_owned()));
    assert_eq!(err.position.line, 1);
    assert_eq!(err.position.index, 6);
    // o, k, \n, then the step that failed.
    assert_eq!(calls, 4);
}

#[test]
fn value_errors_propagate_with_position() {
    let source = src("x = [1, }");
    let err = scan(&source, |cursor| {
        if cursor.match_here("[") {
            cursor.extract_array()?;
        }
        Ok(())
    })
    .err()
    .unwrap_or_else(|| panic!("expected error"));
    assert_eq!(err.position.index, 8);
}

#[test]
fn options_set_cursor_skip_set() {
    let source = src("a\nb");
    let options = ScanOptions::default().with_skip_set(SkipSet::SPACE | SkipSet::TAB);
    let mut matched = false;
    scan_with(&source, &options, |cursor| {
        assert_eq!(cursor.skip_set(), SkipSet::SPACE | SkipSet::TAB);
        matched |= cursor.match_ahead("ab");
        Ok(())
    })
    .unwrap_or_else(|e| panic!("{e}"));
    assert!(!matched);

    let mut matched = false;
    scan(&source, |cursor| {
        matched |= cursor.match_ahead("ab");
        Ok(())
    })
    .unwrap_or_else(|e| panic!("{e}"));
    assert!(matched);
}

#[test]
fn scan_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
    let path = dir.path().join("input.q");
    std::fs::write(&path, "const x = 1\n").unwrap_or_else(|e| panic!("{e}"));

    let mut constants = 0;
    scan_file(&path, |cursor| {
        if cursor.look_ahead(' ') == "const" && cursor.match_here("const") {
            constants += 1;
        }
        Ok(())
    })
    .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(constants, 1);
}

#[test]
fn scan_file_missing_is_load_error() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
    let err = scan_file(dir.path().join("nope.q"), |_| Ok(()))
        .err()
        .unwrap_or_else(|| panic!("expected error"));
    assert!(matches!(err, ScanFileError::Load(LoadError::NotFound { .. })));
}

#[test]
fn scan_file_wraps_scan_error() {
    let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
    let path = dir.path().join("input.q");
    std::fs::write(&path, "{").unwrap_or_else(|e| panic!("{e}"));

    let err = scan_file(&path, |cursor| {
        if cursor.match_here("{") {
            cursor.extract_dictionary()?;
        }
        Ok(())
    })
    .err()
    .unwrap_or_else(|| panic!("expected error"));
    let ScanFileError::Scan(err) = err else {
        panic!("expected scan error, got {err:?}");
    };
    assert_eq!(err.kind, ScanErrorKind::UnexpectedEof { expected: "a string key" });
}
