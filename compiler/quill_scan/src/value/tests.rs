use pretty_assertions::assert_eq;

use crate::{Position, ScanErrorKind, SourceFile, Value};

fn src(text: &str) -> SourceFile {
    SourceFile::new("test.q", text)
}

/// Read one value from the start of `text`.
fn read(text: &str) -> Result<Value, crate::ScanError> {
    let source = src(text);
    let mut cursor = source.cursor();
    cursor.read_value()
}

fn obj(members: &[(&str, Value)]) -> Value {
    Value::Object(
        members
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect(),
    )
}

// === Arrays ===

#[test]
fn extract_array_mixed_elements() {
    let source = src(r#"[1, 2, "three"] tail"#);
    let mut cursor = source.cursor();
    assert!(cursor.match_here("["));
    let value = cursor.extract_array().unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        value,
        Value::Array(vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::from("three"),
        ])
    );
    // One past the closing bracket.
    assert_eq!(cursor.index(), 15);
    assert_eq!(cursor.current(), Some(' '));
}

#[test]
fn extract_array_empty_and_padded() {
    let source = src("[ \n\t ]");
    let mut cursor = source.cursor();
    cursor.advance();
    assert_eq!(cursor.extract_array(), Ok(Value::Array(Vec::new())));
    assert!(cursor.is_eof());
}

#[test]
fn extract_array_spanning_lines_tracks_position() {
    let source = src("[\n  1,\n  2\n]\nnext");
    let mut cursor = source.cursor();
    cursor.advance();
    let value = cursor.extract_array().unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(value.as_array().map(<[Value]>::len), Some(2));
    assert_eq!(cursor.current(), Some('\n'));
    assert_eq!(cursor.line(), 4);
}

#[test]
fn extract_array_nested() {
    let value = read("[[1, [2]], [], [[[]]]]").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        value,
        Value::Array(vec![
            Value::Array(vec![
                Value::Integer(1),
                Value::Array(vec![Value::Integer(2)]),
            ]),
            Value::Array(vec![]),
            Value::Array(vec![Value::Array(vec![Value::Array(vec![])])]),
        ])
    );
}

#[test]
fn extract_array_trailing_comma_is_error() {
    let err = read("[1, 2,]").err().unwrap_or_else(|| panic!("expected error"));
    assert_eq!(
        err.kind,
        ScanErrorKind::UnexpectedChar {
            found: ']',
            expected: "a value"
        }
    );
    assert_eq!(err.position.index, 6);
}

#[test]
fn extract_array_missing_separator() {
    let err = read("[1 2]").err().unwrap_or_else(|| panic!("expected error"));
    assert_eq!(
        err.kind,
        ScanErrorKind::UnexpectedChar {
            found: '2',
            expected: "',' or ']'"
        }
    );
    assert_eq!(
        err.position,
        Position {
            index: 3,
            line: 0,
            column: 4
        }
    );
}

#[test]
fn extract_array_unterminated() {
    let err = read("[1, 2").err().unwrap_or_else(|| panic!("expected error"));
    assert_eq!(err.kind, ScanErrorKind::UnexpectedEof { expected: "']'" });
    assert_eq!(err.position.index, 5);
}

// === Dictionaries ===

#[test]
fn extract_dictionary_nested() {
    let source = src(r#"{"a": 1, "b": {"c": 2}}; rest"#);
    let mut cursor = source.cursor();
    assert!(cursor.match_here("{"));
    let value = cursor.extract_dictionary().unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        value,
        obj(&[
            ("a", Value::Integer(1)),
            ("b", obj(&[("c", Value::Integer(2))])),
        ])
    );
    assert_eq!(cursor.current(), Some(';'));
}

#[test]
fn extract_dictionary_deeply_nested_braces_balance() {
    let text = r#"{"l1": {"l2": {"l3": {"l4": {"deep": [1, {"x": "}"}]}}}}, "after": true}"#;
    let value = read(text).unwrap_or_else(|e| panic!("{e}"));
    let deep = value
        .get("l1")
        .and_then(|v| v.get("l2"))
        .and_then(|v| v.get("l3"))
        .and_then(|v| v.get("l4"))
        .and_then(|v| v.get("deep"))
        .and_then(Value::as_array);
    assert_eq!(deep.map(<[Value]>::len), Some(2));
    assert_eq!(
        deep.and_then(|items| items[1].get("x")).and_then(Value::as_str),
        Some("}")
    );
    assert_eq!(value.get("after"), Some(&Value::Bool(true)));
}

#[test]
fn extract_dictionary_preserves_key_order() {
    let value = read(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap_or_else(|e| panic!("{e}"));
    let keys: Vec<&str> = value
        .as_object()
        .map(|m| m.iter().map(|(k, _)| k.as_str()).collect())
        .unwrap_or_default();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn extract_dictionary_duplicate_key_replaces_in_place() {
    let value = read(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        value,
        obj(&[("a", Value::Integer(3)), ("b", Value::Integer(2))])
    );
}

#[test]
fn extract_dictionary_unquoted_key_is_error() {
    let err = read("{a: 1}").err().unwrap_or_else(|| panic!("expected error"));
    assert_eq!(
        err.kind,
        ScanErrorKind::UnexpectedChar {
            found: 'a',
            expected: "a string key"
        }
    );
    assert_eq!(err.position.index, 1);
}

#[test]
fn extract_dictionary_missing_colon() {
    let err = read(r#"{"a" 1}"#).err().unwrap_or_else(|| panic!("expected error"));
    assert_eq!(
        err.kind,
        ScanErrorKind::UnexpectedChar {
            found: '1',
            expected: "':'"
        }
    );
}

#[test]
fn extract_dictionary_error_on_later_line() {
    let err = read("{\n  \"a\": 1,\n  \"b\": ?\n}")
        .err()
        .unwrap_or_else(|| panic!("expected error"));
    assert_eq!(err.position.line, 2);
    assert_eq!(err.position.display_column(), 8);
}

#[test]
fn extract_dictionary_unterminated() {
    let err = read(r#"{"a": {"b": 1}"#).err().unwrap_or_else(|| panic!("expected error"));
    assert_eq!(err.kind, ScanErrorKind::UnexpectedEof { expected: "'}'" });
}

// === Scalars ===

#[test]
fn read_keywords() {
    assert_eq!(read("true"), Ok(Value::Bool(true)));
    assert_eq!(read("false"), Ok(Value::Bool(false)));
    assert_eq!(read("null"), Ok(Value::Null));
    assert!(read("nul").is_err());
    assert!(read("tru3").is_err());
}

#[test]
fn read_numbers() {
    assert_eq!(read("0"), Ok(Value::Integer(0)));
    assert_eq!(read("-42"), Ok(Value::Integer(-42)));
    assert_eq!(read("3.5"), Ok(Value::Float(3.5)));
    assert_eq!(read("-1e3"), Ok(Value::Float(-1000.0)));
    assert_eq!(read("2E-2"), Ok(Value::Float(0.02)));
    assert_eq!(
        read("9223372036854775807"),
        Ok(Value::Integer(i64::MAX))
    );
    assert_eq!(
        read("9223372036854775808"),
        Ok(Value::Float(9_223_372_036_854_775_808.0))
    );
}

#[test]
fn read_number_leading_zero_stops() {
    let source = src("012");
    let mut cursor = source.cursor();
    assert_eq!(cursor.read_value(), Ok(Value::Integer(0)));
    assert_eq!(cursor.current(), Some('1'));
}

#[test]
fn read_number_requires_fraction_digits() {
    let err = read("1.").err().unwrap_or_else(|| panic!("expected error"));
    assert_eq!(err.kind, ScanErrorKind::UnexpectedEof { expected: "a digit" });
    assert!(read("-").is_err());
    assert!(read("1e+").is_err());
}

// === Strings ===

#[test]
fn read_string_escapes() {
    assert_eq!(
        read(r#""a\"b\\c\/d\n\t\r\b\f""#),
        Ok(Value::from("a\"b\\c/d\n\t\r\u{8}\u{c}"))
    );
}

#[test]
fn read_string_unicode_escapes() {
    assert_eq!(read(r#""\u00e9\u4E2D""#), Ok(Value::from("\u{e9}\u{4e2d}")));
    assert_eq!(read(r#""\ud83d\ude00""#), Ok(Value::from("\u{1F600}")));
}

#[test]
fn read_string_lone_surrogate_is_replacement() {
    assert_eq!(read(r#""\ud83dx""#), Ok(Value::from("\u{FFFD}x")));
    assert_eq!(read(r#""\ude00""#), Ok(Value::from("\u{FFFD}")));
}

#[test]
fn read_string_invalid_escapes() {
    let err = read(r#""ab\q""#).err().unwrap_or_else(|| panic!("expected error"));
    assert_eq!(err.kind, ScanErrorKind::InvalidEscape('q'));
    assert_eq!(err.position.index, 3);

    let err = read(r#""\u12G4""#).err().unwrap_or_else(|| panic!("expected error"));
    assert_eq!(err.kind, ScanErrorKind::InvalidUnicodeEscape);
    assert_eq!(err.position.index, 1);
}

#[test]
fn read_string_rejects_raw_newline() {
    let err = read("\"a\nb\"").err().unwrap_or_else(|| panic!("expected error"));
    assert_eq!(
        err.kind,
        ScanErrorKind::UnexpectedChar {
            found: '\n',
            expected: "'\"'"
        }
    );
}

#[test]
fn read_string_keeps_non_ascii() {
    assert_eq!(read("\"héllo wörld\""), Ok(Value::from("héllo wörld")));
}

// === Depth ===

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 20_000;
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let value = read(&text).unwrap_or_else(|e| panic!("{e}"));

    let mut levels = 0;
    let mut node = &value;
    while let Some([inner]) = node.as_array() {
        node = inner;
        levels += 1;
    }
    assert_eq!(levels, depth - 1);
    // Dropping a deeply nested value recurses too.
    std::mem::forget(value);
}

// === Value API ===

#[test]
fn accessors() {
    let value = read(r#"{"n": 1, "f": 1.5, "s": "x", "b": false, "z": null}"#)
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(value.get("n").and_then(Value::as_i64), Some(1));
    assert_eq!(value.get("n").and_then(Value::as_f64), Some(1.0));
    assert_eq!(value.get("f").and_then(Value::as_f64), Some(1.5));
    assert_eq!(value.get("f").and_then(Value::as_i64), None);
    assert_eq!(value.get("s").and_then(Value::as_str), Some("x"));
    assert_eq!(value.get("b").and_then(Value::as_bool), Some(false));
    assert!(value.get("z").is_some_and(Value::is_null));
    assert_eq!(value.get("missing"), None);
    assert_eq!(Value::Integer(1).get("n"), None);
    assert_eq!(value.type_name(), "object");
}

#[test]
fn serializes_as_json() {
    let value = read(r#"{"b": [1, 2.5, "x"], "a": {"t": true, "n": null}}"#)
        .unwrap_or_else(|e| panic!("{e}"));
    let json = serde_json::to_string(&value).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(json, r#"{"b":[1,2.5,"x"],"a":{"t":true,"n":null}}"#);
}
