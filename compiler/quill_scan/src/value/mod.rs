//! Embedded structured values.
//!
//! Array and object literals written in JSON syntax are read straight off
//! the cursor by a recursive-descent reader. Nothing is copied out and
//! re-parsed, so error positions point at the offending character and
//! nesting depth is unbounded.
//!
//! # Grammar
//!
//! Strict JSON: double-quoted strings with `\" \\ \/ \b \f \n \r \t \uXXXX`
//! escapes, numbers (`-? int frac? exp?`), `true`, `false`, `null`. Trailing
//! commas and unquoted keys are errors. Whitespace between tokens is space,
//! tab, newline and carriage return, independent of the cursor's skip set.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use tracing::trace;

use crate::{Cursor, ScanError, ScanErrorKind};

/// Minimum stack space to keep available while recursing into nested
/// literals.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 64 * 1024;

/// Stack space to allocate when growing.
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[cfg(not(target_arch = "wasm32"))]
#[inline]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[cfg(target_arch = "wasm32")]
#[inline]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// A decoded structured value.
///
/// Objects are key/value pairs in source order; a repeated key replaces the
/// earlier value in place.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    /// A number without fraction or exponent that fits `i64`.
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Name of the variant, for messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Any number as `f64`.
    #[allow(
        clippy::cast_precision_loss,
        reason = "widening to f64 is the documented behavior for integers"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Look up `key` in an object. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (key, value) in members {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Insert keeping first-seen order; a repeated key overwrites in place.
fn insert_member(members: &mut Vec<(String, Value)>, key: String, value: Value) {
    if let Some(slot) = members.iter_mut().find(|(k, _)| *k == key) {
        slot.1 = value;
    } else {
        members.push((key, value));
    }
}

impl Cursor<'_> {
    /// Read an array literal whose opening `[` has already been consumed.
    ///
    /// Leaves the cursor one past the closing `]`.
    pub fn extract_array(&mut self) -> Result<Value, ScanError> {
        let start = self.index();
        let items = ensure_sufficient_stack(|| self.read_elements())?;
        trace!(start, end = self.index(), len = items.len(), "extract_array");
        Ok(Value::Array(items))
    }

    /// Read an object literal whose opening `{` has already been consumed.
    ///
    /// Nested objects and arrays are balanced at any depth. Leaves the
    /// cursor one past the closing `}`.
    pub fn extract_dictionary(&mut self) -> Result<Value, ScanError> {
        let start = self.index();
        let members = ensure_sufficient_stack(|| self.read_members())?;
        trace!(start, end = self.index(), len = members.len(), "extract_dictionary");
        Ok(Value::Object(members))
    }

    /// Read any JSON value at the cursor, skipping leading whitespace.
    pub fn read_value(&mut self) -> Result<Value, ScanError> {
        self.skip_json_whitespace();
        match self.current() {
            Some('[') => {
                self.advance();
                self.extract_array()
            }
            Some('{') => {
                self.advance();
                self.extract_dictionary()
            }
            Some('"') => {
                self.advance();
                self.read_string_literal().map(Value::String)
            }
            Some('t') => self.read_keyword("true", Value::Bool(true)),
            Some('f') => self.read_keyword("false", Value::Bool(false)),
            Some('n') => self.read_keyword("null", Value::Null),
            Some(c) if c == '-' || c.is_ascii_digit() => self.read_number(),
            Some(c) => Err(self.unexpected(c, "a value")),
            None => Err(self.unexpected_eof("a value")),
        }
    }

    fn read_elements(&mut self) -> Result<Vec<Value>, ScanError> {
        let mut items = Vec::new();
        self.skip_json_whitespace();
        if self.current() == Some(']') {
            self.advance();
            return Ok(items);
        }
        loop {
            items.push(self.read_value()?);
            self.skip_json_whitespace();
            match self.current() {
                Some(',') => self.advance(),
                Some(']') => {
                    self.advance();
                    return Ok(items);
                }
                Some(c) => return Err(self.unexpected(c, "',' or ']'")),
                None => return Err(self.unexpected_eof("']'")),
            }
        }
    }

    fn read_members(&mut self) -> Result<Vec<(String, Value)>, ScanError> {
        let mut members = Vec::new();
        self.skip_json_whitespace();
        if self.current() == Some('}') {
            self.advance();
            return Ok(members);
        }
        loop {
            self.skip_json_whitespace();
            match self.current() {
                Some('"') => self.advance(),
                Some(c) => return Err(self.unexpected(c, "a string key")),
                None => return Err(self.unexpected_eof("a string key")),
            }
            let key = self.read_string_literal()?;

            self.skip_json_whitespace();
            match self.current() {
                Some(':') => self.advance(),
                Some(c) => return Err(self.unexpected(c, "':'")),
                None => return Err(self.unexpected_eof("':'")),
            }
            let value = self.read_value()?;
            insert_member(&mut members, key, value);

            self.skip_json_whitespace();
            match self.current() {
                Some(',') => self.advance(),
                Some('}') => {
                    self.advance();
                    return Ok(members);
                }
                Some(c) => return Err(self.unexpected(c, "',' or '}'")),
                None => return Err(self.unexpected_eof("'}'")),
            }
        }
    }

    /// String body after the opening quote; consumes the closing quote.
    fn read_string_literal(&mut self) -> Result<String, ScanError> {
        let mut out = String::new();
        loop {
            match self.current() {
                Some('"') => {
                    self.advance();
                    return Ok(out);
                }
                Some('\\') => {
                    let escape_start = self.position();
                    self.advance();
                    let decoded = match self.current() {
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some('/') => '/',
                        Some('b') => '\u{8}',
                        Some('f') => '\u{c}',
                        Some('n') => '\n',
                        Some('r') => '\r',
                        Some('t') => '\t',
                        Some('u') => {
                            self.advance();
                            out.push(self.read_unicode_escape(escape_start)?);
                            continue;
                        }
                        Some(c) => {
                            return Err(ScanError::new(ScanErrorKind::InvalidEscape(c), escape_start))
                        }
                        None => return Err(self.unexpected_eof("an escape character")),
                    };
                    out.push(decoded);
                    self.advance();
                }
                Some(c) if u32::from(c) < 0x20 => {
                    return Err(self.unexpected(c, "'\"'"));
                }
                Some(c) => {
                    out.push(c);
                    self.advance();
                }
                None => return Err(self.unexpected_eof("'\"'")),
            }
        }
    }

    /// Decode the digits of a `\u` escape (the `\u` is already consumed).
    ///
    /// Surrogate pairs written as two escapes are combined; a lone surrogate
    /// decodes to U+FFFD.
    fn read_unicode_escape(&mut self, escape_start: crate::Position) -> Result<char, ScanError> {
        let unit = self.read_hex4(escape_start)?;
        if !(0xD800..0xDC00).contains(&unit) {
            return Ok(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
        let index = isize::try_from(self.index()).unwrap_or(isize::MAX);
        if self.current() != Some('\\') || self.char_at(index.saturating_add(1)) != Some('u') {
            return Ok(char::REPLACEMENT_CHARACTER);
        }
        let low_start = self.position();
        self.advance_by(2);
        let low = self.read_hex4(low_start)?;
        if !(0xDC00..0xE000).contains(&low) {
            return Ok(char::REPLACEMENT_CHARACTER);
        }
        let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
        Ok(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn read_hex4(&mut self, escape_start: crate::Position) -> Result<u32, ScanError> {
        let mut unit = 0;
        for _ in 0..4 {
            let digit = self
                .current()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| ScanError::new(ScanErrorKind::InvalidUnicodeEscape, escape_start))?;
            unit = unit * 16 + digit;
            self.advance();
        }
        Ok(unit)
    }

    fn read_number(&mut self) -> Result<Value, ScanError> {
        let start = self.position();
        let mut text = String::new();
        let mut is_float = false;

        if self.current() == Some('-') {
            text.push('-');
            self.advance();
        }
        match self.current() {
            Some('0') => {
                text.push('0');
                self.advance();
            }
            Some(c) if c.is_ascii_digit() => self.push_digits(&mut text),
            Some(c) => return Err(self.unexpected(c, "a digit")),
            None => return Err(self.unexpected_eof("a digit")),
        }

        if self.current() == Some('.') {
            is_float = true;
            text.push('.');
            self.advance();
            self.require_digits(&mut text)?;
        }

        if let Some(e @ ('e' | 'E')) = self.current() {
            is_float = true;
            text.push(e);
            self.advance();
            if let Some(sign @ ('+' | '-')) = self.current() {
                text.push(sign);
                self.advance();
            }
            self.require_digits(&mut text)?;
        }

        if !is_float {
            if let Ok(i) = text.parse::<i64>() {
                return Ok(Value::Integer(i));
            }
        }
        match text.parse::<f64>() {
            Ok(f) => Ok(Value::Float(f)),
            Err(_) => Err(ScanError::new(ScanErrorKind::InvalidNumber(text), start)),
        }
    }

    fn push_digits(&mut self, text: &mut String) {
        while let Some(c) = self.current().filter(char::is_ascii_digit) {
            text.push(c);
            self.advance();
        }
    }

    fn require_digits(&mut self, text: &mut String) -> Result<(), ScanError> {
        match self.current() {
            Some(c) if c.is_ascii_digit() => {
                self.push_digits(text);
                Ok(())
            }
            Some(c) => Err(self.unexpected(c, "a digit")),
            None => Err(self.unexpected_eof("a digit")),
        }
    }

    fn read_keyword(&mut self, word: &'static str, value: Value) -> Result<Value, ScanError> {
        for expected in word.chars() {
            match self.current() {
                Some(c) if c == expected => self.advance(),
                Some(c) => return Err(self.unexpected(c, word)),
                None => return Err(self.unexpected_eof(word)),
            }
        }
        Ok(value)
    }

    fn skip_json_whitespace(&mut self) {
        while matches!(self.current(), Some(' ' | '\t' | '\n' | '\r')) {
            self.advance();
        }
    }

    #[cold]
    fn unexpected(&self, found: char, expected: &'static str) -> ScanError {
        ScanError::new(
            ScanErrorKind::UnexpectedChar { found, expected },
            self.position(),
        )
    }

    #[cold]
    fn unexpected_eof(&self, expected: &'static str) -> ScanError {
        ScanError::new(ScanErrorKind::UnexpectedEof { expected }, self.position())
    }
}

#[cfg(test)]
mod tests;
