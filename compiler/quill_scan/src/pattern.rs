//! Token pattern vocabulary.
//!
//! A [`TokenPattern`] is a named literal: an operator, a delimiter, a keyword
//! or a type marker. Patterns are what the matcher compares the cursor
//! against; the engine attaches no further meaning to them. Callers are free
//! to define their own alongside these:
//!
//! ```
//! use quill_scan::TokenPattern;
//!
//! const BUILD: TokenPattern = TokenPattern::new("go:build");
//! assert_eq!(BUILD.len(), 8);
//! ```

use std::fmt;

use crate::Value;

/// A named literal pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenPattern(&'static str);

impl TokenPattern {
    pub const fn new(text: &'static str) -> Self {
        TokenPattern(text)
    }

    /// The literal text.
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Length in code points.
    pub fn len(self) -> usize {
        self.0.chars().count()
    }

    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for TokenPattern {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for TokenPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// === Value Types ===

pub const STRING: TokenPattern = TokenPattern::new("\"");
/// Characters a numeric literal is made of; see
/// [`Cursor::collect_integer`](crate::Cursor::collect_integer).
pub const INTEGER: TokenPattern = TokenPattern::new("0123456789.-");
pub const DICTIONARY: TokenPattern = TokenPattern::new("{");
pub const ARRAY: TokenPattern = TokenPattern::new("[");
pub const BOOL: TokenPattern = TokenPattern::new("boolean");
pub const DATE: TokenPattern = TokenPattern::new("date");
pub const TRUE: TokenPattern = TokenPattern::new("true");
pub const FALSE: TokenPattern = TokenPattern::new("false");

// === Categories ===

pub const COMMENT: TokenPattern = TokenPattern::new("comment");
pub const EXPRESSION: TokenPattern = TokenPattern::new("expression");
pub const VARIABLE: TokenPattern = TokenPattern::new("var");
pub const CONSTANT: TokenPattern = TokenPattern::new("const");
pub const CONDITIONAL: TokenPattern = TokenPattern::new("conditional");
pub const ITERATOR: TokenPattern = TokenPattern::new("iterator");

// === Operators and Delimiters ===

pub const AT: TokenPattern = TokenPattern::new("@");
pub const DOLLAR_SIGN: TokenPattern = TokenPattern::new("$");
pub const ASTERISK: TokenPattern = TokenPattern::new("*");
pub const HASH: TokenPattern = TokenPattern::new("#");
pub const COLON: TokenPattern = TokenPattern::new(":");
pub const SEMICOLON: TokenPattern = TokenPattern::new(";");
pub const PERIOD: TokenPattern = TokenPattern::new(".");
pub const ADD_TO: TokenPattern = TokenPattern::new("+=");
pub const IS: TokenPattern = TokenPattern::new("==");
pub const NOT: TokenPattern = TokenPattern::new("!=");
pub const GREATER_THAN: TokenPattern = TokenPattern::new(">");
pub const GREATER_OR_EQUAL: TokenPattern = TokenPattern::new(">=");
pub const LESS_THAN: TokenPattern = TokenPattern::new("<");
pub const LESS_OR_EQUAL: TokenPattern = TokenPattern::new("<=");
pub const EXCLAMATION: TokenPattern = TokenPattern::new("!");
pub const BETWEEN: TokenPattern = TokenPattern::new("<>");
pub const FORWARD_SLASH: TokenPattern = TokenPattern::new("/");
pub const BACK_SLASH: TokenPattern = TokenPattern::new("\\");
pub const PLUS: TokenPattern = TokenPattern::new("+");
pub const MODULUS: TokenPattern = TokenPattern::new("%");
pub const LEFT_PAREN: TokenPattern = TokenPattern::new("(");
pub const RIGHT_PAREN: TokenPattern = TokenPattern::new(")");
pub const LEFT_BRACE: TokenPattern = TokenPattern::new("{");
pub const RIGHT_BRACE: TokenPattern = TokenPattern::new("}");
pub const LEFT_BRACKET: TokenPattern = TokenPattern::new("[");
pub const RIGHT_BRACKET: TokenPattern = TokenPattern::new("]");
pub const DASH: TokenPattern = TokenPattern::new("-");
pub const DOUBLE_QUOTE: TokenPattern = TokenPattern::new("\"");
pub const SINGLE_QUOTE: TokenPattern = TokenPattern::new("'");
pub const EQUALITY: TokenPattern = TokenPattern::new("=");
pub const SPACE: TokenPattern = TokenPattern::new(" ");
pub const TAB: TokenPattern = TokenPattern::new("\t");
pub const EOL: TokenPattern = TokenPattern::new("\n");

/// A classified unit produced by a caller's lexer.
///
/// The engine never builds tokens; this is the record callers assemble from
/// matcher and collector results.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Pattern or category the token was recognised as.
    pub kind: TokenPattern,
    /// Caller-assigned name.
    pub identifier: String,
    /// Type marker of `value` (`STRING`, `INTEGER`, `ARRAY`, ...).
    pub value_type: TokenPattern,
    pub value: Value,
}

impl Token {
    pub fn new(
        kind: TokenPattern,
        identifier: impl Into<String>,
        value_type: TokenPattern,
        value: Value,
    ) -> Self {
        Token {
            kind,
            identifier: identifier.into(),
            value_type,
            value,
        }
    }
}
