//! Error types for JSON tokenizing and parsing.
//!
//! Both the tokenizer and the parser raise a [`ParseError`] immediately at the
//! first grammar violation; there is no recovery or skip-and-continue. A
//! single malformed token or value aborts the entire parse and discards any
//! partially built tree.
//!
//! ## Error Taxonomy
//!
//! - **Missing**: a required lexical or grammatical element was absent
//! - **MissingExpected**: like `Missing`, but a specific character was
//!   expected (the message names the character and its code point)
//! - **Wrong**: an element was present but did not match the expected set
//! - **UnexpectedToken**: a token was found where none was permitted
//! - **InvalidStringCharacter**: a string body contained a character outside
//!   the permitted code-point ranges
//! - **Message**: plain-text catch-all for structural failures
//!
//! Programmer errors (reading a cursor before advancing it, constructing a
//! string value with a quote character other than `'` or `"`) are not part of
//! this taxonomy; they fail fast with a panic.
//!
//! ## Examples
//!
//! ```rust
//! use json_pull::{parse, ParseError};
//!
//! let err = parse("").unwrap_err();
//! assert_eq!(err.to_string(), "Missing JSON value.");
//!
//! let err = parse("'abc").unwrap_err();
//! assert_eq!(err.to_string(), "Missing string end quote: \"'\" (39)");
//! ```

use thiserror::Error;

/// Why tokenization or parsing failed.
///
/// The `Display` output of each variant is part of the crate's contract and
/// is asserted by tests; see the module docs for the format of each kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required element was absent.
    #[error("Missing {description}.")]
    Missing { description: String },

    /// A required element was absent and a specific character was expected.
    #[error("Missing {description}: {} ({})", quote_char(.expected), code_point(.expected))]
    MissingExpected { description: String, expected: char },

    /// An element was present but did not match the expected set.
    #[error("Expected {expected}, but found {} instead.", quote_text(.found))]
    Wrong { expected: String, found: String },

    /// A token appeared where none was grammatically permitted.
    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),

    /// A string body contained a character outside the permitted ranges.
    #[error("Invalid string character: {} ({})", quote_char(.found), code_point(.found))]
    InvalidStringCharacter { found: char },

    /// Plain-text structural failure.
    #[error("{0}")]
    Message(String),
}

impl ParseError {
    /// Creates a [`ParseError::Missing`] for the named element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_pull::ParseError;
    ///
    /// let err = ParseError::missing("JSON value");
    /// assert_eq!(err.to_string(), "Missing JSON value.");
    /// ```
    pub fn missing(description: impl Into<String>) -> Self {
        ParseError::Missing {
            description: description.into(),
        }
    }

    /// Creates a [`ParseError::MissingExpected`] naming the expected character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_pull::ParseError;
    ///
    /// let err = ParseError::missing_expected("array closing bracket", ']');
    /// assert_eq!(err.to_string(), "Missing array closing bracket: \"]\" (93)");
    /// ```
    pub fn missing_expected(description: impl Into<String>, expected: char) -> Self {
        ParseError::MissingExpected {
            description: description.into(),
            expected,
        }
    }

    /// Creates a [`ParseError::Wrong`] from an already-joined expected list
    /// and the text actually found.
    pub fn wrong(expected: impl Into<String>, found: impl Into<String>) -> Self {
        ParseError::Wrong {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates a [`ParseError::UnexpectedToken`] carrying the token's text.
    pub fn unexpected_token(text: impl Into<String>) -> Self {
        ParseError::UnexpectedToken(text.into())
    }

    /// Creates a [`ParseError::InvalidStringCharacter`] for the offending character.
    pub fn invalid_string_character(found: char) -> Self {
        ParseError::InvalidStringCharacter { found }
    }

    /// Creates a plain-message error.
    pub fn message(msg: impl Into<String>) -> Self {
        ParseError::Message(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// Wraps text in double quotes, escaping backslashes, double quotes, and
/// common control characters so the result stays on one line.
pub(crate) fn quote_text(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

pub(crate) fn quote_char(ch: &char) -> String {
    quote_text(&ch.to_string())
}

pub(crate) fn code_point(ch: &char) -> u32 {
    *ch as u32
}

/// Joins an expected-set into prose: `a`, `a or b`, `a, b, or c`.
pub(crate) fn join_or(expected: &[&str]) -> String {
    match expected {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}
