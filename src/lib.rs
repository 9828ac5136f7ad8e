//! # json_pull
//!
//! A lazy, pull-based JSON tokenizer and recursive-descent parser.
//!
//! ## What is json_pull?
//!
//! `json_pull` turns an in-memory string of JSON text into a typed token
//! stream and then into a [`Value`] tree, with a precise error taxonomy tied
//! to the exact point of failure. Both stages are cooperative pull cursors:
//! nothing is lexed or parsed until the caller asks for the next step.
//!
//! ## Key Features
//!
//! - **Lazy Tokenizing**: [`Tokenizer`] lexes one token per `advance` call,
//!   never scanning ahead of the current token
//! - **Precise Errors**: every lexical and grammatical violation produces a
//!   distinct [`ParseError`] with a stable, testable message
//! - **Ordered Objects**: objects preserve property insertion order via an
//!   [`IndexMap`](indexmap::IndexMap)-backed [`JsonMap`]
//! - **Canonical Rendering**: every [`Value`] serializes back to compact
//!   JSON text via `Display`
//! - **Serde Compatible**: [`Value`] implements `Serialize`/`Deserialize`
//!   for bridging into the wider serde ecosystem
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! json_pull = "0.1"
//! ```
//!
//! ### Parsing
//!
//! ```rust
//! use json_pull::parse;
//!
//! let value = parse("{\"name\":\"Alice\",\"tags\":[\"admin\",\"user\"]}").unwrap();
//!
//! let object = value.as_object().unwrap();
//! assert_eq!(object.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! assert_eq!(object.get("tags").and_then(|v| v.as_array()).map(Vec::len), Some(2));
//! ```
//!
//! ### Canonical Re-serialization
//!
//! Rendering inserts no whitespace, keeps object properties in insertion
//! order, and re-renders numbers from their parsed values (so `1.0` becomes
//! `1`):
//!
//! ```rust
//! use json_pull::parse;
//!
//! let value = parse(" { \"a\" : 1.0 , \"b\" : [ ] } ").unwrap();
//! assert_eq!(value.to_string(), "{\"a\":1,\"b\":[]}");
//! ```
//!
//! ### Building Values with the json! Macro
//!
//! ```rust
//! use json_pull::{json, Value};
//!
//! let data = json!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "json"]
//! });
//!
//! if let Value::Object(obj) = data {
//!     assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ### Driving the Tokenizer Directly
//!
//! ```rust
//! use json_pull::{Token, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::new("[1]");
//! while tokenizer.advance().unwrap() {
//!     println!("{:?}", tokenizer.current());
//! }
//! ```
//!
//! ## Error Reporting
//!
//! Errors are raised at the first violation; there is no recovery or
//! skip-and-continue:
//!
//! ```rust
//! use json_pull::parse;
//!
//! assert_eq!(parse("").unwrap_err().to_string(), "Missing JSON value.");
//! assert_eq!(
//!     parse("[1 2]").unwrap_err().to_string(),
//!     "Expected \",\" or \"]\", but found \"2\" instead.",
//! );
//! ```
//!
//! ## Scope
//!
//! `json_pull` operates on a fully materialized in-memory string. It does not
//! validate against schemas, preserve original formatting for round-tripping,
//! or parse across streaming I/O chunk boundaries. Each `parse` call is
//! single-threaded, fully synchronous, and owns its cursor, tokenizer, and
//! partially built tree exclusively until it returns or fails.

pub mod cursor;
pub mod error;
pub mod macros;
pub mod map;
pub mod parser;
pub mod token;
pub mod tokenizer;
pub mod value;

pub use cursor::{CharCursor, PullCursor};
pub use error::{ParseError, Result};
pub use map::JsonMap;
pub use parser::{parse, parse_value};
pub use token::{Token, TokenKind};
pub use tokenizer::{read_digits, read_number, read_unsigned_integer, tokenize, Tokenizer};
pub use value::{JsonString, Value};

use std::io;

/// Parses a JSON value from bytes of UTF-8 text.
///
/// # Examples
///
/// ```rust
/// use json_pull::parse_slice;
///
/// let value = parse_slice(b"[1,2,3]").unwrap();
/// assert_eq!(value.as_array().map(Vec::len), Some(3));
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not a valid JSON
/// value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice(bytes: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(bytes).map_err(|e| ParseError::message(e.to_string()))?;
    parse(text)
}

/// Reads a full JSON value from an I/O stream.
///
/// The reader is drained into memory first; this crate does not parse across
/// chunk boundaries.
///
/// # Examples
///
/// ```rust
/// use json_pull::parse_reader;
/// use std::io::Cursor;
///
/// let value = parse_reader(Cursor::new(b"{\"x\":1}")).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text is not a valid JSON value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R: io::Read>(mut reader: R) -> Result<Value> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| ParseError::message(e.to_string()))?;
    parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render_round_trip() {
        let text = "{\"id\":123,\"name\":\"Alice\",\"active\":true}";
        let value = parse(text).unwrap();
        assert_eq!(value.to_string(), text);
    }

    #[test]
    fn test_parse_slice() {
        assert_eq!(parse_slice(b"null").unwrap(), Value::Null);
        assert!(parse_slice(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn test_parse_reader() {
        let value = parse_reader(io::Cursor::new(b"[true,false]")).unwrap();
        assert_eq!(value.to_string(), "[true,false]");
    }

    #[test]
    fn test_macro_and_parser_agree() {
        let built = json!({ "a": 1, "b": [true, null] });
        let parsed = parse("{\"a\":1,\"b\":[true,null]}").unwrap();
        assert_eq!(built, parsed);
    }
}
