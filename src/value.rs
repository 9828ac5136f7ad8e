//! The JSON value tree.
//!
//! This module provides the [`Value`] enum, the immutable-shape result of a
//! successful parse: one variant per JSON value kind, plus an `Unknown`
//! variant for raw text that could not be classified. It's useful both as the
//! parser's output and for building JSON structures programmatically.
//!
//! ## Core Types
//!
//! - [`Value`]: a tagged union over the seven value kinds
//! - [`JsonString`]: a string value together with its quote character and
//!   whether a closing quote was present
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use json_pull::{json, Value};
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! let obj = json!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ### Canonical Rendering
//!
//! `Display` renders canonical JSON text: no inserted whitespace, object
//! properties in insertion order, numbers via Rust's shortest round-trip
//! float formatting (so `1.0` renders as `1`).
//!
//! ```rust
//! use json_pull::parse;
//!
//! let value = parse("{ \"a\" : [ 1.0 , true ] }").unwrap();
//! assert_eq!(value.to_string(), "{\"a\":[1,true]}");
//! ```

use crate::JsonMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A string value: its raw body text, the quote character it was written
/// with, and whether a closing quote was present.
///
/// The quote is always a single `'` or `"` (asserted at construction;
/// anything else is a programmer error). `has_closing_quote` is only `false`
/// for strings built from unterminated source text during recovery-oriented
/// construction; the parser never produces such values on the happy path.
///
/// The body text is kept raw: escape sequences are not decoded, and
/// rendering emits the body verbatim between its quotes.
///
/// # Examples
///
/// ```rust
/// use json_pull::JsonString;
///
/// let s = JsonString::new("hello");
/// assert_eq!(s.quote(), '"');
/// assert_eq!(s.to_string(), "\"hello\"");
///
/// let s = JsonString::with_quote("hello", '\'');
/// assert_eq!(s.to_string(), "'hello'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonString {
    value: String,
    quote: char,
    has_closing_quote: bool,
}

impl JsonString {
    /// Creates a double-quoted, terminated string value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        JsonString::with_quote(value, '"')
    }

    /// Creates a terminated string value with the given quote character.
    ///
    /// # Panics
    ///
    /// Panics if `quote` is not `'` or `"`.
    #[must_use]
    pub fn with_quote(value: impl Into<String>, quote: char) -> Self {
        assert!(
            quote == '"' || quote == '\'',
            "string quote must be ' or \", got {quote:?}"
        );
        JsonString {
            value: value.into(),
            quote,
            has_closing_quote: true,
        }
    }

    /// Creates a string value whose source text had no closing quote.
    ///
    /// # Panics
    ///
    /// Panics if `quote` is not `'` or `"`.
    #[must_use]
    pub fn unterminated(value: impl Into<String>, quote: char) -> Self {
        let mut string = JsonString::with_quote(value, quote);
        string.has_closing_quote = false;
        string
    }

    /// Returns the raw body text, without quotes.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the quote character (`'` or `"`).
    #[must_use]
    pub fn quote(&self) -> char {
        self.quote
    }

    /// Returns `false` only for strings built from unterminated source text.
    #[must_use]
    pub fn has_closing_quote(&self) -> bool {
        self.has_closing_quote
    }
}

impl fmt::Display for JsonString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quote, self.value)?;
        if self.has_closing_quote {
            write!(f, "{}", self.quote)?;
        }
        Ok(())
    }
}

/// A dynamically-typed representation of any JSON value.
///
/// The result of [`parse`](crate::parse): a tagged union matched exhaustively
/// everywhere, so the compiler enforces that every kind is handled.
///
/// # Examples
///
/// ```rust
/// use json_pull::Value;
///
/// let null = Value::Null;
/// let num = Value::Number(42.0);
/// let text = Value::string("hello");
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Number(f64),
    String(JsonString),
    Array(Vec<Value>),
    Object(JsonMap),
    /// Raw text that could not be classified as any other kind.
    Unknown(String),
}

impl Value {
    /// Creates a double-quoted string value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_pull::Value;
    ///
    /// assert_eq!(Value::string("x").to_string(), "\"x\"");
    /// ```
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Value::String(JsonString::new(value))
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if the value is unclassified raw text.
    #[inline]
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a number, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a string, returns its body text. Otherwise returns
    /// `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.value()),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns
    /// `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Renders canonical JSON text: no inserted whitespace, insertion-order
    /// object properties, double-quoted property names, shortest round-trip
    /// number formatting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
            Value::Object(map) => {
                write!(f, "{{")?;
                for (i, (name, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "\"{}\":{}", name, value)?;
                }
                write!(f, "}}")
            }
            Value::Unknown(text) => f.write_str(text),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s.value()),
            Value::Array(elements) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                use serde::ser::SerializeMap;
                let mut object = serializer.serialize_map(Some(map.len()))?;
                for (name, value) in map.iter() {
                    object.serialize_entry(name, value)?;
                }
                object.end()
            }
            Value::Unknown(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Boolean(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::string(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::string(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut elements = Vec::new();
                while let Some(element) = seq.next_element()? {
                    elements.push(element);
                }
                Ok(Value::Array(elements))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut object = JsonMap::new();
                while let Some((name, value)) = map.next_entry()? {
                    object.insert(name, value);
                }
                Ok(Value::Object(object))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting values from Value
impl TryFrom<Value> for f64 {
    type Error = crate::ParseError;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n),
            _ => Err(crate::ParseError::message(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::ParseError;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Boolean(b) => Ok(b),
            _ => Err(crate::ParseError::message(format!(
                "expected boolean, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::ParseError;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s.value),
            _ => Err(crate::ParseError::message(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::string(value)
    }
}

impl From<JsonString> for Value {
    fn from(value: JsonString) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<JsonMap> for Value {
    fn from(value: JsonMap) -> Self {
        Value::Object(value)
    }
}
