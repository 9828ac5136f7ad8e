//! The recursive-descent parser.
//!
//! [`parse`] consumes the token stream produced by a [`Tokenizer`] and builds
//! a [`Value`] tree. The parser owns the grammar: one procedure per rule,
//! with arrays and objects recursing through [`parse_value`] for their
//! nested values.
//!
//! Whitespace is skipped by advancing past at most one whitespace token per
//! skip point; the tokenizer's greedy accumulation guarantees there is never
//! more than one consecutive whitespace token.
//!
//! ## Examples
//!
//! ```rust
//! use json_pull::parse;
//!
//! let value = parse("{\"a\":1,\"b\":[true,null,\"x\"]}").unwrap();
//! assert_eq!(value.as_object().unwrap().len(), 2);
//!
//! assert_eq!(parse("").unwrap_err().to_string(), "Missing JSON value.");
//! ```

use crate::error::{join_or, ParseError, Result};
use crate::map::JsonMap;
use crate::token::Token;
use crate::tokenizer::Tokenizer;
use crate::value::{JsonString, Value};

/// Where an array or object loop is in its grammar.
///
/// `Closed` is the terminal state, represented by leaving the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContainerState {
    ExpectingFirstElementOrClose,
    ExpectingComma,
    ExpectingElement,
}

/// Parses `text` into a single JSON value.
///
/// Fails if no value is present after skipping leading whitespace, or if any
/// non-whitespace token remains after the top-level value.
///
/// # Examples
///
/// ```rust
/// use json_pull::{parse, Value};
///
/// assert_eq!(parse("null").unwrap(), Value::Null);
/// assert_eq!(parse(" [1,2] ").unwrap().to_string(), "[1,2]");
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first lexical or grammatical
/// violation; the partially built tree is discarded.
pub fn parse(text: &str) -> Result<Value> {
    let mut tokens = Tokenizer::new(text);
    tokens.advance()?;
    skip_whitespace(&mut tokens)?;
    if !tokens.has_current() {
        return Err(ParseError::missing("JSON value"));
    }
    let value = parse_value(&mut tokens)?;
    skip_whitespace(&mut tokens)?;
    if let Some(extra) = tokens.current() {
        return Err(ParseError::unexpected_token(extra.text()));
    }
    Ok(value)
}

/// Parses one value at the tokenizer's current token, dispatching on its
/// kind. The tokenizer must have started.
pub fn parse_value(tokens: &mut Tokenizer<'_>) -> Result<Value> {
    let Some(token) = tokens.current().cloned() else {
        return Err(ParseError::missing("JSON value"));
    };
    match token {
        Token::LeftBracket => parse_array(tokens),
        Token::LeftBrace => parse_object(tokens),
        Token::String(lexeme) => {
            tokens.advance()?;
            Ok(Value::String(string_from_lexeme(&lexeme)))
        }
        Token::Number(lexeme) => {
            tokens.advance()?;
            let number = lexeme
                .parse::<f64>()
                .map_err(|_| ParseError::message(format!("Invalid number: {lexeme}")))?;
            Ok(Value::Number(number))
        }
        Token::Boolean(value) => {
            tokens.advance()?;
            Ok(Value::Boolean(value))
        }
        Token::Null => {
            tokens.advance()?;
            Ok(Value::Null)
        }
        other => Err(ParseError::unexpected_token(other.text())),
    }
}

/// Parses an array. The current token is the leading `[`.
fn parse_array(tokens: &mut Tokenizer<'_>) -> Result<Value> {
    tokens.advance()?;
    let mut elements = Vec::new();
    let mut state = ContainerState::ExpectingFirstElementOrClose;
    loop {
        skip_whitespace(tokens)?;
        let Some(token) = tokens.current().cloned() else {
            return Err(ParseError::missing_expected("array closing bracket", ']'));
        };
        match (&token, state) {
            (
                Token::RightBracket,
                ContainerState::ExpectingFirstElementOrClose | ContainerState::ExpectingComma,
            ) => {
                tokens.advance()?;
                break;
            }
            (Token::Comma, ContainerState::ExpectingComma) => {
                tokens.advance()?;
                state = ContainerState::ExpectingElement;
            }
            (
                _,
                ContainerState::ExpectingFirstElementOrClose | ContainerState::ExpectingElement,
            ) => {
                elements.push(parse_value(tokens)?);
                state = ContainerState::ExpectingComma;
            }
            (_, ContainerState::ExpectingComma) => {
                return Err(ParseError::wrong(
                    join_or(&["\",\"", "\"]\""]),
                    token.text(),
                ));
            }
        }
    }
    Ok(Value::Array(elements))
}

/// Parses an object. The current token is the leading `{`.
fn parse_object(tokens: &mut Tokenizer<'_>) -> Result<Value> {
    tokens.advance()?;
    let mut members = JsonMap::new();
    let mut state = ContainerState::ExpectingFirstElementOrClose;
    loop {
        skip_whitespace(tokens)?;
        let Some(token) = tokens.current().cloned() else {
            return Err(ParseError::missing_expected("object closing brace", '}'));
        };
        match (&token, state) {
            (
                Token::RightBrace,
                ContainerState::ExpectingFirstElementOrClose | ContainerState::ExpectingComma,
            ) => {
                tokens.advance()?;
                break;
            }
            (Token::Comma, ContainerState::ExpectingComma) => {
                tokens.advance()?;
                state = ContainerState::ExpectingElement;
            }
            (
                Token::String(lexeme),
                ContainerState::ExpectingFirstElementOrClose | ContainerState::ExpectingElement,
            ) => {
                let name = string_from_lexeme(lexeme).value().to_string();
                tokens.advance()?;
                skip_whitespace(tokens)?;
                match tokens.current() {
                    None => {
                        return Err(ParseError::missing_expected("property name separator", ':'))
                    }
                    Some(Token::Colon) => {
                        tokens.advance()?;
                    }
                    Some(other) => {
                        return Err(ParseError::wrong("\":\"", other.text()));
                    }
                }
                skip_whitespace(tokens)?;
                let value = parse_value(tokens)?;
                members.insert(name, value);
                state = ContainerState::ExpectingComma;
            }
            (_, ContainerState::ExpectingFirstElementOrClose) => {
                return Err(ParseError::wrong(
                    join_or(&["\"}\"", "property name"]),
                    token.text(),
                ));
            }
            (_, ContainerState::ExpectingElement) => {
                return Err(ParseError::wrong("property name", token.text()));
            }
            (_, ContainerState::ExpectingComma) => {
                return Err(ParseError::wrong(
                    join_or(&["\",\"", "\"}\""]),
                    token.text(),
                ));
            }
        }
    }
    Ok(Value::Object(members))
}

/// Advances past at most one whitespace token.
fn skip_whitespace(tokens: &mut Tokenizer<'_>) -> Result<()> {
    if matches!(tokens.current(), Some(Token::Whitespace(_))) {
        tokens.advance()?;
    }
    Ok(())
}

/// Splits a string token's lexeme (open quote + body + close quote) into a
/// string value. Both quote characters are single bytes, so the slicing is
/// code-point safe.
fn string_from_lexeme(lexeme: &str) -> JsonString {
    let quote = lexeme.as_bytes()[0] as char;
    let body = &lexeme[1..lexeme.len() - 1];
    JsonString::with_quote(body, quote)
}
