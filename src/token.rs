//! Lexical tokens.
//!
//! A [`Token`] is a classified lexeme: one variant per lexical unit the
//! tokenizer can produce. Structural tokens (braces, brackets, comma, colon)
//! and the literal tokens carry no text of their own because their lexemes
//! are fixed; the remaining variants carry the exact source substring they
//! were lexed from.
//!
//! Tokens are immutable once produced and are logically owned by whichever
//! value node consumes them; the parser copies string and number lexemes out
//! before discarding the token.

use std::fmt;

/// A lexical unit of JSON text.
///
/// [`Token::text`] returns the exact lexeme the token was derived from, which
/// is never empty.
///
/// # Examples
///
/// ```rust
/// use json_pull::{Token, TokenKind};
///
/// let token = Token::Number("3.14".to_string());
/// assert_eq!(token.kind(), TokenKind::Number);
/// assert_eq!(token.text(), "3.14");
/// assert_eq!(Token::LeftBrace.text(), "{");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A greedy run of consecutive whitespace characters.
    Whitespace(String),
    /// A quoted string, including its open and close quotes.
    String(String),
    /// A numeric literal; the lexeme text, not the parsed value.
    Number(String),
    /// `true` or `false`.
    Boolean(bool),
    /// `null`.
    Null,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// Text that could not be classified.
    Unknown(String),
}

/// The field-free discriminant of a [`Token`], for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Whitespace,
    String,
    Number,
    Boolean,
    Null,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Colon,
    Unknown,
}

impl Token {
    /// Returns the token's kind.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Whitespace(_) => TokenKind::Whitespace,
            Token::String(_) => TokenKind::String,
            Token::Number(_) => TokenKind::Number,
            Token::Boolean(_) => TokenKind::Boolean,
            Token::Null => TokenKind::Null,
            Token::LeftBrace => TokenKind::LeftBrace,
            Token::RightBrace => TokenKind::RightBrace,
            Token::LeftBracket => TokenKind::LeftBracket,
            Token::RightBracket => TokenKind::RightBracket,
            Token::Comma => TokenKind::Comma,
            Token::Colon => TokenKind::Colon,
            Token::Unknown(_) => TokenKind::Unknown,
        }
    }

    /// Returns the exact lexeme this token was derived from.
    pub fn text(&self) -> &str {
        match self {
            Token::Whitespace(text)
            | Token::String(text)
            | Token::Number(text)
            | Token::Unknown(text) => text,
            Token::Boolean(true) => "true",
            Token::Boolean(false) => "false",
            Token::Null => "null",
            Token::LeftBrace => "{",
            Token::RightBrace => "}",
            Token::LeftBracket => "[",
            Token::RightBracket => "]",
            Token::Comma => ",",
            Token::Colon => ":",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
