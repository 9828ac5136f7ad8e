//! The tokenizer (lexer).
//!
//! [`Tokenizer`] turns raw text into a lazy, pull-based stream of
//! [`Token`]s. It owns all lexical-state logic: strings (either quote
//! character, backslash escapes), numbers (sign, integer, fraction,
//! exponent), the `null`/`true`/`false` literals, greedy whitespace runs,
//! and single-character unknown fallbacks.
//!
//! The tokenizer follows the same pull protocol as [`CharCursor`]: it holds
//! at most one current token and only lexes the next one when
//! [`advance`](Tokenizer::advance) is called. Lexing is fallible, so
//! `advance` returns `Result<bool, ParseError>` instead of plain `bool`.
//!
//! ## Examples
//!
//! ```rust
//! use json_pull::{tokenize, Token};
//!
//! let tokens = tokenize("[true]").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![Token::LeftBracket, Token::Boolean(true), Token::RightBracket]
//! );
//! ```
//!
//! The number readers ([`read_number`], [`read_unsigned_integer`],
//! [`read_digits`]) are standalone functions over a [`CharCursor`] so that
//! numeric literals can be read outside full JSON contexts (version strings,
//! for example). The tokenizer's own number lexing goes through the same
//! functions, keeping the two grammars identical by construction.

use crate::cursor::CharCursor;
use crate::error::{ParseError, Result};
use crate::token::Token;

/// A lazy, pull-based lexer over JSON text.
///
/// Empty text is legal and yields zero tokens. `advance` keeps returning
/// `Ok(false)` once the input is exhausted.
///
/// # Examples
///
/// ```rust
/// use json_pull::{Token, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("null");
/// assert!(!tokenizer.has_started());
///
/// assert!(tokenizer.advance().unwrap());
/// assert_eq!(tokenizer.current(), Some(&Token::Null));
///
/// assert!(!tokenizer.advance().unwrap());
/// assert_eq!(tokenizer.current(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    chars: CharCursor<'a>,
    current: Option<Token>,
    started: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `text` that has not yet started.
    pub fn new(text: &'a str) -> Self {
        Tokenizer {
            chars: CharCursor::for_text(text),
            current: None,
            started: false,
        }
    }

    /// Returns `true` once [`advance`](Tokenizer::advance) has been called at
    /// least once.
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Returns `true` if the tokenizer holds a current token.
    pub fn has_current(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the current token, or `None` after exhaustion.
    ///
    /// # Panics
    ///
    /// Panics if the tokenizer has not started.
    pub fn current(&self) -> Option<&Token> {
        assert!(self.started, "tokenizer read before the first advance");
        self.current.as_ref()
    }

    /// Lexes the next token. Returns whether a current token exists
    /// afterwards; keeps returning `Ok(false)` once the input is exhausted.
    pub fn advance(&mut self) -> Result<bool> {
        if !self.started {
            self.started = true;
            self.chars.advance();
        }
        self.current = self.next_token()?;
        Ok(self.current.is_some())
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        let Some(&ch) = self.chars.current() else {
            return Ok(None);
        };
        let token = match ch {
            '{' => self.single(Token::LeftBrace),
            '}' => self.single(Token::RightBrace),
            '[' => self.single(Token::LeftBracket),
            ']' => self.single(Token::RightBracket),
            ',' => self.single(Token::Comma),
            ':' => self.single(Token::Colon),
            '"' | '\'' => self.read_string(ch)?,
            '-' => Token::Number(read_number(&mut self.chars)?),
            _ if ch.is_ascii_digit() => Token::Number(read_number(&mut self.chars)?),
            _ if ch.is_alphabetic() => self.read_literal(),
            _ if ch.is_whitespace() => self.read_whitespace(),
            _ => self.single(Token::Unknown(ch.to_string())),
        };
        Ok(Some(token))
    }

    fn single(&mut self, token: Token) -> Token {
        self.chars.advance();
        token
    }

    /// Reads a quoted string. The open quote has been seen but not consumed;
    /// `quote` is that character (`'` or `"`).
    ///
    /// A backslash toggles the escaped flag; while escaped, the next
    /// character (including the quote) is literal content. Every unescaped
    /// non-quote character must fall in the permitted code-point ranges.
    fn read_string(&mut self, quote: char) -> Result<Token> {
        let mut text = String::new();
        text.push(quote);
        self.chars.advance();

        let mut escaped = false;
        loop {
            match self.chars.current().copied() {
                None => return Err(ParseError::missing_expected("string end quote", quote)),
                Some(ch) if escaped => {
                    escaped = false;
                    text.push(ch);
                    self.chars.advance();
                }
                Some('\\') => {
                    escaped = true;
                    text.push('\\');
                    self.chars.advance();
                }
                Some(ch) if ch == quote => {
                    text.push(ch);
                    self.chars.advance();
                    return Ok(Token::String(text));
                }
                Some(ch) => {
                    if !is_permitted_string_character(ch) {
                        return Err(ParseError::invalid_string_character(ch));
                    }
                    text.push(ch);
                    self.chars.advance();
                }
            }
        }
    }

    /// Reads a maximal run of letters and classifies it as `null`, `true`,
    /// `false`, or an unknown word.
    fn read_literal(&mut self) -> Token {
        let mut word = String::new();
        while let Some(&ch) = self.chars.current() {
            if !ch.is_alphabetic() {
                break;
            }
            word.push(ch);
            self.chars.advance();
        }
        match word.as_str() {
            "null" => Token::Null,
            "true" => Token::Boolean(true),
            "false" => Token::Boolean(false),
            _ => Token::Unknown(word),
        }
    }

    /// Accumulates a greedy run of consecutive whitespace characters into one
    /// token.
    fn read_whitespace(&mut self) -> Token {
        let mut text = String::new();
        while let Some(&ch) = self.chars.current() {
            if !ch.is_whitespace() {
                break;
            }
            text.push(ch);
            self.chars.advance();
        }
        Token::Whitespace(text)
    }
}

/// Collects the full token stream for `text`.
///
/// # Errors
///
/// Returns the first lexical error encountered.
///
/// # Examples
///
/// ```rust
/// use json_pull::tokenize;
///
/// assert!(tokenize("").unwrap().is_empty());
/// assert_eq!(tokenize("  \t ").unwrap().len(), 1);
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut tokenizer = Tokenizer::new(text);
    let mut tokens = Vec::new();
    while tokenizer.advance()? {
        if let Some(token) = tokenizer.current() {
            tokens.push(token.clone());
        }
    }
    Ok(tokens)
}

/// Unescaped string-body characters must land in `[0x20,0x21]`,
/// `[0x23,0x5B]`, or `[0x5D,0x10FFFF]`. Raw `"` (0x22) and raw `\` (0x5C)
/// are excluded; those are handled by the quote and escape logic.
fn is_permitted_string_character(ch: char) -> bool {
    matches!(ch as u32, 0x20..=0x21 | 0x23..=0x5B | 0x5D..=0x10FFFF)
}

/// Consumes a maximal run of decimal digits, which may be empty.
///
/// The cursor must have started; on return it rests on the first non-digit
/// character (or past the end).
pub fn read_digits(chars: &mut CharCursor<'_>) -> String {
    let mut digits = String::new();
    while let Some(&ch) = chars.current() {
        if !ch.is_ascii_digit() {
            break;
        }
        digits.push(ch);
        chars.advance();
    }
    digits
}

/// Consumes one or more decimal digits.
///
/// # Errors
///
/// Fails with a missing error (naming `description`) if the input is
/// exhausted, or a wrong error if the current character is not a digit.
pub fn read_unsigned_integer(chars: &mut CharCursor<'_>, description: &str) -> Result<String> {
    match chars.current().copied() {
        None => Err(ParseError::missing(description)),
        Some(ch) if ch.is_ascii_digit() => Ok(read_digits(chars)),
        Some(ch) => Err(ParseError::wrong(description, ch.to_string())),
    }
}

/// Consumes a JSON number and returns its lexeme.
///
/// Grammar, left to right: an optional `-` that must be followed by a digit;
/// a mandatory leading digit, where a leading `0` ends the integer portion
/// (JSON forbids leading zeros in multi-digit integers); an optional `.`
/// followed by at least one digit; an optional `e`/`E` with an optional sign
/// followed by at least one digit. Each missing or wrong character raises a
/// distinct error.
///
/// The cursor must have started. The tokenizer's number lexing delegates
/// here, so this grammar and the token grammar cannot drift apart.
///
/// # Examples
///
/// ```rust
/// use json_pull::{read_number, CharCursor};
///
/// let mut chars = CharCursor::for_text("-2.5E-3");
/// chars.advance();
/// assert_eq!(read_number(&mut chars).unwrap(), "-2.5E-3");
/// ```
pub fn read_number(chars: &mut CharCursor<'_>) -> Result<String> {
    let mut text = String::new();

    if chars.current() == Some(&'-') {
        text.push('-');
        chars.advance();
    }

    match chars.current().copied() {
        None => return Err(ParseError::missing("integer portion of number")),
        Some('0') => {
            text.push('0');
            chars.advance();
        }
        Some(ch) if ch.is_ascii_digit() => {
            text.push_str(&read_digits(chars));
        }
        Some(ch) => {
            return Err(ParseError::wrong(
                "integer portion of number",
                ch.to_string(),
            ))
        }
    }

    if chars.current() == Some(&'.') {
        text.push('.');
        chars.advance();
        text.push_str(&read_unsigned_integer(
            chars,
            "fractional portion of number",
        )?);
    }

    if let Some(marker) = chars.current().copied().filter(|&ch| ch == 'e' || ch == 'E') {
        text.push(marker);
        chars.advance();
        if let Some(sign) = chars.current().copied().filter(|&ch| ch == '+' || ch == '-') {
            text.push(sign);
            chars.advance();
        }
        text.push_str(&read_unsigned_integer(chars, "exponent portion of number")?);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;

    fn started_cursor(text: &str) -> CharCursor<'_> {
        let mut chars = CharCursor::for_text(text);
        chars.advance();
        chars
    }

    #[test]
    fn test_empty_text_yields_no_tokens() {
        let mut tokenizer = Tokenizer::new("");
        assert!(!tokenizer.advance().unwrap());
        assert!(!tokenizer.has_current());
        assert!(!tokenizer.advance().unwrap());
    }

    #[test]
    fn test_whitespace_run_is_one_token() {
        let tokens = tokenize(" \t\n\r  ").unwrap();
        assert_eq!(tokens, vec![Token::Whitespace(" \t\n\r  ".to_string())]);
    }

    #[test]
    fn test_structural_tokens() {
        let tokens = tokenize("{}[],:").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LeftBrace,
                Token::RightBrace,
                Token::LeftBracket,
                Token::RightBracket,
                Token::Comma,
                Token::Colon,
            ]
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(tokenize("null").unwrap(), vec![Token::Null]);
        assert_eq!(tokenize("true").unwrap(), vec![Token::Boolean(true)]);
        assert_eq!(tokenize("false").unwrap(), vec![Token::Boolean(false)]);
    }

    #[test]
    fn test_unknown_word() {
        assert_eq!(
            tokenize("flase").unwrap(),
            vec![Token::Unknown("flase".to_string())]
        );
    }

    #[test]
    fn test_unknown_single_character() {
        assert_eq!(
            tokenize("&").unwrap(),
            vec![Token::Unknown("&".to_string())]
        );
    }

    #[test]
    fn test_double_quoted_string_lexeme_keeps_quotes() {
        assert_eq!(
            tokenize("\"abc\"").unwrap(),
            vec![Token::String("\"abc\"".to_string())]
        );
    }

    #[test]
    fn test_single_quoted_string() {
        assert_eq!(
            tokenize("'abc'").unwrap(),
            vec![Token::String("'abc'".to_string())]
        );
    }

    #[test]
    fn test_escaped_quote_is_not_a_terminator() {
        assert_eq!(
            tokenize(r#""a\"b""#).unwrap(),
            vec![Token::String(r#""a\"b""#.to_string())]
        );
    }

    #[test]
    fn test_escaped_backslash_then_close() {
        assert_eq!(
            tokenize(r#""a\\""#).unwrap(),
            vec![Token::String(r#""a\\""#.to_string())]
        );
    }

    #[test]
    fn test_unterminated_string_names_open_quote() {
        let err = tokenize("'abc").unwrap_err();
        assert_eq!(err.to_string(), "Missing string end quote: \"'\" (39)");

        let err = tokenize("\"abc").unwrap_err();
        assert_eq!(err.to_string(), "Missing string end quote: \"\\\"\" (34)");
    }

    #[test]
    fn test_control_character_in_string_is_invalid() {
        let err = tokenize("\"a\u{1}b\"").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidStringCharacter { found: '\u{1}' }
        );
    }

    #[test]
    fn test_raw_double_quote_in_single_quoted_string_is_invalid() {
        let err = tokenize("'a\"b'").unwrap_err();
        assert_eq!(err, ParseError::InvalidStringCharacter { found: '"' });
    }

    #[test]
    fn test_number_lexemes() {
        for lexeme in ["0", "-0", "3.14", "1e10", "-2.5E-3", "10", "1E+2"] {
            assert_eq!(
                tokenize(lexeme).unwrap(),
                vec![Token::Number(lexeme.to_string())],
                "lexeme {lexeme:?}"
            );
        }
    }

    #[test]
    fn test_leading_zero_caps_integer_portion() {
        let tokens = tokenize("01").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number("0".to_string()),
                Token::Number("1".to_string()),
            ]
        );
    }

    #[test]
    fn test_bare_minus_is_missing_integer_portion() {
        let err = tokenize("-").unwrap_err();
        assert_eq!(err.to_string(), "Missing integer portion of number.");
    }

    #[test]
    fn test_minus_followed_by_letter_is_wrong_integer_portion() {
        // "-x": the number reader fails before the literal reader ever runs.
        let err = tokenize("-x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected integer portion of number, but found \"x\" instead."
        );
    }

    #[test]
    fn test_missing_fractional_digits() {
        let err = tokenize("1.").unwrap_err();
        assert_eq!(err.to_string(), "Missing fractional portion of number.");

        let err = tokenize("1.x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected fractional portion of number, but found \"x\" instead."
        );
    }

    #[test]
    fn test_missing_exponent_digits() {
        let err = tokenize("1e").unwrap_err();
        assert_eq!(err.to_string(), "Missing exponent portion of number.");

        let err = tokenize("1e+").unwrap_err();
        assert_eq!(err.to_string(), "Missing exponent portion of number.");

        let err = tokenize("1e+x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected exponent portion of number, but found \"x\" instead."
        );
    }

    #[test]
    fn test_mixed_stream() {
        let tokens = tokenize("{\"a\": 1}").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LeftBrace,
                Token::String("\"a\"".to_string()),
                Token::Colon,
                Token::Whitespace(" ".to_string()),
                Token::Number("1".to_string()),
                Token::RightBrace,
            ]
        );
    }

    #[test]
    fn test_read_digits_stops_at_non_digit() {
        let mut chars = started_cursor("123abc");
        assert_eq!(read_digits(&mut chars), "123");
        assert_eq!(chars.current(), Some(&'a'));
    }

    #[test]
    fn test_read_digits_may_be_empty() {
        let mut chars = started_cursor("abc");
        assert_eq!(read_digits(&mut chars), "");
    }

    #[test]
    fn test_read_unsigned_integer_outside_json() {
        // Version-string style usage.
        let mut chars = started_cursor("12.7");
        assert_eq!(
            read_unsigned_integer(&mut chars, "major version").unwrap(),
            "12"
        );
        assert_eq!(chars.current(), Some(&'.'));
    }

    #[test]
    fn test_read_unsigned_integer_errors_name_description() {
        let mut chars = started_cursor("");
        let err = read_unsigned_integer(&mut chars, "major version").unwrap_err();
        assert_eq!(err.to_string(), "Missing major version.");

        let mut chars = started_cursor("x");
        let err = read_unsigned_integer(&mut chars, "major version").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected major version, but found \"x\" instead."
        );
    }

    #[test]
    fn test_read_number_leaves_trailing_text() {
        let mut chars = started_cursor("3.14rest");
        assert_eq!(read_number(&mut chars).unwrap(), "3.14");
        assert_eq!(chars.current(), Some(&'r'));
    }

    #[test]
    fn test_read_number_zero_then_digit() {
        let mut chars = started_cursor("01");
        assert_eq!(read_number(&mut chars).unwrap(), "0");
        assert_eq!(chars.current(), Some(&'1'));
    }
}
