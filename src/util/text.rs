//! Char-offset helpers over `&str`
//!
//! The engine addresses text by char (Unicode scalar) offsets. These helpers
//! clamp out-of-range offsets instead of panicking.

use std::ops::Range;

/// Number of chars in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Clamp a char offset to `[0, char_len(text)]`
pub fn clamp_offset(text: &str, offset: usize) -> usize {
    offset.min(char_len(text))
}

/// Char at a char offset, None if out of bounds
pub fn char_at(text: &str, offset: usize) -> Option<char> {
    text.chars().nth(offset)
}

/// Char immediately before a char offset
pub fn char_before(text: &str, offset: usize) -> Option<char> {
    offset.checked_sub(1).and_then(|i| char_at(text, i))
}

/// Convert a char offset to a byte offset (clamped to the end of text)
pub fn char_to_byte(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Slice by char range (clamped)
pub fn slice_chars(text: &str, range: Range<usize>) -> &str {
    let start = char_to_byte(text, range.start);
    let end = char_to_byte(text, range.end.max(range.start));
    &text[start..end]
}

/// Whether a char ends an in-progress mention query
pub fn ends_query(ch: char) -> bool {
    ch.is_whitespace()
}

/// Check if a character is a punctuation/symbol boundary (not whitespace)
pub fn is_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '/' | ':'
            | ','
            | '.'
            | '-'
            | '('
            | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | ';'
            | '"'
            | '\''
            | '<'
            | '>'
            | '='
            | '+'
            | '*'
            | '&'
            | '|'
            | '!'
            | '@'
            | '#'
            | '$'
            | '%'
            | '^'
            | '~'
            | '`'
            | '\\'
            | '?'
    )
}

/// Character type for word navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    /// Whitespace characters
    Whitespace,
    /// Alphanumeric characters (word characters)
    WordChar,
    /// Punctuation and symbols
    Punctuation,
}

/// Get the character type for word navigation
pub fn char_type(ch: char) -> CharType {
    if ch.is_whitespace() {
        CharType::Whitespace
    } else if is_punctuation(ch) {
        CharType::Punctuation
    } else {
        CharType::WordChar
    }
}
