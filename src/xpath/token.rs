//! Token kinds for the location-path tokenizer.
//!
//! The token set is deliberately small: the punctuation of abbreviated
//! location paths (`/`, `//`, `[`, `]`, `@`, ...), the three literal kinds
//! (names, numbers, strings), and the single keyword `and`. The lexer
//! produces [`Token`]s one at a time; see [`super::lexer::Lexer`].

use std::fmt;

/// The syntactic kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input. The lexer keeps returning this once the input is
    /// exhausted.
    Eof,
    /// An identifier (tag name, attribute name, or function name).
    Name,
    /// A numeric literal (e.g., `2`, `3.5`, `1e3`).
    Number,
    /// A string literal (single or double quoted).
    Literal,
    /// `(` -- left parenthesis.
    LeftParen,
    /// `)` -- right parenthesis.
    RightParen,
    /// `[` -- left bracket (predicate open).
    LeftBracket,
    /// `]` -- right bracket (predicate close).
    RightBracket,
    /// `|` -- union operator (recognized but unsupported downstream).
    Pipe,
    /// `/` -- child step separator.
    Slash,
    /// `//` -- descendant-or-self step abbreviation.
    DoubleSlash,
    /// `*` -- wildcard node test.
    Star,
    /// `@` -- attribute axis abbreviation.
    At,
    /// `=` -- equality in attribute and position comparisons.
    Equal,
    /// `,` -- argument separator in function calls.
    Comma,
    /// `and` keyword joining two predicates inside one bracket group.
    And,
}

impl TokenKind {
    /// Returns the token kind reserved for the given word, if any.
    ///
    /// `and` is the only reserved word; every other identifier lexes as
    /// [`TokenKind::Name`].
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        match word {
            "and" => Some(Self::And),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Eof => "end of input",
            Self::Name => "name",
            Self::Number => "number",
            Self::Literal => "string",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Pipe => "|",
            Self::Slash => "/",
            Self::DoubleSlash => "//",
            Self::Star => "*",
            Self::At => "@",
            Self::Equal => "=",
            Self::Comma => ",",
            Self::And => "and",
        };
        f.write_str(label)
    }
}

/// A single token with its source span.
///
/// `start` and `end` are 0-based byte offsets into the input; the span is
/// half-open (`[start, end)`). `value` carries the token text for `Name`,
/// `Number`, `And`, and (decoded) `Literal` tokens, and is `None` for
/// punctuation and `Eof`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The syntactic kind of this token.
    pub kind: TokenKind,
    /// Token text, when the kind carries one.
    pub value: Option<String>,
    /// Byte offset of the first character of the token.
    pub start: usize,
    /// Byte offset one past the last character of the token.
    pub end: usize,
}

impl Token {
    /// Returns the token text, or `""` for tokens that carry none.
    #[must_use]
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("and"), Some(TokenKind::And));
        assert_eq!(TokenKind::keyword("or"), None);
        assert_eq!(TokenKind::keyword("position"), None);
        assert_eq!(TokenKind::keyword(""), None);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(TokenKind::Slash.to_string(), "/");
        assert_eq!(TokenKind::DoubleSlash.to_string(), "//");
        assert_eq!(TokenKind::LeftBracket.to_string(), "[");
        assert_eq!(TokenKind::RightBracket.to_string(), "]");
        assert_eq!(TokenKind::At.to_string(), "@");
        assert_eq!(TokenKind::Name.to_string(), "name");
        assert_eq!(TokenKind::Number.to_string(), "number");
        assert_eq!(TokenKind::Literal.to_string(), "string");
        assert_eq!(TokenKind::And.to_string(), "and");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
    }

    #[test]
    fn test_token_text() {
        let token = Token {
            kind: TokenKind::Name,
            value: Some("div".to_string()),
            start: 2,
            end: 5,
        };
        assert_eq!(token.text(), "div");

        let eof = Token {
            kind: TokenKind::Eof,
            value: None,
            start: 5,
            end: 5,
        };
        assert_eq!(eof.text(), "");
    }
}
