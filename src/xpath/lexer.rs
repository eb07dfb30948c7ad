//! Location-path tokenizer.
//!
//! This module implements the lexer for the supported `XPath` subset: the
//! abbreviated location-path syntax of `XPath` 1.0
//! (<https://www.w3.org/TR/xpath-10/#path-abbrev>), restricted to the child
//! and descendant-or-self axes.
//!
//! The lexer is an on-demand cursor: [`Lexer::next_token`] scans exactly one
//! token per call and never buffers ahead, so the parser holds the only live
//! token at any time. Offsets are 0-based byte positions into the original
//! input, which keeps error reporting exact even though peeking is
//! `char`-based (the whitespace rules below involve non-ASCII characters).
//!
//! # Whitespace and Newlines
//!
//! Space, no-break space (U+00A0), tab, vertical tab, and form feed are
//! skipped between tokens. Newlines (LF, CR, CR-LF, U+2028, U+2029) are a
//! hard error: location paths are single-line expressions, and a newline
//! almost always means a quoting mistake in the host document.

use super::ident::{is_identifier_char, is_identifier_start};
use super::token::{Token, TokenKind};
use crate::error::Error;

/// Returns `true` for the characters treated as line terminators.
fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// On-demand tokenizer over a location-path expression.
///
/// # Examples
///
/// ```
/// use xpath2css::xpath::lexer::Lexer;
/// use xpath2css::xpath::token::TokenKind;
///
/// let mut lexer = Lexer::new("//div");
/// let token = lexer.next_token().unwrap();
/// assert_eq!(token.kind, TokenKind::DoubleSlash);
/// let token = lexer.next_token().unwrap();
/// assert_eq!(token.kind, TokenKind::Name);
/// assert_eq!(token.text(), "div");
/// ```
pub struct Lexer<'a> {
    /// The input expression.
    input: &'a str,
    /// Current byte offset into the input.
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the given expression.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Scans and returns the next token.
    ///
    /// Once the input is exhausted this keeps returning an
    /// [`TokenKind::Eof`] token with an empty span at the end of input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lexical`] for a newline, an unterminated or
    /// malformed literal, or a character outside the token alphabet. The
    /// error carries the byte offset where the defect was detected.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_space()?;

        let start = self.pos;
        let Some(c) = self.peek_char() else {
            return Ok(self.token_at(TokenKind::Eof, None, start));
        };

        if is_identifier_start(c) {
            return Ok(self.read_word(start));
        }

        match c {
            '(' => Ok(self.punct(TokenKind::LeftParen, start)),
            ')' => Ok(self.punct(TokenKind::RightParen, start)),
            '[' => Ok(self.punct(TokenKind::LeftBracket, start)),
            ']' => Ok(self.punct(TokenKind::RightBracket, start)),
            '|' => Ok(self.punct(TokenKind::Pipe, start)),
            '*' => Ok(self.punct(TokenKind::Star, start)),
            '@' => Ok(self.punct(TokenKind::At, start)),
            '=' => Ok(self.punct(TokenKind::Equal, start)),
            ',' => Ok(self.punct(TokenKind::Comma, start)),
            '/' => Ok(self.read_slash(start)),
            '0'..='9' => self.read_number(start),
            '"' | '\'' => self.read_string(c, start),
            _ => Err(error(start, &format!("unexpected character '{c}'"))),
        }
    }

    /// Skips inter-token whitespace.
    ///
    /// Accepts space, no-break space, tab, vertical tab, and form feed.
    /// Any line terminator is a hard error at its own offset.
    fn skip_space(&mut self) -> Result<(), Error> {
        while let Some(c) = self.peek_char() {
            match c {
                ' ' | '\u{a0}' | '\t' | '\u{b}' | '\u{c}' => self.advance(),
                _ if is_newline(c) => {
                    return Err(error(self.pos, "unexpected newline character"));
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Consumes a single-character token.
    fn punct(&mut self, kind: TokenKind, start: usize) -> Token {
        self.advance();
        self.token_at(kind, None, start)
    }

    /// Reads a `/` or `//` token.
    fn read_slash(&mut self, start: usize) -> Token {
        self.advance(); // consume '/'
        if self.peek_char() == Some('/') {
            self.advance();
            self.token_at(TokenKind::DoubleSlash, None, start)
        } else {
            self.token_at(TokenKind::Slash, None, start)
        }
    }

    /// Reads an identifier, classifying reserved words.
    fn read_word(&mut self, start: usize) -> Token {
        self.advance_while(is_identifier_char);
        let word = self.slice_from(start);
        let kind = TokenKind::keyword(word).unwrap_or(TokenKind::Name);
        let value = Some(word.to_string());
        self.token_at(kind, value, start)
    }

    /// Reads a numeric literal.
    ///
    /// The accepted shape is `Digits ('.' Digits?)? (('e' | 'E') ('+' | '-')?
    /// Digits)?`. The token value is the raw source slice; in practice only
    /// integers are meaningful downstream (`:nth-child` positions), and the
    /// renderer emits the digits verbatim.
    fn read_number(&mut self, start: usize) -> Result<Token, Error> {
        self.advance_while(|c| c.is_ascii_digit());

        if self.peek_char() == Some('.') {
            self.advance();
            self.advance_while(|c| c.is_ascii_digit());
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            self.advance();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.advance();
            }
            let digits_start = self.pos;
            self.advance_while(|c| c.is_ascii_digit());
            if self.pos == digits_start {
                return Err(error(start, "invalid number"));
            }
        }

        // `2px` is a broken number, not a number followed by a name.
        if self.peek_char().is_some_and(is_identifier_start) {
            return Err(error(self.pos, "identifier directly after number"));
        }

        let value = Some(self.slice_from(start).to_string());
        Ok(self.token_at(TokenKind::Number, value, start))
    }

    /// Reads a string literal delimited by `quote`.
    ///
    /// The token value is the decoded content: backslash escapes are
    /// resolved and an escaped newline is a line continuation. A raw
    /// newline or end of input before the closing quote is an error
    /// reported at the opening quote.
    fn read_string(&mut self, quote: char, start: usize) -> Result<Token, Error> {
        self.advance(); // consume opening quote

        let mut out = String::new();
        loop {
            let Some(c) = self.peek_char() else {
                return Err(error(start, "unterminated string literal"));
            };
            if c == quote {
                break;
            }
            if c == '\\' {
                self.advance();
                self.read_escaped_char(start, &mut out)?;
            } else if is_newline(c) {
                return Err(error(start, "unterminated string literal"));
            } else {
                out.push(c);
                self.advance();
            }
        }

        self.advance(); // consume closing quote
        Ok(self.token_at(TokenKind::Literal, Some(out), start))
    }

    /// Resolves one backslash escape, appending its expansion to `out`.
    ///
    /// Recognized escapes are `\n`, `\r`, `\t`, `\b`, `\v`, and `\f`. A
    /// backslash before a newline (LF or CR-LF) is a line continuation and
    /// expands to nothing. Any other escaped character stands for itself.
    fn read_escaped_char(&mut self, string_start: usize, out: &mut String) -> Result<(), Error> {
        let Some(c) = self.peek_char() else {
            return Err(error(string_start, "unterminated string literal"));
        };
        self.advance();

        match c {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{8}'),
            'v' => out.push('\u{b}'),
            'f' => out.push('\u{c}'),
            '\r' => {
                if self.peek_char() == Some('\n') {
                    self.advance();
                }
            }
            '\n' => {}
            other => out.push(other),
        }
        Ok(())
    }

    // --- Utility methods ---

    /// Returns the character at the current position, or `None` at end.
    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances past the current character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    /// Advances while the predicate holds for the current character.
    fn advance_while<F: Fn(char) -> bool>(&mut self, pred: F) {
        while self.peek_char().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Returns the substring from `start` to the current position.
    fn slice_from(&self, start: usize) -> &str {
        &self.input[start..self.pos]
    }

    /// Builds a token spanning from `start` to the current position.
    fn token_at(&self, kind: TokenKind, value: Option<String>, start: usize) -> Token {
        Token {
            kind,
            value,
            start,
            end: self.pos,
        }
    }
}

/// Creates a lexical error at the given byte offset.
fn error(position: usize, message: &str) -> Error {
    Error::Lexical {
        message: message.to_string(),
        position,
    }
}
