//! Location-path parser.
//!
//! This module implements a recursive descent parser for the supported
//! location-path subset. The parser pulls tokens from the
//! [`super::lexer::Lexer`] one at a time, holding a single lookahead token,
//! and produces a `Vec<`[`Step`]`>`.
//!
//! # Grammar
//!
//! ```text
//! Path       ::= Step+
//! Step       ::= Axis NodeTest Predicate*
//! Axis       ::= '/' | '//'
//! NodeTest   ::= '*' | Name | '@' AttrBody
//! Predicate  ::= '[' PredExpr ('and' PredExpr)? ']'
//! PredExpr   ::= '@' AttrBody | NameOrFunc | Number
//! AttrBody   ::= Name ('=' String)?
//! NameOrFunc ::= Name ('(' Arg (',' Arg)* ')')?
//! Arg        ::= Name ('(' ')')? | String | '@' Name
//! ```
//!
//! Two shapes get normalized while parsing: `position()=N` becomes the same
//! [`Predicate::Position`] as a literal `[N]`, and the pseudo-call `text()`
//! in argument position becomes the plain name `text`. A bracket group
//! whose first token is a number cannot be the left side of an `and` pair,
//! so `[2 and @id="x"]` is rejected while `[position()=2 and @id="x"]` is
//! accepted.

use super::ast::{Arg, AttributeFilter, Axis, NodeTest, Predicate, Step};
use super::lexer::Lexer;
use super::token::{Token, TokenKind};
use crate::error::Error;

/// Parses a location-path expression into its steps.
///
/// # Errors
///
/// Returns [`Error::Lexical`] for defects found while scanning and
/// [`Error::Syntax`] when the token stream does not match the grammar.
/// Both carry the byte offset of the offending token.
///
/// # Examples
///
/// ```
/// use xpath2css::xpath::ast::{Axis, NodeTest};
/// use xpath2css::xpath::parser::parse;
///
/// let steps = parse("//div/span").unwrap();
/// assert_eq!(steps.len(), 2);
/// assert_eq!(steps[0].axis, Axis::DescendantOrSelf);
/// assert_eq!(steps[1].node_test, NodeTest::Tag("span".to_string()));
/// ```
pub fn parse(input: &str) -> Result<Vec<Step>, Error> {
    Parser::new(input)?.parse_path()
}

/// Internal recursive descent parser over the lexer's token stream.
struct Parser<'a> {
    /// The token source.
    lexer: Lexer<'a>,
    /// The single lookahead token.
    token: Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser and primes the lookahead token.
    fn new(input: &'a str) -> Result<Self, Error> {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token()?;
        Ok(Self { lexer, token })
    }

    // -----------------------------------------------------------------------
    // Token access helpers
    // -----------------------------------------------------------------------

    /// Replaces the lookahead with the next token, returning the consumed
    /// one.
    fn bump(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.token, next))
    }

    /// Returns `true` if the lookahead has the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    /// Consumes the lookahead if it has the given kind, returning `true`.
    /// Returns `false` without consuming if it does not.
    fn eat(&mut self, kind: TokenKind) -> Result<bool, Error> {
        if self.check(kind) {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes the lookahead if it has the given kind, or fails.
    fn expect(&mut self, kind: TokenKind) -> Result<(), Error> {
        if self.eat(kind)? {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{kind}', found {}", self.describe())))
        }
    }

    /// Consumes a `Name` token and returns its text, or fails.
    fn expect_name(&mut self) -> Result<String, Error> {
        if self.check(TokenKind::Name) {
            let token = self.bump()?;
            Ok(token.value.unwrap_or_default())
        } else {
            Err(self.error(&format!("expected a name, found {}", self.describe())))
        }
    }

    /// Consumes a `Literal` token and returns its decoded text, or fails.
    fn expect_string(&mut self) -> Result<String, Error> {
        if self.check(TokenKind::Literal) {
            let token = self.bump()?;
            Ok(token.value.unwrap_or_default())
        } else {
            Err(self.error(&format!("expected a string, found {}", self.describe())))
        }
    }

    /// Returns a human-readable description of the lookahead (for errors).
    fn describe(&self) -> String {
        match self.token.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Name | TokenKind::Number | TokenKind::Literal => {
                format!("'{}'", self.token.text())
            }
            kind => format!("'{kind}'"),
        }
    }

    /// Creates a syntax error at the lookahead token.
    fn error(&self, message: &str) -> Error {
        Error::Syntax {
            message: message.to_string(),
            position: self.token.start,
        }
    }

    // -----------------------------------------------------------------------
    // Grammar productions
    // -----------------------------------------------------------------------

    /// Parses a complete path.
    ///
    /// ```text
    /// Path ::= Step+
    /// ```
    fn parse_path(&mut self) -> Result<Vec<Step>, Error> {
        let mut steps = vec![self.parse_step()?];
        while !self.check(TokenKind::Eof) {
            steps.push(self.parse_step()?);
        }
        Ok(steps)
    }

    /// Parses one location step.
    ///
    /// ```text
    /// Step ::= Axis NodeTest Predicate*
    /// ```
    fn parse_step(&mut self) -> Result<Step, Error> {
        let axis = self.parse_axis()?;
        let node_test = self.parse_node_test()?;
        let predicates = self.parse_predicates()?;
        Ok(Step {
            axis,
            node_test,
            predicates,
        })
    }

    /// Parses the axis that opens a step.
    ///
    /// ```text
    /// Axis ::= '/' | '//'
    /// ```
    fn parse_axis(&mut self) -> Result<Axis, Error> {
        if self.eat(TokenKind::Slash)? {
            Ok(Axis::Child)
        } else if self.eat(TokenKind::DoubleSlash)? {
            Ok(Axis::DescendantOrSelf)
        } else {
            Err(self.error(&format!("expected an axis, found {}", self.describe())))
        }
    }

    /// Parses a node test.
    ///
    /// ```text
    /// NodeTest ::= '*' | Name | '@' AttrBody
    /// ```
    ///
    /// A name followed by `(` would be a node type test or function call in
    /// full `XPath`; neither has a CSS counterpart, so it is rejected here.
    fn parse_node_test(&mut self) -> Result<NodeTest, Error> {
        if self.eat(TokenKind::Star)? {
            Ok(NodeTest::Wildcard)
        } else if self.check(TokenKind::Name) {
            let name = self.expect_name()?;
            if self.check(TokenKind::LeftParen) {
                return Err(self.error("unexpected function call in node test"));
            }
            Ok(NodeTest::Tag(name))
        } else if self.eat(TokenKind::At)? {
            Ok(NodeTest::Attribute(self.parse_attr_body()?))
        } else {
            Err(self.error(&format!("expected a node test, found {}", self.describe())))
        }
    }

    /// Parses an attribute name with an optional comparison value.
    ///
    /// ```text
    /// AttrBody ::= Name ('=' String)?
    /// ```
    ///
    /// The leading `@` has already been consumed by the caller.
    fn parse_attr_body(&mut self) -> Result<AttributeFilter, Error> {
        let attr = self.expect_name()?;
        let value = if self.eat(TokenKind::Equal)? {
            Some(self.expect_string()?)
        } else {
            None
        };
        Ok(AttributeFilter { attr, value })
    }

    /// Parses the step's predicate list.
    ///
    /// ```text
    /// Predicate ::= '[' PredExpr ('and' PredExpr)? ']'
    /// ```
    ///
    /// The `and` joins exactly two predicates, and a bare-number predicate
    /// cannot be its left side; after the pair the closing `]` is required,
    /// so a third `and` fails there.
    fn parse_predicates(&mut self) -> Result<Vec<Predicate>, Error> {
        let mut predicates = Vec::new();
        while self.eat(TokenKind::LeftBracket)? {
            let lead_is_number = self.check(TokenKind::Number);
            predicates.push(self.parse_predicate()?);
            if !lead_is_number && self.eat(TokenKind::And)? {
                predicates.push(self.parse_predicate()?);
            }
            self.expect(TokenKind::RightBracket)?;
        }
        Ok(predicates)
    }

    /// Parses a single predicate expression.
    ///
    /// ```text
    /// PredExpr ::= '@' AttrBody | NameOrFunc | Number
    /// ```
    fn parse_predicate(&mut self) -> Result<Predicate, Error> {
        if self.eat(TokenKind::At)? {
            Ok(Predicate::Attribute(self.parse_attr_body()?))
        } else if self.check(TokenKind::Name) {
            self.parse_name_or_function()
        } else if self.check(TokenKind::Number) {
            let token = self.bump()?;
            Ok(Predicate::Position(token.value.unwrap_or_default()))
        } else {
            Err(self.error(&format!("expected a predicate, found {}", self.describe())))
        }
    }

    /// Parses a name, a function call, or the `position` comparison.
    ///
    /// ```text
    /// NameOrFunc ::= Name ('(' Arg (',' Arg)* ')')?
    /// ```
    ///
    /// `position` is special-cased: it must appear exactly as
    /// `position()=N` and is normalized to [`Predicate::Position`].
    fn parse_name_or_function(&mut self) -> Result<Predicate, Error> {
        let name = self.expect_name()?;

        if name == "position" {
            self.expect(TokenKind::LeftParen)?;
            self.expect(TokenKind::RightParen)?;
            self.expect(TokenKind::Equal)?;
            if !self.check(TokenKind::Number) {
                return Err(self.error(&format!(
                    "expected a number after 'position()=', found {}",
                    self.describe()
                )));
            }
            let token = self.bump()?;
            return Ok(Predicate::Position(token.value.unwrap_or_default()));
        }

        if self.check(TokenKind::LeftParen) {
            let args = self.parse_args()?;
            return Ok(Predicate::Function { name, args });
        }

        Ok(Predicate::Name(name))
    }

    /// Parses a parenthesized, comma-separated argument list.
    fn parse_args(&mut self) -> Result<Vec<Arg>, Error> {
        self.expect(TokenKind::LeftParen)?;
        let mut args = Vec::new();
        if !self.check(TokenKind::RightParen) {
            args.push(self.parse_arg()?);
            while self.eat(TokenKind::Comma)? {
                args.push(self.parse_arg()?);
            }
        }
        self.expect(TokenKind::RightParen)?;
        Ok(args)
    }

    /// Parses one function argument.
    ///
    /// ```text
    /// Arg ::= Name ('(' ')')? | String | '@' Name
    /// ```
    ///
    /// The zero-argument pseudo-call form is folded into the plain name, so
    /// `text()` and `text` are indistinguishable downstream. Calls with
    /// arguments do not nest.
    fn parse_arg(&mut self) -> Result<Arg, Error> {
        if self.check(TokenKind::Name) {
            let name = self.expect_name()?;
            if self.eat(TokenKind::LeftParen)? {
                self.expect(TokenKind::RightParen)?;
            }
            Ok(Arg::Name(name))
        } else if self.check(TokenKind::Literal) {
            let token = self.bump()?;
            Ok(Arg::StringLiteral(token.value.unwrap_or_default()))
        } else if self.eat(TokenKind::At)? {
            Ok(Arg::AttributeRef(self.expect_name()?))
        } else {
            Err(self.error(&format!(
                "expected a function argument, found {}",
                self.describe()
            )))
        }
    }
}
