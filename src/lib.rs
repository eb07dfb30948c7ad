//! # xpath2css
//!
//! Translates a constrained subset of `XPath` location paths into
//! equivalent CSS selectors. The subset covers the abbreviated child (`/`)
//! and descendant-or-self (`//`) axes, tag and wildcard node tests,
//! attribute comparisons, position filters, and the `contains` function --
//! the paths that browser dev tools and scraping scripts actually produce.
//!
//! ## Quick Start
//!
//! ```
//! use xpath2css::translate;
//!
//! let css = translate("//div[@id=\"foo\"][2]/span[@class=\"bar\"]").unwrap();
//! assert_eq!(css, "div#foo:nth-child(2) > span.bar");
//! ```
//!
//! Translation is a pure function of the input string: no I/O, no caching,
//! no shared state. Errors are values (see [`Error`]); concurrent calls on
//! independent inputs need no synchronization.

pub mod css;
pub mod error;
pub mod xpath;

pub use error::Error;
pub use xpath::ast::{Arg, AttributeFilter, Axis, NodeTest, Predicate, Step};
pub use xpath::parser::parse;

/// Translates a location-path expression into a CSS selector.
///
/// Parsing and rendering happen in one pass; see [`parse`] and
/// [`css::to_selector`] for the halves.
///
/// # Errors
///
/// Returns [`Error::Lexical`] or [`Error::Syntax`] (with a byte offset)
/// when the input is not a supported location path, and
/// [`Error::Translation`] when it parses but uses a construct with no CSS
/// counterpart.
///
/// # Examples
///
/// ```
/// use xpath2css::translate;
///
/// assert_eq!(translate("/people/person[2]").unwrap(), "people > person:nth-child(2)");
/// assert!(translate("//a|//b").is_err());
/// ```
pub fn translate(input: &str) -> Result<String, Error> {
    let steps = xpath::parser::parse(input)?;
    css::to_selector(&steps)
}

/// Returns `true` if the input parses as a supported location path.
///
/// This runs the parse phase only: a path that parses but fails to render
/// (say, an unsupported function) still returns `true`. Use [`translate`]
/// when the distinction matters.
///
/// # Examples
///
/// ```
/// use xpath2css::is_xpath;
///
/// assert!(is_xpath("//div[@id=\"foo\"]"));
/// assert!(!is_xpath("div.foo"));
/// assert!(!is_xpath(""));
/// ```
#[must_use]
pub fn is_xpath(input: &str) -> bool {
    xpath::parser::parse(input).is_ok()
}
