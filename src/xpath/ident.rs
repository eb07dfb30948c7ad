//! Identifier character classification.
//!
//! The identifier alphabet is a pragmatic one rather than the full XML
//! `NCName` production: HTML tag and attribute names in the wild are ASCII,
//! and `$` and `_` are accepted so that template-generated paths keep
//! lexing as single names.

/// Returns `true` if the character can start an identifier.
///
/// Accepts `$`, ASCII letters, and `_`.
#[must_use]
pub fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_ascii_alphabetic()
}

/// Returns `true` if the character can continue an identifier.
///
/// Accepts everything [`is_identifier_start`] accepts, plus ASCII digits
/// and `-`. The hyphen is included because attribute names like
/// `data-label` and class names like `nav-bar` must lex as one name.
#[must_use]
pub fn is_identifier_char(c: char) -> bool {
    c == '-' || c.is_ascii_digit() || is_identifier_start(c)
}
