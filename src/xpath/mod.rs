//! Location-path lexing and parsing.
//!
//! This module implements the front half of the translator: turning a
//! location-path string from the supported `XPath` subset
//! (<https://www.w3.org/TR/xpath-10/#path-abbrev>) into a `Vec<`[`Step`]`>`.
//! The back half, rendering steps as a CSS selector, lives in
//! [`crate::css`].
//!
//! # Quick Start
//!
//! ```
//! use xpath2css::xpath::ast::Axis;
//! use xpath2css::xpath::parse;
//!
//! let steps = parse("//div[@id=\"foo\"]").unwrap();
//! assert_eq!(steps.len(), 1);
//! assert_eq!(steps[0].axis, Axis::DescendantOrSelf);
//! ```
//!
//! # Submodules
//!
//! - [`ast`]: Abstract syntax tree types for parsed paths.
//! - [`ident`]: Identifier character classification.
//! - [`token`]: Token kinds and the token record.
//! - [`lexer`]: On-demand tokenizer for path strings.
//! - [`parser`]: Recursive descent parser producing steps.

pub mod ast;
pub mod ident;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::Step;
pub use parser::parse;
