//! Abstract syntax tree types for parsed location paths.
//!
//! This module defines the AST that results from parsing a location-path
//! expression. A path is a `Vec<`[`Step`]`>`; each step has an [`Axis`], a
//! [`NodeTest`], and zero or more [`Predicate`]s. Every node kind is a
//! closed sum type, so the renderer can match exhaustively and malformed
//! shapes (a predicate with no payload, an axis outside the supported two)
//! are unrepresentable.
//!
//! The `Display` impls render the canonical spelling of each node: the
//! parser normalizes `position()=2` to the bare-number form and
//! `text()` to a plain name, so a displayed path is equivalent to, but
//! not necessarily byte-identical with, its source.

use std::fmt;

/// The relation between a step and the nodes selected by the previous one.
///
/// Only the two abbreviated axes are supported; every other `XPath` axis
/// has no CSS combinator to translate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The child axis, written `/`.
    Child,
    /// The descendant-or-self axis, written `//`.
    DescendantOrSelf,
}

impl Axis {
    /// Returns the axis as it appears in path syntax.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Child => "/",
            Self::DescendantOrSelf => "//",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute name with an optional expected value.
///
/// `@id="foo"` carries `Some("foo")`; a bare `@href` carries `None` and
/// tests for attribute presence only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeFilter {
    /// The attribute name, without the leading `@`.
    pub attr: String,
    /// The expected value, when the filter compares rather than tests
    /// presence.
    pub value: Option<String>,
}

impl fmt::Display for AttributeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "@{}=\"{}\"", self.attr, value),
            None => write!(f, "@{}", self.attr),
        }
    }
}

/// The criterion a step applies to candidate nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeTest {
    /// The `*` wildcard, matching any element.
    Wildcard,

    /// A tag name test (e.g., `div`).
    Tag(String),

    /// An attribute selection used directly as the node test
    /// (e.g., `//@href` or `//@id="x"`).
    Attribute(AttributeFilter),
}

impl fmt::Display for NodeTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => f.write_str("*"),
            Self::Tag(name) => f.write_str(name),
            Self::Attribute(filter) => write!(f, "{filter}"),
        }
    }
}

/// An argument to a predicate function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// A name, including the zero-argument pseudo-call form: both `text`
    /// and `text()` parse to `Name("text")`.
    Name(String),

    /// A quoted string literal, stored decoded.
    StringLiteral(String),

    /// An attribute reference (e.g., `@class`), stored without the `@`.
    AttributeRef(String),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::StringLiteral(value) => write!(f, "\"{value}\""),
            Self::AttributeRef(attr) => write!(f, "@{attr}"),
        }
    }
}

/// A bracketed filter narrowing the nodes selected by a step.
///
/// A bracket group in the source holds either one predicate or exactly two
/// joined by `and`; in the AST the grouping is flattened and the step keeps
/// its predicates in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// A 1-based position filter. Both `[2]` and `[position()=2]` parse to
    /// this variant; the digits are kept as text and emitted verbatim.
    Position(String),

    /// An attribute filter (e.g., `[@id="foo"]` or `[@checked]`).
    Attribute(AttributeFilter),

    /// A function call (e.g., `[contains(@class, "nav")]`). Only
    /// `contains` survives translation; `position` never appears here
    /// because the parser normalizes it to [`Predicate::Position`].
    Function {
        /// The function name.
        name: String,
        /// The argument list, in source order.
        args: Vec<Arg>,
    },

    /// A bare name testing for a matching child (e.g., `[title]`).
    Name(String),
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(position) => write!(f, "[{position}]"),
            Self::Attribute(filter) => write!(f, "[{filter}]"),
            Self::Function { name, args } => {
                write!(f, "[{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")]")
            }
            Self::Name(name) => write!(f, "[{name}]"),
        }
    }
}

/// A single location step.
///
/// In `//div[@id="foo"]`, the axis is `DescendantOrSelf`, the node test is
/// `Tag("div")`, and there is one attribute predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The axis connecting this step to the previous one.
    pub axis: Axis,
    /// The test applied to each candidate node.
    pub node_test: NodeTest,
    /// Predicates that further filter the selected nodes, in source order.
    pub predicates: Vec<Predicate>,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.axis, self.node_test)?;
        for predicate in &self.predicates {
            write!(f, "{predicate}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_as_str() {
        assert_eq!(Axis::Child.as_str(), "/");
        assert_eq!(Axis::DescendantOrSelf.as_str(), "//");
        assert_eq!(Axis::Child.to_string(), "/");
    }

    #[test]
    fn test_attribute_filter_display() {
        let valued = AttributeFilter {
            attr: "id".to_string(),
            value: Some("foo".to_string()),
        };
        assert_eq!(valued.to_string(), "@id=\"foo\"");

        let bare = AttributeFilter {
            attr: "href".to_string(),
            value: None,
        };
        assert_eq!(bare.to_string(), "@href");
    }

    #[test]
    fn test_node_test_display() {
        assert_eq!(NodeTest::Wildcard.to_string(), "*");
        assert_eq!(NodeTest::Tag("div".to_string()).to_string(), "div");
        assert_eq!(
            NodeTest::Attribute(AttributeFilter {
                attr: "href".to_string(),
                value: None,
            })
            .to_string(),
            "@href"
        );
    }

    #[test]
    fn test_predicate_display() {
        assert_eq!(Predicate::Position("2".to_string()).to_string(), "[2]");
        assert_eq!(Predicate::Name("title".to_string()).to_string(), "[title]");
        assert_eq!(
            Predicate::Function {
                name: "contains".to_string(),
                args: vec![
                    Arg::AttributeRef("class".to_string()),
                    Arg::StringLiteral("nav".to_string()),
                ],
            }
            .to_string(),
            "[contains(@class, \"nav\")]"
        );
    }

    #[test]
    fn test_step_display() {
        let step = Step {
            axis: Axis::DescendantOrSelf,
            node_test: NodeTest::Tag("div".to_string()),
            predicates: vec![
                Predicate::Attribute(AttributeFilter {
                    attr: "id".to_string(),
                    value: Some("foo".to_string()),
                }),
                Predicate::Position("2".to_string()),
            ],
        };
        assert_eq!(step.to_string(), "//div[@id=\"foo\"][2]");
    }

    #[test]
    fn test_step_construction() {
        let step = Step {
            axis: Axis::Child,
            node_test: NodeTest::Wildcard,
            predicates: Vec::new(),
        };
        assert_eq!(step.axis, Axis::Child);
        assert_eq!(step.node_test, NodeTest::Wildcard);
        assert!(step.predicates.is_empty());
    }
}
