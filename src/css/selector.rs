//! CSS selector renderer.
//!
//! Renders a `Vec<`[`Step`]`>` into a CSS selector string. The mapping is
//! deterministic and purely local:
//!
//! ```text
//! axis        first step           ->  ""
//!             `/`                  ->  " > "
//!             `//`                 ->  " "
//! node test   `*`                  ->  ""
//!             name                 ->  the name
//!             `@attr`              ->  the attribute filter text
//! predicate   `[n]`                ->  ":nth-child(n)"
//!             `[@id="v"]`          ->  "#v"
//!             `[@class="v"]`       ->  ".v"
//!             `[@attr="v"]`        ->  "[attr=\"v\"]"
//!             `[@attr]`            ->  "[attr]"
//!             `[contains(text(), v)]` -> ":contains(v)"
//!             `[contains(@attr, v)]`  -> "[attr*=v]"
//!             `[name]`             ->  ":has(name)"
//! ```
//!
//! Names and values are emitted verbatim, with no CSS escaping; garbage in,
//! garbage out. `:contains` and `:has` predate their standardization and
//! target the extended selector engines of scraping libraries.

use crate::error::Error;
use crate::xpath::ast::{Arg, AttributeFilter, Axis, NodeTest, Predicate, Step};

/// Renders the steps of a location path as a CSS selector.
///
/// # Errors
///
/// Returns [`Error::Translation`] when a predicate has no CSS counterpart:
/// a function other than `contains`, or a `contains` call whose arguments
/// are not translatable.
///
/// # Examples
///
/// ```
/// use xpath2css::css::to_selector;
/// use xpath2css::xpath::parser::parse;
///
/// let steps = parse("//people/person[@id=\"jed\"]").unwrap();
/// assert_eq!(to_selector(&steps).unwrap(), "people > person#jed");
/// ```
pub fn to_selector(steps: &[Step]) -> Result<String, Error> {
    let mut out = String::new();
    for (index, step) in steps.iter().enumerate() {
        push_combinator(&mut out, step.axis, index == 0);
        push_node_test(&mut out, &step.node_test);
        for predicate in &step.predicates {
            push_predicate(&mut out, predicate)?;
        }
    }
    Ok(out)
}

/// Appends the combinator for a step's axis.
///
/// The first step has no left-hand side and gets no combinator regardless
/// of how it was written.
fn push_combinator(out: &mut String, axis: Axis, is_first: bool) {
    if is_first {
        return;
    }
    match axis {
        Axis::Child => out.push_str(" > "),
        Axis::DescendantOrSelf => out.push(' '),
    }
}

/// Appends the node-test text.
///
/// The wildcard appends nothing: predicates alone constrain the element,
/// and `div:nth-child(2)` reads better than `*:nth-child(2)` with the
/// same meaning when a tag is present.
fn push_node_test(out: &mut String, node_test: &NodeTest) {
    match node_test {
        NodeTest::Wildcard => {}
        NodeTest::Tag(name) => out.push_str(name),
        NodeTest::Attribute(filter) => push_attribute_filter(out, filter),
    }
}

/// Appends an attribute filter.
///
/// `id` and `class` comparisons use the `#` and `.` shorthands; those
/// require a value, so a bare filter always renders as the `[attr]`
/// existence selector. Values are wrapped in double quotes verbatim.
fn push_attribute_filter(out: &mut String, filter: &AttributeFilter) {
    match (filter.attr.as_str(), &filter.value) {
        ("id", Some(value)) => {
            out.push('#');
            out.push_str(value);
        }
        ("class", Some(value)) => {
            out.push('.');
            out.push_str(value);
        }
        (attr, Some(value)) => {
            out.push('[');
            out.push_str(attr);
            out.push_str("=\"");
            out.push_str(value);
            out.push_str("\"]");
        }
        (attr, None) => {
            out.push('[');
            out.push_str(attr);
            out.push(']');
        }
    }
}

/// Appends one predicate.
fn push_predicate(out: &mut String, predicate: &Predicate) -> Result<(), Error> {
    match predicate {
        Predicate::Position(position) => {
            out.push_str(":nth-child(");
            out.push_str(position);
            out.push(')');
        }
        Predicate::Attribute(filter) => push_attribute_filter(out, filter),
        Predicate::Function { name, args } => push_function(out, name, args)?,
        Predicate::Name(name) => {
            out.push_str(":has(");
            out.push_str(name);
            out.push(')');
        }
    }
    Ok(())
}

/// Appends a function-call predicate.
///
/// `contains` is the only supported function. Searching text maps to the
/// `:contains` pseudo-class; searching an attribute maps to the `*=`
/// substring matcher. Both emit the needle unquoted.
fn push_function(out: &mut String, name: &str, args: &[Arg]) -> Result<(), Error> {
    if name != "contains" {
        return Err(translation_error(format!("unsupported function '{name}'")));
    }

    let (haystack, needle) = match args {
        [haystack, needle] => (haystack, needle),
        _ => {
            return Err(translation_error(format!(
                "'contains' takes exactly 2 arguments, got {}",
                args.len()
            )));
        }
    };

    let value = match needle {
        Arg::Name(value) | Arg::StringLiteral(value) => value,
        Arg::AttributeRef(_) => {
            return Err(translation_error(
                "the second argument of 'contains' must be a name or a string".to_string(),
            ));
        }
    };

    match haystack {
        Arg::Name(target) if target == "text" => {
            out.push_str(":contains(");
            out.push_str(value);
            out.push(')');
        }
        Arg::AttributeRef(attr) => {
            out.push('[');
            out.push_str(attr);
            out.push_str("*=");
            out.push_str(value);
            out.push(']');
        }
        _ => {
            return Err(translation_error(
                "the first argument of 'contains' must be text() or an attribute reference"
                    .to_string(),
            ));
        }
    }
    Ok(())
}

/// Creates a translation error with the given message.
fn translation_error(message: String) -> Error {
    Error::Translation { message }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::xpath::parser::parse;

    /// Parses and renders, panicking on error.
    fn sel(input: &str) -> String {
        to_selector(&parse(input).unwrap()).unwrap()
    }

    /// Parses successfully, then asserts that rendering fails with the
    /// given message.
    fn assert_translation_error(input: &str, expected_message: &str) {
        let steps = parse(input).unwrap();
        match to_selector(&steps) {
            Ok(css) => panic!("expected translation error for {input:?}, got {css:?}"),
            Err(Error::Translation { message }) => assert_eq!(message, expected_message),
            Err(other) => panic!("expected a translation error for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_combinators() {
        assert_eq!(sel("/html/body"), "html > body");
        assert_eq!(sel("//html//body"), "html body");
        assert_eq!(sel("/a//b/c"), "a b > c");
    }

    #[test]
    fn test_first_step_axis_is_dropped() {
        // `/a` and `//a` render identically: there is nothing to combine with.
        assert_eq!(sel("/a"), "a");
        assert_eq!(sel("//a"), "a");
    }

    #[test]
    fn test_wildcard_renders_empty() {
        assert_eq!(sel("//*[2]"), ":nth-child(2)");
        assert_eq!(sel("/a/*"), "a > ");
    }

    #[test]
    fn test_id_and_class_shorthands() {
        assert_eq!(sel("//div[@id=\"foo\"]"), "div#foo");
        assert_eq!(sel("//span[@class=\"bar\"]"), "span.bar");
    }

    #[test]
    fn test_plain_attribute_comparison_is_quoted() {
        assert_eq!(
            sel("//person[@lastname=\"brown\"]"),
            "person[lastname=\"brown\"]"
        );
    }

    #[test]
    fn test_bare_attribute_is_existence() {
        assert_eq!(sel("//input[@checked]"), "input[checked]");
        assert_eq!(sel("//input[@id]"), "input[id]");
        assert_eq!(sel("//a/@href"), "a > [href]");
    }

    #[test]
    fn test_attribute_node_test() {
        assert_eq!(sel("//@id=\"x\""), "#x");
        assert_eq!(sel("/form//@disabled"), "form [disabled]");
    }

    #[test]
    fn test_positions() {
        assert_eq!(sel("/ul/li[4]"), "ul > li:nth-child(4)");
        assert_eq!(sel("/ul/li[position()=4]"), "ul > li:nth-child(4)");
    }

    #[test]
    fn test_contains_text() {
        assert_eq!(sel("//p[contains(text(), \"hi\")]"), "p:contains(hi)");
        assert_eq!(sel("//p[contains(text, \"hi\")]"), "p:contains(hi)");
    }

    #[test]
    fn test_contains_attribute_is_unquoted() {
        assert_eq!(sel("//a[contains(@class, \"baz\")]"), "a[class*=baz]");
        assert_eq!(
            sel("//address[contains(@street, 'south')]"),
            "address[street*=south]"
        );
    }

    #[test]
    fn test_contains_needle_may_be_a_name() {
        assert_eq!(sel("//a[contains(@class, baz)]"), "a[class*=baz]");
    }

    #[test]
    fn test_name_predicate() {
        assert_eq!(sel("//book[title]"), "book:has(title)");
    }

    #[test]
    fn test_predicates_concatenate_in_order() {
        assert_eq!(sel("//div[@id=\"foo\"][2]"), "div#foo:nth-child(2)");
        assert_eq!(
            sel("/input[@id=\"a\" and position()=2]"),
            "input#a:nth-child(2)"
        );
    }

    #[test]
    fn test_unsupported_function() {
        assert_translation_error(
            "//a[starts-with(@href, \"x\")]",
            "unsupported function 'starts-with'",
        );
    }

    #[test]
    fn test_contains_arity() {
        assert_translation_error(
            "//a[contains()]",
            "'contains' takes exactly 2 arguments, got 0",
        );
        assert_translation_error(
            "//a[contains(@class)]",
            "'contains' takes exactly 2 arguments, got 1",
        );
        assert_translation_error(
            "//a[contains(@a, \"b\", \"c\")]",
            "'contains' takes exactly 2 arguments, got 3",
        );
    }

    #[test]
    fn test_contains_bad_haystack() {
        assert_translation_error(
            "//a[contains(\"x\", \"y\")]",
            "the first argument of 'contains' must be text() or an attribute reference",
        );
        assert_translation_error(
            "//a[contains(body, \"y\")]",
            "the first argument of 'contains' must be text() or an attribute reference",
        );
    }

    #[test]
    fn test_contains_bad_needle() {
        assert_translation_error(
            "//a[contains(text(), @class)]",
            "the second argument of 'contains' must be a name or a string",
        );
    }

    #[test]
    fn test_empty_steps_render_empty() {
        assert_eq!(to_selector(&[]).unwrap(), "");
    }
}
