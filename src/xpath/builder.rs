//! Builds a [`PathNode`] tree from selector fragments.

use super::node::{PathNode, RootMode};
use crate::selector::{parse, Combinator, Fragment, SelectorError};

/// Most combinators a single selector may chain.
///
/// Every combinator nests one more node in the tree, and building, rendering
/// and dropping the tree all recurse once per level.
pub const MAX_DEPTH: usize = 256;

/// Scans `selector` and builds its path tree.
///
/// Combinator remainders are built through this same function, so the
/// recursion depth equals the number of combinators in the selector.
pub fn build_selector(selector: &str, root_mode: RootMode) -> Result<PathNode, SelectorError> {
    build_selector_at(selector, root_mode, 0)
}

/// Folds fragments into a single step, spawning a child or an alternative at
/// the first combinator.
///
/// # Errors
///
/// - [`SelectorError::UnsupportedOperator`] for attribute operators other than `=` and `!=`
/// - [`SelectorError::UnsupportedFilter`] for filters other than `contains` and `parent`
/// - [`SelectorError::FilterArgument`] when `contains` lacks an argument or `parent` has one
/// - [`SelectorError::UnsupportedCombinator`] for `+` and `~`
/// - [`SelectorError::TooDeep`] past [`MAX_DEPTH`] combinators
/// - any error from scanning a combinator remainder
pub fn build(fragments: Vec<Fragment>, root_mode: RootMode) -> Result<PathNode, SelectorError> {
    build_at(fragments, root_mode, 0)
}

fn build_selector_at(
    selector: &str,
    root_mode: RootMode,
    depth: usize,
) -> Result<PathNode, SelectorError> {
    if depth > MAX_DEPTH {
        return Err(SelectorError::TooDeep { limit: MAX_DEPTH });
    }
    let fragments = parse(selector)?;
    build_at(fragments, root_mode, depth)
}

fn build_at(
    fragments: Vec<Fragment>,
    root_mode: RootMode,
    depth: usize,
) -> Result<PathNode, SelectorError> {
    let mut node = PathNode::new(root_mode);

    for fragment in fragments {
        match fragment {
            Fragment::Element { name } => node.set_node_test(name),
            Fragment::Id { value } => node.push_predicate(format!("@id={}", literal(&value))),
            Fragment::ClassName { value } => node.push_predicate(format!(
                "contains(concat(' ', normalize-space(@class), ' '), {})",
                literal(&format!(" {} ", value))
            )),
            Fragment::Attribute {
                name,
                operator,
                value,
            } => node.push_predicate(attribute_predicate(name, operator, value)?),
            Fragment::Filter { name, argument } => apply_filter(&mut node, name, argument)?,
            Fragment::Combinator { kind, remainder } => {
                let next = depth + 1;
                match kind {
                    Combinator::Multiple => {
                        node.push_alternative(build_selector_at(&remainder, root_mode, next)?)
                    }
                    Combinator::Child => node.push_child(build_selector_at(
                        &remainder,
                        RootMode::AbsoluteFromRoot,
                        next,
                    )?),
                    Combinator::Descendant => node.push_child(build_selector_at(
                        &remainder,
                        RootMode::AbsoluteAnywhere,
                        next,
                    )?),
                    Combinator::Adjacent | Combinator::Sibling => {
                        return Err(SelectorError::UnsupportedCombinator { combinator: kind })
                    }
                }
                break;
            }
        }
    }

    Ok(node)
}

fn attribute_predicate(
    name: String,
    operator: Option<String>,
    value: Option<String>,
) -> Result<String, SelectorError> {
    let value = value.unwrap_or_default();
    match operator.as_deref() {
        None => Ok(format!("@{}", name)),
        Some("=") => Ok(format!("@{}={}", name, literal(&value))),
        Some("!=") => Ok(format!("@{} != {}", name, literal(&value))),
        Some(other) => Err(SelectorError::UnsupportedOperator {
            attribute: name,
            operator: other.to_string(),
        }),
    }
}

fn apply_filter(
    node: &mut PathNode,
    name: String,
    argument: Option<String>,
) -> Result<(), SelectorError> {
    match (name.as_str(), argument) {
        ("contains", Some(text)) => {
            let text = text.replace('<', "&gt;");
            node.push_predicate(format!("contains(text(), {})", literal(&text)));
            Ok(())
        }
        ("contains", None) => Err(SelectorError::FilterArgument {
            name,
            message: "expected text to search for".to_string(),
        }),
        ("parent", None) => {
            let mut parent = PathNode::new(RootMode::AbsoluteFromRoot);
            parent.set_node_test("..");
            node.push_child(parent);
            Ok(())
        }
        ("parent", Some(_)) => Err(SelectorError::FilterArgument {
            name,
            message: "takes no argument".to_string(),
        }),
        _ => Err(SelectorError::UnsupportedFilter { name }),
    }
}

/// Quotes `value` as an XPath 1.0 string literal.
///
/// XPath has no escape sequences, so a value holding both quote kinds is
/// split into a `concat()` of alternately quoted pieces.
pub fn literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{}'", value);
    }
    if !value.contains('"') {
        return format!("\"{}\"", value);
    }

    let pieces: Vec<String> = value
        .split('\'')
        .map(|piece| format!("'{}'", piece))
        .collect();
    format!("concat({})", pieces.join(", \"'\", "))
}
