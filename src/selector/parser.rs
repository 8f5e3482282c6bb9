//! Selector string scanner.
//!
//! The grammar is a single regex alternation applied globally over the input.
//! Rules are tried in declaration order at each position, so the specific
//! rules (attribute, filter, id, class) come before the bare element rule,
//! and every combinator rule captures the rest of the input as its remainder.

use super::ast::{Combinator, Fragment};
use super::error::SelectorError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Grammar rules as (rule_name, regex_pattern) pairs, in precedence order.
///
/// Each pattern owns a named capture group whose presence identifies the rule
/// that matched. Combinator patterns absorb the whitespace around their symbol.
const GRAMMAR_RULES: &[(&str, &str)] = &[
    ("multiple", r"\s*,\s*(?P<multiple>.*)"),
    ("child", r"\s*>\s*(?P<child>.*)"),
    ("adjacent", r"\s*\+\s*(?P<adjacent>.*)"),
    ("sibling", r"\s*~\s*(?P<sibling>.*)"),
    // [name], [name op value], [name op "value"], [name op 'value']
    (
        "attribute",
        r#"\[\s*(?P<attribute>[\w-]+)\s*(?:(?P<operator>[^\w\s\]'"]*=)\s*(?:"(?P<dq_value>[^"]*)"|'(?P<sq_value>[^']*)'|(?P<value>[^\]]*?))\s*)?\]"#,
    ),
    // :name, :name(arg), :name("arg"), :name('arg')
    (
        "filter",
        r#":(?P<filter>[\w-]+)(?:\(\s*(?:"(?P<dq_argument>[^"]*)"|'(?P<sq_argument>[^']*)'|(?P<argument>[^)'"]*?))\s*\))?"#,
    ),
    ("id", r"#(?P<id>[\w-]+)"),
    ("class", r"\.(?P<class>[\w-]+)"),
    ("element", r"(?P<element>[\w-]+|\*)"),
    ("descendant", r"\s+(?P<descendant>\S.*)"),
];

/// Capture groups that introduce a combinator, with the combinator they map to.
const COMBINATOR_GROUPS: &[(&str, Combinator)] = &[
    ("multiple", Combinator::Multiple),
    ("child", Combinator::Child),
    ("adjacent", Combinator::Adjacent),
    ("sibling", Combinator::Sibling),
    ("descendant", Combinator::Descendant),
];

/// The compiled grammar. `(?s)` lets a remainder span newlines.
static GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    let alternation = GRAMMAR_RULES
        .iter()
        .map(|(_, pattern)| format!("(?:{})", pattern))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?s){}", alternation)).unwrap()
});

/// Scans a selector into fragments.
///
/// Leading and trailing whitespace is ignored. Scanning stops after the first
/// combinator, whose fragment carries the rest of the selector.
///
/// # Errors
///
/// - [`SelectorError::Grammar`] if some part of the input matches no rule
/// - [`SelectorError::DanglingCombinator`] if a combinator ends the input
/// - [`SelectorError::LeadingCombinator`] if a combinator starts the input
pub fn parse(selector: &str) -> Result<Vec<Fragment>, SelectorError> {
    let input = selector.trim();
    let offset = selector.len() - selector.trim_start().len();

    let mut fragments = Vec::new();
    let mut cursor = 0;

    for caps in GRAMMAR.captures_iter(input) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() != cursor {
            return Err(unexpected(selector, input, cursor, whole.start(), offset));
        }
        cursor = whole.end();

        let fragment = classify(&caps, selector, offset + whole.start())?;
        let done = fragment.is_combinator();
        if let Fragment::Combinator { kind, .. } = &fragment {
            if fragments.is_empty() {
                return Err(SelectorError::LeadingCombinator { combinator: *kind });
            }
        }
        fragments.push(fragment);
        if done {
            break;
        }
    }

    if cursor != input.len() {
        return Err(unexpected(selector, input, cursor, input.len(), offset));
    }

    log::debug!("scanned {:?} into {:?}", selector, fragments);
    Ok(fragments)
}

fn unexpected(
    selector: &str,
    input: &str,
    start: usize,
    end: usize,
    offset: usize,
) -> SelectorError {
    SelectorError::Grammar {
        input: selector.to_string(),
        position: offset + start,
        residue: input[start..end].to_string(),
    }
}

/// Turns one grammar match into a fragment according to the group that matched.
fn classify(
    caps: &Captures<'_>,
    selector: &str,
    position: usize,
) -> Result<Fragment, SelectorError> {
    for (group, kind) in COMBINATOR_GROUPS {
        if let Some(remainder) = caps.name(group) {
            if remainder.as_str().is_empty() {
                return Err(SelectorError::DanglingCombinator { combinator: *kind });
            }
            return Ok(Fragment::Combinator {
                kind: *kind,
                remainder: remainder.as_str().to_string(),
            });
        }
    }

    if let Some(name) = caps.name("attribute") {
        let operator = caps.name("operator").map(|m| m.as_str().to_string());
        let value = match operator {
            Some(_) => first_group(caps, &["dq_value", "sq_value"])
                .or_else(|| caps.name("value").map(|m| m.as_str().trim().to_string())),
            None => None,
        };
        return Ok(Fragment::Attribute {
            name: name.as_str().to_string(),
            operator,
            value,
        });
    }

    if let Some(name) = caps.name("filter") {
        let argument = first_group(caps, &["dq_argument", "sq_argument"]).or_else(|| {
            caps.name("argument")
                .map(|m| m.as_str().trim())
                .filter(|arg| !arg.is_empty())
                .map(str::to_string)
        });
        return Ok(Fragment::Filter {
            name: name.as_str().to_string(),
            argument,
        });
    }

    if let Some(value) = caps.name("id") {
        return Ok(Fragment::Id {
            value: value.as_str().to_string(),
        });
    }

    if let Some(value) = caps.name("class") {
        return Ok(Fragment::ClassName {
            value: value.as_str().to_string(),
        });
    }

    if let Some(name) = caps.name("element") {
        return Ok(Fragment::Element {
            name: name.as_str().to_string(),
        });
    }

    // Every rule owns a group, so a match always lands in one of the branches above.
    Err(SelectorError::Grammar {
        input: selector.to_string(),
        position,
        residue: caps[0].to_string(),
    })
}

/// Returns the text of the first participating group among `names`.
fn first_group(caps: &Captures<'_>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| caps.name(name))
        .map(|m| m.as_str().to_string())
}
