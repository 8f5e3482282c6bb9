//! Fragment types produced by the selector scanner.

use serde::Serialize;
use std::fmt;

/// A selector combinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    /// Selector list (`,`)
    Multiple,
    /// Direct child (`>`)
    Child,
    /// Adjacent sibling (`+`) - recognised, not supported
    Adjacent,
    /// General sibling (`~`) - recognised, not supported
    Sibling,
    /// Descendant (whitespace)
    Descendant,
}

impl Combinator {
    /// Returns the selector syntax for this combinator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Combinator::Multiple => ",",
            Combinator::Child => ">",
            Combinator::Adjacent => "+",
            Combinator::Sibling => "~",
            Combinator::Descendant => " ",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::Descendant => f.write_str("descendant (whitespace)"),
            other => write!(f, "'{}'", other.symbol()),
        }
    }
}

/// One classified piece of a selector, in scan order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fragment {
    /// Bare element name (`div`) or `*`
    Element { name: String },
    /// Id selector (`#main`)
    Id { value: String },
    /// Class selector (`.item`)
    ClassName { value: String },
    /// Attribute selector (`[name]`, `[name=value]`, `[name!=value]`, ...)
    ///
    /// The operator is kept verbatim; the builder decides whether it is supported.
    Attribute {
        name: String,
        operator: Option<String>,
        value: Option<String>,
    },
    /// Filter (`:contains('x')`, `:parent`), argument quote-stripped
    Filter {
        name: String,
        argument: Option<String>,
    },
    /// Combinator plus the unscanned rest of the selector
    Combinator {
        kind: Combinator,
        remainder: String,
    },
}

impl Fragment {
    /// Returns true if this fragment ends the scan of the current step.
    pub fn is_combinator(&self) -> bool {
        matches!(self, Fragment::Combinator { .. })
    }
}
