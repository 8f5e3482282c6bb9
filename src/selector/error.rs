//! Error types for selector scanning and XPath building.

use super::ast::Combinator;
use thiserror::Error;

/// Errors that can occur while converting a selector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Text no grammar rule matches. `position` is a byte offset into `input`,
    /// the selector (or combinator remainder) being scanned.
    #[error("Unexpected '{residue}' at position {position} in '{input}'")]
    Grammar {
        input: String,
        position: usize,
        residue: String,
    },

    /// Attribute operator outside `=` and `!=`.
    #[error("Unsupported attribute operator '{operator}' on [{attribute}]")]
    UnsupportedOperator { attribute: String, operator: String },

    /// Filter name outside the supported set.
    #[error("Unsupported filter ':{name}'")]
    UnsupportedFilter { name: String },

    /// Combinator that is recognised but has no XPath mapping.
    #[error("Unsupported combinator {combinator}")]
    UnsupportedCombinator { combinator: Combinator },

    /// Combinator with nothing after it.
    #[error("Expected a selector after combinator {combinator}")]
    DanglingCombinator { combinator: Combinator },

    /// Combinator with nothing before it.
    #[error("Expected a selector before combinator {combinator}")]
    LeadingCombinator { combinator: Combinator },

    /// Selector chaining more combinators than the builder nests.
    #[error("Selector nests more than {limit} combinators")]
    TooDeep { limit: usize },

    /// Supported filter used with a missing or unexpected argument.
    #[error("Invalid argument for ':{name}': {message}")]
    FilterArgument { name: String, message: String },
}
