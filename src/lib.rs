//! jqxpath converts jQuery-style CSS selectors into XPath 1.0 expressions.
//!
//! ```
//! use jqxpath::{convert, RootMode};
//!
//! let xpath = convert("div.note#first", RootMode::AbsoluteFromRoot).unwrap();
//! assert_eq!(
//!     xpath,
//!     "/div[contains(concat(' ', normalize-space(@class), ' '), ' note ') and @id='first']"
//! );
//! ```

pub mod config;
pub mod file;
pub mod report;
pub mod selector;
pub mod xpath;

pub use selector::SelectorError;
pub use xpath::{PathNode, RootMode};

/// Converts a selector into an XPath expression.
///
/// Every call builds its own tree, so repeated calls with the same arguments
/// return identical strings.
///
/// # Errors
///
/// Returns a [`SelectorError`] if the selector uses syntax outside the
/// grammar or a feature with no XPath mapping. No partial output is produced.
pub fn convert(selector: &str, root_mode: RootMode) -> Result<String, SelectorError> {
    let tree = xpath::build_selector(selector, root_mode)?;
    let rendered = tree.render();
    log::debug!("converted {:?} to {:?}", selector, rendered);
    Ok(rendered)
}

/// Converts a selector rooted at the document root (`/`).
pub fn convert_default(selector: &str) -> Result<String, SelectorError> {
    convert(selector, RootMode::default())
}
