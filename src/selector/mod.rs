//! jQuery-style selector scanning.
//!
//! This module turns a selector string into an ordered list of fragments
//! that the XPath builder consumes.
//!
//! # Supported Syntax
//!
//! - `div`, `*` - Element name
//! - `#main` - Element id
//! - `.item` - Class name
//! - `[href]`, `[type=text]`, `[type!='hidden']` - Attribute tests
//! - `:contains('text')`, `:parent` - Filters
//! - `a, b` - Selector list
//! - `a > b` - Child
//! - `a b` - Descendant
//! - `a + b`, `a ~ b` - Recognised but rejected
//!
//! # Examples
//!
//! ```
//! // div.note#first        - a div with class "note" and id "first"
//! // ul > li[data-id]      - li children of ul that have a data-id attribute
//! // script:contains('x')  - script elements whose text contains "x"
//! ```

pub mod ast;
pub mod error;
pub mod parser;

pub use ast::{Combinator, Fragment};
pub use error::SelectorError;
pub use parser::parse;
