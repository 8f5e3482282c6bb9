//! XPath generation from scanned selectors.
//!
//! [`build`] folds fragments into a [`PathNode`] tree and [`PathNode::render`]
//! prints it. Each combinator produces a new node: descendants and children
//! are appended to `children`, selector lists to `alternatives`.

pub mod builder;
pub mod node;

pub use builder::{build, build_selector, literal};
pub use node::{PathNode, RootMode};
