//! File I/O for selector lists.
//!
//! This module loads newline-delimited selector lists from disk or stdin for
//! batch conversion.

pub mod loader;
