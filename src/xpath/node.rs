//! XPath step tree and its string rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Leading marker of a rendered path.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RootMode {
    /// No marker: the path is relative to the context node
    Relative,
    /// `/`: rooted at the document root (or a direct child of the previous step)
    #[default]
    #[serde(rename = "root")]
    #[value(name = "root")]
    AbsoluteFromRoot,
    /// `//`: anywhere below the document root (or the previous step)
    #[serde(rename = "anywhere")]
    #[value(name = "anywhere")]
    AbsoluteAnywhere,
}

impl RootMode {
    /// Returns the path marker for this mode.
    pub fn marker(&self) -> &'static str {
        match self {
            RootMode::Relative => "",
            RootMode::AbsoluteFromRoot => "/",
            RootMode::AbsoluteAnywhere => "//",
        }
    }
}

/// One XPath step with the sub-paths and unions attached to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathNode {
    node_test: Option<String>,
    axis: Option<String>,
    predicates: Vec<String>,
    root_mode: RootMode,
    children: Vec<PathNode>,
    alternatives: Vec<PathNode>,
}

impl PathNode {
    /// Creates an empty step with the given root mode.
    pub fn new(root_mode: RootMode) -> Self {
        Self {
            node_test: None,
            axis: None,
            predicates: Vec::new(),
            root_mode,
            children: Vec::new(),
            alternatives: Vec::new(),
        }
    }

    pub fn node_test(&self) -> Option<&str> {
        self.node_test.as_deref()
    }

    pub fn axis(&self) -> Option<&str> {
        self.axis.as_deref()
    }

    pub fn predicates(&self) -> &[String] {
        &self.predicates
    }

    pub fn root_mode(&self) -> RootMode {
        self.root_mode
    }

    pub fn children(&self) -> &[PathNode] {
        &self.children
    }

    pub fn alternatives(&self) -> &[PathNode] {
        &self.alternatives
    }

    /// Sets the node test, replacing any previous one.
    pub fn set_node_test(&mut self, node_test: impl Into<String>) {
        self.node_test = Some(node_test.into());
    }

    pub fn set_axis(&mut self, axis: impl Into<String>) {
        self.axis = Some(axis.into());
    }

    pub fn push_predicate(&mut self, predicate: impl Into<String>) {
        self.predicates.push(predicate.into());
    }

    pub fn push_child(&mut self, child: PathNode) {
        self.children.push(child);
    }

    pub fn push_alternative(&mut self, alternative: PathNode) {
        self.alternatives.push(alternative);
    }

    /// Returns true if the node carries its own step (node test, axis or predicates).
    pub fn has_step(&self) -> bool {
        self.node_test.is_some() || self.axis.is_some() || !self.predicates.is_empty()
    }

    /// Renders the tree as an XPath expression.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_step(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root_mode.marker())?;

        if let Some(axis) = &self.axis {
            write!(f, "{}::", axis)?;
        }

        let node_test = match (&self.node_test, &self.axis) {
            (Some(test), _) => test.as_str(),
            (None, Some(_)) => "self",
            (None, None) => "*",
        };
        f.write_str(node_test)?;

        if !self.predicates.is_empty() {
            write!(f, "[{}]", self.predicates.join(" and "))?;
        }
        Ok(())
    }
}

impl fmt::Display for PathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A bare step that only joins sub-paths has nothing of its own to print.
        if self.has_step() || self.children.is_empty() {
            self.write_step(f)?;
        }

        for child in &self.children {
            write!(f, "{}", child)?;
        }

        for alternative in &self.alternatives {
            write!(f, " | {}", alternative)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_mode_markers() {
        assert_eq!(RootMode::Relative.marker(), "");
        assert_eq!(RootMode::AbsoluteFromRoot.marker(), "/");
        assert_eq!(RootMode::AbsoluteAnywhere.marker(), "//");
        assert_eq!(RootMode::default(), RootMode::AbsoluteFromRoot);
    }

    #[test]
    fn test_render_empty_node() {
        assert_eq!(PathNode::new(RootMode::AbsoluteFromRoot).render(), "/*");
        assert_eq!(PathNode::new(RootMode::AbsoluteAnywhere).render(), "//*");
        assert_eq!(PathNode::new(RootMode::Relative).render(), "*");
    }

    #[test]
    fn test_render_predicates_joined_with_and() {
        let mut node = PathNode::new(RootMode::AbsoluteFromRoot);
        node.set_node_test("div");
        node.push_predicate("@id='a'");
        node.push_predicate("@title");
        assert_eq!(node.render(), "/div[@id='a' and @title]");
    }

    #[test]
    fn test_render_axis_defaults_node_test_to_self() {
        let mut node = PathNode::new(RootMode::Relative);
        node.set_axis("parent");
        assert_eq!(node.render(), "parent::self");

        node.set_node_test("div");
        assert_eq!(node.render(), "parent::div");
    }

    #[test]
    fn test_render_children_and_alternatives() {
        let mut child = PathNode::new(RootMode::AbsoluteAnywhere);
        child.set_node_test("b");

        let mut alternative = PathNode::new(RootMode::AbsoluteFromRoot);
        alternative.set_node_test("c");

        let mut root = PathNode::new(RootMode::AbsoluteFromRoot);
        root.set_node_test("a");
        root.push_child(child);
        root.push_alternative(alternative);

        assert_eq!(root.render(), "/a//b | /c");
    }

    #[test]
    fn test_render_stepless_node_with_children() {
        let mut child = PathNode::new(RootMode::AbsoluteFromRoot);
        child.set_node_test("..");

        let mut root = PathNode::new(RootMode::AbsoluteFromRoot);
        root.push_child(child);

        assert_eq!(root.render(), "/..");
    }
}
