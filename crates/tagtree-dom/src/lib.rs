//! Node tree for tagtree documents.
//!
//! A document is a strict tree of [`Node`]s: every node owns its children,
//! there is no sharing between parents, and a node never changes after it is
//! constructed. The tree builder creates nodes bottom-up, so a node's
//! children always exist before the node itself.
//!
//! # Serialization
//!
//! [`Node::render`] produces the canonical bracketed form `tag(children...)`,
//! with no separator between siblings:
//!
//! ```text
//! <xml><hi></hi><there/></xml>   =>   xml(hi()there())
//! ```
//!
//! Rendering, equality, depth and drop walk the tree with an explicit stack,
//! so they handle any nesting depth the builder produces. `Clone`, `Debug`
//! and `Serialize` are derived and still recurse.

use core::fmt;
use core::mem;

use serde::Serialize;

/// An element of the document tree.
///
/// `tag` is a non-empty name made of ASCII letters, `-` and `_`. `children`
/// holds the nodes that appeared between the opening and matching closing
/// tag, in document order (empty for self-closing tags).
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    tag: String,
    children: Vec<Node>,
}

impl Node {
    /// Create a node that owns `children`.
    #[must_use]
    pub fn new(tag: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            tag: tag.into(),
            children,
        }
    }

    /// Create a childless node, as produced by a self-closing tag.
    #[must_use]
    pub fn leaf(tag: impl Into<String>) -> Self {
        Self::new(tag, Vec::new())
    }

    /// The element's tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The element's children in document order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Whether the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Render the subtree as `tag(child1child2...)`.
    ///
    /// Depth-first and pre-order. Total over any tree.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        let mut steps = vec![Step::Open(self)];
        while let Some(step) = steps.pop() {
            match step {
                Step::Open(node) => {
                    out.push_str(&node.tag);
                    out.push('(');
                    steps.push(Step::Close);
                    steps.extend(node.children.iter().rev().map(Step::Open));
                }
                Step::Close => out.push(')'),
            }
        }
    }

    /// Number of nodes in the subtree, this node included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.descendants().count()
    }

    /// Number of levels in the subtree. A leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(1, self)];
        while let Some((level, node)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|child| (level + 1, child)));
        }
        deepest
    }

    /// Iterate over this node and every node below it, in pre-order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Rendering events: a node's name and `(`, then later its `)`.
enum Step<'a> {
    Open(&'a Node),
    Close,
}

/// Two trees are equal when their pre-order sequences of tag and child count
/// match; that sequence determines the tree's shape.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        fn shape(node: &Node) -> (&str, usize) {
            (node.tag.as_str(), node.children.len())
        }
        self.descendants()
            .map(shape)
            .eq(other.descendants().map(shape))
    }
}

impl Eq for Node {}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Pre-order iterator over a subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Indented outline of a subtree, one node per line.
///
/// Nodes with children print as `<tag>`, leaves as `<tag/>`; each level is
/// indented two spaces further than its parent.
#[must_use]
pub fn outline(node: &Node, indent: usize) -> String {
    let mut out = String::new();
    for (level, n) in outline_entries(node, indent) {
        let prefix = "  ".repeat(level);
        if n.is_leaf() {
            out.push_str(&format!("{prefix}<{}/>\n", n.tag));
        } else {
            out.push_str(&format!("{prefix}<{}>\n", n.tag));
        }
    }
    out
}

fn outline_entries(node: &Node, indent: usize) -> Vec<(usize, &Node)> {
    let mut entries = Vec::new();
    let mut stack = vec![(indent, node)];
    while let Some((level, n)) = stack.pop() {
        entries.push((level, n));
        stack.extend(n.children.iter().rev().map(|c| (level + 1, c)));
    }
    entries
}

/// Print a node tree for debugging.
pub fn print_tree(node: &Node, indent: usize) {
    print!("{}", outline(node, indent));
}
