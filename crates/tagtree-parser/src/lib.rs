//! Tag scanner and tree builder for tagtree documents.
//!
//! # Grammar
//!
//! A document is made only of tags; there is no text, no attributes and no
//! whitespace handling. Three node forms exist:
//!
//! - `<name>...</name>`: an element whose children are the nodes between the
//!   two tags;
//! - `<name/>`: a childless element;
//! - any nesting of the two.
//!
//! Names are one or more of `A-Z`, `a-z`, `-` and `_`.
//!
//! # Entry points
//!
//! - [`parse`]: document text to the bracketed rendering, e.g.
//!   `<xml><hi/></xml>` becomes `xml(hi())`. Malformed input truncates the
//!   output silently.
//! - [`parse_tree`]: the same, returning the root [`Node`].
//! - [`parse_with_issues`] / [`parse_strict`]: opt-in validation.
//! - [`classify_next_tag`] and [`build`]: the scanner and builder stages.

/// Tree building from scanned tags.
pub mod builder;
/// Structural problems found while building.
pub mod error;
/// Tag classification at the start of the input.
pub mod scanner;

pub use builder::{Built, TreeBuilder, build};
pub use error::ParseError;
pub use scanner::{ScannedTag, TagKind, classify_next_tag};
pub use tagtree_dom::Node;

/// Parse `text` and render its root node, or return `""` when no node was
/// built.
///
/// Only the first top-level node is rendered: `<a/><b/>` gives `a()`, never
/// a comma-joined list such as `a(),b()`. Use [`parse_with_issues`] to learn
/// that other roots were dropped.
#[must_use]
pub fn parse(text: &str) -> String {
    parse_tree(text).as_ref().map(Node::render).unwrap_or_default()
}

/// Parse `text` and return its first top-level node.
#[must_use]
pub fn parse_tree(text: &str) -> Option<Node> {
    build(text, Vec::new()).siblings.into_iter().next()
}

/// Parse `text`, returning the first top-level node and every issue found.
///
/// The tree is the one [`parse_tree`] returns. Besides the builder's issues,
/// a document with no nodes reports [`ParseError::EmptyDocument`] and one
/// with several top-level nodes reports [`ParseError::MultipleRoots`].
#[must_use]
pub fn parse_with_issues(text: &str) -> (Option<Node>, Vec<ParseError>) {
    let (built, mut issues) = TreeBuilder::new(text).run();
    match built.siblings.len() {
        0 => issues.push(ParseError::EmptyDocument),
        1 => {}
        count => issues.push(ParseError::MultipleRoots { count }),
    }
    (built.siblings.into_iter().next(), issues)
}

/// Parse `text`, rejecting anything that is not exactly one well-formed
/// element.
///
/// # Errors
///
/// Returns the first issue [`parse_with_issues`] reports.
pub fn parse_strict(text: &str) -> Result<Node, ParseError> {
    let (root, issues) = parse_with_issues(text);
    if let Some(issue) = issues.into_iter().next() {
        return Err(issue);
    }
    root.ok_or(ParseError::EmptyDocument)
}
