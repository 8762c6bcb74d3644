//! Tree builder.
//!
//! Consumes scanner output and assembles nodes bottom-up. Each nesting level
//! keeps a list of completed siblings:
//!
//! - an opening tag starts a fresh level;
//! - a self-closing tag appends a leaf to the current level;
//! - a closing tag collapses the current level into one node named after the
//!   closing tag, which joins the parent level;
//! - anything the scanner cannot classify stops the build.
//!
//! Nesting depth lives on an explicit stack of open elements rather than the
//! call stack. Rendering and dropping the resulting tree are iterative too,
//! so deeply nested documents cannot overflow it.

use std::mem;

use tagtree_dom::Node;

use crate::error::ParseError;
use crate::scanner::{ScannedTag, classify_next_tag};

/// Result of a build: the unconsumed input and the nodes built at the
/// starting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Built<'a> {
    /// Input left over after the build stopped.
    pub rest: &'a str,
    /// Completed nodes at the level the build started on.
    pub siblings: Vec<Node>,
}

/// Build nodes from `input`, appending to `siblings`.
///
/// Called with the full document and an empty list to parse a document.
/// Stops at the first closing tag that has no open element inside this
/// call (returning exactly one collapsed node) or when nothing more can be
/// scanned (returning the accumulated list). Never fails.
#[must_use]
pub fn build(input: &str, siblings: Vec<Node>) -> Built<'_> {
    TreeBuilder::new(input).run_from(siblings).0
}

/// An opening tag whose closing tag has not been seen yet.
#[derive(Debug)]
struct OpenElement {
    tag: String,
    offset: usize,
    /// The enclosing level's siblings, resumed once this element closes.
    parent_siblings: Vec<Node>,
}

/// Document-level tree builder that also records what went wrong.
///
/// Issue recording never changes the built tree: the output is the same as
/// [`build`] gives for the same input.
#[derive(Debug)]
pub struct TreeBuilder<'a> {
    input: &'a str,
    /// Byte offset of the next unscanned character.
    position: usize,
    open_elements: Vec<OpenElement>,
    issues: Vec<ParseError>,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder over a whole document.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            open_elements: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Build from an empty sibling list.
    #[must_use]
    pub fn run(self) -> (Built<'a>, Vec<ParseError>) {
        self.run_from(Vec::new())
    }

    /// Build, appending top-level nodes to `siblings`.
    #[must_use]
    pub fn run_from(mut self, siblings: Vec<Node>) -> (Built<'a>, Vec<ParseError>) {
        let input = self.input;
        let mut current = siblings;

        loop {
            let offset = self.position;
            let scanned = classify_next_tag(&input[offset..]);
            self.position += scanned.len();

            match scanned {
                ScannedTag::Opening(tag) => {
                    self.open_elements.push(OpenElement {
                        tag: tag.to_owned(),
                        offset,
                        parent_siblings: mem::take(&mut current),
                    });
                }
                ScannedTag::SelfClosing(tag) => current.push(Node::leaf(tag)),
                ScannedTag::Closing(tag) => {
                    let node = Node::new(tag, mem::take(&mut current));
                    let Some(open) = self.open_elements.pop() else {
                        self.issues.push(ParseError::UnmatchedClosingTag {
                            tag: tag.to_owned(),
                            offset,
                        });
                        self.note_trailing_input();
                        return self.finish(vec![node]);
                    };
                    if open.tag != tag {
                        self.issues.push(ParseError::MismatchedClosingTag {
                            expected: open.tag,
                            found: tag.to_owned(),
                            offset,
                        });
                    }
                    current = open.parent_siblings;
                    current.push(node);
                }
                ScannedTag::None => {
                    self.note_trailing_input();
                    // Each unclosed level hands its siblings up unchanged.
                    while let Some(open) = self.open_elements.pop() {
                        self.issues.push(ParseError::UnclosedTag {
                            tag: open.tag,
                            offset: open.offset,
                        });
                        let inner = mem::replace(&mut current, open.parent_siblings);
                        current.extend(inner);
                    }
                    return self.finish(current);
                }
            }
        }
    }

    fn note_trailing_input(&mut self) {
        let rest = &self.input[self.position..];
        if !rest.is_empty() {
            self.issues.push(ParseError::unexpected_input(self.position, rest));
        }
    }

    fn finish(self, siblings: Vec<Node>) -> (Built<'a>, Vec<ParseError>) {
        let input = self.input;
        let built = Built {
            rest: &input[self.position..],
            siblings,
        };
        (built, self.issues)
    }
}
