//! Problems the tree builder can observe in a document.
//!
//! The lenient entry points never surface these; they degrade by truncating
//! output instead. [`crate::parse_with_issues`] collects them and
//! [`crate::parse_strict`] turns the first one into an `Err`.

use thiserror::Error;

/// Longest slice of unconsumed input kept in [`ParseError::UnexpectedInput`].
pub const SNIPPET_LEN: usize = 16;

/// A structural problem found while building the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The document produced no nodes at all.
    #[error("document contains no elements")]
    EmptyDocument,

    /// More than one node sits at the top level.
    #[error("document has {count} root elements, expected one")]
    MultipleRoots {
        /// Number of top-level nodes.
        count: usize,
    },

    /// A closing tag whose name differs from the innermost open element.
    ///
    /// The node still takes the closing tag's name.
    #[error("expected </{expected}>, found </{found}> at byte {offset}")]
    MismatchedClosingTag {
        /// Name of the innermost open element.
        expected: String,
        /// Name carried by the closing tag.
        found: String,
        /// Byte offset of the closing tag.
        offset: usize,
    },

    /// A closing tag with no open element left to close.
    #[error("closing tag </{tag}> at byte {offset} has no matching opening tag")]
    UnmatchedClosingTag {
        /// Name carried by the closing tag.
        tag: String,
        /// Byte offset of the closing tag.
        offset: usize,
    },

    /// An opening tag still open when input ran out.
    #[error("<{tag}> opened at byte {offset} is never closed")]
    UnclosedTag {
        /// Name of the unclosed element.
        tag: String,
        /// Byte offset of the opening tag.
        offset: usize,
    },

    /// Text the scanner could not classify as a tag.
    #[error("unrecognized input at byte {offset}: {snippet:?}")]
    UnexpectedInput {
        /// Byte offset where scanning stopped.
        offset: usize,
        /// Leading characters of the unconsumed input.
        snippet: String,
    },
}

impl ParseError {
    /// Byte offset into the document, for errors tied to a position.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::EmptyDocument | Self::MultipleRoots { .. } => None,
            Self::MismatchedClosingTag { offset, .. }
            | Self::UnmatchedClosingTag { offset, .. }
            | Self::UnclosedTag { offset, .. }
            | Self::UnexpectedInput { offset, .. } => Some(*offset),
        }
    }

    /// The message without its byte offset.
    ///
    /// Repeats of the same problem at different positions share a summary,
    /// which makes it a dedup key for warnings.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::EmptyDocument | Self::MultipleRoots { .. } => self.to_string(),
            Self::MismatchedClosingTag {
                expected, found, ..
            } => format!("expected </{expected}>, found </{found}>"),
            Self::UnmatchedClosingTag { tag, .. } => {
                format!("closing tag </{tag}> has no matching opening tag")
            }
            Self::UnclosedTag { tag, .. } => format!("<{tag}> is never closed"),
            Self::UnexpectedInput { snippet, .. } => format!("unrecognized input: {snippet:?}"),
        }
    }

    pub(crate) fn unexpected_input(offset: usize, rest: &str) -> Self {
        Self::UnexpectedInput {
            offset,
            snippet: rest.chars().take(SNIPPET_LEN).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ParseError::MismatchedClosingTag {
            expected: "a".to_string(),
            found: "b".to_string(),
            offset: 3,
        };
        assert_eq!(err.to_string(), "expected </a>, found </b> at byte 3");
        assert_eq!(
            ParseError::MultipleRoots { count: 2 }.to_string(),
            "document has 2 root elements, expected one"
        );
    }

    #[test]
    fn test_offset() {
        assert_eq!(ParseError::EmptyDocument.offset(), None);
        let err = ParseError::UnclosedTag {
            tag: "a".to_string(),
            offset: 7,
        };
        assert_eq!(err.offset(), Some(7));
    }

    #[test]
    fn test_summary_drops_offset() {
        let at = |offset| ParseError::UnclosedTag {
            tag: "a".to_string(),
            offset,
        };
        assert_eq!(at(0).summary(), "<a> is never closed");
        assert_eq!(at(0).summary(), at(9).summary());
        assert_ne!(at(0).to_string(), at(9).to_string());
        assert_eq!(
            ParseError::EmptyDocument.summary(),
            "document contains no elements"
        );
    }

    #[test]
    fn test_snippet_is_truncated() {
        let err = ParseError::unexpected_input(0, "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(
            err,
            ParseError::UnexpectedInput {
                offset: 0,
                snippet: "abcdefghijklmnop".to_string(),
            }
        );
    }
}
