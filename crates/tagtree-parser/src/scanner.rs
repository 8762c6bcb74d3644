//! Tag scanner.
//!
//! Classifies the tag token at the very start of the remaining input without
//! consuming anything. Three anchored forms are recognized, tried in order:
//!
//! | Form         | Pattern    |
//! |--------------|------------|
//! | opening      | `<NAME>`   |
//! | closing      | `</NAME>`  |
//! | self-closing | `<NAME/>`  |
//!
//! `NAME` is one or more of `A-Z`, `a-z`, `-` and `_`. Anything else
//! (including an empty name) scans as [`ScannedTag::None`], which is how the
//! tree builder learns that input is exhausted.

use once_cell::sync::Lazy;
use regex::Regex;
use strum_macros::{Display, EnumIter};

/// Which of the three tag forms matched, or `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum TagKind {
    /// `<NAME>`
    Opening,
    /// `</NAME>`
    Closing,
    /// `<NAME/>`
    SelfClosing,
    /// No tag at the start of the input.
    None,
}

/// The token found at the start of the input, borrowing its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannedTag<'a> {
    /// `<NAME>`
    Opening(&'a str),
    /// `</NAME>`
    Closing(&'a str),
    /// `<NAME/>`
    SelfClosing(&'a str),
    /// No tag at the start of the input.
    None,
}

impl<'a> ScannedTag<'a> {
    /// The tag name, or the empty string for [`ScannedTag::None`].
    #[must_use]
    pub const fn tag(&self) -> &'a str {
        match *self {
            Self::Opening(tag) | Self::Closing(tag) | Self::SelfClosing(tag) => tag,
            Self::None => "",
        }
    }

    /// The form that matched.
    #[must_use]
    pub const fn kind(&self) -> TagKind {
        match self {
            Self::Opening(_) => TagKind::Opening,
            Self::Closing(_) => TagKind::Closing,
            Self::SelfClosing(_) => TagKind::SelfClosing,
            Self::None => TagKind::None,
        }
    }

    /// Bytes the token spans: the name plus its bracket overhead.
    #[must_use]
    pub const fn len(&self) -> usize {
        match *self {
            Self::Opening(tag) => tag.len() + 2,
            Self::Closing(tag) | Self::SelfClosing(tag) => tag.len() + 3,
            Self::None => 0,
        }
    }

    /// Whether the scan found no tag.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Anchored patterns in precedence order.
///
/// The opening form allows only `>` right after the name, so it can never
/// claim a self-closing tag.
static PATTERNS: Lazy<[(TagKind, Regex); 3]> = Lazy::new(|| {
    [
        (TagKind::Opening, r"^<([A-Za-z\-_]+)>"),
        (TagKind::Closing, r"^</([A-Za-z\-_]+)>"),
        (TagKind::SelfClosing, r"^<([A-Za-z\-_]+)/>"),
    ]
    .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("tag pattern is valid")))
});

/// Classify the tag at the start of `input`.
///
/// Pure: nothing is consumed, and scanning never fails.
#[must_use]
pub fn classify_next_tag(input: &str) -> ScannedTag<'_> {
    for (kind, regex) in &*PATTERNS {
        let Some(name) = regex.captures(input).and_then(|caps| caps.get(1)) else {
            continue;
        };
        let tag = name.as_str();
        return match kind {
            TagKind::Opening => ScannedTag::Opening(tag),
            TagKind::Closing => ScannedTag::Closing(tag),
            TagKind::SelfClosing => ScannedTag::SelfClosing(tag),
            TagKind::None => ScannedTag::None,
        };
    }
    ScannedTag::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opening() {
        assert_eq!(classify_next_tag("<xml>"), ScannedTag::Opening("xml"));
    }

    #[test]
    fn test_closing() {
        assert_eq!(classify_next_tag("</tag>"), ScannedTag::Closing("tag"));
    }

    #[test]
    fn test_self_closing_is_not_opening() {
        assert_eq!(classify_next_tag("<br/>"), ScannedTag::SelfClosing("br"));
    }

    #[test]
    fn test_only_prefix_is_inspected() {
        let scanned = classify_next_tag("<a><b></b></a>");
        assert_eq!(scanned, ScannedTag::Opening("a"));
        assert_eq!(scanned.len(), 3);
    }

    #[test]
    fn test_not_anchored_elsewhere() {
        assert_eq!(classify_next_tag(" <a>"), ScannedTag::None);
        assert_eq!(classify_next_tag("text<a>"), ScannedTag::None);
    }

    #[test]
    fn test_empty_names_rejected() {
        assert_eq!(classify_next_tag("<>"), ScannedTag::None);
        assert_eq!(classify_next_tag("</>"), ScannedTag::None);
    }

    #[test]
    fn test_lengths() {
        assert_eq!(ScannedTag::Opening("ab").len(), 4);
        assert_eq!(ScannedTag::Closing("ab").len(), 5);
        assert_eq!(ScannedTag::SelfClosing("ab").len(), 5);
        assert_eq!(ScannedTag::None.len(), 0);
        assert!(ScannedTag::None.is_empty());
    }

    #[test]
    fn test_kind_display() {
        let names: Vec<String> = TagKind::iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["opening", "closing", "self-closing", "none"]);
    }
}
