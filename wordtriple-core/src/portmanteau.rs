//! Portmanteau construction
//!
//! Joining A with the tail of C after their shared boundary produces a
//! synthetic string. The shared boundary becomes the bridge span, and every
//! contiguous substring of the result is a potential middle word.

use std::ops::Range;

/// Half-open character range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First character index
    pub start: usize,
    /// One past the last character index
    pub end: usize,
}

impl Span {
    /// Create a span
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers nothing
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Size of the intersection with another span, zero when disjoint
    pub fn intersection_len(&self, other: &Span) -> usize {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        end.saturating_sub(start)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// A word A joined with word C across their shared boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portmanteau {
    text: String,
    /// Byte offset of every char boundary, including the end of `text`
    boundaries: Vec<usize>,
    bridge: Span,
}

impl Portmanteau {
    /// Join `left` and `right`, where `shared` is both a suffix of `left`
    /// and a prefix of `right`
    ///
    /// Returns `None` when `shared` is empty or does not sit on both sides.
    pub fn join(left: &str, right: &str, shared: &str) -> Option<Self> {
        if shared.is_empty() || !left.ends_with(shared) || !right.starts_with(shared) {
            return None;
        }

        let mut text = String::with_capacity(left.len() + right.len() - shared.len());
        text.push_str(left);
        text.push_str(&right[shared.len()..]);

        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();

        let left_chars = left.chars().count();
        let shared_chars = shared.chars().count();
        let bridge = Span::new(left_chars - shared_chars, left_chars);

        Some(Self {
            text,
            boundaries,
            bridge,
        })
    }

    /// The joined string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Characters contributed jointly by both words
    pub fn bridge(&self) -> Span {
        self.bridge
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Substring covering a character span
    pub fn slice(&self, span: Span) -> &str {
        &self.text[self.boundaries[span.start]..self.boundaries[span.end]]
    }

    /// Every non-empty contiguous substring with its span
    ///
    /// Ordered by start index, then by end index, both ascending.
    pub fn substrings(&self) -> impl Iterator<Item = (Span, &str)> + '_ {
        let len = self.char_len();
        (0..len).flat_map(move |start| {
            (start + 1..=len).map(move |end| {
                let span = Span::new(start, end);
                (span, self.slice(span))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_builds_text_and_bridge() {
        let joined = Portmanteau::join("anger", "ermine", "er").unwrap();
        assert_eq!(joined.as_str(), "angermine");
        assert_eq!(joined.bridge(), Span::new(3, 5));
        assert_eq!(joined.char_len(), 9);
    }

    #[test]
    fn test_full_overlap_of_left_word() {
        let joined = Portmanteau::join("art", "artist", "art").unwrap();
        assert_eq!(joined.as_str(), "artist");
        assert_eq!(joined.bridge(), Span::new(0, 3));
    }

    #[test]
    fn test_join_rejects_mismatched_boundary() {
        assert!(Portmanteau::join("anger", "ermine", "").is_none());
        assert!(Portmanteau::join("anger", "ermine", "ge").is_none());
        assert!(Portmanteau::join("anger", "germ", "er").is_none());
    }

    #[test]
    fn test_substrings_enumeration_order() {
        let joined = Portmanteau::join("ab", "bc", "b").unwrap();
        let found: Vec<&str> = joined.substrings().map(|(_, s)| s).collect();
        assert_eq!(found, ["a", "ab", "abc", "b", "bc", "c"]);
    }

    #[test]
    fn test_substring_spans_locate_words() {
        let joined = Portmanteau::join("anger", "ermine", "er").unwrap();
        let (span, _) = joined
            .substrings()
            .find(|(_, s)| *s == "germ")
            .unwrap();
        assert_eq!(span, Span::new(2, 6));
        assert_eq!(span.intersection_len(&joined.bridge()), 2);
    }

    #[test]
    fn test_multibyte_join_counts_characters() {
        let joined = Portmanteau::join("café", "éclat", "é").unwrap();
        assert_eq!(joined.as_str(), "caféclat");
        assert_eq!(joined.bridge(), Span::new(3, 4));
        assert_eq!(joined.slice(Span::new(3, 5)), "éc");
    }

    #[test]
    fn test_intersection_len() {
        let bridge = Span::new(3, 5);
        assert_eq!(Span::new(0, 3).intersection_len(&bridge), 0);
        assert_eq!(Span::new(2, 4).intersection_len(&bridge), 1);
        assert_eq!(Span::new(0, 9).intersection_len(&bridge), 2);
        assert_eq!(Span::new(6, 9).intersection_len(&bridge), 0);
        assert_eq!(Span::from(4..5).len(), 1);
    }
}
