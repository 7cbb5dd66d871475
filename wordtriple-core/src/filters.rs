//! Validity constraints for candidate triples
//!
//! A candidate (A, B, C) is checked in a fixed order and rejected by the
//! first constraint it violates:
//!
//! 1. B differs from A and from C
//! 2. first letters of A, B, C are pairwise distinct, and so are last letters
//! 3. no word is a substring of another
//! 4. B's span covers at least `min_overlap` characters of the bridge span

use crate::portmanteau::Span;

/// Reason a candidate triple was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// B equals A or C
    SameWord,
    /// First or last letters are not all distinct
    EdgeLetters,
    /// One word contains another
    Containment,
    /// B does not cover enough of the bridge span
    BridgeMiss,
}

/// Candidate triple under evaluation
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Left word
    pub a: &'a str,
    /// Middle word, found inside the portmanteau
    pub b: &'a str,
    /// Right word
    pub c: &'a str,
    /// Where B sits in the portmanteau
    pub span: Span,
    /// The bridge span of the portmanteau
    pub bridge: Span,
}

impl Candidate<'_> {
    /// Run the filter chain, returning the bridge overlap on acceptance
    pub fn evaluate(&self, min_overlap: usize) -> Result<usize, Rejection> {
        if self.b == self.a || self.b == self.c {
            return Err(Rejection::SameWord);
        }

        if !edge_letters_distinct(self.a, self.b, self.c) {
            return Err(Rejection::EdgeLetters);
        }

        if any_contains(self.a, self.b, self.c) {
            return Err(Rejection::Containment);
        }

        let overlap = self.span.intersection_len(&self.bridge);
        if overlap < min_overlap {
            return Err(Rejection::BridgeMiss);
        }

        Ok(overlap)
    }
}

/// First letters are three distinct characters, and so are last letters
pub fn edge_letters_distinct(a: &str, b: &str, c: &str) -> bool {
    all_distinct(a.chars().next(), b.chars().next(), c.chars().next())
        && all_distinct(
            a.chars().next_back(),
            b.chars().next_back(),
            c.chars().next_back(),
        )
}

fn all_distinct(x: Option<char>, y: Option<char>, z: Option<char>) -> bool {
    match (x, y, z) {
        (Some(x), Some(y), Some(z)) => x != y && y != z && x != z,
        _ => false,
    }
}

/// Whether any of the three words is a substring of another
pub fn any_contains(a: &str, b: &str, c: &str) -> bool {
    a.contains(b)
        || b.contains(a)
        || a.contains(c)
        || c.contains(a)
        || b.contains(c)
        || c.contains(b)
}
