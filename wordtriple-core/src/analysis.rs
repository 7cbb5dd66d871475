//! Chain analysis for word triples
//!
//! Looks at a triple as a chain A → B → C, where each word's tail overlaps
//! the next word's head. The letters that sit inside both overlaps (and so
//! belong to all three words at once) are what makes a triple read as a
//! single interlocking unit in the puzzle.

use serde::{Deserialize, Serialize};

/// Overlap where the tail of one word matches the head of the next
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainOverlap {
    /// The shared letters
    pub shared: String,
    /// Number of shared letters
    pub len: usize,
}

/// Lowercase a word and keep only the letters `a` to `z`
pub fn clean_word(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Longest overlap of at least `min_len` letters between the end of `left`
/// and the start of `right`
///
/// Both words are cleaned first. A `min_len` of zero is treated as one.
pub fn chain_overlap(left: &str, right: &str, min_len: usize) -> Option<ChainOverlap> {
    let left = clean_word(left);
    let right = clean_word(right);
    let min_len = min_len.max(1);
    let longest = left.len().min(right.len());

    (min_len..=longest).rev().find_map(|len| {
        let head = &right[..len];
        left.ends_with(head).then(|| ChainOverlap {
            shared: head.to_string(),
            len,
        })
    })
}

/// How the three words of a triple interlock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripleDetails {
    /// Overlap between A's tail and B's head
    pub overlap_ab: usize,
    /// Overlap between B's tail and C's head
    pub overlap_bc: usize,
    /// Letters of B covered by both overlaps
    pub shared_count: usize,
    /// The letters counted by `shared_count`
    pub shared: String,
    /// Direct A → C overlap when one exists, otherwise `shared_count`
    pub display_count: usize,
    /// Letters counted by `display_count`
    pub display: String,
}

impl TripleDetails {
    /// Analyze the chain `a → b → c`
    ///
    /// Returns `None` unless both adjacent overlaps exist and collide inside
    /// the middle word.
    pub fn compute(a: &str, b: &str, c: &str) -> Option<Self> {
        let ab = chain_overlap(a, b, 1)?;
        let bc = chain_overlap(b, c, 1)?;

        let mid = clean_word(b);
        // In B, the A overlap covers [0, ab.len) and the C overlap covers
        // [mid.len() - bc.len, mid.len())
        let start = mid.len() - bc.len;
        let end = ab.len;
        if end <= start {
            return None;
        }

        let shared = mid[start..end].to_string();
        let shared_count = end - start;
        let (display_count, display) = match chain_overlap(a, c, 1) {
            Some(direct) => (direct.len, direct.shared),
            None => (shared_count, shared.clone()),
        };

        Some(Self {
            overlap_ab: ab.len,
            overlap_bc: bc.len,
            shared_count,
            shared,
            display_count,
            display,
        })
    }
}
