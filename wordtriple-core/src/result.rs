//! Search output types

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::executor::ExecutionMode;
use crate::filters::Rejection;

/// An accepted word triple
///
/// Serializes as `{"words": [a, b, c], "overlap": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripleResult {
    /// The ordered triple (A, B, C)
    pub words: [String; 3],
    /// Characters of B that fall inside the bridge span
    pub overlap: usize,
}

impl TripleResult {
    /// Create a triple result
    pub fn new(a: &str, b: &str, c: &str, overlap: usize) -> Self {
        Self {
            words: [a.to_string(), b.to_string(), c.to_string()],
            overlap,
        }
    }

    /// Left word
    pub fn a(&self) -> &str {
        &self.words[0]
    }

    /// Middle (bridging) word
    pub fn b(&self) -> &str {
        &self.words[1]
    }

    /// Right word
    pub fn c(&self) -> &str {
        &self.words[2]
    }
}

/// Per-constraint rejection tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionCounts {
    /// Middle word equal to an outer word
    pub same_word: usize,
    /// First or last letters collided
    pub edge_letters: usize,
    /// One word contained another
    pub containment: usize,
    /// Middle word missed the bridge
    pub bridge_miss: usize,
}

impl RejectionCounts {
    /// Count one rejection
    pub fn record(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::SameWord => self.same_word += 1,
            Rejection::EdgeLetters => self.edge_letters += 1,
            Rejection::Containment => self.containment += 1,
            Rejection::BridgeMiss => self.bridge_miss += 1,
        }
    }

    /// Total rejections across all constraints
    pub fn total(&self) -> usize {
        self.same_word + self.edge_letters + self.containment + self.bridge_miss
    }

    /// Add another tally into this one
    pub fn merge(&mut self, other: &RejectionCounts) {
        self.same_word += other.same_word;
        self.edge_letters += other.edge_letters;
        self.containment += other.containment;
        self.bridge_miss += other.bridge_miss;
    }
}

/// Statistics gathered during a search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Words in the normalized vocabulary
    pub vocabulary_size: usize,
    /// Distinct prefixes in the prefix index
    pub index_keys: usize,
    /// (A, C) pairs joined into a portmanteau
    pub pairs_examined: usize,
    /// Portmanteau substrings that were vocabulary words
    pub candidates_scanned: usize,
    /// Accepted triples whose key had already been seen
    pub duplicates: usize,
    /// Candidates turned away, by constraint
    pub rejections: RejectionCounts,
    /// Whether the result cap cut the search short
    pub truncated: bool,
    /// Wall-clock time spent searching
    pub duration: Duration,
    /// Executor that ran the search
    pub mode_used: Option<ExecutionMode>,
}

impl SearchStats {
    /// Fold the work counters of another run into this one
    pub(crate) fn absorb(&mut self, other: &SearchStats) {
        self.pairs_examined += other.pairs_examined;
        self.candidates_scanned += other.candidates_scanned;
        self.duplicates += other.duplicates;
        self.rejections.merge(&other.rejections);
    }
}

/// Triples with the statistics of the search that produced them
#[derive(Debug, Clone, Default)]
pub struct SearchOutput {
    /// Accepted triples in discovery order
    pub triples: Vec<TripleResult>,
    /// Search statistics
    pub stats: SearchStats,
}
