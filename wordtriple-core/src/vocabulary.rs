//! Word list normalization
//!
//! Raw word lists arrive with whitespace, mixed case, blank entries and
//! repeats. [`Vocabulary::normalize`] folds all of that away and yields the
//! canonical ordered word set every later stage works on.

use std::collections::{BTreeSet, HashSet};

/// Normalized, deduplicated and sorted set of words
///
/// Words are trimmed, lowercased and non-empty. Iteration order is ascending
/// by the normalized string, which fixes the enumeration order of the search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    members: HashSet<String>,
}

impl Vocabulary {
    /// Normalize a raw word list
    ///
    /// Never fails: empty input or input made only of blanks yields an empty
    /// vocabulary.
    pub fn normalize<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sorted: BTreeSet<String> = raw
            .into_iter()
            .filter_map(|entry| normalize_word(entry.as_ref()))
            .collect();

        let words: Vec<String> = sorted.into_iter().collect();
        let members = words.iter().cloned().collect();

        Self { words, members }
    }

    /// Words in ascending order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Membership test against the normalized set
    pub fn contains(&self, word: &str) -> bool {
        self.members.contains(word)
    }

    /// Resolve a string to the vocabulary's own copy of that word
    ///
    /// Lets callers hold words borrowed from the vocabulary instead of from
    /// temporary buffers they happened to find them in.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.members.get(word).map(String::as_str)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over words in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::normalize(iter)
    }
}

/// Trim and lowercase one entry, dropping it if nothing is left
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
