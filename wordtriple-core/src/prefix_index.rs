//! Prefix index over a vocabulary
//!
//! Maps every prefix of every word to the words that start with it, so the
//! search can ask "which words begin with this suffix of A?" without
//! scanning the whole vocabulary.

use std::collections::HashMap;

use crate::vocabulary::Vocabulary;

/// Mapping from prefix to the words beginning with it
///
/// Borrows its keys and values from the [`Vocabulary`] it was built from.
/// A word of `n` characters is filed under each of its `n` prefixes. Buckets
/// keep the vocabulary's ascending order.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex<'v> {
    buckets: HashMap<&'v str, Vec<&'v str>>,
}

impl<'v> PrefixIndex<'v> {
    /// Build the index for a vocabulary
    pub fn build(vocabulary: &'v Vocabulary) -> Self {
        let mut buckets: HashMap<&'v str, Vec<&'v str>> = HashMap::new();

        for word in vocabulary.iter() {
            // Every char boundary after the first char ends a prefix
            let ends = word
                .char_indices()
                .skip(1)
                .map(|(offset, _)| offset)
                .chain(std::iter::once(word.len()));

            for end in ends {
                buckets.entry(&word[..end]).or_default().push(word);
            }
        }

        log::trace!(
            "built prefix index: {} keys over {} words",
            buckets.len(),
            vocabulary.len()
        );

        Self { buckets }
    }

    /// Words starting with `prefix`, in ascending order
    pub fn words_with_prefix(&self, prefix: &str) -> &[&'v str] {
        self.buckets.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct prefixes
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the index holds no prefixes
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_prefix_is_indexed() {
        let vocab = Vocabulary::normalize(["germ"]);
        let index = PrefixIndex::build(&vocab);

        for prefix in ["g", "ge", "ger", "germ"] {
            assert_eq!(index.words_with_prefix(prefix), &["germ"]);
        }
        assert_eq!(index.key_count(), 4);
    }

    #[test]
    fn test_buckets_keep_vocabulary_order() {
        let vocab = Vocabulary::normalize(["ermine", "art", "ermina", "artist", "era"]);
        let index = PrefixIndex::build(&vocab);

        assert_eq!(index.words_with_prefix("er"), &["era", "ermina", "ermine"]);
        assert_eq!(index.words_with_prefix("erm"), &["ermina", "ermine"]);
        assert_eq!(index.words_with_prefix("art"), &["art", "artist"]);
    }

    #[test]
    fn test_missing_prefix_is_empty() {
        let vocab = Vocabulary::normalize(["stone"]);
        let index = PrefixIndex::build(&vocab);
        assert!(index.words_with_prefix("tone").is_empty());
        assert!(index.words_with_prefix("").is_empty());
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocab = Vocabulary::default();
        let index = PrefixIndex::build(&vocab);
        assert!(index.is_empty());
    }

    #[test]
    fn test_multibyte_prefixes_split_on_char_boundaries() {
        let vocab = Vocabulary::normalize(["été"]);
        let index = PrefixIndex::build(&vocab);

        assert_eq!(index.key_count(), 3);
        assert_eq!(index.words_with_prefix("é"), &["été"]);
        assert_eq!(index.words_with_prefix("ét"), &["été"]);
    }
}
