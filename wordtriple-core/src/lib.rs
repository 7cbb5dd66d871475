//! Word triple discovery for word-game puzzle generation
//!
//! A word triple is an ordered triple of distinct words (A, B, C) from a
//! vocabulary where a suffix of A equals a prefix of C, and B appears inside
//! the joined string `A + C[overlap..]` straddling the seam between them.
//!
//! # Pipeline
//!
//! The search is a single forward batch pipeline:
//! - [`Vocabulary`]: trims, lowercases, deduplicates and sorts raw words
//! - [`PrefixIndex`]: maps every prefix to the words beginning with it
//! - [`TripleSearch`]: joins overlapping pairs, scans the joined string for
//!   vocabulary words and keeps those passing the [`filters`]
//!
//! # Example
//!
//! ```rust
//! use wordtriple_core::{find_triples, SearchConfig};
//!
//! let words = ["anger", "germ", "ermine", "stone", "lonely", "one"];
//! let triples = find_triples(words, &SearchConfig::default()).unwrap();
//!
//! assert_eq!(triples.len(), 1);
//! assert_eq!(triples[0].words, ["anger", "germ", "ermine"]);
//! assert_eq!(triples[0].overlap, 2);
//! ```

#![warn(missing_docs)]

pub mod analysis;
pub mod config;
pub mod curation;
pub mod error;
pub mod executor;
pub mod filters;
pub mod portmanteau;
pub mod prefix_index;
pub mod result;
pub mod search;
pub mod vocabulary;

// Re-export key types
pub use analysis::{chain_overlap, ChainOverlap, TripleDetails};
pub use config::{SearchConfig, SearchConfigBuilder};
pub use curation::WordQualityFilter;
pub use error::{Result, TripleError};
pub use executor::{ExecutionMode, Executor};
pub use filters::Rejection;
pub use portmanteau::{Portmanteau, Span};
pub use prefix_index::PrefixIndex;
pub use result::{RejectionCounts, SearchOutput, SearchStats, TripleResult};
pub use search::TripleSearch;
pub use vocabulary::Vocabulary;

/// Normalize a raw word list and search it, returning triples with stats
pub fn search<I, S>(words: I, config: &SearchConfig) -> Result<SearchOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let vocabulary = Vocabulary::normalize(words);
    TripleSearch::new(&vocabulary, config.clone())?.run()
}

/// Normalize a raw word list and return its word triples
pub fn find_triples<I, S>(words: I, config: &SearchConfig) -> Result<Vec<TripleResult>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    search(words, config).map(|output| output.triples)
}
