//! Triple search engine
//!
//! For every word A and every suffix of A, the prefix index yields the words
//! C that begin with that suffix. A and C are joined into a portmanteau, and
//! every substring of it that is itself a vocabulary word becomes a
//! candidate middle word B. Candidates that survive the filter chain are
//! collected until the result cap is reached.

use std::collections::HashSet;
use std::ops::ControlFlow;
use std::time::Instant;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::executor::{ExecutionMode, Executor, SequentialExecutor};
use crate::filters::Candidate;
use crate::portmanteau::Portmanteau;
use crate::prefix_index::PrefixIndex;
use crate::result::{SearchOutput, SearchStats, TripleResult};
use crate::vocabulary::Vocabulary;

/// Prepared search over a vocabulary
///
/// Holds the prefix index built from the vocabulary; both stay read-only
/// for the lifetime of the search.
#[derive(Debug)]
pub struct TripleSearch<'v> {
    vocabulary: &'v Vocabulary,
    index: PrefixIndex<'v>,
    config: SearchConfig,
}

impl<'v> TripleSearch<'v> {
    /// Validate the configuration and index the vocabulary
    pub fn new(vocabulary: &'v Vocabulary, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let index = PrefixIndex::build(vocabulary);

        Ok(Self {
            vocabulary,
            index,
            config,
        })
    }

    /// The vocabulary being searched
    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    /// The prefix index over the vocabulary
    pub fn index(&self) -> &PrefixIndex<'v> {
        &self.index
    }

    /// The active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the search with the configured executor
    pub fn run(&self) -> Result<SearchOutput> {
        let start = Instant::now();
        let mode = self.config.execution_mode;

        log::debug!(
            "searching {} words ({} prefixes), mode={:?}, min_overlap={}, max_results={}",
            self.vocabulary.len(),
            self.index.key_count(),
            mode,
            self.config.min_overlap,
            self.config.max_results
        );

        let mut output = match mode {
            ExecutionMode::Sequential => SequentialExecutor.execute(self)?,
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => {
                crate::executor::ParallelExecutor::new(self.config.threads).execute(self)?
            }
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => {
                log::warn!("parallel feature disabled, searching sequentially");
                SequentialExecutor.execute(self)?
            }
        };

        output.stats.vocabulary_size = self.vocabulary.len();
        output.stats.index_keys = self.index.key_count();
        output.stats.duration = start.elapsed();

        log::debug!(
            "found {} triples in {:?} ({} pairs, {} candidates, {} rejected)",
            output.triples.len(),
            output.stats.duration,
            output.stats.pairs_examined,
            output.stats.candidates_scanned,
            output.stats.rejections.total()
        );

        Ok(output)
    }

    /// Collect every triple whose left word is `a`
    ///
    /// Breaks as soon as the collector is full.
    pub(crate) fn search_anchor(
        &self,
        a: &'v str,
        collector: &mut Collector<'v>,
    ) -> ControlFlow<()> {
        let min_overlap = self.config.min_overlap;

        // Suffixes from shortest to longest
        let suffix_starts: Vec<usize> = a.char_indices().map(|(offset, _)| offset).collect();
        for &offset in suffix_starts.iter().rev() {
            let shared = &a[offset..];

            for &c in self.index.words_with_prefix(shared) {
                if c == a {
                    continue;
                }

                let Some(portmanteau) = Portmanteau::join(a, c, shared) else {
                    continue;
                };
                collector.stats.pairs_examined += 1;

                let bridge = portmanteau.bridge();
                for (span, sub) in portmanteau.substrings() {
                    let Some(b) = self.vocabulary.get(sub) else {
                        continue;
                    };
                    collector.stats.candidates_scanned += 1;

                    let candidate = Candidate {
                        a,
                        b,
                        c,
                        span,
                        bridge,
                    };
                    match candidate.evaluate(min_overlap) {
                        Ok(overlap) => {
                            if collector.accept(a, b, c, overlap).is_break() {
                                return ControlFlow::Break(());
                            }
                        }
                        Err(rejection) => collector.stats.rejections.record(rejection),
                    }
                }
            }
        }

        ControlFlow::Continue(())
    }
}

/// Accumulates accepted triples up to a cap, suppressing repeated keys
#[derive(Debug)]
pub(crate) struct Collector<'v> {
    triples: Vec<TripleResult>,
    seen: HashSet<(&'v str, &'v str, &'v str)>,
    limit: usize,
    pub(crate) stats: SearchStats,
}

impl<'v> Collector<'v> {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            triples: Vec::new(),
            seen: HashSet::new(),
            limit,
            stats: SearchStats::default(),
        }
    }

    /// Record an accepted triple; the first discovery of a key wins
    pub(crate) fn accept(
        &mut self,
        a: &'v str,
        b: &'v str,
        c: &'v str,
        overlap: usize,
    ) -> ControlFlow<()> {
        if !self.seen.insert((a, b, c)) {
            self.stats.duplicates += 1;
            return ControlFlow::Continue(());
        }

        self.triples.push(TripleResult::new(a, b, c, overlap));
        self.check_limit()
    }

    /// Append another collector's triples after this one's
    ///
    /// Keys are not re-checked: collectors merged this way cover disjoint
    /// left words.
    pub(crate) fn append(&mut self, other: Collector<'v>) -> ControlFlow<()> {
        self.stats.absorb(&other.stats);

        for triple in other.triples {
            if self.is_full() {
                break;
            }
            self.triples.push(triple);
        }

        self.check_limit()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.triples.len() >= self.limit
    }

    fn check_limit(&mut self) -> ControlFlow<()> {
        if self.is_full() {
            self.stats.truncated = true;
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    pub(crate) fn into_output(self, mode: ExecutionMode) -> SearchOutput {
        let mut stats = self.stats;
        stats.mode_used = Some(mode);

        SearchOutput {
            triples: self.triples,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(words: &[&str], config: SearchConfig) -> SearchOutput {
        let vocab = Vocabulary::normalize(words);
        TripleSearch::new(&vocab, config).unwrap().run().unwrap()
    }

    fn keys(output: &SearchOutput) -> Vec<(String, String, String, usize)> {
        output
            .triples
            .iter()
            .map(|t| (t.a().into(), t.b().into(), t.c().into(), t.overlap))
            .collect()
    }

    #[test]
    fn test_single_bridge_triple() {
        let output = run(&["anger", "germ", "ermine"], SearchConfig::default());
        assert_eq!(
            keys(&output),
            vec![("anger".into(), "germ".into(), "ermine".into(), 2)]
        );
        assert!(!output.stats.truncated);
        assert_eq!(output.stats.mode_used, Some(ExecutionMode::Sequential));
    }

    #[test]
    fn test_discovery_order_follows_sorted_vocabulary() {
        let words = ["tome", "ermine", "cat", "atom", "anger", "germ", "ermina"];
        let output = run(&words, SearchConfig::default());
        let found: Vec<[&str; 3]> = output
            .triples
            .iter()
            .map(|t| [t.a(), t.b(), t.c()])
            .collect();

        assert_eq!(
            found,
            vec![
                ["anger", "germ", "ermina"],
                ["anger", "germ", "ermine"],
                ["cat", "atom", "tome"],
            ]
        );
    }

    #[test]
    fn test_cap_stops_search() {
        let words = ["anger", "germ", "ermine", "ermina", "cat", "atom", "tome"];
        let config = SearchConfig::builder().max_results(2).build().unwrap();
        let output = run(&words, config);

        assert_eq!(output.triples.len(), 2);
        assert!(output.triples.iter().all(|t| t.a() == "anger"));
        assert!(output.stats.truncated);
    }

    #[test]
    fn test_min_overlap_filters_thin_bridges() {
        let words = ["anger", "germ", "ermine", "cat", "atom", "tome"];
        let config = SearchConfig::builder().min_overlap(2).build().unwrap();
        let output = run(&words, config);

        assert_eq!(output.triples.len(), 1);
        assert_eq!(output.triples[0].b(), "germ");
        assert!(output.stats.rejections.bridge_miss > 0);
    }

    #[test]
    fn test_no_triples_when_first_letters_collide() {
        let output = run(&["enger", "germ", "ermine"], SearchConfig::default());
        assert!(output.triples.is_empty());
        assert!(output.stats.rejections.edge_letters > 0);
    }

    #[test]
    fn test_degenerate_vocabularies() {
        assert!(run(&[], SearchConfig::default()).triples.is_empty());
        assert!(run(&["a"], SearchConfig::default()).triples.is_empty());
        assert!(run(&["a", "b"], SearchConfig::default()).triples.is_empty());
        assert!(run(&["  ", ""], SearchConfig::default()).triples.is_empty());
    }

    #[test]
    fn test_stats_describe_the_run() {
        let output = run(&["anger", "germ", "ermine"], SearchConfig::default());
        assert_eq!(output.stats.vocabulary_size, 3);
        assert_eq!(output.stats.index_keys, 15);
        assert!(output.stats.pairs_examined >= 1);
        assert!(output.stats.candidates_scanned >= output.triples.len());
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let vocab = Vocabulary::normalize(["anger"]);
        let config = SearchConfig {
            min_overlap: 0,
            ..SearchConfig::default()
        };
        assert!(TripleSearch::new(&vocab, config).is_err());
    }

    #[test]
    fn test_collector_dedups_and_caps() {
        let mut collector = Collector::new(2);
        assert!(collector.accept("a", "b", "c", 1).is_continue());
        assert!(collector.accept("a", "b", "c", 3).is_continue());
        assert_eq!(collector.stats.duplicates, 1);
        assert!(collector.accept("a", "b", "d", 1).is_break());
        assert!(collector.stats.truncated);

        let output = collector.into_output(ExecutionMode::Sequential);
        assert_eq!(output.triples.len(), 2);
        assert_eq!(output.triples[0].overlap, 1);
    }

    #[test]
    fn test_collector_append_respects_limit() {
        let mut first = Collector::new(3);
        let _ = first.accept("a", "b", "c", 1);

        let mut second = Collector::new(3);
        let _ = second.accept("x", "y", "z", 1);
        let _ = second.accept("x", "y", "w", 1);
        let _ = second.accept("x", "v", "w", 1);

        assert!(first.append(second).is_break());
        let output = first.into_output(ExecutionMode::Parallel);
        assert_eq!(output.triples.len(), 3);
        assert_eq!(output.triples[2].c(), "w");
        assert!(output.stats.truncated);
    }
}
