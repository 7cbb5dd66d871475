//! Parallel execution strategy
//!
//! Left words are searched in batches. Within a batch every left word gets
//! its own collector on the rayon pool; the collectors are then appended in
//! vocabulary order. Every dedup key starts with its left word, so
//! collectors for different left words can never hold the same key, and the
//! merged sequence equals what the sequential executor produces.

use rayon::prelude::*;

use crate::{
    error::{Result, TripleError},
    executor::{ExecutionMode, Executor},
    result::SearchOutput,
    search::{Collector, TripleSearch},
};

/// Left words handed to each worker per batch
const WORDS_PER_THREAD: usize = 8;

/// Multi-threaded executor
#[derive(Debug, Clone, Default)]
pub struct ParallelExecutor {
    threads: Option<usize>,
}

impl ParallelExecutor {
    /// Create a parallel executor (None = rayon's global pool)
    pub fn new(threads: Option<usize>) -> Self {
        Self { threads }
    }

    fn search_batches(&self, search: &TripleSearch<'_>) -> SearchOutput {
        let limit = search.config().max_results();
        let words = search.vocabulary().words();
        let batch_size = (rayon::current_num_threads() * WORDS_PER_THREAD).max(1);

        let mut merged = Collector::new(limit);

        for batch in words.chunks(batch_size) {
            let collectors: Vec<Collector<'_>> = batch
                .par_iter()
                .map(|a| {
                    let mut collector = Collector::new(limit);
                    let _ = search.search_anchor(a.as_str(), &mut collector);
                    collector
                })
                .collect();

            for collector in collectors {
                if merged.append(collector).is_break() {
                    break;
                }
            }

            if merged.is_full() {
                log::debug!("result cap reached after batch of {} words", batch.len());
                break;
            }
        }

        merged.into_output(self.mode())
    }
}

impl Executor for ParallelExecutor {
    fn execute(&self, search: &TripleSearch<'_>) -> Result<SearchOutput> {
        match self.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("wordtriple-{i}"))
                    .build()
                    .map_err(|e| TripleError::ThreadPool(e.to_string()))?;

                Ok(pool.install(|| self.search_batches(search)))
            }
            None => Ok(self.search_batches(search)),
        }
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
