//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor},
    result::SearchOutput,
    search::{Collector, TripleSearch},
};

/// Single-threaded executor
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute(&self, search: &TripleSearch<'_>) -> Result<SearchOutput> {
        let mut collector = Collector::new(search.config().max_results());

        for a in search.vocabulary().iter() {
            if search.search_anchor(a, &mut collector).is_break() {
                log::debug!("result cap reached while searching from {a:?}");
                break;
            }
        }

        Ok(collector.into_output(self.mode()))
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
