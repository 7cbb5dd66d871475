//! Execution strategies for the triple search

use crate::error::Result;
use crate::result::SearchOutput;
use crate::search::TripleSearch;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Single-threaded search in vocabulary order
    #[default]
    Sequential,
    /// Left words searched concurrently, merged back in vocabulary order
    Parallel,
}

impl ExecutionMode {
    /// Lowercase name of the mode
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
        }
    }
}

/// Strategy for running a prepared search
///
/// Every executor must return the same triples in the same order for the
/// same search; only the work done past the result cap may differ.
pub trait Executor: Send + Sync {
    /// Run the search and collect its output
    fn execute(&self, search: &TripleSearch<'_>) -> Result<SearchOutput>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}
