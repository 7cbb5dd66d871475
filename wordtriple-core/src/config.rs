//! Search configuration

use crate::error::{Result, TripleError};
use crate::executor::ExecutionMode;

/// Default configuration constants
pub mod defaults {
    /// Minimum number of bridge characters a middle word must cover
    pub const MIN_OVERLAP: usize = 1;

    /// Upper bound on the number of triples returned
    pub const MAX_RESULTS: usize = 10_000;
}

/// Search configuration
///
/// Construct through [`SearchConfig::builder`] to get validation, or use
/// [`SearchConfig::default`] for the reference settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub(crate) min_overlap: usize,
    pub(crate) max_results: usize,
    pub(crate) execution_mode: ExecutionMode,
    pub(crate) threads: Option<usize>, // None = rayon default
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_overlap: defaults::MIN_OVERLAP,
            max_results: defaults::MAX_RESULTS,
            execution_mode: ExecutionMode::Sequential,
            threads: None,
        }
    }
}

impl SearchConfig {
    /// Create a configuration builder
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    /// Minimum intersection between the middle word and the bridge span
    pub fn min_overlap(&self) -> usize {
        self.min_overlap
    }

    /// Maximum number of triples to collect
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Executor used for the search
    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode
    }

    /// Worker thread count for parallel execution
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_overlap == 0 {
            return Err(TripleError::InvalidConfig(
                "min_overlap must be at least 1".into(),
            ));
        }

        if self.max_results == 0 {
            return Err(TripleError::InvalidConfig(
                "max_results must be at least 1".into(),
            ));
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(TripleError::InvalidConfig(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Fluent builder for [`SearchConfig`]
#[derive(Debug, Default)]
pub struct SearchConfigBuilder {
    min_overlap: Option<usize>,
    max_results: Option<usize>,
    execution_mode: Option<ExecutionMode>,
    threads: Option<usize>,
}

impl SearchConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum bridge overlap
    pub fn min_overlap(mut self, chars: usize) -> Self {
        self.min_overlap = Some(chars);
        self
    }

    /// Set the result cap
    pub fn max_results(mut self, count: usize) -> Self {
        self.max_results = Some(count);
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = Some(mode);
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SearchConfig> {
        let mut config = SearchConfig::default();

        if let Some(min_overlap) = self.min_overlap {
            config.min_overlap = min_overlap;
        }

        if let Some(max_results) = self.max_results {
            config.max_results = max_results;
        }

        if let Some(mode) = self.execution_mode {
            config.execution_mode = mode;
        }

        if self.threads.is_some() {
            config.threads = self.threads;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_settings() {
        let config = SearchConfig::default();
        assert_eq!(config.min_overlap(), 1);
        assert_eq!(config.max_results(), 10_000);
        assert_eq!(config.execution_mode(), ExecutionMode::Sequential);
        assert_eq!(config.threads(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = SearchConfig::builder()
            .min_overlap(2)
            .max_results(50)
            .execution_mode(ExecutionMode::Parallel)
            .threads(Some(4))
            .build()
            .unwrap();

        assert_eq!(config.min_overlap(), 2);
        assert_eq!(config.max_results(), 50);
        assert_eq!(config.execution_mode(), ExecutionMode::Parallel);
        assert_eq!(config.threads(), Some(4));
    }

    #[test]
    fn test_zero_min_overlap_rejected() {
        let result = SearchConfig::builder().min_overlap(0).build();
        assert!(matches!(result, Err(TripleError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_max_results_rejected() {
        let err = SearchConfig::builder().max_results(0).build().unwrap_err();
        assert!(err.to_string().contains("max_results"));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let err = SearchConfig::builder()
            .threads(Some(0))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("threads"));
    }
}
