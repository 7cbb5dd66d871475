//! Error types for the triple search
//!
//! The search itself is total: every normalized vocabulary has a (possibly
//! empty) answer. Errors only arise at the boundary, from invalid
//! configuration or from building resources the search runs on.

use thiserror::Error;

/// Errors reported by the triple search and its helpers
#[derive(Error, Debug)]
pub enum TripleError {
    /// Configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Curation pattern failed to compile
    #[error("invalid curation pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Worker pool could not be created
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type for triple search operations
pub type Result<T> = std::result::Result<T, TripleError>;
