//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Search error from core
    SearchError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SearchError(msg) => write!(f, "Search error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<wordtriple_core::TripleError> for CliError {
    fn from(err: wordtriple_core::TripleError) -> Self {
        match err {
            wordtriple_core::TripleError::InvalidConfig(msg) => CliError::ConfigError(msg),
            other => CliError::SearchError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("words.txt".to_string());
        assert_eq!(error.to_string(), "File not found: words.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_from_core() {
        let core = wordtriple_core::TripleError::InvalidConfig("max_results must be at least 1".into());
        let error: CliError = core.into();
        assert_eq!(
            error.to_string(),
            "Configuration error: max_results must be at least 1"
        );
    }

    #[test]
    fn test_search_error_from_core() {
        let core = wordtriple_core::TripleError::ThreadPool("spawn failed".into());
        let error: CliError = core.into();
        assert!(matches!(error, CliError::SearchError(_)));
        assert!(error.to_string().contains("spawn failed"));
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("test".to_string());
        assert!(success.is_ok());

        let failure: CliResult<String> = Err(CliError::SearchError("boom".into()).into());
        assert!(failure.unwrap_err().to_string().contains("boom"));
    }
}
