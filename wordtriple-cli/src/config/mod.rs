//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wordtriple_core::config::defaults;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Search configuration
    #[serde(default)]
    pub search: SearchSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceSection,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

/// Search-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchSection {
    /// Minimum characters B must share with the seam between A and C
    pub min_overlap: usize,

    /// Maximum number of triples to report
    pub max_results: usize,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            min_overlap: defaults::MIN_OVERLAP,
            max_results: defaults::MAX_RESULTS,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputSection {
    /// Default output format ("json" or "text")
    pub format: String,

    /// Pretty print JSON output
    pub pretty: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            pretty: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PerformanceSection {
    /// Search left words in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub threads: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_core() {
        let config = CliConfig::default();
        assert_eq!(config.search.min_overlap, 1);
        assert_eq!(config.search.max_results, 10_000);
        assert_eq!(config.output.format, "json");
        assert!(config.output.pretty);
        assert!(!config.performance.parallel);
        assert_eq!(config.performance.threads, 0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = CliConfig::parse("[search]\nmin_overlap = 2\n").unwrap();
        assert_eq!(config.search.min_overlap, 2);
        assert_eq!(config.search.max_results, 10_000);
        assert_eq!(config.output, OutputSection::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_generated_toml_parses_back() {
        let text = CliConfig::default().to_toml().unwrap();
        assert!(text.contains("[search]"));
        assert!(text.contains("[performance]"));
        assert_eq!(CliConfig::parse(&text).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = CliConfig::parse("[search\nmin_overlap = ").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"[output]\nformat = \"text\"\n\n[performance]\nparallel = true\nthreads = 2\n",
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.output.format, "text");
        assert!(config.performance.parallel);
        assert_eq!(config.performance.threads, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/wordtriple.toml")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
