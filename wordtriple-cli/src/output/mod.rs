//! Output formatting module

use anyhow::Result;
use wordtriple_core::TripleResult;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single triple
    fn format_triple(&mut self, triple: &TripleResult) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One triple per line
    Text,
    /// JSON array of `{"words": [...], "overlap": n}` objects
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::error::CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(crate::error::CliError::ConfigError(format!(
                "unknown output format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

/// Write every triple through a formatter and finish it
pub fn write_all(formatter: &mut dyn OutputFormatter, triples: &[TripleResult]) -> Result<()> {
    for triple in triples {
        formatter.format_triple(triple)?;
    }
    formatter.finish()
}
