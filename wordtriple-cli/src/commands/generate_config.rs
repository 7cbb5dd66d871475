//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = Self::generate_template()?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                eprintln!("Configuration written to {}", path.display());
                eprintln!("Use it with: wordtriple search -i <FILE> -c {}", path.display());
            }
            None => print!("{template}"),
        }

        Ok(())
    }

    /// Default configuration with a short header
    fn generate_template() -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# wordtriple configuration\n\
             # Command-line flags override these values. threads = 0 picks a default.\n\n\
             {body}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_as_default_config() {
        let template = GenerateConfigArgs::generate_template().unwrap();
        assert!(template.starts_with("# wordtriple configuration"));
        assert_eq!(CliConfig::parse(&template).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_writes_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wordtriple.toml");

        GenerateConfigArgs {
            output: Some(path.clone()),
        }
        .execute()
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("min_overlap = 1"));
    }
}
