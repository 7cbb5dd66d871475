//! wordtriple command-line entry point

use anyhow::Result;
use clap::Parser;
use wordtriple_cli::commands::Commands;

/// Discover bridging word triples for word puzzles
#[derive(Debug, Parser)]
#[command(name = "wordtriple", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_search_subcommand() {
        let cli = Cli::try_parse_from(["wordtriple", "search", "-i", "words.txt"]).unwrap();
        assert!(matches!(cli.command, Commands::Search(_)));
    }
}
