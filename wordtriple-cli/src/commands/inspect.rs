//! Inspect command implementation

use anyhow::{bail, Result};
use clap::Args;
use wordtriple_core::{find_triples, SearchConfig, TripleDetails};

use crate::error::CliError;

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// First word, whose tail starts the chain
    pub a: String,

    /// Bridge word
    pub b: String,

    /// Last word, whose head ends the chain
    pub c: String,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        let details = match TripleDetails::compute(&self.a, &self.b, &self.c) {
            Some(details) => details,
            None => bail!(
                "'{}', '{}' and '{}' do not form a chain",
                self.a,
                self.b,
                self.c
            ),
        };

        print!("{}", self.render(&details)?);
        Ok(())
    }

    /// Render the analysis along with the search verdict for the triple
    fn render(&self, details: &TripleDetails) -> Result<String> {
        let accepted = find_triples([&self.a, &self.b, &self.c], &SearchConfig::default())
            .map_err(CliError::from)?
            .into_iter()
            .find(|t| {
                t.a() == self.a.trim().to_lowercase()
                    && t.b() == self.b.trim().to_lowercase()
                    && t.c() == self.c.trim().to_lowercase()
            });

        let mut out = format!("{} + {} + {}\n", self.a, self.b, self.c);
        out.push_str(&format!("  A -> B overlap: {}\n", details.overlap_ab));
        out.push_str(&format!("  B -> C overlap: {}\n", details.overlap_bc));
        out.push_str(&format!(
            "  Shared letters: \"{}\" ({})\n",
            details.shared, details.shared_count
        ));
        out.push_str(&format!(
            "  Display overlap: \"{}\" ({})\n",
            details.display, details.display_count
        ));
        match accepted {
            Some(triple) => out.push_str(&format!(
                "  Search result: yes (overlap {})\n",
                triple.overlap
            )),
            None => out.push_str("  Search result: no\n"),
        }
        Ok(out)
    }
}
