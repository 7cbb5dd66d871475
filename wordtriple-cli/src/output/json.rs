//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordtriple_core::TripleResult;

/// JSON formatter - outputs triples as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    triples: Vec<TripleResult>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new pretty-printing JSON formatter
    pub fn new(writer: W) -> Self {
        Self::with_pretty(writer, true)
    }

    /// Create a JSON formatter, optionally on a single line
    pub fn with_pretty(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            triples: Vec::new(),
            pretty,
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_triple(&mut self, triple: &TripleResult) -> Result<()> {
        self.triples.push(triple.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.triples)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.triples)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
