//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::{parse_word_list, FileReader};
pub use glob_resolver::resolve_patterns;

use anyhow::Result;

/// Pattern that reads the word list from standard input
pub const STDIN_MARKER: &str = "-";

/// Load raw word entries from files, glob patterns, or stdin (`-`)
///
/// Entries keep their original spelling; normalization happens in the core.
pub fn load_words(patterns: &[String]) -> Result<Vec<String>> {
    let mut words = Vec::new();

    let (stdin, file_patterns): (Vec<&String>, Vec<&String>) =
        patterns.iter().partition(|p| p.as_str() == STDIN_MARKER);

    if !stdin.is_empty() {
        let text = FileReader::read_stdin()?;
        words.extend(parse_word_list(&text).into_iter().map(str::to_string));
        log::info!("Read {} entries from stdin", words.len());
    }

    if !file_patterns.is_empty() {
        let owned: Vec<String> = file_patterns.into_iter().cloned().collect();
        for path in resolve_patterns(&owned)? {
            let text = FileReader::read_text(&path)?;
            let before = words.len();
            words.extend(parse_word_list(&text).into_iter().map(str::to_string));
            log::info!("Read {} entries from {}", words.len() - before, path.display());
        }
    }

    Ok(words)
}
