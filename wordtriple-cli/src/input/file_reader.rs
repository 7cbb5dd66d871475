//! Word list reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Word list reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of standard input as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;

        Ok(content)
    }
}

/// Split word list text into raw entries
///
/// Entries are separated by whitespace or commas. Lines whose first
/// non-blank character is `#` are comments.
pub fn parse_word_list(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("words.txt");

        let content = "anger\ngerm\nermine\n";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/words.txt");
        let result = FileReader::read_text(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        let content = FileReader::read_text(&file_path).unwrap();
        assert!(parse_word_list(&content).is_empty());
    }

    #[test]
    fn test_parse_one_word_per_line() {
        assert_eq!(
            parse_word_list("anger\r\ngerm\n\nermine"),
            vec!["anger", "germ", "ermine"]
        );
    }

    #[test]
    fn test_parse_commas_and_spaces() {
        assert_eq!(
            parse_word_list("cat, atom,tome  stone\tone"),
            vec!["cat", "atom", "tome", "stone", "one"]
        );
    }

    #[test]
    fn test_parse_skips_comments() {
        let text = "# header\nanger\n   # indented comment\ngerm";
        assert_eq!(parse_word_list(text), vec!["anger", "germ"]);
    }

    #[test]
    fn test_parse_keeps_case_for_core_normalization() {
        assert_eq!(parse_word_list("Anger GERM"), vec!["Anger", "GERM"]);
    }
}
