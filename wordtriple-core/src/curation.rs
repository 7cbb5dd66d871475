//! Vocabulary curation for puzzle word lists
//!
//! Word lists pulled from dictionaries or APIs carry proper nouns, jargon,
//! unpronounceable strings and heavy derivations that make poor puzzle
//! answers. [`WordQualityFilter`] drops those before normalization.

use regex::Regex;

use crate::error::Result;

/// Affixes that mark a word as a derivation when enough stem remains
const DERIVATIONAL_AFFIXES: [&str; 38] = [
    "itis", "osis", "ectomy", "pathy", "plasty", "ology", "scopy", "otomy", "emia", "rrhea",
    "over", "under", "mid", "out", "self", "super", "inter", "intra", "non", "pre", "re",
    "counter", "anti", "semi", "multi", "poly", "tide", "fest", "light", "side", "back", "fore",
    "head", "less", "ness", "tion", "sion", "ment",
];

/// Endings that are only tolerated on shorter words
const LONG_WORD_ENDINGS: [&str; 6] = ["ship", "ness", "ment", "tion", "sion", "less"];

/// Shortest acceptable word
pub const MIN_WORD_LEN: usize = 4;

/// Longest acceptable word
pub const MAX_WORD_LEN: usize = 12;

/// Filter that keeps words suited to puzzle play
#[derive(Debug, Clone)]
pub struct WordQualityFilter {
    alphabetic: Regex,
    q_without_u: Regex,
    consonant_run: Regex,
    vowel: Regex,
}

impl WordQualityFilter {
    /// Compile the filter's patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            alphabetic: Regex::new(r"^[a-zA-Z]+$")?,
            q_without_u: Regex::new(r"(?i)q[^u]")?,
            consonant_run: Regex::new(r"(?i)[bcdfghjklmnpqrstvwxz]{5,}")?,
            vowel: Regex::new(r"[aeiou]")?,
        })
    }

    /// Whether a raw (untrimmed, original case) entry is worth keeping
    pub fn accepts(&self, raw: &str) -> bool {
        let word = raw.trim();

        if !self.alphabetic.is_match(word) {
            return false;
        }
        // Capitalized entries are proper nouns
        if word.starts_with(|c: char| c.is_ascii_uppercase()) {
            return false;
        }

        let lower = word.to_ascii_lowercase();
        !self.is_unwieldy(&lower) && !has_derivational_affix(&lower)
    }

    /// Keep only the accepted entries
    pub fn retain<'a, I>(&self, words: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        words.into_iter().filter(|w| self.accepts(w)).collect()
    }

    fn is_unwieldy(&self, word: &str) -> bool {
        let len = word.len();
        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) {
            return true;
        }
        if has_triple_letter(word) || self.q_without_u.is_match(word) {
            return true;
        }

        let vowels = self.vowel.find_iter(word).count();
        if vowels == 0 {
            return true;
        }
        if (vowels as f64 / len as f64) < 0.2 && !word.contains('y') {
            return true;
        }
        if self.consonant_run.is_match(word) {
            return true;
        }

        len > 9 && LONG_WORD_ENDINGS.iter().any(|end| word.ends_with(end))
    }
}

/// Three identical letters in a row
fn has_triple_letter(word: &str) -> bool {
    word.as_bytes()
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
}

fn has_derivational_affix(word: &str) -> bool {
    DERIVATIONAL_AFFIXES.iter().any(|affix| {
        word.len() > affix.len() + 3 && (word.starts_with(affix) || word.ends_with(affix))
    })
}
