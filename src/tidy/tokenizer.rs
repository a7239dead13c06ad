//! Word tokenizer for lyric lines.
//!
//! Lowercases each line and pulls out runs of letters and digits, keeping
//! inner apostrophes so contractions stay whole (`don't`, `rock'n'roll`).

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lyrics::LyricLine;

/// Regex matching a word with optional inner apostrophes (straight or curly).
#[allow(clippy::expect_used)]
static RE_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['\x{2019}][\p{L}\p{N}]+)*").expect("valid regex: RE_WORD")
});

/// One word of one line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordToken {
    /// Line the word came from.
    pub line_number: usize,
    /// Lowercased word.
    pub word: String,
}

impl WordToken {
    /// Create a token row.
    pub fn new(line_number: usize, word: impl Into<String>) -> Self {
        Self { line_number, word: word.into() }
    }
}

/// Split text into lowercase words. Curly apostrophes become straight ones.
pub fn split_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    RE_WORD
        .find_iter(&lower)
        .map(|m| m.as_str().replace('\u{2019}', "'"))
        .collect()
}

/// Explode lines into one row per word, in line order then word order.
pub fn unnest_words(lines: &[LyricLine]) -> Vec<WordToken> {
    lines
        .iter()
        .flat_map(|line| {
            split_words(line.text())
                .into_iter()
                .map(move |word| WordToken { line_number: line.line_number(), word })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_split_words_lowercases_and_drops_punctuation() {
        assert_eq!(split_words("Hello, World! (again)"), vec!["hello", "world", "again"]);
    }

    #[test]
    fn test_split_words_keeps_contractions() {
        assert_eq!(split_words("Don't stop"), vec!["don't", "stop"]);
        assert_eq!(split_words("rock'n'roll"), vec!["rock'n'roll"]);
        assert_eq!(split_words("I\u{2019}m here"), vec!["i'm", "here"]);
    }

    #[test]
    fn test_split_words_trims_outer_apostrophes() {
        assert_eq!(split_words("'cause nothin' 'bout"), vec!["cause", "nothin", "bout"]);
    }

    #[test]
    fn test_split_words_numbers_and_hyphens() {
        assert_eq!(split_words("24-7 love"), vec!["24", "7", "love"]);
    }

    #[test]
    fn test_unnest_words_tracks_lines() {
        let lines = vec![LyricLine::new(1, "Hey Jude"), LyricLine::new(2, "don't make it bad")];
        let tokens = unnest_words(&lines);
        assert_eq!(
            tokens,
            vec![
                WordToken::new(1, "hey"),
                WordToken::new(1, "jude"),
                WordToken::new(2, "don't"),
                WordToken::new(2, "make"),
                WordToken::new(2, "it"),
                WordToken::new(2, "bad"),
            ]
        );
    }

    #[test]
    fn test_unnest_words_skips_punctuation_only_lines() {
        let lines = vec![LyricLine::new(1, "..."), LyricLine::new(2, "oh")];
        assert_eq!(unnest_words(&lines), vec![WordToken::new(2, "oh")]);
    }
}
