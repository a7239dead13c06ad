//! Joining tokens with a lexicon and summarizing the result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::lexicon::{Lexicon, Sentiment};
use crate::tidy::WordToken;

/// A token that matched a lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentMatch {
    /// Line the word came from.
    pub line_number: usize,
    /// Matched word.
    pub word: String,
    /// Sentiment from the lexicon.
    pub sentiment: Sentiment,
}

/// Aggregated sentiment for one song.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSummary {
    /// Number of match rows (a word with several categories counts once per category).
    pub matched_words: usize,
    /// Sum of numeric scores.
    pub net_value: i64,
    /// Count per category label.
    pub categories: BTreeMap<String, usize>,
    /// Summed numeric score per line, only for lines with a numeric match.
    pub line_values: BTreeMap<usize, i64>,
}

impl SentimentSummary {
    /// Count for a category label, 0 when absent.
    pub fn category(&self, label: &str) -> usize {
        self.categories.get(label).copied().unwrap_or(0)
    }

    /// `positive` minus `negative` category counts (bing-style net sentiment).
    #[allow(clippy::cast_possible_wrap)]
    pub fn polarity(&self) -> i64 {
        self.category("positive") as i64 - self.category("negative") as i64
    }
}

/// Inner join: one row per (token, sentiment) pair. Unknown words are dropped.
pub fn join_sentiment(tokens: &[WordToken], lexicon: &Lexicon) -> Vec<SentimentMatch> {
    tokens
        .iter()
        .flat_map(|token| {
            lexicon.get(&token.word).iter().map(|sentiment| SentimentMatch {
                line_number: token.line_number,
                word: token.word.clone(),
                sentiment: sentiment.clone(),
            })
        })
        .collect()
}

/// Aggregate matches into totals, category counts and per-line scores.
pub fn summarize(matches: &[SentimentMatch]) -> SentimentSummary {
    let mut summary = SentimentSummary {
        matched_words: matches.len(),
        ..SentimentSummary::default()
    };

    for m in matches {
        match &m.sentiment {
            Sentiment::Value(v) => {
                let v = i64::from(*v);
                summary.net_value += v;
                *summary.line_values.entry(m.line_number).or_insert(0) += v;
            }
            Sentiment::Category(label) => {
                *summary.categories.entry(label.clone()).or_insert(0) += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn lexicon() -> Lexicon {
        let mut lex = Lexicon::new("test");
        lex.insert("love", Sentiment::Value(3));
        lex.insert("love", Sentiment::Category("positive".into()));
        lex.insert("love", Sentiment::Category("joy".into()));
        lex.insert("cry", Sentiment::Value(-2));
        lex.insert("cry", Sentiment::Category("negative".into()));
        lex
    }

    #[test]
    fn test_join_multiplicity() {
        let tokens = vec![
            WordToken::new(1, "love"),
            WordToken::new(1, "you"),
            WordToken::new(2, "cry"),
        ];
        let matches = join_sentiment(&tokens, &lexicon());
        assert_eq!(matches.len(), 5);
        assert!(matches.iter().all(|m| m.word != "you"));
        assert_eq!(matches.iter().filter(|m| m.line_number == 1).count(), 3);
    }

    #[test]
    fn test_join_empty_lexicon() {
        let tokens = vec![WordToken::new(1, "love")];
        assert!(join_sentiment(&tokens, &Lexicon::new("empty")).is_empty());
    }

    #[test]
    fn test_summarize() {
        let tokens = vec![
            WordToken::new(1, "love"),
            WordToken::new(2, "cry"),
            WordToken::new(2, "cry"),
            WordToken::new(3, "love"),
        ];
        let summary = summarize(&join_sentiment(&tokens, &lexicon()));
        assert_eq!(summary.net_value, 3 - 2 - 2 + 3);
        assert_eq!(summary.category("positive"), 2);
        assert_eq!(summary.category("negative"), 2);
        assert_eq!(summary.category("joy"), 2);
        assert_eq!(summary.category("anger"), 0);
        assert_eq!(summary.polarity(), 0);
        assert_eq!(summary.line_values.get(&1), Some(&3));
        assert_eq!(summary.line_values.get(&2), Some(&-4));
        assert_eq!(summary.matched_words, 10);
    }

    #[test]
    fn test_summarize_nothing() {
        assert_eq!(summarize(&[]), SentimentSummary::default());
    }
}
