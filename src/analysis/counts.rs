//! Word frequency counts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::tidy::WordToken;

/// How often a word occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The word.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Count words, most frequent first. Ties are ordered alphabetically.
pub fn word_counts(tokens: &[WordToken]) -> Vec<WordCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.word.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word: word.to_string(), count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    counts
}
