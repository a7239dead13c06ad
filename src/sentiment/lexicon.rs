//! Sentiment lexicons.
//!
//! A lexicon maps a word to one or more sentiments. AFINN-style lexicons
//! carry an integer score, bing/nrc-style lexicons carry a category label.
//! nrc lists the same word several times with different categories, so
//! entries are multi-valued.

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Sentiment attached to a lexicon word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sentiment {
    /// Numeric score (e.g. AFINN, -5 to 5).
    Value(i32),
    /// Category label (e.g. `positive`, `joy`).
    Category(String),
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Category(c) => write!(f, "{c}"),
        }
    }
}

/// One CSV row: `word` plus `sentiment` and/or `value`.
#[derive(Debug, Deserialize)]
struct LexiconRecord {
    word: String,
    #[serde(default)]
    sentiment: Option<String>,
    #[serde(default)]
    value: Option<i32>,
}

/// Word to sentiment lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    name: String,
    entries: HashMap<String, Vec<Sentiment>>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// Lexicon name (file stem when loaded from disk).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a sentiment for `word`. Words are stored lowercased; exact
    /// duplicates are ignored.
    pub fn insert(&mut self, word: &str, sentiment: Sentiment) {
        let values = self.entries.entry(normalize(word)).or_default();
        if !values.contains(&sentiment) {
            values.push(sentiment);
        }
    }

    /// Sentiments for `word` (case-insensitive), empty when the word is unknown.
    pub fn get(&self, word: &str) -> &[Sentiment] {
        self.entries
            .get(word)
            .or_else(|| self.entries.get(&normalize(word)))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `word` has any sentiment, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word) || self.entries.contains_key(&normalize(word))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a CSV lexicon from disk, named after the file stem.
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs_err::File::open(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        let name = path
            .file_stem()
            .map_or_else(|| "lexicon".to_string(), |s| s.to_string_lossy().into_owned());
        let lexicon = Self::from_csv_reader(name, file)?;
        tracing::info!(
            "Loaded lexicon {:?} with {} words from {}",
            lexicon.name,
            lexicon.len(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Read a headed CSV with a `word` column and `sentiment` and/or `value` columns.
    ///
    /// Every row needs a non-empty word and at least one of the two sentiment
    /// fields. Row numbers in errors count data rows from 1.
    pub fn from_csv_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if !headers.iter().any(|h| h == "word") {
            return Err(Error::lexicon("missing `word` column", None));
        }
        if !headers.iter().any(|h| h == "sentiment" || h == "value") {
            return Err(Error::lexicon("needs a `sentiment` or `value` column", None));
        }

        let mut lexicon = Self::new(name);
        for (idx, record) in csv_reader.deserialize::<LexiconRecord>().enumerate() {
            let row = idx + 1;
            let record = record.map_err(|e| Error::lexicon(e.to_string(), row))?;

            if record.word.is_empty() {
                return Err(Error::lexicon("empty word", row));
            }

            let category = record.sentiment.filter(|s| !s.is_empty());
            if category.is_none() && record.value.is_none() {
                return Err(Error::lexicon(
                    format!("no sentiment or value for {:?}", record.word),
                    row,
                ));
            }

            if let Some(category) = category {
                lexicon.insert(&record.word, Sentiment::Category(category));
            }
            if let Some(value) = record.value {
                lexicon.insert(&record.word, Sentiment::Value(value));
            }
        }

        Ok(lexicon)
    }
}

/// Lookup key for a word: trimmed and lowercased.
fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}
