//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::{analysis::DEFAULT_TOP_WORDS, env as keys};
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Stop-word list to apply; the built-in English list is used when unset
    pub stop_words_path: Option<PathBuf>,
    /// Sentiment lexicon CSV; sentiment is skipped when unset
    pub lexicon_path: Option<PathBuf>,
    /// Directory receiving exported tables
    pub output_dir: Option<PathBuf>,
    /// How many top words each report keeps
    pub top_words: usize,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            stop_words_path: None,
            lexicon_path: None,
            output_dir: None,
            top_words: DEFAULT_TOP_WORDS,
        }
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present)
    pub fn load() -> Result<Self> {
        Self::load_except(&[])
    }

    /// Like [`Config::load`], but ignore the listed variables.
    ///
    /// Used when a command-line flag overrides a setting, so a malformed
    /// value for that variable is never parsed.
    pub fn load_except(overridden: &[&str]) -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Self::from_lookup_except(|key| env::var(key).ok(), overridden)
    }

    /// Build configuration from a lookup, ignoring the listed variables.
    pub fn from_lookup_except<F>(lookup: F, overridden: &[&str]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|key| {
            if overridden.iter().any(|name| *name == key) {
                None
            } else {
                lookup(key)
            }
        })
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            stop_words_path: lookup(keys::STOP_WORDS).as_deref().and_then(expand_path),
            lexicon_path: lookup(keys::LEXICON).as_deref().and_then(expand_path),
            output_dir: lookup(keys::OUTPUT_DIR).as_deref().and_then(expand_path),
            ..Self::default()
        };

        // Top words can be configured via environment
        if let Some(top) = lookup(keys::TOP_WORDS) {
            config.top_words = top.trim().parse::<usize>().map_err(|_| {
                Error::config(
                    format!("{} is not a number: {top:?}", keys::TOP_WORDS),
                    "Use a non-negative integer such as 10",
                )
            })?;
        }

        Ok(config)
    }
}

/// Expand `~` and drop empty values.
fn expand_path(raw: &str) -> Option<PathBuf> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| PathBuf::from(shellexpand::tilde(raw).to_string()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.top_words, DEFAULT_TOP_WORDS);
        assert_eq!(config.app_name(), "tidy-lyrics");
    }

    #[test]
    fn test_paths_and_top_words() {
        let config = Config::from_lookup(lookup(&[
            (keys::LEXICON, "/data/afinn.csv"),
            (keys::OUTPUT_DIR, "  "),
            (keys::TOP_WORDS, " 5 "),
        ]))
        .unwrap();
        assert_eq!(config.lexicon_path, Some(PathBuf::from("/data/afinn.csv")));
        assert_eq!(config.output_dir, None);
        assert_eq!(config.stop_words_path, None);
        assert_eq!(config.top_words, 5);
    }

    #[test]
    fn test_tilde_expansion() {
        let config = Config::from_lookup(lookup(&[(keys::STOP_WORDS, "~/stop.txt")])).unwrap();
        let path = config.stop_words_path.unwrap();
        assert!(path.ends_with("stop.txt"));
        if let Ok(home) = std::env::var("HOME") {
            assert_eq!(path, PathBuf::from(home).join("stop.txt"));
        }
    }

    #[test]
    fn test_invalid_top_words() {
        let err = Config::from_lookup(lookup(&[(keys::TOP_WORDS, "lots")])).unwrap_err();
        match err {
            Error::Config { message, .. } => assert!(message.contains(keys::TOP_WORDS)),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_overridden_variable_is_not_parsed() {
        let vars = lookup(&[(keys::TOP_WORDS, "lots"), (keys::LEXICON, "/data/nrc.csv")]);
        let config = Config::from_lookup_except(vars, &[keys::TOP_WORDS]).unwrap();
        assert_eq!(config.top_words, DEFAULT_TOP_WORDS);
        assert_eq!(config.lexicon_path, Some(PathBuf::from("/data/nrc.csv")));
    }
}
