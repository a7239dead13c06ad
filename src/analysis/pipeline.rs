//! Song analysis pipeline.
//!
//! parse lines → unnest words → drop stop words → count → join lexicon.
//! Each song is independent, so batches run on the rayon pool and are
//! collected back in input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::counts::{word_counts, WordCount};
use crate::constants::analysis::DEFAULT_TOP_WORDS;
use crate::lyrics::{LyricsParser, ParsedSong, Song};
use crate::sentiment::{join_sentiment, summarize, Lexicon, SentimentSummary};
use crate::tidy::{remove_stop_words, unnest_words, StopWords, WordToken};

/// Summary of one analyzed song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongReport {
    /// Song title.
    pub title: String,
    /// Performing artist, if known.
    pub artist: Option<String>,
    /// Number of cleaned lyric lines.
    pub line_count: usize,
    /// Number of words left after stop-word removal.
    pub word_count: usize,
    /// Most frequent words.
    pub top_words: Vec<WordCount>,
    /// Sentiment totals, present when a lexicon is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentSummary>,
}

/// Configured analysis steps.
#[derive(Debug, Clone)]
pub struct Pipeline {
    parser: LyricsParser,
    stop_words: Option<StopWords>,
    lexicon: Option<Lexicon>,
    top_words: usize,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Default parser, no stop words, no lexicon.
    pub fn new() -> Self {
        Self {
            parser: LyricsParser::new(),
            stop_words: None,
            lexicon: None,
            top_words: DEFAULT_TOP_WORDS,
        }
    }

    /// Use a different lyrics parser.
    #[must_use]
    pub fn with_parser(mut self, parser: LyricsParser) -> Self {
        self.parser = parser;
        self
    }

    /// Remove these stop words before counting and scoring.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    /// Score words against this lexicon.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Number of top words kept per report.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// The configured parser.
    pub const fn parser(&self) -> &LyricsParser {
        &self.parser
    }

    /// Word rows for a parsed song, after stop-word removal.
    pub fn tokens(&self, song: &ParsedSong) -> Vec<WordToken> {
        let tokens = unnest_words(&song.lines);
        match &self.stop_words {
            Some(stop_words) => remove_stop_words(&tokens, stop_words),
            None => tokens,
        }
    }

    /// Run every step for one song.
    pub fn analyze(&self, song: &Song) -> SongReport {
        let parsed = self.parser.parse_song(song);
        self.report(&parsed)
    }

    /// Build a report from an already parsed song.
    pub fn report(&self, song: &ParsedSong) -> SongReport {
        let tokens = self.tokens(song);

        let mut top_words = word_counts(&tokens);
        top_words.truncate(self.top_words);

        let sentiment = self
            .lexicon
            .as_ref()
            .map(|lexicon| summarize(&join_sentiment(&tokens, lexicon)));

        tracing::debug!(
            "Analyzed {:?}: {} lines, {} words",
            song.title,
            song.lines.len(),
            tokens.len()
        );

        SongReport {
            title: song.title.clone(),
            artist: song.artist.clone(),
            line_count: song.lines.len(),
            word_count: tokens.len(),
            top_words,
            sentiment,
        }
    }

    /// Analyze many songs in parallel. Output order matches input order.
    pub fn analyze_all(&self, songs: &[Song]) -> Vec<SongReport> {
        songs.par_iter().map(|song| self.analyze(song)).collect()
    }

    /// Report on songs that are already parsed, in parallel and in order.
    pub fn report_all(&self, songs: &[ParsedSong]) -> Vec<SongReport> {
        songs.par_iter().map(|song| self.report(song)).collect()
    }
}
