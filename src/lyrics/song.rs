//! Song records and batch parsing.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::parser::{LyricLine, LyricsParser};

/// A song as collected by a scraping step: metadata plus the raw lyrics blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title.
    pub title: String,
    /// Performing artist, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Raw lyrics using the escaped line break convention.
    pub lyrics: String,
}

impl Song {
    /// Create a song without artist information.
    pub fn new(title: impl Into<String>, lyrics: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: None,
            lyrics: lyrics.into(),
        }
    }

    /// Attach an artist.
    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }
}

/// A song whose lyrics have been parsed into a line table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSong {
    /// Song title.
    pub title: String,
    /// Performing artist, if known.
    pub artist: Option<String>,
    /// Cleaned, numbered lyric lines.
    pub lines: Vec<LyricLine>,
}

impl LyricsParser {
    /// Parse one song's lyrics, keeping its metadata.
    pub fn parse_song(&self, song: &Song) -> ParsedSong {
        let lines = self.parse(&song.lyrics);
        tracing::debug!("Parsed {} lines from {:?}", lines.len(), song.title);
        ParsedSong {
            title: song.title.clone(),
            artist: song.artist.clone(),
            lines,
        }
    }
}

/// Parse many songs in parallel. Output order matches input order.
pub fn parse_songs(songs: &[Song], parser: &LyricsParser) -> Vec<ParsedSong> {
    songs.par_iter().map(|song| parser.parse_song(song)).collect()
}
