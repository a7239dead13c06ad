//! `tidy-lyrics` - tidy-data text analysis of song lyrics.
//!
//! Parses raw scraped lyrics into numbered line tables, explodes them into
//! one-word-per-row token tables, removes stop words and scores words
//! against sentiment lexicons.

// Re-export public modules for use in integration tests and as a library
pub mod analysis;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod error;
pub mod export;
pub mod lyrics;
pub mod sentiment;
pub mod tidy;

pub use error::{Error, Result};
pub use lyrics::{parse_lyrics, LyricLine, LyricsParser};
