//! Lyrics processing module.
//!
//! Turns raw scraped lyric blobs into tidy line tables:
//! - `parser`: section marker stripping and line numbering
//! - `song`: song records and batch parsing

pub mod parser;
pub mod song;

pub use parser::{parse_lyrics, strip_section_marker, LyricLine, LyricsParser};
pub use song::{parse_songs, ParsedSong, Song};
