//! Per-song analysis: word frequencies and the full parse/tokenize/score pipeline.

pub mod counts;
pub mod pipeline;

pub use counts::{word_counts, WordCount};
pub use pipeline::{Pipeline, SongReport};
