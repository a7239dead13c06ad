//! Lexicon-based sentiment scoring.
//!
//! Contains:
//! - `lexicon`: word to sentiment lookup tables loaded from CSV
//! - `scoring`: token/lexicon inner join and per-song summaries

pub mod lexicon;
pub mod scoring;

pub use lexicon::{Lexicon, Sentiment};
pub use scoring::{join_sentiment, summarize, SentimentMatch, SentimentSummary};
