//! Tidy text tables: one word per row, with stop words removed.

pub mod stop_words;
pub mod tokenizer;

pub use stop_words::{remove_stop_words, StopWords};
pub use tokenizer::{split_words, unnest_words, WordToken};
