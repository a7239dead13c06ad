//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Lyrics parsing constants.
pub mod lyrics {
    /// Literal two-character line break escape used by scraped lyrics (`\` then `n`).
    pub const LINE_BREAK_ESCAPE: &str = "\\n";
}

/// Analysis constants.
pub mod analysis {
    /// Default number of most frequent words kept in a song report.
    pub const DEFAULT_TOP_WORDS: usize = 10;
}

/// Export file names.
pub mod export {
    /// Tidy line table written by the CLI.
    pub const LINES_FILE: &str = "lines.csv";

    /// Per-song report array written by the CLI.
    pub const REPORTS_FILE: &str = "reports.json";
}

/// Environment variable names read by the configuration layer.
pub mod env {
    /// Path to a stop-word list (one word per line).
    pub const STOP_WORDS: &str = "TIDY_LYRICS_STOP_WORDS";

    /// Path to a sentiment lexicon CSV.
    pub const LEXICON: &str = "TIDY_LYRICS_LEXICON";

    /// Directory that receives exported tables.
    pub const OUTPUT_DIR: &str = "TIDY_LYRICS_OUTPUT_DIR";

    /// Number of top words per report.
    pub const TOP_WORDS: &str = "TIDY_LYRICS_TOP_WORDS";
}
