//! Raw lyrics to tidy line table.
//!
//! Scraped lyrics arrive as one blob where line breaks are the literal
//! two-character escape `\n` and section headers (`[Verse 1]`, `[Chorus]`)
//! are interleaved with the content. Parsing splits on the escape, strips
//! one numbered and one un-numbered marker per segment, drops empty
//! segments and numbers the survivors from 1.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::lyrics::LINE_BREAK_ESCAPE;

/// Regex matching numbered section markers like `[Verse 1]`.
#[allow(clippy::expect_used)]
static RE_NUMBERED_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\]\d]+\d+\]").expect("valid regex: RE_NUMBERED_MARKER")
});

/// Regex matching un-numbered section markers like `[Chorus]`.
#[allow(clippy::expect_used)]
static RE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[^\]\d]+\]").expect("valid regex: RE_MARKER")
});

/// One surviving line of a song.
///
/// Lines coming out of [`LyricsParser`] always have a positive number and
/// non-empty trimmed text. Deserialization enforces the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LyricLineRecord")]
pub struct LyricLine {
    line_number: usize,
    text: String,
}

/// Unchecked wire form of [`LyricLine`].
#[derive(Deserialize)]
struct LyricLineRecord {
    line_number: usize,
    text: String,
}

impl TryFrom<LyricLineRecord> for LyricLine {
    type Error = String;

    fn try_from(record: LyricLineRecord) -> std::result::Result<Self, Self::Error> {
        Self::checked(record.line_number, record.text)
            .ok_or_else(|| format!("invalid lyric line {}", record.line_number))
    }
}

impl LyricLine {
    /// Create a line record without checking it.
    ///
    /// Callers are responsible for a 1-based `line_number` and non-empty
    /// text; use [`LyricLine::checked`] for untrusted input.
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self { line_number, text: text.into() }
    }

    /// Create a line record, rejecting line number 0 and blank text.
    pub fn checked(line_number: usize, text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        (line_number > 0 && !text.trim().is_empty()).then_some(Self { line_number, text })
    }

    /// 1-based position in the cleaned line sequence.
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// Line content with markers removed.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for LyricLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.line_number, self.text)
    }
}

/// Converts raw lyric blobs into numbered lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsParser {
    separator: String,
}

impl Default for LyricsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LyricsParser {
    /// Parser splitting on the escaped `\n` break sequence.
    pub fn new() -> Self {
        Self::with_separator(LINE_BREAK_ESCAPE)
    }

    /// Parser splitting on an arbitrary literal break sequence.
    ///
    /// An empty separator treats the whole blob as a single segment.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self { separator: separator.into() }
    }

    /// The literal sequence segments are split on.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Parse a raw blob into lines numbered `1..=N`.
    ///
    /// Never fails: unmatched or malformed markers stay in the text, and an
    /// empty blob yields no lines.
    pub fn parse(&self, raw: &str) -> Vec<LyricLine> {
        self.segments(raw)
            .into_iter()
            .map(strip_section_marker)
            .filter(|text| !text.is_empty())
            .enumerate()
            .map(|(idx, text)| LyricLine { line_number: idx + 1, text })
            .collect()
    }

    fn segments<'a>(&self, raw: &'a str) -> Vec<&'a str> {
        if self.separator.is_empty() {
            vec![raw]
        } else {
            raw.split(self.separator.as_str()).collect()
        }
    }
}

/// Parse with the default escaped-break convention.
pub fn parse_lyrics(raw: &str) -> Vec<LyricLine> {
    LyricsParser::new().parse(raw)
}

/// Remove the first numbered marker, then the first un-numbered marker,
/// and trim what is left.
pub fn strip_section_marker(segment: &str) -> String {
    let without_numbered = RE_NUMBERED_MARKER.replace(segment, "");
    RE_MARKER.replace(&without_numbered, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn pairs(lines: &[LyricLine]) -> Vec<(usize, &str)> {
        lines.iter().map(|l| (l.line_number(), l.text())).collect()
    }

    #[test]
    fn test_end_to_end_song() {
        let raw = "[Verse 1]\\nLine one\\nLine two\\n[Chorus]\\nLine three\\n[Instrumental Break]\\n[Chorus]\\nLine three";
        let lines = parse_lyrics(raw);
        assert_eq!(
            pairs(&lines),
            vec![(1, "Line one"), (2, "Line two"), (3, "Line three"), (4, "Line three")]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_lyrics("").is_empty());
    }

    #[test]
    fn test_no_markers() {
        assert_eq!(pairs(&parse_lyrics("Just one line")), vec![(1, "Just one line")]);
    }

    #[test]
    fn test_marker_only_segments_dropped() {
        assert!(parse_lyrics("[Verse 1]").is_empty());
        assert!(parse_lyrics("[Instrumental Break]").is_empty());
        assert!(parse_lyrics("[Chorus]\\n[Verse 12]\\n[Outro]").is_empty());
    }

    #[test]
    fn test_marker_with_trailing_text() {
        assert_eq!(pairs(&parse_lyrics("[Verse 1]Hello")), vec![(1, "Hello")]);
        assert_eq!(pairs(&parse_lyrics("[Chorus] Sing it")), vec![(1, "Sing it")]);
    }

    #[test]
    fn test_whitespace_segments_dropped() {
        let lines = parse_lyrics("first\\n   \\n\\n\t\\nsecond");
        assert_eq!(pairs(&lines), vec![(1, "first"), (2, "second")]);
    }

    #[test]
    fn test_real_newlines_are_not_breaks() {
        let lines = parse_lyrics("one\ntwo");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "one\ntwo");
    }

    #[test]
    fn test_malformed_markers_kept_as_text() {
        let lines = parse_lyrics("[unclosed\\n]stray\\n[]\\n[Verse 1: Guest]");
        assert_eq!(
            pairs(&lines),
            vec![(1, "[unclosed"), (2, "]stray"), (3, "[]"), (4, "[Verse 1: Guest]")]
        );
    }

    #[test]
    fn test_only_one_marker_per_pass() {
        // Adjacent un-numbered markers: the second one survives.
        assert_eq!(pairs(&parse_lyrics("[Chorus][Bridge]")), vec![(1, "[Bridge]")]);
        // One numbered and one un-numbered marker are both removed.
        assert!(parse_lyrics("[Verse 2][Chorus]").is_empty());
    }

    #[test]
    fn test_numbering_is_contiguous() {
        let raw = "[Intro]\\na\\n\\nb\\n[Verse 1]\\nc\\n  \\nd";
        let lines = parse_lyrics(raw);
        let numbers: Vec<usize> = lines.iter().map(LyricLine::line_number).collect();
        assert_eq!(numbers, (1..=lines.len()).collect::<Vec<_>>());
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_reparse_is_stable() {
        let raw = "[Verse 1]\\nLine one\\n\\n[Chorus]\\nLine [two]\\nLine three";
        let first = parse_lyrics(raw);
        let rejoined = first.iter().map(LyricLine::text).collect::<Vec<_>>().join("\\n");
        let second = parse_lyrics(&rejoined);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_separator() {
        let parser = LyricsParser::with_separator("\n");
        let lines = parser.parse("[Chorus]\nHello\n\nWorld\n");
        assert_eq!(pairs(&lines), vec![(1, "Hello"), (2, "World")]);
    }

    #[test]
    fn test_empty_separator_keeps_single_segment() {
        let parser = LyricsParser::with_separator("");
        assert_eq!(pairs(&parser.parse("[Chorus] la la")), vec![(1, "la la")]);
        assert!(parser.parse("").is_empty());
    }

    #[test]
    fn test_checked_rejects_invalid_lines() {
        assert_eq!(LyricLine::checked(1, "ok"), Some(LyricLine::new(1, "ok")));
        assert_eq!(LyricLine::checked(0, "ok"), None);
        assert_eq!(LyricLine::checked(2, "  "), None);
    }

    #[test]
    fn test_deserialize_validates() {
        let line: LyricLine = serde_json::from_str(r#"{"line_number":2,"text":"Hey"}"#).unwrap();
        assert_eq!(line, LyricLine::new(2, "Hey"));
        assert!(serde_json::from_str::<LyricLine>(r#"{"line_number":0,"text":"Hey"}"#).is_err());
        assert!(serde_json::from_str::<LyricLine>(r#"{"line_number":1,"text":""}"#).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(LyricLine::new(3, "Hey").to_string(), "3: Hey");
    }
}
