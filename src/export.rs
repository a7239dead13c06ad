//! Tidy table export.
//!
//! Line and token tables go out as CSV (one observation per row), song
//! reports as a pretty-printed JSON array.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::analysis::SongReport;
use crate::error::{Error, Result};
use crate::lyrics::ParsedSong;
use crate::tidy::WordToken;

#[derive(Serialize)]
struct LineRow<'a> {
    title: &'a str,
    line_number: usize,
    text: &'a str,
}

#[derive(Serialize)]
struct TokenRow<'a> {
    title: &'a str,
    line_number: usize,
    word: &'a str,
}

/// Write `title,line_number,text` rows for every line of every song.
pub fn write_lines_csv<W: Write>(writer: W, songs: &[ParsedSong]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for song in songs {
        for line in &song.lines {
            csv_writer.serialize(LineRow {
                title: &song.title,
                line_number: line.line_number(),
                text: line.text(),
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write `title,line_number,word` rows for one song's tokens.
pub fn write_tokens_csv<W: Write>(writer: W, title: &str, tokens: &[WordToken]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for token in tokens {
        csv_writer.serialize(TokenRow {
            title,
            line_number: token.line_number,
            word: &token.word,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write reports as a pretty JSON array.
pub fn write_reports_json<W: Write>(mut writer: W, reports: &[SongReport]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, reports)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write the line table to `path`, creating parent directories.
pub fn write_lines_csv_file(path: &Path, songs: &[ParsedSong]) -> Result<()> {
    let file = create_file(path)?;
    write_lines_csv(file, songs)?;
    tracing::info!("Wrote line table to {}", path.display());
    Ok(())
}

/// Write reports to `path`, creating parent directories.
pub fn write_reports_json_file(path: &Path, reports: &[SongReport]) -> Result<()> {
    let file = create_file(path)?;
    write_reports_json(std::io::BufWriter::new(file), reports)?;
    tracing::info!("Wrote {} reports to {}", reports.len(), path.display());
    Ok(())
}

fn create_file(path: &Path) -> Result<fs_err::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(|e| Error::io(e, parent.to_path_buf()))?;
    }
    fs_err::File::create(path).map_err(|e| Error::io(e, path.to_path_buf()))
}
