//! Song corpus loading.
//!
//! A corpus is either a JSON array of songs (`title`, optional `artist`,
//! `lyrics` in the escaped break convention) or a directory of plain-text
//! lyric files, one song per `.txt` file named after the song.

use std::path::Path;

use walkdir::WalkDir;

use crate::constants::lyrics::LINE_BREAK_ESCAPE;
use crate::error::{Error, Result};
use crate::lyrics::Song;

/// Load a corpus from a directory or a JSON file, depending on what `path` is.
pub fn load(path: &Path) -> Result<Vec<Song>> {
    if path.is_dir() {
        load_dir(path)
    } else {
        load_json(path)
    }
}

/// Load a JSON array of songs.
pub fn load_json(path: &Path) -> Result<Vec<Song>> {
    let content = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    let songs: Vec<Song> = serde_json::from_str(&content)?;
    tracing::info!("Loaded {} songs from {}", songs.len(), path.display());
    Ok(songs)
}

/// Load every `.txt` file below `dir`, ordered by path.
///
/// Real newlines are rewritten to the escaped break sequence so the default
/// parser handles these songs the same way as scraped ones. Unreadable files
/// are skipped with a warning.
pub fn load_dir(dir: &Path) -> Result<Vec<Song>> {
    let mut songs = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        let is_txt = path.extension().and_then(|e| e.to_str()) == Some("txt");
        if !entry.file_type().is_file() || !is_txt {
            continue;
        }

        let Some(title) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let content = match fs_err::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Skipping unreadable lyrics file {}: {e}", path.display());
                continue;
            }
        };

        songs.push(Song::new(title.trim(), escape_line_breaks(&content)));
    }

    tracing::info!("Loaded {} songs from {}", songs.len(), dir.display());
    Ok(songs)
}

/// Join the lines of plain text with the escaped break sequence.
fn escape_line_breaks(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(LINE_BREAK_ESCAPE)
}
