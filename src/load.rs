//! Turns an input path into a list of tracks. A directory is scanned for audio
//! files; anything else is read as a playlist.
use anyhow::{Context, Result};
use bstr::io::BufReadExt;
use bstr::ByteSlice;
use encoding_rs_io::DecodeReaderBytesBuilder;
use std::{
    ffi::OsStr,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use walkdir::WalkDir;

use crate::error::Error;
use crate::track::Track;

/// File extensions (compared case-insensitively) that mark a file as audio
pub const AUDIO_EXTENSIONS: [&str; 6] = ["mp3", "flac", "wav", "ogg", "m4a", "aac"];

/// Loads the tracks named by `path`:
/// * a directory is scanned recursively, see `scan_directory`;
/// * any other existing path is read as a playlist, see `read_playlist`.
///
/// Fails with `Error::NotFound` if `path` doesn't exist.
pub fn load(path: &Path) -> Result<Vec<Track>> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_owned()).into());
    }
    let tracks = if path.is_dir() { scan_directory(path)? } else { read_playlist(path)? };
    log::debug!("loaded {} tracks from {}", tracks.len(), path.display());
    Ok(tracks)
}

/// Does `path` end in one of the `AUDIO_EXTENSIONS`?
#[must_use]
pub fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| AUDIO_EXTENSIONS.iter().any(|audio| ext.eq_ignore_ascii_case(audio)))
        .unwrap_or(false)
}

/// Returns the canonical path of every entry at any depth below `dir` whose
/// name has an audio extension, sorted. Sorting (rather than keeping traversal
/// order) makes the result the same from run to run and from filesystem to
/// filesystem.
///
/// A directory named like an audio file is listed as well as scanned.
/// Symlinks are resolved to their targets (a dangling one to the path it
/// names), but symlinked directories are not descended into. Entries that
/// can't be read are logged and skipped.
pub fn scan_directory(dir: &Path) -> Result<Vec<Track>> {
    let mut tracks = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping unreadable entry under {}: {e}", dir.display());
                continue;
            }
        };
        if !is_audio_file(entry.path()) {
            continue;
        }
        match Track::from_scanned_path(entry.path()) {
            Ok(track) => tracks.push(track),
            Err(e) => log::warn!("skipping {}: {e:#}", entry.path().display()),
        }
    }
    tracks.sort();
    Ok(tracks)
}

/// Reads the playlist file at `path`, see `parse_playlist`
pub fn read_playlist(path: &Path) -> Result<Vec<Track>> {
    let file = File::open(path).with_context(|| format!("Can't open file: {}", path.display()))?;
    parse_playlist(file).with_context(|| format!("Error reading file: {}", path.display()))
}

/// Returns the tracks of a playlist in file order. Blank lines and `#` lines
/// are skipped; nothing is sorted or deduplicated.
///
/// A UTF-16 playlist (recognized by its Byte Order Mark) is decoded to UTF-8
/// first, and a UTF-8 Byte Order Mark is dropped.
pub fn parse_playlist(source: impl Read) -> Result<Vec<Track>> {
    let mut reader = BufReader::new(
        DecodeReaderBytesBuilder::new()
            .bom_sniffing(true) // Look at the BOM to detect UTF-16 files and convert to UTF-8
            .strip_bom(true) // Remove the BOM before sending data to us
            .utf8_passthru(true) // Don't enforce UTF-8 (BOM or no BOM)
            .build(source),
    );
    let mut tracks = Vec::new();
    reader.for_byte_line(|line| {
        if let Some(track) = Track::from_playlist_line(&line.to_str_lossy()) {
            tracks.push(track);
        }
        Ok(true)
    })?;
    Ok(tracks)
}
