//! Writes track lists as extended-M3U playlists.
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::track::Track;

/// The first line of every playlist we write
pub const HEADER: &str = "#EXTM3U";

/// Writes `tracks` to `path` in order, after the `HEADER` line, replacing any
/// existing file. With `relative`, tracks inside the directory that will hold
/// the playlist are written relative to it; others are written as they are.
pub fn write_playlist(path: &Path, tracks: &[Track], relative: bool) -> Result<()> {
    let entries: Vec<Cow<str>> = if relative {
        let base = containing_dir(path)?;
        log::debug!("writing paths relative to {}", base.display());
        relativize(tracks, &base)
    } else {
        tracks.iter().map(|t| Cow::Borrowed(t.as_str())).collect()
    };

    let file = File::create(path)
        .with_context(|| format!("Can't create playlist: {}", path.display()))?;
    output_to(BufWriter::new(file), &entries)
        .with_context(|| format!("Can't write playlist: {}", path.display()))
}

/// Outputs the `HEADER` and then one entry per line, each ending in `\n`
pub fn output_to<S: AsRef<str>>(mut out: impl Write, entries: &[S]) -> io::Result<()> {
    out.write_all(HEADER.as_bytes())?;
    out.write_all(b"\n")?;
    for entry in entries {
        out.write_all(entry.as_ref().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Rewrites each track below `base` as a path relative to `base`. The
/// comparison is by path components, so `/music/abc` is not below `/music/ab`.
/// `base` itself becomes `.`, never an empty line. Tracks not below `base` are
/// borrowed unchanged.
#[must_use]
pub fn relativize<'a>(tracks: &'a [Track], base: &Path) -> Vec<Cow<'a, str>> {
    tracks
        .iter()
        .map(|track| {
            let path: &Path = track.as_ref();
            match path.strip_prefix(base) {
                Ok(rest) if rest.as_os_str().is_empty() => Cow::Borrowed("."),
                Ok(rest) => Cow::Owned(rest.to_string_lossy().into_owned()),
                Err(_) => Cow::Borrowed(track.as_str()),
            }
        })
        .collect()
}

/// The resolved directory a playlist at `path` will be written into
fn containing_dir(path: &Path) -> Result<PathBuf> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    parent
        .canonicalize()
        .with_context(|| format!("Can't resolve directory: {}", parent.display()))
}
