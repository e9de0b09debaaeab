//! The `Track` type: the string we compare when deciding whether two playlist
//! entries are the same track.
//!
//! A track scanned from a directory is its canonical absolute path; a track
//! read from a playlist is the trimmed line, taken verbatim. The two are never
//! reconciled with each other, so `/music/a.mp3` from a scan and `a.mp3` from a
//! playlist are different tracks.

use anyhow::{Context, Result};
use std::borrow::Borrow;
use std::path::{Component, Path, PathBuf};
use std::{env, fmt, fs, io};

/// How many dangling symlinks `resolve_leniently` will follow in a row
const MAX_LINK_HOPS: u32 = 40;

/// A canonical track identifier. Equality, hashing and ordering are those of
/// the underlying string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Track(String);

impl Track {
    /// The canonical form of a path found by a directory scan: absolute, with
    /// symlinks and `.`/`..` components resolved. A path that doesn't fully
    /// exist (say, a symlink to a deleted file) is resolved as far as it can be
    /// rather than rejected. Fails only if the current directory is needed and
    /// unavailable.
    pub fn from_scanned_path(path: &Path) -> Result<Track> {
        let resolved = resolve_leniently(path, MAX_LINK_HOPS)
            .with_context(|| format!("Can't resolve path: {}", path.display()))?;
        Ok(Track(resolved.to_string_lossy().into_owned()))
    }

    /// The track named by one line of a playlist file, or `None` if the line is
    /// blank or a `#` comment (which includes `#EXTM3U` and `#EXTINF` lines).
    #[must_use]
    pub fn from_playlist_line(line: &str) -> Option<Track> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            None
        } else {
            Some(Track(line.to_owned()))
        }
    }

    /// The identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Track {
    fn from(s: &str) -> Self {
        Track(s.to_owned())
    }
}

impl From<String> for Track {
    fn from(s: String) -> Self {
        Track(s)
    }
}

impl AsRef<str> for Track {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for Track {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl Borrow<str> for Track {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Like `Path::canonicalize`, but a missing tail is kept instead of being an
/// error. The longest existing prefix is canonicalized, and dangling symlinks
/// in the tail are followed (up to `hops` of them) to the path they name.
fn resolve_leniently(path: &Path, hops: u32) -> io::Result<PathBuf> {
    if let Ok(resolved) = path.canonicalize() {
        return Ok(resolved);
    }
    let absolute = if path.is_absolute() { path.to_owned() } else { env::current_dir()?.join(path) };
    let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) else {
        // Ends in `..`, or is a root
        let normal = normalized(&absolute);
        return if normal == absolute { Ok(normal) } else { resolve_leniently(&normal, hops) };
    };
    let parent = resolve_leniently(parent, hops)?;
    let joined = parent.join(name);
    match fs::read_link(&joined) {
        Ok(target) if hops > 0 => resolve_leniently(&normalized(&parent.join(target)), hops - 1),
        _ => Ok(joined),
    }
}

/// Drops `.` components and folds `..` into the component before it
fn normalized(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other),
        }
    }
    result
}
