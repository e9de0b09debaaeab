//! Where the playlist gets written
use std::path::{Path, PathBuf};

use crate::args::{Args, Mode};

/// Every playlist we write gets this extension
pub const EXTENSION: &str = "m3u8";

/// The path to write to: the `-o` argument if there was one, otherwise a name
/// derived from the inputs. Either way the extension is forced to `.m3u8`.
#[must_use]
pub fn output_path(args: &Args) -> PathBuf {
    match &args.output {
        Some(output) => with_m3u8_extension(output),
        None => default_output_name(&args.mode),
    }
}

/// * `union A.m3u8 B` writes to `A_union_B.m3u8`
/// * `--build Music` writes to `Music.m3u8`
#[must_use]
pub fn default_output_name(mode: &Mode) -> PathBuf {
    let name = match mode {
        Mode::Calculate { op, a, b } => format!("{}_{}_{}", stem(a), op.as_str(), stem(b)),
        Mode::Build { dir } => stem(dir),
    };
    with_m3u8_extension(Path::new(&name))
}

/// Replaces the extension of `path` (if any) with `.m3u8`
#[must_use]
pub fn with_m3u8_extension(path: &Path) -> PathBuf {
    path.with_extension(EXTENSION)
}

/// The file name of `path` without its extension. Paths like `.` or `..`
/// have no name of their own, so we use the name of what they resolve to.
fn stem(path: &Path) -> String {
    let resolved;
    let stem = match path.file_stem() {
        Some(stem) => stem,
        None => {
            resolved = path.canonicalize().unwrap_or_default();
            resolved.file_stem().unwrap_or_else(|| "playlist".as_ref())
        }
    };
    stem.to_string_lossy().into_owned()
}
