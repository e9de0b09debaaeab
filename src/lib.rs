//! `plset` treats playlists as sets of tracks. The `run` function is the whole
//! pipeline: the `load` module turns each input into a list of tracks, the
//! `operations` module combines two lists, and the `playlist` module writes
//! the result. The `args` module parses the command line.
//!
//! A track is identified by a string (see the `track` module): the resolved
//! path of a file found by scanning a directory, or a line of a playlist file.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

use anyhow::Result;
use std::path::{Path, PathBuf};

pub mod args;
use crate::args::{Args, Mode};
pub mod error;
use crate::error::Error;
pub mod load;
pub mod operations;
pub mod output;
pub mod playlist;
pub(crate) mod set;
pub mod track;

/// What `run` wrote
#[derive(Debug, PartialEq, Eq)]
pub struct Written {
    /// The playlist file
    pub path: PathBuf,
    /// How many tracks it lists
    pub track_count: usize,
}

/// Loads the inputs named in `args`, combines them as asked, and writes the
/// resulting playlist. Every input is checked for existence before anything
/// is written.
pub fn run(args: &Args) -> Result<Written> {
    let tracks = match &args.mode {
        Mode::Calculate { op, a, b } => {
            let a = load::load(a)?;
            let b = load::load(b)?;
            let result = operations::calculate(*op, &a, &b);
            log::debug!("{}: {} + {} tracks in, {} out", op.as_str(), a.len(), b.len(), result.len());
            result
        }
        Mode::Build { dir } => load::scan_directory(existing_dir(dir)?)?,
    };

    let path = output::output_path(args);
    log::debug!("writing {} tracks to {}", tracks.len(), path.display());
    playlist::write_playlist(&path, &tracks, args.relative)?;
    Ok(Written { path, track_count: tracks.len() })
}

fn existing_dir(dir: &Path) -> Result<&Path> {
    if !dir.exists() {
        return Err(Error::NotFound(dir.to_owned()).into());
    }
    if !dir.is_dir() {
        return Err(Error::Usage(format!("--build needs a directory: {}", dir.display())).into());
    }
    Ok(dir)
}
