//! The two failure kinds a run can stop with before doing any work. Both are
//! carried inside `anyhow::Error`; use `downcast_ref::<Error>()` to tell them
//! apart from ordinary I/O failures.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal, non-I/O reasons for abandoning a run
#[derive(Error, Debug)]
pub enum Error {
    /// An input path (playlist or directory) does not exist
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    /// The command line doesn't describe a run we can do
    #[error("{0}")]
    Usage(String),
}
