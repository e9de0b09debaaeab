//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::Error;

/// Returns the parsed command line. Usage errors are reported the way `clap`
/// reports its own, and end the process.
#[must_use]
pub fn parsed() -> Args {
    match Args::resolve(CliArgs::parse()) {
        Ok(args) => args,
        Err(e) => CliArgs::command().error(ErrorKind::MissingRequiredArgument, e).exit(),
    }
}

/// The parsed command line
#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    /// What to do
    pub mode: Mode,
    /// The `-o` argument, if given
    pub output: Option<PathBuf>,
    /// Write paths relative to the output file's directory where possible
    pub relative: bool,
}

/// The two things `plset` can do
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    /// Combine two inputs with a set operation
    Calculate {
        /// The set operation requested
        op: OpName,
        /// First operand, a playlist or a directory
        a: PathBuf,
        /// Second operand, a playlist or a directory
        b: PathBuf,
    },
    /// Write a directory's audio files as a playlist
    Build {
        /// The directory to scan
        dir: PathBuf,
    },
}

/// Name of the requested operation
#[derive(PartialEq, Eq, Debug, Clone, Copy, ValueEnum)]
pub enum OpName {
    /// Tracks present in either input
    Union,
    /// Tracks of the first input that are also in the second
    Intersect,
    /// Tracks of the first input that are not in the second
    Diff,
    /// Tracks present in exactly one input
    Xor,
}

impl OpName {
    /// The name used on the command line and in default output names
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OpName::Union => "union",
            OpName::Intersect => "intersect",
            OpName::Diff => "diff",
            OpName::Xor => "xor",
        }
    }
}

impl Args {
    /// Parses `itr` as a command line (the first item is the program name).
    /// Unlike `parsed`, returns errors rather than exiting. `clap` errors are
    /// returned as `Error::Usage`, with `clap`'s message.
    pub fn try_parse_from<I, T>(itr: I) -> Result<Args, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = CliArgs::try_parse_from(itr).map_err(|e| Error::Usage(e.to_string()))?;
        Args::resolve(cli)
    }

    fn resolve(cli: CliArgs) -> Result<Args, Error> {
        let CliArgs { op, a, b, build, output, relative } = cli;
        let mode = match (build, op, a, b) {
            (Some(dir), None, None, None) => Mode::Build { dir },
            (Some(dir), ..) => {
                log::warn!("--build given; ignoring ACTION, A and B");
                Mode::Build { dir }
            }
            (None, Some(op), Some(a), Some(b)) => Mode::Calculate { op, a, b },
            (None, ..) => {
                return Err(Error::Usage("Must provide action and two inputs, or use --build".into()))
            }
        };
        Ok(Args { mode, output, relative })
    }
}

#[derive(Debug, Parser)]
#[command(name = "plset", version, about = "Playlist set algebra")]
/// `CliArgs` contains the command line as `clap` sees it; `Args::resolve`
/// decides which mode it asks for.
struct CliArgs {
    #[arg(value_enum, value_name = "ACTION")]
    /// Set operation
    op: Option<OpName>,
    #[arg(value_name = "A")]
    /// First input: a playlist file or a directory
    a: Option<PathBuf>,
    #[arg(value_name = "B")]
    /// Second input: a playlist file or a directory
    b: Option<PathBuf>,
    #[arg(long, value_name = "DIR")]
    /// Build a playlist from a single directory (ACTION, A and B are then ignored)
    build: Option<PathBuf>,
    #[arg(short, long, value_name = "OUTPUT")]
    /// Output playlist filename (its extension is always .m3u8)
    output: Option<PathBuf>,
    #[arg(long)]
    /// Write paths relative to the output playlist's directory
    relative: bool,
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, Error> {
        Args::try_parse_from(std::iter::once("plset").chain(args.iter().copied()))
    }

    #[test]
    fn the_command_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn set_operation_mode() {
        let args = parse(&["xor", "a.m3u8", "music", "-o", "out", "--relative"]).unwrap();
        assert_eq!(
            args,
            Args {
                mode: Mode::Calculate { op: OpName::Xor, a: "a.m3u8".into(), b: "music".into() },
                output: Some("out".into()),
                relative: true,
            }
        );
    }

    #[test]
    fn every_operation_name_is_accepted() {
        for op in [OpName::Union, OpName::Intersect, OpName::Diff, OpName::Xor] {
            let args = parse(&[op.as_str(), "a", "b"]).unwrap();
            assert!(matches!(args.mode, Mode::Calculate { op: found, .. } if found == op));
        }
    }

    #[test]
    fn build_mode() {
        let args = parse(&["--build", "music"]).unwrap();
        assert_eq!(args, Args { mode: Mode::Build { dir: "music".into() }, output: None, relative: false });
    }

    #[test]
    fn build_takes_precedence_over_positional_arguments() {
        for extra in [&["union", "a", "b"][..], &["union"][..], &["xor", "a"][..]] {
            let mut line = vec!["--build", "music"];
            line.extend_from_slice(extra);
            let args = parse(&line).unwrap();
            assert_eq!(args.mode, Mode::Build { dir: "music".into() }, "for {extra:?}");
        }
    }

    #[test]
    fn incomplete_command_lines_are_usage_errors() {
        for bad in [&[][..], &["union"][..], &["union", "a"][..], &["--relative", "-o", "x"][..]] {
            assert!(matches!(parse(bad), Err(Error::Usage(_))), "for {bad:?}");
        }
    }

    #[test]
    fn unknown_operations_are_usage_errors() {
        assert!(matches!(parse(&["merge", "a", "b"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["single", "a", "b"]), Err(Error::Usage(_))));
    }
}
