//! Directory existence checks.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

/// Why a toolchain directory was left off the search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Missing,
    NotADirectory,
    /// The filesystem could not answer; treated like a missing directory.
    Uninspectable(String),
    /// The path cannot be represented as a search-path entry.
    NotUnicode,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Missing => f.write_str("does not exist"),
            SkipReason::NotADirectory => f.write_str("is not a directory"),
            SkipReason::Uninspectable(detail) => {
                write!(f, "does not exist or cannot be inspected: {detail}")
            }
            SkipReason::NotUnicode => f.write_str("is not valid Unicode"),
        }
    }
}

/// Decides whether a directory may be put on the search path.
pub trait DirectoryProbe {
    fn probe(&self, dir: &Path) -> Result<(), SkipReason>;
}

/// Probe backed by a single `stat` of the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl DirectoryProbe for FsProbe {
    fn probe(&self, dir: &Path) -> Result<(), SkipReason> {
        match std::fs::metadata(dir) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(SkipReason::NotADirectory),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(SkipReason::Missing),
            Err(e) => Err(SkipReason::Uninspectable(e.to_string())),
        }
    }
}

impl<F> DirectoryProbe for F
where
    F: Fn(&Path) -> Result<(), SkipReason>,
{
    fn probe(&self, dir: &Path) -> Result<(), SkipReason> {
        self(dir)
    }
}
