//! # Error Handling
//!
//! This module defines the centralized error type for `gradle-mvn-repo`. It
//! uses `thiserror` to describe every failure the scan/write pipeline can hit,
//! each carrying the path involved so the message alone is enough to locate
//! the problem on disk.
//!
//! Errors are never recovered internally. They propagate to the binary, which
//! reports them and exits with a non-zero status. Files already written by the
//! time an error occurs stay on disk.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gradle-mvn-repo operations
#[derive(Error, Debug)]
pub enum Error {
    /// A directory of the gradle cache could not be listed.
    ///
    /// The scanner performs no existence checks, so a malformed cache layout
    /// surfaces here.
    #[error("Failed to scan '{}': {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory in the target repository could not be created.
    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entry could not be copied into the target repository.
    #[error("Failed to copy '{}' to '{}': {source}", src.display(), dst.display())]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target repository could not be removed before generation.
    #[error("Failed to clean '{}': {source}", path.display())]
    Clean {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A path could not be used to build the module-storage pattern.
    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// A path matched by the module-storage pattern could not be read.
    #[error("Glob walk error: {0}")]
    GlobWalk(#[from] glob::GlobError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
