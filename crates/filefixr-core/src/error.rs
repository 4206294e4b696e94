/// Error types for the rename engine.
///
/// Only configuration problems stop a run from starting. Per-entity rename
/// failures never surface here; they become failed
/// [`RenameRecord`](crate::model::RenameRecord)s instead.
use std::path::PathBuf;
use thiserror::Error;

/// A [`RunConfig`](crate::model::RunConfig) that cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("You must choose a directory to search.")]
    SourceNotSet,

    #[error("({}) does not exist.", .0.display())]
    SourceMissing(PathBuf),

    #[error("({}) is not a directory.", .0.display())]
    SourceNotDirectory(PathBuf),

    #[error("You must choose where to save the log file.")]
    LogDirNotSet,

    #[error("({}) does not exist.", .0.display())]
    LogDirMissing(PathBuf),

    #[error("({}) is not a directory.", .0.display())]
    LogDirNotDirectory(PathBuf),
}

/// Failure to persist the change log at the end of a run.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("could not write log file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
