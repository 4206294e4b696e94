/// FileFixr Core — the rename engine.
///
/// Walks a directory tree and renames files (and optionally directories)
/// whose names contain characters that are unsafe across platforms and
/// filesystems, numbering names that would collide and logging every
/// change. No UI dependencies: any front end supplies a [`RunConfig`] and
/// consumes progress and a [`RunSummary`].
///
/// # Modules
///
/// - [`sanitize`] — pure name sanitizing rules.
/// - [`renamer`] — collision resolution, tree walking, the engine and its
///   background worker.
/// - [`report`] — the timestamped change log.
/// - [`model`] — entities, rename records, configuration and summary.
/// - [`platform`] — the host filesystem seam and the dry-run overlay.
/// - [`error`] — configuration and log errors.
pub mod error;
pub mod model;
pub mod platform;
pub mod renamer;
pub mod report;
pub mod sanitize;

pub use error::{ConfigError, LogError};
pub use model::{RunConfig, RunSummary};
pub use renamer::{start_run, start_run_with, RunHandle};
