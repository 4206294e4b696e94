/// Aggregate result of a finished run.
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Files renamed (or, in a dry run, that would be renamed).
    pub files_changed: u64,
    /// Directories renamed (or that would be renamed).
    pub dirs_changed: u64,
    /// Entities whose rename was refused.
    pub failed: u64,
    /// Entities counted in the pre-pass; the denominator of the progress.
    pub total_entities: u64,
    /// Directory entries that could not be read during the walk.
    pub walk_errors: u64,
    pub dry_run: bool,
    /// Where the change log lives. Named at run start even if nothing was
    /// written.
    pub log_path: PathBuf,
    /// `false` when no record was produced (no log is created then) or the
    /// write failed.
    pub log_written: bool,
    pub log_error: Option<String>,
    pub duration: Duration,
}

/// The user-facing one-liner shown when a run finishes.
impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.dry_run { "Would change" } else { "Changed" };
        write!(
            f,
            "{verb} {} filenames and {} directories",
            self.files_changed, self.dirs_changed
        )?;
        if self.failed > 0 {
            write!(f, " ({} failed)", self.failed)?;
        }
        Ok(())
    }
}
