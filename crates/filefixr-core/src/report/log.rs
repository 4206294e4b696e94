/// Change log — one human-readable line per changed or failed entity.
///
/// The file name embeds the run's start time and whether it was a dry run,
/// e.g. `dry_run_rename-20240131-174502.txt`. Writes are append-only and
/// happen once per run; nothing here ever reads a log back.
use crate::error::LogError;
use crate::model::RenameRecord;
use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Timestamp format used in log file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Run mode, as encoded in the log file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogMode {
    DryRun,
    Apply,
}

impl LogMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            Self::DryRun
        } else {
            Self::Apply
        }
    }

    /// File-name prefix for this mode.
    pub fn tag(self) -> &'static str {
        match self {
            Self::DryRun => "dry_run_rename",
            Self::Apply => "renamed_files_directories",
        }
    }
}

/// `<log_dir>/<mode>-<YYYYMMDD-HHMMSS>.txt`
pub fn log_file_path(log_dir: &Path, mode: LogMode, started: DateTime<Local>) -> PathBuf {
    log_dir.join(format!(
        "{}-{}.txt",
        mode.tag(),
        started.format(TIMESTAMP_FORMAT)
    ))
}

/// Render records as log text, one newline-terminated line each.
pub fn format_records(records: &[RenameRecord]) -> String {
    let mut text = String::with_capacity(records.len() * 64);
    for record in records {
        text.push_str(&record.to_string());
        text.push('\n');
    }
    text
}

/// Append all records to `path` in a single write.
///
/// Returns `Ok(false)` without touching the filesystem when `records` is
/// empty.
pub fn write_log(path: &Path, records: &[RenameRecord]) -> Result<bool, LogError> {
    if records.is_empty() {
        return Ok(false);
    }

    let text = format_records(records);
    let wrap = |source| LogError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(wrap)?;
    file.write_all(text.as_bytes()).map_err(wrap)?;
    file.flush().map_err(wrap)?;
    Ok(true)
}
