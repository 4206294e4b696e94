/// Reporting — the persisted change log.
///
/// Live progress is reported by [`crate::renamer::progress`]; this module
/// owns what is left on disk after a run.
pub mod log;

pub use log::{format_records, log_file_path, write_log, LogMode};
