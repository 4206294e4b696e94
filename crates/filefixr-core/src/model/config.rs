/// Run configuration — the immutable input bundle for one rename run.
///
/// Built through [`RunConfig::new`], which validates every path up front so
/// that a bad value never gets as far as starting the worker thread.
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    source_dir: PathBuf,
    log_dir: PathBuf,
    include_subdirectories: bool,
    dry_run: bool,
}

impl RunConfig {
    /// Validate and build a configuration.
    ///
    /// Both directories must be non-empty paths to existing directories.
    pub fn new(
        source_dir: impl Into<PathBuf>,
        log_dir: impl Into<PathBuf>,
        include_subdirectories: bool,
        dry_run: bool,
    ) -> Result<Self, ConfigError> {
        let source_dir = source_dir.into();
        let log_dir = log_dir.into();

        if source_dir.as_os_str().is_empty() {
            return Err(ConfigError::SourceNotSet);
        }
        if !source_dir.exists() {
            return Err(ConfigError::SourceMissing(source_dir));
        }
        if !source_dir.is_dir() {
            return Err(ConfigError::SourceNotDirectory(source_dir));
        }

        if log_dir.as_os_str().is_empty() {
            return Err(ConfigError::LogDirNotSet);
        }
        if !log_dir.exists() {
            return Err(ConfigError::LogDirMissing(log_dir));
        }
        if !log_dir.is_dir() {
            return Err(ConfigError::LogDirNotDirectory(log_dir));
        }

        Ok(Self {
            source_dir,
            log_dir,
            include_subdirectories,
            dry_run,
        })
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Whether directories are renamed as well as files.
    pub fn include_subdirectories(&self) -> bool {
        self.include_subdirectories
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_valid_config() {
        let src = TempDir::new().unwrap();
        let logs = TempDir::new().unwrap();
        let cfg = RunConfig::new(src.path(), logs.path(), true, false).unwrap();
        assert_eq!(cfg.source_dir(), src.path());
        assert_eq!(cfg.log_dir(), logs.path());
        assert!(cfg.include_subdirectories());
        assert!(!cfg.dry_run());
    }

    #[test]
    fn test_empty_log_dir_rejected() {
        let src = TempDir::new().unwrap();
        let err = RunConfig::new(src.path(), "", false, true).unwrap_err();
        assert_eq!(err, ConfigError::LogDirNotSet);
        assert_eq!(err.to_string(), "You must choose where to save the log file.");
    }

    #[test]
    fn test_missing_log_dir_rejected() {
        let src = TempDir::new().unwrap();
        let missing = src.path().join("nope");
        let err = RunConfig::new(src.path(), &missing, false, true).unwrap_err();
        assert_eq!(err, ConfigError::LogDirMissing(missing));
    }

    #[test]
    fn test_log_path_that_is_a_file_rejected() {
        let src = TempDir::new().unwrap();
        let file = src.path().join("log.txt");
        std::fs::write(&file, b"x").unwrap();
        let err = RunConfig::new(src.path(), &file, false, true).unwrap_err();
        assert_eq!(err, ConfigError::LogDirNotDirectory(file.clone()));
        assert!(err.to_string().ends_with("is not a directory."));
    }

    #[test]
    fn test_source_checks() {
        let logs = TempDir::new().unwrap();
        assert_eq!(
            RunConfig::new("", logs.path(), false, false).unwrap_err(),
            ConfigError::SourceNotSet
        );

        let missing = logs.path().join("gone");
        assert_eq!(
            RunConfig::new(&missing, logs.path(), false, false).unwrap_err(),
            ConfigError::SourceMissing(missing)
        );

        let file = logs.path().join("file.bin");
        std::fs::write(&file, b"x").unwrap();
        assert_eq!(
            RunConfig::new(&file, logs.path(), false, false).unwrap_err(),
            ConfigError::SourceNotDirectory(file)
        );
    }
}
