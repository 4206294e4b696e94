/// Persisted front-end settings.
///
/// Remembers the last source directory, log directory and checkbox state
/// between launches. Stored as JSON in the per-user config directory:
///
/// - Linux: `~/.config/FileFixr/settings.json`
/// - macOS: `~/Library/Application Support/FileFixr/settings.json`
/// - Windows: `%APPDATA%\FileFixr\settings.json`
///
/// A missing or unreadable file is not an error: defaults are used and a
/// warning is logged.
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "FileFixr";
const FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source_dir: String,
    pub log_dir: String,
    pub include_subdirectories: bool,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_dir: String::new(),
            log_dir: String::new(),
            include_subdirectories: false,
            dark_mode: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("Could not read settings {}: {e}", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    "Ignoring malformed settings {}: {e} -- using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Write settings to `path`, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

/// Default location of the settings file, if a config directory is known.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let s = Settings::load(&tmp.path().join("nope.json"));
        assert_eq!(s, Settings::default());
        assert!(s.dark_mode);
    }

    #[test]
    fn test_save_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join(FILE_NAME);
        let s = Settings {
            source_dir: "/data/in".into(),
            log_dir: "/data/logs".into(),
            include_subdirectories: true,
            dark_mode: false,
        };
        s.save(&path).unwrap();
        assert_eq!(Settings::load(&path), s);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(FILE_NAME);
        std::fs::write(&path, r#"{ "log_dir": "/logs" }"#).unwrap();
        let s = Settings::load(&path);
        assert_eq!(s.log_dir, "/logs");
        assert!(s.dark_mode);
        assert!(!s.include_subdirectories);
    }

    #[test]
    fn test_default_path_ends_in_app_dir() {
        if let Some(path) = default_path() {
            assert!(path.ends_with(Path::new(APP_DIR).join(FILE_NAME)));
        }
    }
}
