/// Host filesystem access used by the renamer and the collision resolver.
///
/// The engine never touches `std::fs` directly for the two operations that
/// decide what a run does: the existence probe and the rename itself. Going
/// through [`HostFs`] lets a dry run swap in an overlay and lets tests
/// inject refusals without needing a read-only mount.
use std::io;
use std::path::Path;

/// The two filesystem operations a run depends on.
pub trait HostFs: Send + Sync {
    /// `true` if something (file, directory or dangling link) occupies `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Rename `from` to `to` within the same directory.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

impl<T: HostFs + ?Sized> HostFs for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).rename(from, to)
    }
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFs;

impl HostFs for StdFs {
    fn exists(&self, path: &Path) -> bool {
        // Do not follow links: a dangling symlink still occupies the name.
        std::fs::symlink_metadata(path).is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists_and_rename() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        std::fs::write(&a, b"hi").unwrap();

        let fs = StdFs;
        assert!(fs.exists(&a));
        assert!(!fs.exists(&b));

        fs.rename(&a, &b).unwrap();
        assert!(!fs.exists(&a));
        assert!(fs.exists(&b));
    }

    #[test]
    fn test_rename_missing_source_errors() {
        let tmp = TempDir::new().unwrap();
        let err = StdFs
            .rename(&tmp.path().join("missing"), &tmp.path().join("x"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
