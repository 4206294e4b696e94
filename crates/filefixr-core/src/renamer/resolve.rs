/// Collision resolver — turns a desired destination into one that is free.
///
/// `name.txt` is tried first, then `name_1.txt`, `name_2.txt` and so on.
/// Each probe is a single existence check. The search has no upper bound:
/// a directory would need every suffix taken for it to keep going.
///
/// This is check-then-use. If something else creates the chosen path
/// between the probe and the rename, the rename fails and is recorded like
/// any other refusal; nothing is retried.
use crate::platform::HostFs;
use crate::sanitize::split_extension;
use std::path::{Path, PathBuf};

/// Return `desired` if nothing occupies it, otherwise the first free
/// `base_N.ext` sibling.
pub fn resolve(fs: &dyn HostFs, desired: &Path) -> PathBuf {
    if !fs.exists(desired) {
        return desired.to_path_buf();
    }

    let name = desired
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (base, extension) = split_extension(&name);
    let parent = desired.parent().unwrap_or_else(|| Path::new(""));

    let mut n: u64 = 1;
    loop {
        let candidate = parent.join(format!("{base}_{n}{extension}"));
        if !fs.exists(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::StdFs;
    use std::collections::HashSet;
    use std::io;
    use tempfile::TempDir;

    /// In-memory filesystem holding a fixed set of occupied paths.
    struct Occupied(HashSet<PathBuf>);

    impl HostFs for Occupied {
        fn exists(&self, path: &Path) -> bool {
            self.0.contains(path)
        }

        fn rename(&self, _from: &Path, _to: &Path) -> io::Result<()> {
            unreachable!("the resolver never renames")
        }
    }

    #[test]
    fn test_free_path_returned_unchanged() {
        let tmp = TempDir::new().unwrap();
        let desired = tmp.path().join("clean.txt");
        assert_eq!(resolve(&StdFs, &desired), desired);
    }

    #[test]
    fn test_existing_path_gets_suffix() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("clean.txt"), b"x").unwrap();
        let got = resolve(&StdFs, &tmp.path().join("clean.txt"));
        assert_eq!(got, tmp.path().join("clean_1.txt"));
    }

    #[test]
    fn test_suffix_skips_taken_numbers() {
        let tmp = TempDir::new().unwrap();
        for name in ["clean.txt", "clean_1.txt", "clean_2.txt"] {
            std::fs::write(tmp.path().join(name), b"x").unwrap();
        }
        let got = resolve(&StdFs, &tmp.path().join("clean.txt"));
        assert_eq!(got, tmp.path().join("clean_3.txt"));
    }

    #[test]
    fn test_name_without_extension() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("photos")).unwrap();
        let got = resolve(&StdFs, &tmp.path().join("photos"));
        assert_eq!(got, tmp.path().join("photos_1"));
    }

    #[test]
    fn test_leading_dot_name_suffix_goes_at_end() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(".env"), b"x").unwrap();
        let got = resolve(&StdFs, &tmp.path().join(".env"));
        assert_eq!(got, tmp.path().join(".env_1"));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.md"), b"x").unwrap();
        let desired = tmp.path().join("a.md");
        let first = resolve(&StdFs, &desired);
        let second = resolve(&StdFs, &desired);
        assert_eq!(first, second);
        assert!(!first.exists());
    }

    #[test]
    fn test_thousand_collisions() {
        let dir = PathBuf::from("/data");
        let mut taken: HashSet<PathBuf> = HashSet::new();
        taken.insert(dir.join("report.pdf"));
        for n in 1..1_000 {
            taken.insert(dir.join(format!("report_{n}.pdf")));
        }
        let fs = Occupied(taken);
        let got = resolve(&fs, &dir.join("report.pdf"));
        assert_eq!(got, dir.join("report_1000.pdf"));
        assert!(!fs.exists(&got));
    }
}
