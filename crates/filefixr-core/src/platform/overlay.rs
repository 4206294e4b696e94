/// Dry-run overlay — a [`HostFs`] that records renames instead of doing them.
///
/// Every simulated rename marks its source as vacated and its target as
/// claimed. Later existence probes see that picture, so two files that
/// sanitize to the same name are numbered in a dry run exactly as they
/// would be in a real run, while the real tree is never modified.
use super::HostFs;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Default)]
struct Overlay {
    claimed: HashSet<PathBuf>,
    vacated: HashSet<PathBuf>,
}

pub struct DryRunFs<F: HostFs> {
    inner: F,
    overlay: Mutex<Overlay>,
}

impl<F: HostFs> DryRunFs<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            overlay: Mutex::new(Overlay::default()),
        }
    }
}

impl<F: HostFs> HostFs for DryRunFs<F> {
    fn exists(&self, path: &Path) -> bool {
        let overlay = self.overlay.lock();
        if overlay.claimed.contains(path) {
            return true;
        }
        if overlay.vacated.contains(path) {
            return false;
        }
        self.inner.exists(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let mut overlay = self.overlay.lock();
        overlay.claimed.remove(from);
        overlay.vacated.insert(from.to_path_buf());
        overlay.vacated.remove(to);
        overlay.claimed.insert(to.to_path_buf());
        Ok(())
    }
}
