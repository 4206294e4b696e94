/// Tree walking using `jwalk`.
///
/// Two passes over the source tree make up a run:
///
/// 1. [`count_entities`] — a quick count so progress can be shown as a
///    fraction of the total.
/// 2. [`plan`] — the traversal plan, ordered **bottom-up**: every entity
///    appears before the directory that contains it.
///
/// Bottom-up order is what makes renaming safe in a single pass. By the
/// time a directory is renamed, nothing left in the plan lives beneath it,
/// so no planned path is invalidated.
///
/// `jwalk` yields a sorted pre-order (parents first). Reversing that
/// sequence puts each directory after all of its descendants.
use crate::model::{Entity, EntityKind};
use std::path::Path;
use tracing::{debug, warn};

/// Result of the counting pre-pass. The root itself is not counted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkCount {
    pub files: u64,
    pub dirs: u64,
    pub errors: u64,
}

impl WalkCount {
    /// Entities the run will visit: files, plus directories if they are
    /// being renamed too.
    pub fn total(&self, include_subdirectories: bool) -> u64 {
        if include_subdirectories {
            self.files + self.dirs
        } else {
            self.files
        }
    }
}

/// The ordered entities to process for one run.
#[derive(Debug, Default)]
pub struct Plan {
    pub entities: Vec<Entity>,
    /// Directory entries that could not be read.
    pub errors: u64,
}

/// Configure a walker below `root` with the root itself skipped.
///
/// Links are not followed, hidden entries are included, and siblings are
/// sorted so the plan is deterministic.
fn walker(root: &Path) -> jwalk::WalkDir {
    jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .min_depth(1)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus::get()))
}

/// Count files and directories below `root`.
pub fn count_entities(root: &Path) -> WalkCount {
    let mut count = WalkCount::default();
    for entry_result in walker(root) {
        match entry_result {
            Ok(entry) => {
                if entry.file_type().is_dir() {
                    count.dirs += 1;
                } else {
                    count.files += 1;
                }
            }
            Err(err) => {
                count.errors += 1;
                debug!("Count pass skipped an entry: {err}");
            }
        }
    }
    count
}

/// Build the bottom-up traversal plan.
///
/// Directories are only included when `include_subdirectories` is set;
/// files are included at every depth either way.
pub fn plan(root: &Path, include_subdirectories: bool) -> Plan {
    let mut plan = Plan::default();

    for entry_result in walker(root) {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                plan.errors += 1;
                let err_path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                warn!("Could not read {err_path}: {err}");
                continue;
            }
        };

        let kind = if entry.file_type().is_dir() {
            if !include_subdirectories {
                continue;
            }
            EntityKind::Directory
        } else {
            EntityKind::File
        };
        plan.entities.push(Entity::new(entry.path(), kind));
    }

    plan.entities.reverse();
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// ```text
    /// root/
    ///   a/
    ///     b/
    ///       deep.txt
    ///     mid.txt
    ///   top.txt
    /// ```
    fn build(root: &Path) {
        fs::create_dir_all(root.join("a").join("b")).unwrap();
        fs::write(root.join("a").join("b").join("deep.txt"), b"1").unwrap();
        fs::write(root.join("a").join("mid.txt"), b"2").unwrap();
        fs::write(root.join("top.txt"), b"3").unwrap();
    }

    #[test]
    fn test_count_excludes_root() {
        let tmp = TempDir::new().unwrap();
        build(tmp.path());
        let count = count_entities(tmp.path());
        assert_eq!(count.files, 3);
        assert_eq!(count.dirs, 2);
        assert_eq!(count.total(true), 5);
        assert_eq!(count.total(false), 3);
    }

    #[test]
    fn test_count_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(count_entities(tmp.path()), WalkCount::default());
    }

    #[test]
    fn test_plan_is_bottom_up() {
        let tmp = TempDir::new().unwrap();
        build(tmp.path());
        let plan = plan(tmp.path(), true);
        assert_eq!(plan.entities.len(), 5);

        let position = |p: &Path| {
            plan.entities
                .iter()
                .position(|e| e.path == p)
                .unwrap_or_else(|| panic!("{} missing from plan", p.display()))
        };
        let a = tmp.path().join("a");
        let b = a.join("b");
        assert!(position(&b.join("deep.txt")) < position(&b));
        assert!(position(&b) < position(&a));
        assert!(position(&a.join("mid.txt")) < position(&a));
    }

    #[test]
    fn test_plan_without_directories_keeps_nested_files() {
        let tmp = TempDir::new().unwrap();
        build(tmp.path());
        let plan = plan(tmp.path(), false);
        assert_eq!(plan.entities.len(), 3);
        assert!(plan.entities.iter().all(|e| e.kind == EntityKind::File));
        assert!(plan
            .entities
            .iter()
            .any(|e| e.path == tmp.path().join("a").join("b").join("deep.txt")));
    }
}
