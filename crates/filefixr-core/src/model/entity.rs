/// A file or directory discovered while walking the source tree.
use compact_str::CompactString;
use std::path::PathBuf;

/// Whether an entity is a file or a directory.
///
/// Symlinks are never followed; a link is treated as a file regardless of
/// what it points to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    File,
    Directory,
}

impl EntityKind {
    /// Lower-case noun for log messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

/// One node of the traversal plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Full path at the time of discovery.
    pub path: PathBuf,
    /// Last path segment, lossily decoded. Sanitizing a lossy name is safe
    /// because the replacement character is outside the allow-list.
    pub name: CompactString,
    pub kind: EntityKind,
}

impl Entity {
    /// Build an entity from its path, taking the name from the last segment.
    pub fn new(path: PathBuf, kind: EntityKind) -> Self {
        let name = path
            .file_name()
            .map(|n| CompactString::new(n.to_string_lossy()))
            .unwrap_or_default();
        Self { path, name, kind }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntityKind::Directory
    }
}
