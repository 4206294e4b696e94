/// The outcome of processing a single entity whose name needed changing.
///
/// Records are immutable once created. The renamer produces them, the
/// reporter turns them into log lines and the front end lists them.
use super::EntityKind;
use compact_str::CompactString;
use std::fmt;

/// What happened to the entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// The rename was performed on disk.
    Applied,
    /// Dry run: the rename would have been performed.
    Simulated,
    /// The host refused the rename (or no valid target name exists).
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    pub original_name: CompactString,
    pub final_name: CompactString,
    pub entity_kind: EntityKind,
    pub kind: RecordKind,
    /// Present only when `kind == Failed`.
    pub error_detail: Option<String>,
}

impl RenameRecord {
    pub fn applied(original: &str, final_name: &str, entity_kind: EntityKind) -> Self {
        Self::new(original, final_name, entity_kind, RecordKind::Applied, None)
    }

    pub fn simulated(original: &str, final_name: &str, entity_kind: EntityKind) -> Self {
        Self::new(original, final_name, entity_kind, RecordKind::Simulated, None)
    }

    pub fn failed(
        original: &str,
        final_name: &str,
        entity_kind: EntityKind,
        detail: impl Into<String>,
    ) -> Self {
        Self::new(
            original,
            final_name,
            entity_kind,
            RecordKind::Failed,
            Some(detail.into()),
        )
    }

    fn new(
        original: &str,
        final_name: &str,
        entity_kind: EntityKind,
        kind: RecordKind,
        error_detail: Option<String>,
    ) -> Self {
        Self {
            original_name: CompactString::new(original),
            final_name: CompactString::new(final_name),
            entity_kind,
            kind,
            error_detail,
        }
    }

    /// `true` for applied and simulated records.
    #[inline]
    pub fn is_change(&self) -> bool {
        self.kind != RecordKind::Failed
    }
}

/// Formats the record as its change-log line (without the newline).
impl fmt::Display for RenameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RecordKind::Applied => write!(
                f,
                "'{}' was renamed to '{}'",
                self.original_name, self.final_name
            ),
            RecordKind::Simulated => write!(
                f,
                "'{}' would be renamed to '{}'",
                self.original_name, self.final_name
            ),
            RecordKind::Failed => write!(
                f,
                "ERROR: Could not rename '{}' to '{}': {}",
                self.original_name,
                self.final_name,
                self.error_detail.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applied_line() {
        let r = RenameRecord::applied("cle?an.txt", "clean_1.txt", EntityKind::File);
        assert_eq!(r.to_string(), "'cle?an.txt' was renamed to 'clean_1.txt'");
        assert!(r.is_change());
    }

    #[test]
    fn test_simulated_line() {
        let r = RenameRecord::simulated("a:b", "a-b", EntityKind::Directory);
        assert_eq!(r.to_string(), "'a:b' would be renamed to 'a-b'");
    }

    #[test]
    fn test_failed_line() {
        let r = RenameRecord::failed("x?.txt", "x.txt", EntityKind::File, "Permission denied");
        assert_eq!(
            r.to_string(),
            "ERROR: Could not rename 'x?.txt' to 'x.txt': Permission denied"
        );
        assert!(!r.is_change());
        assert_eq!(r.error_detail.as_deref(), Some("Permission denied"));
    }
}
