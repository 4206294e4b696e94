/// Data model for the rename engine.
///
/// Re-exports the entity, record, configuration and summary types.
pub mod config;
pub mod entity;
pub mod record;
pub mod summary;

pub use config::RunConfig;
pub use entity::{Entity, EntityKind};
pub use record::{RecordKind, RenameRecord};
pub use summary::RunSummary;
