/// Platform layer — the filesystem operations the engine performs, behind a
/// trait so dry runs and tests can substitute their own implementation.

pub mod fs;
pub mod overlay;

pub use fs::{HostFs, StdFs};
pub use overlay::DryRunFs;
