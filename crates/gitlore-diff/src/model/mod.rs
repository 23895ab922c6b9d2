//! Data models for diff representation.

mod change;
mod line;

pub use change::{Changeset, FileChange, FileStatus, Hunk};
pub use line::{ClassifiedLine, LineKind};
