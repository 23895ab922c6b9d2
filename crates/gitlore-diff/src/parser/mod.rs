//! Patch ingestion: turn raw `git diff` output into [`FileChange`](crate::FileChange)s.

mod unified;

pub use unified::{parse_unified_diff, ParseError};
