//! Hunk reconstruction.

use crate::classify::classify;
use crate::model::{ClassifiedLine, Hunk};

/// Expand a hunk into its classified lines, seeded from the hunk's declared
/// start offsets.
///
/// Declared line counts are not checked here; see [`crate::verify`].
pub fn expand(hunk: &Hunk) -> Vec<ClassifiedLine> {
    classify(&hunk.body, hunk.old_start, hunk.new_start)
}

impl Hunk {
    /// Classified lines of this hunk. Same as [`expand`].
    pub fn lines(&self) -> Vec<ClassifiedLine> {
        expand(self)
    }
}
