//! Changeset-level totals.

use crate::model::FileChange;
use serde::Serialize;
use std::iter::Sum;
use std::ops::Add;

/// Aggregate counts over an ordered list of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangesetSummary {
    pub file_count: usize,
    pub total_additions: usize,
    pub total_deletions: usize,
}

impl ChangesetSummary {
    /// Summary of a single file (uses the declared totals).
    pub fn of_file(file: &FileChange) -> Self {
        Self {
            file_count: 1,
            total_additions: file.additions,
            total_deletions: file.deletions,
        }
    }

    /// Field-wise sum of two summaries.
    pub fn combine(self, other: Self) -> Self {
        Self {
            file_count: self.file_count + other.file_count,
            total_additions: self.total_additions + other.total_additions,
            total_deletions: self.total_deletions + other.total_deletions,
        }
    }
}

impl Add for ChangesetSummary {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.combine(other)
    }
}

impl Sum for ChangesetSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::combine)
    }
}

/// Count files and sum their declared additions/deletions.
///
/// Nothing is grouped, filtered or sorted.
pub fn summarize(files: &[FileChange]) -> ChangesetSummary {
    files.iter().map(ChangesetSummary::of_file).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn files(totals: &[(usize, usize)]) -> Vec<FileChange> {
        totals
            .iter()
            .enumerate()
            .map(|(i, &(a, d))| FileChange::new(format!("file{}.rs", i)).with_totals(a, d))
            .collect()
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(
            summarize(&[]),
            ChangesetSummary {
                file_count: 0,
                total_additions: 0,
                total_deletions: 0
            }
        );
    }

    #[test]
    fn test_summarize_two_files() {
        let summary = summarize(&files(&[(3, 1), (0, 5)]));
        assert_eq!(
            summary,
            ChangesetSummary {
                file_count: 2,
                total_additions: 3,
                total_deletions: 6
            }
        );
    }

    #[test]
    fn test_summarize_trusts_declared_totals() {
        // Declared totals win even when they disagree with the hunks
        let file = FileChange::new("a.rs").with_totals(10, 0).with_hunk(
            crate::model::Hunk::new(1, 0, 1, 1, "@@ -0,0 +1 @@\n+one"),
        );
        assert_eq!(summarize(&[file]).total_additions, 10);
    }

    #[test]
    fn test_summarize_is_associative() {
        let left = files(&[(3, 1), (0, 5), (7, 7)]);
        let right = files(&[(1, 0), (12, 4)]);
        let all: Vec<FileChange> = left.iter().chain(right.iter()).cloned().collect();

        assert_eq!(summarize(&all), summarize(&left) + summarize(&right));

        // Any split point gives the same result
        for split in 0..=all.len() {
            let (a, b) = all.split_at(split);
            assert_eq!(summarize(&all), summarize(a).combine(summarize(b)));
        }
    }

    #[test]
    fn test_default_is_identity() {
        let summary = summarize(&files(&[(2, 2)]));
        assert_eq!(summary + ChangesetSummary::default(), summary);
        assert_eq!(ChangesetSummary::default() + summary, summary);
    }

    #[test]
    fn test_serialize_summary() {
        let summary = summarize(&files(&[(3, 1)]));
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "fileCount": 1, "totalAdditions": 3, "totalDeletions": 1 })
        );
    }
}
