//! Optional count cross-checks.
//!
//! The engine trusts declared counts and totals. These checks compare them
//! with what the hunk bodies actually contain, for callers that want to flag
//! or correct inconsistent upstream data.

use crate::model::{FileChange, Hunk, LineKind};
use crate::reconstruct::expand;
use std::fmt;
use thiserror::Error;

/// Which side of the diff a count refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => f.write_str("old"),
            Side::New => f.write_str("new"),
        }
    }
}

/// A declared count that disagrees with the classified lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountMismatch {
    #[error("Hunk at -{old_start} +{new_start} declares {declared} {side} lines but has {classified}")]
    HunkLines {
        old_start: u32,
        new_start: u32,
        side: Side,
        declared: u32,
        classified: u32,
    },

    #[error("{path} declares {declared} additions but hunks contain {classified}")]
    Additions {
        path: String,
        declared: usize,
        classified: usize,
    },

    #[error("{path} declares {declared} deletions but hunks contain {classified}")]
    Deletions {
        path: String,
        declared: usize,
        classified: usize,
    },
}

/// Check that a hunk's declared line counts match its body.
///
/// `Context + Deletion` must equal `old_line_count` and `Context + Addition`
/// must equal `new_line_count`. The old side is checked first.
pub fn verify_hunk(hunk: &Hunk) -> Result<(), CountMismatch> {
    let (old, new) = expand(hunk)
        .iter()
        .fold((0u32, 0u32), |(old, new), line| match line.kind {
            LineKind::Context => (old + 1, new + 1),
            LineKind::Deletion => (old + 1, new),
            LineKind::Addition => (old, new + 1),
            LineKind::HunkHeader => (old, new),
        });

    let mismatch = |side, declared, classified| CountMismatch::HunkLines {
        old_start: hunk.old_start,
        new_start: hunk.new_start,
        side,
        declared,
        classified,
    };

    if old != hunk.old_line_count {
        return Err(mismatch(Side::Old, hunk.old_line_count, old));
    }
    if new != hunk.new_line_count {
        return Err(mismatch(Side::New, hunk.new_line_count, new));
    }
    Ok(())
}

/// Check every hunk of a file, then its declared addition/deletion totals.
pub fn verify_file(file: &FileChange) -> Result<(), CountMismatch> {
    for hunk in &file.hunks {
        verify_hunk(hunk)?;
    }

    let (additions, deletions) = file.classified_totals();
    if additions != file.additions {
        return Err(CountMismatch::Additions {
            path: file.path.clone(),
            declared: file.additions,
            classified: additions,
        });
    }
    if deletions != file.deletions {
        return Err(CountMismatch::Deletions {
            path: file.path.clone(),
            declared: file.deletions,
            classified: deletions,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_well_formed_hunks_match_counts() {
        let hunks = [
            Hunk::new(1, 2, 1, 3, "@@ -1,2 +1,3 @@\n line1\n+line2\n line3"),
            Hunk::new(5, 1, 5, 0, "@@ -5,1 +5,0 @@\n-removed"),
            Hunk::new(0, 0, 1, 2, "@@ -0,0 +1,2 @@\n+a\n+b\n\\ No newline at end of file"),
            Hunk::new(3, 3, 3, 3, "@@ -3,3 +3,3 @@\n a\n\n-b\n+c"),
        ];

        for hunk in &hunks {
            assert_eq!(verify_hunk(hunk), Ok(()), "{}", hunk.body);
        }
    }

    #[test]
    fn test_mismatched_hunk_is_reported_not_fixed() {
        let hunk = Hunk::new(1, 9, 1, 9, "@@ -1,9 +1,9 @@\n same\n+added");

        assert_eq!(
            verify_hunk(&hunk),
            Err(CountMismatch::HunkLines {
                old_start: 1,
                new_start: 1,
                side: Side::Old,
                declared: 9,
                classified: 1,
            })
        );
        // Classification is unaffected by the mismatch
        assert_eq!(expand(&hunk).len(), 3);
    }

    #[test]
    fn test_new_side_mismatch() {
        let hunk = Hunk::new(1, 1, 1, 1, "@@ -1 +1 @@\n same\n+extra");
        let err = verify_hunk(&hunk).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Hunk at -1 +1 declares 1 new lines but has 2"
        );
    }

    #[test]
    fn test_verify_file_totals() {
        let hunk = Hunk::new(1, 1, 1, 2, "@@ -1 +1,2 @@\n keep\n+add");
        let good = FileChange::new("a.rs").with_totals(1, 0).with_hunk(hunk.clone());
        assert_eq!(verify_file(&good), Ok(()));

        let bad = FileChange::new("a.rs").with_totals(4, 0).with_hunk(hunk.clone());
        assert_eq!(
            verify_file(&bad),
            Err(CountMismatch::Additions {
                path: "a.rs".to_string(),
                declared: 4,
                classified: 1,
            })
        );

        let bad = FileChange::new("a.rs").with_totals(1, 2).with_hunk(hunk);
        assert!(matches!(
            verify_file(&bad),
            Err(CountMismatch::Deletions { declared: 2, .. })
        ));
    }

    #[test]
    fn test_verify_file_without_hunks() {
        let file = FileChange::new("logo.png");
        assert_eq!(verify_file(&file), Ok(()));

        // A binary file with declared totals has nothing to back them up
        let file = FileChange::new("logo.png").with_totals(0, 3);
        assert!(verify_file(&file).is_err());
    }
}
