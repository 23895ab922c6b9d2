//! Diff data structures as delivered by upstream diff sources.

use crate::model::LineKind;
use crate::reconstruct::expand;
use crate::summary::{summarize, ChangesetSummary};
use serde::{Deserialize, Serialize};

/// An ordered collection of file diffs presented together (one commit, one PR).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Changeset {
    /// Base revision label (e.g. the parent commit SHA), if known.
    #[serde(default)]
    pub base: Option<String>,
    /// Head revision label, if known.
    #[serde(default)]
    pub head: Option<String>,
    /// Files in the order they were produced upstream.
    pub files: Vec<FileChange>,
}

impl Changeset {
    /// Create a changeset over the given files.
    pub fn new(files: Vec<FileChange>) -> Self {
        Self {
            base: None,
            head: None,
            files,
        }
    }

    /// Attach base/head revision labels.
    pub fn with_revisions(mut self, base: impl Into<String>, head: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self.head = Some(head.into());
        self
    }

    /// Aggregate totals over all files.
    pub fn summary(&self) -> ChangesetSummary {
        summarize(&self.files)
    }
}

/// A single file's diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileChange {
    /// Current file path (after rename if applicable).
    pub path: String,
    /// Previous file path, set for renames.
    #[serde(default)]
    pub previous_path: Option<String>,
    /// Caller-supplied status; never inferred by the engine.
    pub status: FileStatus,
    /// Declared number of added lines.
    #[serde(default)]
    pub additions: usize,
    /// Declared number of deleted lines.
    #[serde(default)]
    pub deletions: usize,
    /// Change hunks, top to bottom. Empty for binary files and pure renames.
    #[serde(default)]
    pub hunks: Vec<Hunk>,
}

impl FileChange {
    /// Create a modified file with no hunks and zero totals.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            previous_path: None,
            status: FileStatus::Modified,
            additions: 0,
            deletions: 0,
            hunks: Vec::new(),
        }
    }

    /// Set the status.
    pub fn with_status(mut self, status: FileStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the previous path.
    pub fn with_previous_path(mut self, previous_path: impl Into<String>) -> Self {
        self.previous_path = Some(previous_path.into());
        self
    }

    /// Set the declared totals.
    pub fn with_totals(mut self, additions: usize, deletions: usize) -> Self {
        self.additions = additions;
        self.deletions = deletions;
        self
    }

    /// Append a hunk.
    pub fn with_hunk(mut self, hunk: Hunk) -> Self {
        self.hunks.push(hunk);
        self
    }

    /// True when `previous_path` is set and differs from `path`.
    pub fn is_rename(&self) -> bool {
        self.previous_path
            .as_deref()
            .is_some_and(|previous| previous != self.path)
    }

    /// Count additions and deletions from the classified hunk lines.
    ///
    /// The declared `additions`/`deletions` are not touched; callers decide
    /// whether to trust, check or replace them.
    pub fn classified_totals(&self) -> (usize, usize) {
        self.hunks
            .iter()
            .flat_map(expand)
            .fold((0, 0), |(added, deleted), line| match line.kind {
                LineKind::Addition => (added + 1, deleted),
                LineKind::Deletion => (added, deleted + 1),
                LineKind::Context | LineKind::HunkHeader => (added, deleted),
            })
    }
}

/// File status in the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    #[serde(alias = "removed")]
    Deleted,
    Modified,
    Renamed,
}

impl FileStatus {
    /// Get a single-character representation.
    pub fn as_char(&self) -> char {
        match self {
            FileStatus::Added => 'A',
            FileStatus::Deleted => 'D',
            FileStatus::Modified => 'M',
            FileStatus::Renamed => 'R',
        }
    }
}

/// A contiguous region of changes (hunk).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hunk {
    /// Old file starting line.
    pub old_start: u32,
    /// Number of lines in old version.
    pub old_line_count: u32,
    /// New file starting line.
    pub new_start: u32,
    /// Number of lines in new version.
    pub new_line_count: u32,
    /// Raw hunk text: the `@@` header followed by marker-prefixed lines.
    pub body: String,
}

impl Hunk {
    /// Create a hunk from already-parsed ranges and its raw body.
    pub fn new(
        old_start: u32,
        old_line_count: u32,
        new_start: u32,
        new_line_count: u32,
        body: impl Into<String>,
    ) -> Self {
        Self {
            old_start,
            old_line_count,
            new_start,
            new_line_count,
            body: body.into(),
        }
    }

    /// The first `@@` line of the body, if any.
    pub fn header(&self) -> Option<&str> {
        self.body.lines().find(|line| line.starts_with("@@"))
    }
}
