//! Classified hunk lines.

use serde::Serialize;

/// A single line of a hunk, tagged with its kind and line numbers.
///
/// Derived on demand from a hunk body; never stored upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedLine {
    /// Line type.
    pub kind: LineKind,
    /// Line content without its diff marker; the raw text for hunk headers.
    pub text: String,
    /// Line number in old file (for Context and Deletion).
    pub old_line_number: Option<u32>,
    /// Line number in new file (for Context and Addition).
    pub new_line_number: Option<u32>,
}

impl ClassifiedLine {
    /// Create a hunk header line.
    pub fn header(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::HunkHeader,
            text: text.into(),
            old_line_number: None,
            new_line_number: None,
        }
    }

    /// Create a new context line.
    pub fn context(text: impl Into<String>, old_line: u32, new_line: u32) -> Self {
        Self {
            kind: LineKind::Context,
            text: text.into(),
            old_line_number: Some(old_line),
            new_line_number: Some(new_line),
        }
    }

    /// Create a new addition line.
    pub fn addition(text: impl Into<String>, new_line: u32) -> Self {
        Self {
            kind: LineKind::Addition,
            text: text.into(),
            old_line_number: None,
            new_line_number: Some(new_line),
        }
    }

    /// Create a new deletion line.
    pub fn deletion(text: impl Into<String>, old_line: u32) -> Self {
        Self {
            kind: LineKind::Deletion,
            text: text.into(),
            old_line_number: Some(old_line),
            new_line_number: None,
        }
    }

    /// Get the line number to display (prefers the new side, falls back to old).
    pub fn display_line_number(&self) -> Option<u32> {
        self.new_line_number.or(self.old_line_number)
    }
}

/// Line type in the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineKind {
    /// @@ header line.
    HunkHeader,
    /// Unchanged line (for context).
    Context,
    /// Added line (+).
    Addition,
    /// Removed line (-).
    Deletion,
}

impl LineKind {
    /// Get the prefix character for this line type.
    pub fn prefix(&self) -> char {
        match self {
            LineKind::HunkHeader => '@',
            LineKind::Context => ' ',
            LineKind::Addition => '+',
            LineKind::Deletion => '-',
        }
    }
}
