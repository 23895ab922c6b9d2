//! Per-file presentation data: display path, language tag and classified hunks.

use crate::language::LanguageTable;
use crate::model::{ClassifiedLine, FileChange, Hunk};
use crate::reconstruct::expand;
use std::fmt;
use std::sync::OnceLock;

/// How a file's path should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPath<'a> {
    /// Unrenamed file.
    Path(&'a str),
    /// Renamed file, old name first.
    Rename { from: &'a str, to: &'a str },
}

impl DisplayPath<'_> {
    /// The current path.
    pub fn current(&self) -> &str {
        match self {
            DisplayPath::Path(path) => path,
            DisplayPath::Rename { to, .. } => to,
        }
    }
}

impl fmt::Display for DisplayPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayPath::Path(path) => f.write_str(path),
            DisplayPath::Rename { from, to } => write!(f, "{} → {}", from, to),
        }
    }
}

/// One hunk together with its classified lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineGroup<'a> {
    pub hunk: &'a Hunk,
    pub lines: Vec<ClassifiedLine>,
}

/// Everything a renderer needs for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileView<'a> {
    /// The file this view was built from.
    pub file: &'a FileChange,
    pub display_path: DisplayPath<'a>,
    pub is_rename: bool,
    /// Highlighting language; `None` means render unhighlighted.
    pub language: Option<&'a str>,
    /// One group per hunk, in file order.
    pub line_groups: Vec<LineGroup<'a>>,
}

impl FileView<'_> {
    /// False for binary files, mode-only changes and empty renames. Renderers
    /// show a "no textual changes" placeholder instead of an empty table.
    pub fn has_textual_changes(&self) -> bool {
        !self.line_groups.is_empty()
    }

    /// Iterate over every classified line across all groups.
    pub fn lines(&self) -> impl Iterator<Item = &ClassifiedLine> {
        self.line_groups.iter().flat_map(|group| group.lines.iter())
    }

    /// Largest line number on either side, for gutter sizing.
    pub fn max_line_number(&self) -> u32 {
        self.lines()
            .filter_map(|l| l.new_line_number.max(l.old_line_number))
            .max()
            .unwrap_or(1)
    }

    /// Gutter width in characters (at least 4).
    pub fn line_number_width(&self) -> usize {
        self.max_line_number().to_string().len().max(4)
    }
}

/// Builds [`FileView`]s using an injected language table.
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    languages: LanguageTable,
}

impl Presenter {
    /// Create a presenter with a specific language table.
    pub fn new(languages: LanguageTable) -> Self {
        Self { languages }
    }

    /// The language table in use.
    pub fn languages(&self) -> &LanguageTable {
        &self.languages
    }

    /// Build the presentation data for one file.
    pub fn present<'a>(&'a self, file: &'a FileChange) -> FileView<'a> {
        let is_rename = file.is_rename();
        let display_path = match file.previous_path.as_deref() {
            Some(from) if is_rename => DisplayPath::Rename {
                from,
                to: &file.path,
            },
            _ => DisplayPath::Path(&file.path),
        };

        if file.hunks.is_empty() {
            log::debug!("{} has no textual changes ({:?})", file.path, file.status);
        }

        let line_groups = file
            .hunks
            .iter()
            .map(|hunk| LineGroup {
                hunk,
                lines: expand(hunk),
            })
            .collect();

        FileView {
            file,
            display_path,
            is_rename,
            language: self.languages.resolve(&file.path),
            line_groups,
        }
    }
}

/// Build the presentation data for one file using the built-in language table.
pub fn present(file: &FileChange) -> FileView<'_> {
    static DEFAULT: OnceLock<Presenter> = OnceLock::new();
    DEFAULT.get_or_init(Presenter::default).present(file)
}
