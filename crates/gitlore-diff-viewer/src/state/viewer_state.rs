//! Main state for the viewer widget.
//!
//! Row layout, top to bottom:
//!
//! ```text
//! summary                      (1 row)
//! for each file:
//!     file header              (1 row)
//!     lines or placeholder     (hidden while collapsed)
//!     separator                (1 row)
//! ```

use crate::action::ViewerAction;
use gitlore_diff::{Changeset, FileView, Presenter};
use std::collections::HashSet;

/// Rows above the first file header.
const SUMMARY_ROWS: usize = 1;

/// Main state for the viewer widget.
#[derive(Debug, Clone)]
pub struct ViewerState {
    /// The changeset being viewed.
    changeset: Changeset,
    /// Presenter used to build file views.
    presenter: Presenter,
    /// Body rows per file when expanded (lines, or 1 for the placeholder).
    body_rows: Vec<usize>,
    /// Indices of collapsed files.
    collapsed: HashSet<usize>,
    /// Currently selected file index.
    pub selected_file: usize,
    /// Scroll offset (first visible row).
    pub scroll_offset: usize,
    /// Viewport height (for scroll calculations).
    pub viewport_height: usize,
}

impl ViewerState {
    /// Create a new viewer state with every file expanded.
    pub fn new(changeset: Changeset, presenter: Presenter) -> Self {
        let body_rows = changeset
            .files
            .iter()
            .map(|file| {
                let view = presenter.present(file);
                if view.has_textual_changes() {
                    view.lines().count()
                } else {
                    1
                }
            })
            .collect();

        Self {
            changeset,
            presenter,
            body_rows,
            collapsed: HashSet::new(),
            selected_file: 0,
            scroll_offset: 0,
            viewport_height: 20, // Default, will be updated by the application
        }
    }

    /// Start with every file collapsed when `collapsed` is true.
    pub fn with_all_collapsed(mut self, collapsed: bool) -> Self {
        if collapsed {
            self.collapse_all();
        }
        self
    }

    /// The changeset being viewed.
    pub fn changeset(&self) -> &Changeset {
        &self.changeset
    }

    /// The presenter used to build file views.
    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    /// Build the file views for the whole changeset.
    pub fn views(&self) -> Vec<FileView<'_>> {
        self.changeset
            .files
            .iter()
            .map(|file| self.presenter.present(file))
            .collect()
    }

    /// Number of files.
    pub fn file_count(&self) -> usize {
        self.changeset.files.len()
    }

    /// Whether a file's body is hidden.
    pub fn is_collapsed(&self, file_idx: usize) -> bool {
        self.collapsed.contains(&file_idx)
    }

    /// Collapse or expand one file.
    pub fn toggle_file(&mut self, file_idx: usize) {
        if file_idx >= self.file_count() {
            return;
        }
        if !self.collapsed.remove(&file_idx) {
            self.collapsed.insert(file_idx);
        }
        self.clamp_scroll();
    }

    /// Collapse every file.
    pub fn collapse_all(&mut self) {
        self.collapsed = (0..self.file_count()).collect();
        self.clamp_scroll();
    }

    /// Expand every file.
    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    /// Rendered rows for one file, including header and separator.
    pub fn file_rows(&self, file_idx: usize) -> usize {
        let body = if self.is_collapsed(file_idx) {
            0
        } else {
            self.body_rows[file_idx]
        };
        body + 2
    }

    /// Row index of a file's header.
    pub fn file_header_row(&self, file_idx: usize) -> usize {
        SUMMARY_ROWS + (0..file_idx).map(|i| self.file_rows(i)).sum::<usize>()
    }

    /// Total number of rendered rows.
    pub fn total_rows(&self) -> usize {
        self.file_header_row(self.file_count())
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> usize {
        self.total_rows().saturating_sub(self.viewport_height)
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    fn scroll_down(&mut self, rows: usize) {
        self.scroll_offset = (self.scroll_offset + rows).min(self.max_scroll());
    }

    fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }

    fn select_file(&mut self, file_idx: usize) {
        if file_idx < self.file_count() {
            self.selected_file = file_idx;
            self.scroll_offset = self.file_header_row(file_idx).min(self.max_scroll());
        }
    }

    /// Apply an action.
    pub fn handle_action(&mut self, action: ViewerAction) {
        let half_page = (self.viewport_height / 2).max(1);
        let page = self.viewport_height.max(1);

        match action {
            ViewerAction::ScrollDown => self.scroll_down(1),
            ViewerAction::ScrollUp => self.scroll_up(1),
            ViewerAction::ScrollHalfDown => self.scroll_down(half_page),
            ViewerAction::ScrollHalfUp => self.scroll_up(half_page),
            ViewerAction::ScrollPageDown => self.scroll_down(page),
            ViewerAction::ScrollPageUp => self.scroll_up(page),
            ViewerAction::ScrollTop => self.scroll_offset = 0,
            ViewerAction::ScrollBottom => self.scroll_offset = self.max_scroll(),
            ViewerAction::NextFile => self.select_file(self.selected_file + 1),
            ViewerAction::PrevFile => {
                if self.selected_file > 0 {
                    self.select_file(self.selected_file - 1);
                }
            }
            ViewerAction::ToggleFile => self.toggle_file(self.selected_file),
            ViewerAction::CollapseAll => self.collapse_all(),
            ViewerAction::ExpandAll => self.expand_all(),
            ViewerAction::SetViewport { height } => {
                self.viewport_height = height as usize;
                self.clamp_scroll();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitlore_diff::{FileChange, FileStatus, Hunk};

    fn sample_state() -> ViewerState {
        let files = vec![
            // 4 classified lines
            FileChange::new("src/main.rs")
                .with_totals(1, 0)
                .with_hunk(Hunk::new(1, 2, 1, 3, "@@ -1,2 +1,3 @@\n a\n+b\n c")),
            // placeholder
            FileChange::new("logo.png").with_status(FileStatus::Added),
            // 2 classified lines
            FileChange::new("old.rs")
                .with_status(FileStatus::Deleted)
                .with_totals(0, 1)
                .with_hunk(Hunk::new(1, 1, 0, 0, "@@ -1 +0,0 @@\n-gone")),
        ];
        ViewerState::new(Changeset::new(files), Presenter::default())
    }

    #[test]
    fn test_layout() {
        let state = sample_state();

        assert_eq!(state.file_header_row(0), 1);
        assert_eq!(state.file_header_row(1), 1 + 6);
        assert_eq!(state.file_header_row(2), 1 + 6 + 3);
        assert_eq!(state.total_rows(), 1 + 6 + 3 + 4);
    }

    #[test]
    fn test_toggle_file() {
        let mut state = sample_state();

        state.handle_action(ViewerAction::ToggleFile);
        assert!(state.is_collapsed(0));
        assert_eq!(state.file_header_row(1), 1 + 2);

        state.handle_action(ViewerAction::ToggleFile);
        assert!(!state.is_collapsed(0));
        assert_eq!(state.file_header_row(1), 1 + 6);
    }

    #[test]
    fn test_collapse_does_not_touch_model() {
        let mut state = sample_state();
        let before = state.changeset().clone();

        state.handle_action(ViewerAction::CollapseAll);
        assert!((0..3).all(|i| state.is_collapsed(i)));
        assert_eq!(state.total_rows(), 1 + 2 * 3);
        assert_eq!(state.changeset(), &before);
        assert_eq!(state.views()[0].line_groups.len(), 1);

        state.handle_action(ViewerAction::ExpandAll);
        assert!(!state.is_collapsed(0));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = sample_state();
        state.handle_action(ViewerAction::SetViewport { height: 5 });

        state.handle_action(ViewerAction::ScrollBottom);
        assert_eq!(state.scroll_offset, state.total_rows() - 5);

        state.handle_action(ViewerAction::ScrollPageDown);
        assert_eq!(state.scroll_offset, state.max_scroll());

        state.handle_action(ViewerAction::ScrollTop);
        state.handle_action(ViewerAction::ScrollUp);
        assert_eq!(state.scroll_offset, 0);

        state.handle_action(ViewerAction::ScrollHalfDown);
        assert_eq!(state.scroll_offset, 2);
    }

    #[test]
    fn test_file_navigation() {
        let mut state = sample_state();
        state.handle_action(ViewerAction::SetViewport { height: 3 });

        state.handle_action(ViewerAction::NextFile);
        assert_eq!(state.selected_file, 1);
        assert_eq!(state.scroll_offset, state.file_header_row(1));

        state.handle_action(ViewerAction::NextFile);
        state.handle_action(ViewerAction::NextFile);
        assert_eq!(state.selected_file, 2);

        state.handle_action(ViewerAction::PrevFile);
        state.handle_action(ViewerAction::PrevFile);
        state.handle_action(ViewerAction::PrevFile);
        assert_eq!(state.selected_file, 0);
        assert_eq!(state.scroll_offset, 1);
    }

    #[test]
    fn test_start_collapsed() {
        let state = sample_state().with_all_collapsed(true);
        assert!(state.is_collapsed(2));

        let empty = ViewerState::new(Changeset::default(), Presenter::default());
        assert_eq!(empty.total_rows(), 1);
        assert_eq!(empty.max_scroll(), 0);
    }
}
