//! Viewer Actions
//!
//! Tagged actions that the viewer can process. The application maps key
//! events to these and dispatches them to [`ViewerState`](crate::ViewerState).

/// Actions that can be performed on the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerAction {
    // === Scrolling ===
    /// Scroll down one row
    ScrollDown,
    /// Scroll up one row
    ScrollUp,
    /// Scroll down half page
    ScrollHalfDown,
    /// Scroll up half page
    ScrollHalfUp,
    /// Scroll down full page
    ScrollPageDown,
    /// Scroll up full page
    ScrollPageUp,
    /// Jump to the top
    ScrollTop,
    /// Jump to the bottom
    ScrollBottom,

    // === Files ===
    /// Select the next file and scroll to its header
    NextFile,
    /// Select the previous file and scroll to its header
    PrevFile,
    /// Collapse or expand the selected file
    ToggleFile,
    /// Collapse every file
    CollapseAll,
    /// Expand every file
    ExpandAll,

    // === Viewport ===
    /// Set the viewport height (for scroll calculations)
    SetViewport { height: u16 },
}

impl ViewerAction {
    /// Check if this action is a scroll action
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            ViewerAction::ScrollDown
                | ViewerAction::ScrollUp
                | ViewerAction::ScrollHalfDown
                | ViewerAction::ScrollHalfUp
                | ViewerAction::ScrollPageDown
                | ViewerAction::ScrollPageUp
                | ViewerAction::ScrollTop
                | ViewerAction::ScrollBottom
        )
    }
}
