//! # gitlore-diff-viewer
//!
//! Terminal rendering for [`gitlore_diff`] changesets: one scrollable pane with
//! a summary header, collapsible per-file sections, line-number gutters and
//! syntax highlighting.
//!
//! ## Design Principles
//!
//! The viewer only *reads* the diff model. Expand/collapse and scrolling are
//! visual state held in [`ViewerState`], and never change what the engine
//! produces. Highlighting goes through the [`Highlighter`] trait and is allowed
//! to fail: a failing line is drawn as plain text and the rest of the render
//! carries on.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gitlore_diff::{parse_unified_diff, Changeset, Presenter};
//! use gitlore_diff_viewer::{ChangesetWidget, DefaultTheme, SyntectHighlighter, ViewerAction, ViewerState};
//!
//! let changeset = Changeset::new(parse_unified_diff(patch)?);
//! let mut state = ViewerState::new(changeset, Presenter::default());
//! let mut highlighter = SyntectHighlighter::new();
//!
//! // Render the widget
//! let widget = ChangesetWidget::new(&mut highlighter, &DefaultTheme);
//! frame.render_stateful_widget(widget, area, &mut state);
//!
//! // Handle actions (mapped from key events by the application)
//! state.handle_action(ViewerAction::ToggleFile);
//! ```

pub mod action;
pub mod highlight;
pub mod state;
pub mod traits;
pub mod widget;

// Re-export commonly used types
pub use action::ViewerAction;
pub use highlight::{highlight_or_plain, HighlightedSpan, SyntectHighlighter};
pub use state::ViewerState;
pub use traits::{DefaultTheme, HighlightError, Highlighter, ThemeProvider};
pub use widget::{render_changeset, ChangesetWidget, NO_TEXTUAL_CHANGES};
