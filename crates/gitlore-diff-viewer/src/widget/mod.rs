//! Widget components for the viewer.

mod changeset_view;

pub use changeset_view::{render_changeset, ChangesetWidget, NO_TEXTUAL_CHANGES};
