//! State management for the viewer widget.

mod viewer_state;

pub use viewer_state::ViewerState;
