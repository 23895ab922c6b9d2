//! # gitlore-diff
//!
//! The diff engine behind the history dashboard's diff viewer. It takes hunks
//! that were already computed upstream (by `git`, a REST API, or
//! [`parse_unified_diff`]) and reconstructs a line-addressed, classified
//! representation that renderers can draw without re-parsing anything.
//!
//! ## Design Principles
//!
//! Every operation is a pure, total function of its arguments:
//!
//! - [`classify`] never fails; unrecognized lines are dropped
//! - [`expand`] reproduces a hunk, it does not verify it
//! - [`Presenter::present`] and [`summarize`] never reorder anything
//!
//! There is no shared mutable state, so results can be cached by the caller or
//! computed on any thread. Count cross-checks live in [`verify`] and are opt-in.
//!
//! ## Usage
//!
//! ```rust
//! use gitlore_diff::{summarize, FileChange, Hunk, LineKind, Presenter};
//!
//! let mut file = FileChange::new("src/main.rs");
//! file.additions = 1;
//! file.hunks.push(Hunk::new(1, 2, 1, 3, "@@ -1,2 +1,3 @@\n line1\n+line2\n line3"));
//!
//! let presenter = Presenter::default();
//! let view = presenter.present(&file);
//! assert_eq!(view.language, Some("rust"));
//! assert_eq!(view.line_groups[0].lines[2].kind, LineKind::Addition);
//!
//! let summary = summarize(std::slice::from_ref(&file));
//! assert_eq!(summary.total_additions, 1);
//! ```

pub mod classify;
pub mod language;
pub mod model;
pub mod parser;
pub mod present;
pub mod reconstruct;
pub mod summary;
pub mod verify;

// Re-export commonly used types
pub use classify::classify;
pub use language::LanguageTable;
pub use model::{Changeset, ClassifiedLine, FileChange, FileStatus, Hunk, LineKind};
pub use parser::{parse_unified_diff, ParseError};
pub use present::{present, DisplayPath, FileView, LineGroup, Presenter};
pub use reconstruct::expand;
pub use summary::{summarize, ChangesetSummary};
pub use verify::{verify_file, verify_hunk, CountMismatch, Side};
