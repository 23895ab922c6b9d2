//! Trait for plugging a syntax highlighter into the viewer.

use crate::highlight::HighlightedSpan;
use thiserror::Error;

/// Errors a highlighter may report for a single line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightError {
    /// No grammar is known for the language tag.
    #[error("No syntax for language: {0}")]
    UnknownLanguage(String),

    /// The grammar failed on this line.
    #[error("Highlighting failed: {0}")]
    Failed(String),
}

/// Turns one line of text into styled spans for a language tag.
///
/// Failures are per line. The viewer never aborts a render because of them;
/// see [`highlight_or_plain`](crate::highlight_or_plain).
///
/// # Example
///
/// ```ignore
/// struct Monochrome;
///
/// impl Highlighter for Monochrome {
///     fn highlight(
///         &mut self,
///         text: &str,
///         _language: &str,
///     ) -> Result<Vec<HighlightedSpan>, HighlightError> {
///         Ok(vec![HighlightedSpan::plain(text)])
///     }
/// }
/// ```
pub trait Highlighter {
    /// Highlight a single line of `language` source.
    fn highlight(
        &mut self,
        text: &str,
        language: &str,
    ) -> Result<Vec<HighlightedSpan>, HighlightError>;
}
