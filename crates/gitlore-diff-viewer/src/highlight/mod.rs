//! Syntax highlighting for diff lines.

mod highlighter;

pub use highlighter::SyntectHighlighter;

use crate::traits::{HighlightError, Highlighter};
use ratatui::style::Color;

/// A syntax-highlighted span of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedSpan {
    /// The text content.
    pub text: String,
    /// Foreground color.
    pub fg: Option<Color>,
    /// Bold style.
    pub bold: bool,
    /// Italic style.
    pub italic: bool,
    /// Underline style.
    pub underline: bool,
}

impl HighlightedSpan {
    /// Create a plain span with no styling.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bold: false,
            italic: false,
            underline: false,
        }
    }

    /// Create a span with foreground color.
    pub fn colored(text: impl Into<String>, fg: Color) -> Self {
        Self {
            fg: Some(fg),
            ..Self::plain(text)
        }
    }
}

/// Highlight one line, degrading to a single plain span.
///
/// Lines without a language tag are never sent to the highlighter. A
/// highlighter error only affects this line.
pub fn highlight_or_plain(
    highlighter: &mut dyn Highlighter,
    text: &str,
    language: Option<&str>,
) -> Vec<HighlightedSpan> {
    let Some(language) = language else {
        return vec![HighlightedSpan::plain(text)];
    };

    match highlighter.highlight(text, language) {
        Ok(spans) => spans,
        Err(e @ HighlightError::UnknownLanguage(_)) => {
            log::debug!("Rendering line as plain text: {}", e);
            vec![HighlightedSpan::plain(text)]
        }
        Err(e) => {
            log::warn!("Rendering line as plain text: {}", e);
            vec![HighlightedSpan::plain(text)]
        }
    }
}
