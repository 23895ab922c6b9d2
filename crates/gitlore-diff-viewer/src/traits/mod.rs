//! Extension traits for customizing viewer behavior.

mod highlighter;
mod theme_provider;

pub use highlighter::{HighlightError, Highlighter};
pub use theme_provider::{DefaultTheme, ThemeProvider};
