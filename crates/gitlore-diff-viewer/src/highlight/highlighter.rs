//! Syntax highlighter using syntect.

use super::HighlightedSpan;
use crate::traits::{HighlightError, Highlighter};
use ratatui::style::Color;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};

const DEFAULT_THEME: &str = "base16-ocean.dark";
const DEFAULT_CACHE_SIZE: usize = 5000;

/// Highlights diff lines with syntect, keyed by language tag.
pub struct SyntectHighlighter {
    /// Syntax definitions.
    syntax_set: SyntaxSet,
    /// Current theme.
    theme: Theme,
    /// Cache of highlighted content by (language, text) hash.
    cache: HashMap<u64, Vec<HighlightedSpan>>,
    /// Maximum cache size.
    max_cache_size: usize,
    /// Syntax index per language tag; `None` for tags syntect doesn't know.
    syntax_cache: HashMap<String, Option<usize>>,
}

impl std::fmt::Debug for SyntectHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntectHighlighter")
            .field("cache_size", &self.cache.len())
            .field("max_cache_size", &self.max_cache_size)
            .finish()
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntectHighlighter {
    /// Create a new highlighter with default settings.
    pub fn new() -> Self {
        Self::with_theme_name(DEFAULT_THEME)
    }

    /// Create a highlighter with a specific theme name, falling back to the
    /// default theme when the name is unknown.
    pub fn with_theme_name(theme_name: &str) -> Self {
        let mut theme_set = ThemeSet::load_defaults();
        let theme = match theme_set.themes.remove(theme_name) {
            Some(theme) => theme,
            None => {
                log::warn!("Unknown theme {:?}, using {}", theme_name, DEFAULT_THEME);
                theme_set.themes.remove(DEFAULT_THEME).unwrap_or_default()
            }
        };
        Self::with_theme(theme)
    }

    /// Create a highlighter with a custom theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
            cache: HashMap::new(),
            max_cache_size: DEFAULT_CACHE_SIZE,
            syntax_cache: HashMap::new(),
        }
    }

    /// Set the maximum cache size.
    pub fn with_max_cache(mut self, size: usize) -> Self {
        self.max_cache_size = size.max(1);
        self
    }

    /// Get available theme names.
    pub fn available_themes() -> Vec<&'static str> {
        vec![
            "base16-ocean.dark",
            "base16-ocean.light",
            "base16-eighties.dark",
            "base16-mocha.dark",
            "InspiredGitHub",
            "Solarized (dark)",
            "Solarized (light)",
        ]
    }

    /// Clear the highlight cache.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Get current cache size.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Find the syntax for a language tag (cached per tag).
    fn syntax_index(&mut self, language: &str) -> Option<usize> {
        if let Some(&idx) = self.syntax_cache.get(language) {
            return idx;
        }

        let idx = self
            .syntax_set
            .find_syntax_by_token(syntect_token(language))
            .and_then(|syntax| {
                self.syntax_set
                    .syntaxes()
                    .iter()
                    .position(|s| s.name == syntax.name)
            });

        self.syntax_cache.insert(language.to_string(), idx);
        idx
    }

    /// Highlight content with a specific syntax.
    fn highlight_with_syntax(
        &self,
        syntax: &SyntaxReference,
        content: &str,
    ) -> Result<Vec<HighlightedSpan>, HighlightError> {
        let mut highlighter = HighlightLines::new(syntax, &self.theme);

        highlighter
            .highlight_line(content, &self.syntax_set)
            .map(|ranges| {
                ranges
                    .iter()
                    .map(|(style, text)| syntect_to_span(*style, text))
                    .collect()
            })
            .map_err(|e| HighlightError::Failed(e.to_string()))
    }

    fn store(&mut self, key: u64, spans: Vec<HighlightedSpan>) {
        if self.cache.len() >= self.max_cache_size {
            // Remove oldest 20% instead of 50% to reduce thrashing
            let to_remove = (self.max_cache_size / 5).max(1);
            let keys_to_remove: Vec<_> = self.cache.keys().take(to_remove).copied().collect();
            for key in keys_to_remove {
                self.cache.remove(&key);
            }
        }
        self.cache.insert(key, spans);
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(
        &mut self,
        text: &str,
        language: &str,
    ) -> Result<Vec<HighlightedSpan>, HighlightError> {
        let key = cache_key(language, text);
        if let Some(spans) = self.cache.get(&key) {
            return Ok(spans.clone());
        }

        let idx = self
            .syntax_index(language)
            .ok_or_else(|| HighlightError::UnknownLanguage(language.to_string()))?;
        let syntax = &self.syntax_set.syntaxes()[idx];

        let spans = self.highlight_with_syntax(syntax, text)?;
        self.store(key, spans.clone());
        Ok(spans)
    }
}

/// Map language tags to a token syntect's bundled grammars recognize.
///
/// Tags that already match a grammar name or extension pass through.
fn syntect_token(language: &str) -> &str {
    match language {
        "csharp" => "cs",
        "bash" => "sh",
        other => other,
    }
}

/// Compute a cache key for a language and content.
fn cache_key(language: &str, content: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    language.hash(&mut hasher);
    content.hash(&mut hasher);
    hasher.finish()
}

/// Convert syntect Style to our HighlightedSpan.
fn syntect_to_span(style: Style, text: &str) -> HighlightedSpan {
    HighlightedSpan {
        text: text.to_string(),
        fg: Some(Color::Rgb(
            style.foreground.r,
            style.foreground.g,
            style.foreground.b,
        )),
        bold: style.font_style.contains(FontStyle::BOLD),
        italic: style.font_style.contains(FontStyle::ITALIC),
        underline: style.font_style.contains(FontStyle::UNDERLINE),
    }
}
