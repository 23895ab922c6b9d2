//! Viewer configuration
//!
//! Configuration loaded from `.gitlore.toml`:
//!
//! ```toml
//! theme = "Solarized (dark)"
//! highlight_cache_size = 2000
//! collapse_files_by_default = true
//!
//! [languages]
//! vue = "vue"
//! h = "cpp"
//! ```

use gitlore_diff::LanguageTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Viewer configuration loaded from .gitlore.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Syntax highlighting theme name (see `SyntectHighlighter::available_themes`)
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Maximum number of highlighted lines kept in the cache
    #[serde(default = "default_highlight_cache_size")]
    pub highlight_cache_size: usize,

    /// Start with every file collapsed
    #[serde(default)]
    pub collapse_files_by_default: bool,

    /// Extra extension -> language tag mappings, applied over the defaults
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
}

fn default_theme() -> String {
    "base16-ocean.dark".to_string()
}

fn default_highlight_cache_size() -> usize {
    5000
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            highlight_cache_size: default_highlight_cache_size(),
            collapse_files_by_default: false,
            languages: BTreeMap::new(),
        }
    }
}

impl ViewerConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded viewer config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default viewer config");
        Self::default()
    }

    /// The default extension table with this config's overrides applied.
    pub fn language_table(&self) -> LanguageTable {
        LanguageTable::default().with_overrides(&self.languages)
    }
}
