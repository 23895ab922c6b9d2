//! File extension to language tag resolution.
//!
//! The mapping is plain data: supporting another language means adding a row
//! to [`DEFAULT_LANGUAGES`] (or a config override), never touching the lookup.

use std::collections::BTreeMap;

/// Built-in `(extension, language tag)` pairs.
pub const DEFAULT_LANGUAGES: &[(&str, &str)] = &[
    ("rs", "rust"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("mts", "typescript"),
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("mjs", "javascript"),
    ("cjs", "javascript"),
    ("py", "python"),
    ("pyi", "python"),
    ("go", "go"),
    ("java", "java"),
    ("kt", "kotlin"),
    ("swift", "swift"),
    ("rb", "ruby"),
    ("php", "php"),
    ("c", "c"),
    ("h", "c"),
    ("cpp", "cpp"),
    ("cc", "cpp"),
    ("cxx", "cpp"),
    ("hpp", "cpp"),
    ("cs", "csharp"),
    ("css", "css"),
    ("scss", "scss"),
    ("html", "html"),
    ("htm", "html"),
    ("json", "json"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
    ("toml", "toml"),
    ("md", "markdown"),
    ("markdown", "markdown"),
    ("sh", "bash"),
    ("bash", "bash"),
    ("zsh", "bash"),
    ("sql", "sql"),
    ("xml", "xml"),
    ("lua", "lua"),
    ("hs", "haskell"),
];

/// Immutable extension to language tag table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    entries: BTreeMap<String, String>,
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_LANGUAGES.iter().copied())
    }
}

impl LanguageTable {
    /// An empty table; every lookup misses.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Build a table from `(extension, tag)` pairs. Later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self::empty().with_overrides(pairs)
    }

    /// Return a copy of this table extended (or overridden) by `pairs`.
    ///
    /// Extensions are normalized to lowercase without a leading dot, so
    /// `".TSX"` and `"tsx"` name the same entry.
    pub fn with_overrides<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (extension, tag) in pairs {
            let extension = normalize_extension(extension.as_ref());
            if extension.is_empty() {
                continue;
            }
            self.entries.insert(extension, tag.into());
        }
        self
    }

    /// Look up a language tag by bare extension (case-insensitive).
    pub fn get(&self, extension: &str) -> Option<&str> {
        self.entries
            .get(&normalize_extension(extension))
            .map(String::as_str)
    }

    /// Resolve the language tag for a file path.
    ///
    /// The extension is the text after the last `.` of the final path
    /// component. Paths without one (`Dockerfile`), with a trailing dot, or with
    /// an unknown extension resolve to `None`.
    pub fn resolve(&self, path: &str) -> Option<&str> {
        let file_name = path
            .rsplit(|c| c == '/' || c == '\\')
            .next()
            .unwrap_or(path);
        let (_, extension) = file_name.rsplit_once('.')?;
        self.get(extension)
    }

    /// Number of known extensions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(extension, tag)` pairs in extension order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_ascii_lowercase()
}
