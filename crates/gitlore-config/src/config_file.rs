//! Locating and reading `.gitlore.toml`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".gitlore.toml";

/// Candidate config files in lookup order: `cwd` first, then `home`.
pub fn config_candidates(cwd: Option<&Path>, home: Option<&Path>) -> Vec<PathBuf> {
    [cwd, home]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CONFIG_FILE))
        .collect()
}

/// Read the first candidate that exists.
///
/// Missing files are skipped silently; unreadable ones are logged and skipped.
pub fn read_first_config(candidates: &[PathBuf]) -> Option<String> {
    candidates.iter().find_map(|path| match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            None
        }
    })
}

/// Load config file content from CWD first, then the home directory.
pub fn load_config_file() -> Option<String> {
    let cwd = std::env::current_dir().ok();
    let home = std::env::var_os("HOME").map(PathBuf::from);
    read_first_config(&config_candidates(cwd.as_deref(), home.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_candidates_order() {
        let candidates =
            config_candidates(Some(Path::new("/work")), Some(Path::new("/home/dev")));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/work/.gitlore.toml"),
                PathBuf::from("/home/dev/.gitlore.toml"),
            ]
        );
        assert_eq!(config_candidates(None, None), Vec::<PathBuf>::new());
    }

    #[test]
    fn test_cwd_config_wins_over_home() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        fs::write(cwd.path().join(CONFIG_FILE), "theme = \"from-cwd\"").unwrap();
        fs::write(home.path().join(CONFIG_FILE), "theme = \"from-home\"").unwrap();

        let candidates = config_candidates(Some(cwd.path()), Some(home.path()));
        assert_eq!(
            read_first_config(&candidates).as_deref(),
            Some("theme = \"from-cwd\"")
        );
    }

    #[test]
    fn test_home_config_used_when_cwd_has_none() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        fs::write(home.path().join(CONFIG_FILE), "theme = \"from-home\"").unwrap();

        let candidates = config_candidates(Some(cwd.path()), Some(home.path()));
        assert_eq!(
            read_first_config(&candidates).as_deref(),
            Some("theme = \"from-home\"")
        );
    }

    #[test]
    fn test_no_config_anywhere() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();

        let candidates = config_candidates(Some(cwd.path()), Some(home.path()));
        assert_eq!(read_first_config(&candidates), None);
    }
}
