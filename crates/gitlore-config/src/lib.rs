//! Configuration and file locations for the gitlore diff viewer
//!
//! This crate provides:
//! - Configuration file discovery (TOML, CWD first, then home directory)
//! - Viewer configuration (ViewerConfig)
//! - Platform cache directory for the log file

pub mod config_file;
pub mod paths;
pub mod viewer_config;

pub use config_file::{config_candidates, load_config_file, read_first_config};
pub use paths::cache_dir;
pub use viewer_config::ViewerConfig;
