// src/config/file.rs

//! TOML configuration file support.
//!
//! Every key is optional; a missing key leaves the built-in default in place.
//!
//! ```toml
//! roots = ["/home/me/projects/api"]
//! allowed_extensions = ["ts", "tsx"]
//! excluded_dirs = ["node_modules", ".git"]
//! excluded_patterns = ["test", ".spec."]
//! editor = "code --wait"
//! clipboard = true
//! sort = "native"
//! ```

use super::ListingOrder;
use crate::errors::{io_error_with_path, Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Ordering as spelled in the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortSetting {
    Sorted,
    Native,
}

impl From<SortSetting> for ListingOrder {
    fn from(setting: SortSetting) -> Self {
        match setting {
            SortSetting::Sorted => ListingOrder::Sorted,
            SortSetting::Native => ListingOrder::Native,
        }
    }
}

/// The contents of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub roots: Option<Vec<PathBuf>>,
    #[serde(default)]
    pub allowed_extensions: Option<Vec<String>>,
    #[serde(default)]
    pub excluded_dirs: Option<Vec<String>>,
    #[serde(default)]
    pub excluded_files: Option<Vec<String>>,
    #[serde(default)]
    pub excluded_patterns: Option<Vec<String>>,
    #[serde(default)]
    pub dotfile_exceptions: Option<Vec<String>>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub editor: Option<String>,
    #[serde(default)]
    pub clipboard: Option<bool>,
    #[serde(default)]
    pub sort: Option<SortSetting>,
    #[serde(default)]
    pub delete_delay_ms: Option<u64>,
}

/// Reads and parses a configuration file.
pub fn load_config_file(path: &Path) -> Result<FileConfig> {
    let text = fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
    let parsed: FileConfig = toml::from_str(&text).map_err(|source| Error::ConfigFile {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded configuration file {}", path.display());
    Ok(parsed)
}
