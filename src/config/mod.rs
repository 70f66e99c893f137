//! Defines the core `Config` struct and related types for application configuration.
//!
//! Settings come from three layers, lowest precedence first: built-in defaults
//! (`crate::constants`), an optional TOML file, and command-line flags. The
//! `ConfigBuilder` merges them and validates the result, making them available
//! to the rest of the application in a structured, immutable form.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

pub use builder::ConfigBuilder;
pub use file::{load_config_file, FileConfig, SortSetting};

mod builder;
mod file;
mod parsing;
mod validation;

/// The allow/deny lists consulted by the filter policy.
///
/// Extensions are stored lowercase and without a leading dot. Names and
/// patterns are kept verbatim and compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Extensions whose files are collected.
    pub allowed_extensions: HashSet<String>,
    /// Directory names that are never descended into.
    pub excluded_dir_names: HashSet<String>,
    /// File names that are never collected.
    pub excluded_file_names: HashSet<String>,
    /// Substrings that exclude any file whose name contains them.
    pub excluded_name_patterns: HashSet<String>,
    /// Dotfile names collected even though they carry no allowed extension.
    pub dotfile_exceptions: HashSet<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        use crate::constants::*;
        fn to_set(items: &[&str]) -> HashSet<String> {
            items.iter().map(|s| s.to_string()).collect()
        }
        Self {
            allowed_extensions: to_set(DEFAULT_ALLOWED_EXTENSIONS),
            excluded_dir_names: to_set(DEFAULT_EXCLUDED_DIRS),
            excluded_file_names: to_set(DEFAULT_EXCLUDED_FILES),
            excluded_name_patterns: to_set(DEFAULT_EXCLUDED_PATTERNS),
            dotfile_exceptions: to_set(DEFAULT_DOTFILE_EXCEPTIONS),
        }
    }
}

/// Order in which the children of a directory are visited.
///
/// The tree and the aggregated contents always use the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingOrder {
    /// Sort children by file name (byte order). Output is reproducible.
    #[default]
    Sorted,
    /// Keep whatever order the operating system returns.
    Native,
}

/// An operator-supplied editor command. The output file path is appended to `args`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: String,
    pub args: Vec<String>,
}

/// Represents the fully resolved configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directories, each collected into its own document.
    pub roots: Vec<PathBuf>,
    /// Filter lists shared by the tree renderer and the content aggregator.
    pub filter: FilterConfig,
    /// Child ordering used by both walks.
    pub listing_order: ListingOrder,
    /// Directory receiving the temporary `Output_<name>.txt` files.
    pub output_dir: PathBuf,
    /// Base against which the per-file header paths are made relative.
    pub display_base: PathBuf,
    /// Editor override. `None` picks the platform default.
    pub editor: Option<EditorCommand>,
    /// Whether to copy each document to the system clipboard.
    pub clipboard: bool,
    /// Pause between the editor exiting and the file being deleted.
    /// `None` uses the preview launcher's own default.
    pub delete_delay: Option<Duration>,
    /// If `true`, print the documents to stdout instead of persisting and previewing them.
    pub dry_run: bool,
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    ///
    /// Roots are empty and both directories point at the current directory.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            roots: Vec::new(),
            filter: FilterConfig::default(),
            listing_order: ListingOrder::Sorted,
            output_dir: PathBuf::from("."),
            display_base: PathBuf::from("."),
            editor: None,
            clipboard: false,
            delete_delay: None,
            dry_run: false,
        }
    }
}
