// src/config/builder.rs

use super::file::{load_config_file, FileConfig};
use super::parsing::{collect_names, normalize_extensions, parse_editor_command};
use super::validation::validate_config;
use super::{Config, FilterConfig, ListingOrder};
use crate::cli::Cli;
use crate::constants::DEFAULT_CONFIG_FILENAME;
use crate::errors::{io_error_with_path, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A builder for creating a `Config` programmatically.
///
/// Unset options fall back to the values of a configuration file (when one is
/// merged) and then to the built-in defaults.
///
/// # Examples
///
/// ```
/// use codecollect::ConfigBuilder;
/// use tempfile::tempdir;
///
/// let temp = tempdir().unwrap();
/// let config = ConfigBuilder::new()
///     .root(temp.path())
///     .extensions(vec!["rs".to_string()])
///     .dry_run(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.roots.len(), 1);
/// assert!(config.filter.allowed_extensions.contains("rs"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    roots: Vec<PathBuf>,
    extensions: Option<Vec<String>>,
    exclude_dirs: Option<Vec<String>>,
    exclude_files: Option<Vec<String>>,
    exclude_patterns: Option<Vec<String>>,
    dotfile_exceptions: Option<Vec<String>>,
    listing_order: Option<ListingOrder>,
    output_dir: Option<PathBuf>,
    display_base: Option<PathBuf>,
    editor: Option<String>,
    clipboard: Option<bool>,
    delete_delay: Option<Duration>,
    dry_run: bool,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with no options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from parsed command-line arguments.
    ///
    /// The configuration file named by `--config` is merged underneath the
    /// flags; without `--config`, `codecollect.toml` in the working directory is
    /// used if it exists.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let mut builder = Self::new()
            .roots(cli.roots)
            .dry_run(cli.dry_run);
        builder.extensions = cli.extensions;
        builder.exclude_dirs = cli.exclude_dirs;
        builder.exclude_files = cli.exclude_files;
        builder.exclude_patterns = cli.exclude_patterns;
        builder.dotfile_exceptions = cli.dotfile_exceptions;
        builder.output_dir = cli.output_dir.map(PathBuf::from);
        builder.editor = cli.editor;
        builder.delete_delay = cli.delete_delay_ms.map(Duration::from_millis);
        if cli.native_order {
            builder.listing_order = Some(ListingOrder::Native);
        } else if cli.sorted {
            builder.listing_order = Some(ListingOrder::Sorted);
        }
        #[cfg(feature = "clipboard")]
        if cli.paste {
            builder.clipboard = Some(true);
        }

        let file_config = match cli.config {
            Some(path) => Some(load_config_file(Path::new(&path))?),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILENAME);
                if default_path.is_file() {
                    Some(load_config_file(default_path)?)
                } else {
                    None
                }
            }
        };
        if let Some(file_config) = file_config {
            builder = builder.merge_file(file_config);
        }
        Ok(builder)
    }

    /// Fills every option that is still unset from a configuration file.
    pub fn merge_file(mut self, file: FileConfig) -> Self {
        if self.roots.is_empty() {
            self.roots = file.roots.unwrap_or_default();
        }
        self.extensions = self.extensions.or(file.allowed_extensions);
        self.exclude_dirs = self.exclude_dirs.or(file.excluded_dirs);
        self.exclude_files = self.exclude_files.or(file.excluded_files);
        self.exclude_patterns = self.exclude_patterns.or(file.excluded_patterns);
        self.dotfile_exceptions = self.dotfile_exceptions.or(file.dotfile_exceptions);
        self.output_dir = self.output_dir.or(file.output_dir);
        self.editor = self.editor.or(file.editor);
        self.clipboard = self.clipboard.or(file.clipboard);
        self.listing_order = self.listing_order.or(file.sort.map(ListingOrder::from));
        self.delete_delay = self
            .delete_delay
            .or(file.delete_delay_ms.map(Duration::from_millis));
        self
    }

    /// Adds one root directory.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.push(path.into());
        self
    }

    /// Adds several root directories.
    pub fn roots<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Sets the allowed extensions (with or without leading dot).
    pub fn extensions(mut self, exts: Vec<String>) -> Self {
        self.extensions = Some(exts);
        self
    }

    /// Sets the directory names that are never descended into.
    pub fn exclude_dirs(mut self, names: Vec<String>) -> Self {
        self.exclude_dirs = Some(names);
        self
    }

    /// Sets the file names that are never collected.
    pub fn exclude_files(mut self, names: Vec<String>) -> Self {
        self.exclude_files = Some(names);
        self
    }

    /// Sets the name substrings that exclude a file.
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = Some(patterns);
        self
    }

    /// Sets the dotfiles collected regardless of extension.
    pub fn dotfile_exceptions(mut self, names: Vec<String>) -> Self {
        self.dotfile_exceptions = Some(names);
        self
    }

    pub fn listing_order(mut self, order: ListingOrder) -> Self {
        self.listing_order = Some(order);
        self
    }

    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Sets the base directory for the `//<path>` headers (default: working directory).
    pub fn display_base(mut self, path: impl Into<PathBuf>) -> Self {
        self.display_base = Some(path.into());
        self
    }

    /// Sets the editor command line, e.g. `"code --wait"`.
    pub fn editor(mut self, command: impl Into<String>) -> Self {
        self.editor = Some(command.into());
        self
    }

    pub fn clipboard(mut self, enabled: bool) -> Self {
        self.clipboard = Some(enabled);
        self
    }

    pub fn delete_delay(mut self, delay: Duration) -> Self {
        self.delete_delay = Some(delay);
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Resolves paths, applies defaults and validates the result.
    pub fn build(self) -> Result<Config> {
        let cwd = env::current_dir().map_err(|e| io_error_with_path(e, "."))?;

        let defaults = FilterConfig::default();
        let filter = FilterConfig {
            allowed_extensions: self
                .extensions
                .map(normalize_extensions)
                .unwrap_or(defaults.allowed_extensions),
            excluded_dir_names: self
                .exclude_dirs
                .map(collect_names)
                .unwrap_or(defaults.excluded_dir_names),
            excluded_file_names: self
                .exclude_files
                .map(collect_names)
                .unwrap_or(defaults.excluded_file_names),
            excluded_name_patterns: self
                .exclude_patterns
                .map(collect_names)
                .unwrap_or(defaults.excluded_name_patterns),
            dotfile_exceptions: self
                .dotfile_exceptions
                .map(collect_names)
                .unwrap_or(defaults.dotfile_exceptions),
        };

        let editor = self
            .editor
            .as_deref()
            .map(parse_editor_command)
            .transpose()?;

        let config = Config {
            roots: self
                .roots
                .iter()
                .map(|root| resolve_path(&cwd, root))
                .collect(),
            filter,
            listing_order: self.listing_order.unwrap_or_default(),
            output_dir: resolve_path(&cwd, &self.output_dir.unwrap_or_else(|| cwd.clone())),
            display_base: resolve_path(&cwd, &self.display_base.unwrap_or_else(|| cwd.clone())),
            editor,
            clipboard: self.clipboard.unwrap_or(false),
            delete_delay: self.delete_delay,
            dry_run: self.dry_run,
        };

        validate_config(&config)?;
        log::debug!("Configuration built: {:?}", config);
        Ok(config)
    }
}

/// Makes `path` absolute against `cwd`, canonicalizing when it exists so that
/// roots and the display base agree on symlinked prefixes.
fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    fs::canonicalize(&absolute).unwrap_or(absolute)
}
