// src/constants.rs

/// Prefix of every temporary output file name.
pub const OUTPUT_FILE_PREFIX: &str = "Output_";

/// Extension of every temporary output file.
pub const OUTPUT_FILE_EXTENSION: &str = "txt";

/// Separator placed between two aggregated files.
pub const CONTENT_SEPARATOR: &str = "\n\n\n";

/// Block placed between the aggregated contents and the tree.
pub const TREE_HEADER: &str = "\n\n// File Tree:\n";

/// Comment marker prepended to each file's relative path.
pub const PATH_COMMENT_PREFIX: &str = "//";

/// Tree branch for every sibling except the last.
pub const BRANCH: &str = "├── ";

/// Tree branch for the last sibling.
pub const LAST_BRANCH: &str = "└── ";

/// Indentation below a sibling that is followed by others.
pub const PIPE_INDENT: &str = "|   ";

/// Indentation below the last sibling.
pub const BLANK_INDENT: &str = "    ";

/// Configuration file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILENAME: &str = "codecollect.toml";

/// Pause before deleting the output file when the preview program may outlive
/// the process being watched (`open -W`, `xdg-open`).
pub const HANDOFF_DELETE_DELAY_MS: u64 = 1000;

pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] =
    &["js", "ts", "java", "py", "jsx", "tsx", "go", "html", "css"];

pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "build", "dist", ".config"];

pub const DEFAULT_EXCLUDED_FILES: &[&str] = &["postcss.config.js"];

pub const DEFAULT_EXCLUDED_PATTERNS: &[&str] = &["test"];

/// Dotfiles included even though they carry no allowed extension.
pub const DEFAULT_DOTFILE_EXCEPTIONS: &[&str] = &[".env"];
