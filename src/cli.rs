// src/cli.rs

use clap::Parser;

/// Collects source files from one or more directories into a single document.
///
/// For every root directory, codecollect concatenates the files whose extension
/// is allowed, each prefixed with a `//<relative path>` comment, appends an ASCII
/// file tree, writes the result to `Output_<dir name>.txt`, opens it in a text
/// editor and deletes it again once the editor is closed.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directories to collect. Each produces its own output document.
    #[arg(value_name = "ROOT")]
    pub roots: Vec<String>,

    /// Read settings from this TOML file (default: ./codecollect.toml if present).
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<String>,

    // --- Filtering Options ---
    /// Collect only files with these extensions (case-insensitive, repeatable). Replaces the defaults.
    #[arg(short = 'e', long = "ext", value_name = "EXT", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Never descend into directories with these names (repeatable). Replaces the defaults.
    #[arg(long = "exclude-dir", value_name = "NAME", num_args = 1..)]
    pub exclude_dirs: Option<Vec<String>>,

    /// Never collect files with these names (repeatable). Replaces the defaults.
    #[arg(long = "exclude-file", value_name = "NAME", num_args = 1..)]
    pub exclude_files: Option<Vec<String>>,

    /// Skip files whose name contains any of these substrings (repeatable). Replaces the defaults.
    #[arg(long = "exclude-pattern", value_name = "SUBSTRING", num_args = 1..)]
    pub exclude_patterns: Option<Vec<String>>,

    /// Collect these dotfiles even though they have no allowed extension (repeatable).
    #[arg(long = "allow-dotfile", value_name = "NAME", num_args = 1..)]
    pub dotfile_exceptions: Option<Vec<String>>,

    /// Keep the directory order reported by the operating system instead of sorting by name.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub native_order: bool,

    /// Sort entries by name, overriding `sort = "native"` from the configuration file.
    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "native_order")]
    pub sorted: bool,

    // --- Output & Preview ---
    /// Directory receiving the temporary output files (default: current directory).
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Editor command used to preview each document, e.g. "code --wait".
    #[arg(long, value_name = "COMMAND")]
    pub editor: Option<String>,

    /// Milliseconds to wait after the editor exits before deleting the output file
    /// (default: 1000 for the system opener and TextEdit, 0 otherwise).
    #[arg(long, value_name = "MS")]
    pub delete_delay_ms: Option<u64>,

    #[cfg(feature = "clipboard")]
    /// Also copy each document to the system clipboard.
    #[arg(short = 'p', long, action = clap::ArgAction::SetTrue)]
    pub paste: bool,

    // --- Execution Control ---
    /// Print the documents to stdout instead of writing, previewing and deleting them.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,
}
