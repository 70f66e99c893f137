//! `codecollect` is a library and command-line tool that gathers the source
//! files of a directory into one plain-text document, ready to paste into a
//! chat window or a code review.
//!
//! For every root directory the document holds each included file, prefixed
//! with a `//<relative path>` comment, followed by an ASCII diagram of the
//! filtered file tree. The command-line tool writes the document to a
//! temporary `Output_<dir name>.txt`, opens it in a text editor and deletes it
//! once the editor is closed.
//!
//! The pipeline is built from small stages that can be used on their own:
//! 1.  **Filter**: `filtering` decides which directories and files are visible.
//! 2.  **List**: `discovery::list_visible` yields the visible children of a directory.
//! 3.  **Render and Collect**: `output::tree::render` draws the tree and
//!     `processing::collect` reads the file contents, both through the same listing.
//! 4.  **Assemble**: `output::assemble` joins the contents and the tree.
//! 5.  **Lifecycle**: `lifecycle` persists, previews and deletes the document.
//!
//! # Example: Library Usage
//!
//! ```
//! use codecollect::{collect, render_tree, CancellationToken, ConfigBuilder};
//! use codecollect::output::assemble_document;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Set up a project with one included and one excluded file.
//! let temp = tempdir()?;
//! fs::write(temp.path().join("app.py"), "print('hi')")?;
//! fs::write(temp.path().join("notes.md"), "not collected")?;
//!
//! // 2. Build a configuration for that root.
//! let config = ConfigBuilder::new()
//!     .root(temp.path())
//!     .display_base(temp.path())
//!     .dry_run(true)
//!     .build()?;
//! let root = &config.roots[0];
//!
//! // 3. Render, collect and assemble.
//! let tree = render_tree(root, &config);
//! let files = collect(root, &config, &CancellationToken::new())?;
//! let document = assemble_document(&files, &tree);
//!
//! assert_eq!(document.body, "//app.py\nprint('hi')\n\n// File Tree:\n└── app.py\n");
//! # Ok(())
//! # }
//! ```

// Make modules public if they contain public types used in the API
pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod lifecycle;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod signal;

// Re-export key public types for easier use as a library
pub use cancellation::{CancellationToken, CleanupRegistry};
pub use config::{Config, ConfigBuilder};
pub use core_types::{AggregatedFile, ListedEntry, OutputDocument};
pub use lifecycle::{LifecycleState, RootReport};
pub use output::tree::render as render_tree;
pub use processing::collect;

use crate::errors::{Error, Result};
use crate::lifecycle::{dry_run_root, run_root, PreviewLauncher};
use crate::output::Clipboard;
use log::{debug, error};
use std::io;
use std::thread;

/// Executes the complete pipeline for every configured root.
///
/// Each root runs its own lifecycle on a scoped thread, so several previews can
/// be open at once; the call returns when all of them have finished. Failures
/// of one root are recorded in its [`RootReport`] and do not affect the others.
///
/// In a dry run the roots are assembled one after another and written to
/// stdout; nothing is persisted, previewed or copied.
///
/// # Errors
/// Returns `Error::Interrupted` if `token` was cancelled during the run.
pub fn run(
    config: &Config,
    token: &CancellationToken,
    registry: &CleanupRegistry,
    launcher: &dyn PreviewLauncher,
    clipboard: &dyn Clipboard,
) -> Result<Vec<RootReport>> {
    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }

    let reports = if config.dry_run {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        config
            .roots
            .iter()
            .map(|root| dry_run_root(root, config, token, &mut out))
            .collect::<Vec<_>>()
    } else {
        thread::scope(|scope| {
            let handles: Vec<_> = config
                .roots
                .iter()
                .map(|root| {
                    let handle = scope.spawn(move || {
                        run_root(root, config, token, registry, launcher, clipboard)
                    });
                    (root, handle)
                })
                .collect();

            handles
                .into_iter()
                .map(|(root, handle)| {
                    handle.join().unwrap_or_else(|_| {
                        error!("Pipeline for {} panicked", root.display());
                        RootReport {
                            root: root.clone(),
                            output_file: None,
                            state: LifecycleState::Failed,
                            files_collected: 0,
                            error: Some("pipeline panicked".to_string()),
                        }
                    })
                })
                .collect::<Vec<_>>()
        })
    };

    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }

    debug!(
        "Run complete: {} of {} root(s) succeeded",
        reports.iter().filter(|r| r.succeeded()).count(),
        reports.len()
    );
    Ok(reports)
}
