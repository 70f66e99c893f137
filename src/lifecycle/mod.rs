//! Owns the life of one root's output document: assembling it, writing it to a
//! temporary file, previewing it, and deleting it once the preview has closed.
//!
//! Each root gets its own [`Lifecycle`]. The only state shared between roots is
//! the [`CleanupRegistry`], which lets an interrupt remove files that are still
//! on storage.

use crate::cancellation::{CancellationToken, CleanupRegistry};
use crate::config::Config;
use crate::constants::{OUTPUT_FILE_EXTENSION, OUTPUT_FILE_PREFIX};
use crate::core_types::OutputDocument;
use crate::errors::{Error, Result};
use crate::output::{assemble_document, tree, writer, Clipboard};
use crate::processing::collect;
use log::{debug, error, info, warn};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

pub mod launcher;

pub use launcher::{
    effective_delete_delay, PlatformLauncher, PreviewExit, PreviewHandle, PreviewLauncher,
};

/// Where a root's output document is in its life.
///
/// The normal path is `Pending → Assembled → Persisted → Previewing → Deleted`.
/// `Failed` is reached when persisting or launching the preview fails. A
/// document whose deletion fails stays `Previewing`; its file is leaked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Pending,
    Assembled,
    Persisted,
    Previewing,
    Deleted,
    Failed,
}

impl LifecycleState {
    fn as_str(self) -> &'static str {
        match self {
            LifecycleState::Pending => "pending",
            LifecycleState::Assembled => "assembled",
            LifecycleState::Persisted => "persisted",
            LifecycleState::Previewing => "previewing",
            LifecycleState::Deleted => "deleted",
            LifecycleState::Failed => "failed",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of processing one root path.
#[derive(Debug, Clone)]
pub struct RootReport {
    pub root: PathBuf,
    /// The temporary file, if the run got far enough to choose one.
    pub output_file: Option<PathBuf>,
    /// The state the lifecycle ended in.
    pub state: LifecycleState,
    pub files_collected: usize,
    /// A description of the failure that ended the lifecycle early.
    pub error: Option<String>,
}

impl RootReport {
    /// `true` if the root ran to its expected end without an error.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Name of the temporary output file for `root`: `Output_<last segment>.txt`.
///
/// A root without a final segment (a filesystem root) is named `root`.
///
/// ```
/// use codecollect::lifecycle::output_file_name;
/// use std::path::Path;
///
/// assert_eq!(output_file_name(Path::new("/home/dev/my-app")), "Output_my-app.txt");
/// ```
pub fn output_file_name(root: &Path) -> String {
    let segment = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "root".to_string());
    format!(
        "{}{}.{}",
        OUTPUT_FILE_PREFIX, segment, OUTPUT_FILE_EXTENSION
    )
}

/// Full path of the temporary output file for `root` inside `output_dir`.
pub fn output_path(root: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(output_file_name(root))
}

/// Removes an output file.
///
/// Returns `Ok(false)` if the file was already gone, which counts as success.
pub fn delete_output(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!("Deleted {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("{} not found, nothing to delete", path.display());
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// The state machine for one root's output document.
#[derive(Debug)]
pub struct Lifecycle<'a> {
    root: &'a Path,
    config: &'a Config,
    registry: &'a CleanupRegistry,
    output_path: PathBuf,
    state: LifecycleState,
    document: Option<OutputDocument>,
    files_collected: usize,
    delete_delay: Duration,
}

impl<'a> Lifecycle<'a> {
    pub fn new(root: &'a Path, config: &'a Config, registry: &'a CleanupRegistry) -> Self {
        Self {
            root,
            config,
            registry,
            output_path: output_path(root, &config.output_dir),
            state: LifecycleState::Pending,
            document: None,
            files_collected: 0,
            delete_delay: Duration::ZERO,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// The assembled document, once [`Lifecycle::assemble`] has run.
    pub fn document(&self) -> Option<&OutputDocument> {
        self.document.as_ref()
    }

    fn expect_state(&self, expected: LifecycleState, action: &'static str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(Error::InvalidTransition {
                action,
                state: self.state.as_str(),
            })
        }
    }

    /// `Pending → Assembled`: renders the tree and collects the contents side by
    /// side, then joins them into the document.
    ///
    /// # Errors
    /// A root that is missing or not a directory moves the lifecycle to
    /// `Failed` with `Error::InvalidRoot`. Returns `Error::Interrupted` if the
    /// collection was cancelled; the state stays `Pending`.
    #[tracing::instrument(skip_all, fields(root = %self.root.display()))]
    pub fn assemble(&mut self, token: &CancellationToken) -> Result<()> {
        self.expect_state(LifecycleState::Pending, "assemble")?;

        if !self.root.is_dir() {
            self.state = LifecycleState::Failed;
            return Err(Error::InvalidRoot(self.root.to_path_buf()));
        }

        let (root, config) = (self.root, self.config);
        let (tree, files) = rayon::join(
            || tree::render(root, config),
            || collect(root, config, token),
        );
        let files = files?;

        self.files_collected = files.len();
        self.document = Some(assemble_document(&files, &tree));
        self.state = LifecycleState::Assembled;
        debug!(
            "Assembled document for {} from {} file(s)",
            self.root.display(),
            self.files_collected
        );
        Ok(())
    }

    /// `Assembled → Persisted`: writes the document to the output file and
    /// registers it for interrupt cleanup.
    ///
    /// # Errors
    /// A write failure moves the lifecycle to `Failed`. If the registry was
    /// already purged by an interrupt, the fresh file is removed again and
    /// `Error::Interrupted` is returned.
    #[tracing::instrument(skip_all, fields(root = %self.root.display()))]
    pub fn persist(&mut self) -> Result<()> {
        self.expect_state(LifecycleState::Assembled, "persist")?;
        let body = self
            .document
            .as_ref()
            .map(|doc| doc.body.as_str())
            .unwrap_or_default();

        if let Err(e) = writer::write_document(&self.output_path, body) {
            self.state = LifecycleState::Failed;
            return Err(e);
        }

        if !self.registry.register(&self.output_path) {
            if let Err(e) = delete_output(&self.output_path) {
                warn!("Could not remove {}: {}", self.output_path.display(), e);
            }
            self.state = LifecycleState::Failed;
            return Err(Error::Interrupted);
        }

        self.state = LifecycleState::Persisted;
        info!("Wrote {}", self.output_path.display());
        Ok(())
    }

    /// `Persisted → Previewing`: optionally copies the document to the
    /// clipboard, then starts the preview program.
    ///
    /// Clipboard failures are logged and otherwise ignored.
    ///
    /// # Errors
    /// A launch failure moves the lifecycle to `Failed` and leaves the file on
    /// storage for inspection.
    #[tracing::instrument(skip_all, fields(root = %self.root.display()))]
    pub fn preview(
        &mut self,
        launcher: &dyn PreviewLauncher,
        clipboard: &dyn Clipboard,
    ) -> Result<PreviewHandle> {
        self.expect_state(LifecycleState::Persisted, "preview")?;

        if self.config.clipboard {
            if let Some(doc) = &self.document {
                match clipboard.copy(&doc.body) {
                    Ok(()) => info!("Copied {} to the clipboard", self.output_path.display()),
                    Err(e) => warn!("Clipboard copy failed: {}", e),
                }
            }
        }

        match launcher.launch(&self.output_path) {
            Ok(handle) => {
                self.delete_delay = effective_delete_delay(self.config.delete_delay, launcher);
                self.state = LifecycleState::Previewing;
                Ok(handle)
            }
            Err(e) => {
                self.registry.forget(&self.output_path);
                self.state = LifecycleState::Failed;
                Err(e)
            }
        }
    }

    /// `Previewing → Deleted`: waits for the preview to close, pauses for the
    /// configured delay (or the launcher's default), then deletes the output file.
    ///
    /// # Errors
    /// A deletion failure is returned and the lifecycle stays `Previewing`.
    #[tracing::instrument(skip_all, fields(root = %self.root.display()))]
    pub fn finish(&mut self, handle: PreviewHandle) -> Result<()> {
        self.expect_state(LifecycleState::Previewing, "finish")?;

        match handle.wait() {
            PreviewExit::Exited(code) => debug!("Preview closed (exit code {:?})", code),
            PreviewExit::WaitFailed(reason) => warn!("Preview ended abnormally: {}", reason),
        }

        if !self.delete_delay.is_zero() {
            debug!("Waiting {:?} before deleting", self.delete_delay);
            thread::sleep(self.delete_delay);
        }

        match delete_output(&self.output_path) {
            Ok(_) => {
                self.registry.forget(&self.output_path);
                self.state = LifecycleState::Deleted;
                Ok(())
            }
            Err(e) => {
                error!(
                    "Could not delete {}, leaving it behind: {}",
                    self.output_path.display(),
                    e
                );
                Err(crate::errors::io_error_with_path(e, &self.output_path))
            }
        }
    }

    fn report(&self, error: Option<&Error>) -> RootReport {
        let output_file = match self.state {
            LifecycleState::Pending | LifecycleState::Assembled => None,
            LifecycleState::Failed if self.document.is_none() => None,
            _ => Some(self.output_path.clone()),
        };
        RootReport {
            root: self.root.to_path_buf(),
            output_file,
            state: self.state,
            files_collected: self.files_collected,
            error: error.map(|e| e.to_string()),
        }
    }
}

/// Runs the full lifecycle for one root and reports how it ended.
///
/// Failures are contained in the report; they never affect other roots.
pub fn run_root(
    root: &Path,
    config: &Config,
    token: &CancellationToken,
    registry: &CleanupRegistry,
    launcher: &dyn PreviewLauncher,
    clipboard: &dyn Clipboard,
) -> RootReport {
    let mut lifecycle = Lifecycle::new(root, config, registry);
    let result = lifecycle
        .assemble(token)
        .and_then(|_| lifecycle.persist())
        .and_then(|_| lifecycle.preview(launcher, clipboard))
        .and_then(|handle| lifecycle.finish(handle));

    if let Err(e) = &result {
        error!("{}: {}", root.display(), e);
    }
    lifecycle.report(result.as_ref().err())
}

/// Assembles the document for one root and writes it to `out` instead of a file.
///
/// Nothing is persisted, previewed or copied; the report ends in `Assembled`.
pub fn dry_run_root(
    root: &Path,
    config: &Config,
    token: &CancellationToken,
    out: &mut dyn Write,
) -> RootReport {
    let registry = CleanupRegistry::new();
    let mut lifecycle = Lifecycle::new(root, config, &registry);
    let result = lifecycle.assemble(token).and_then(|_| {
        let body = lifecycle
            .document()
            .map(|doc| doc.body.as_str())
            .unwrap_or_default();
        writer::write_dry_run_output(out, &output_file_name(root), body)
            .map_err(|e| crate::errors::io_error_with_path(e, "<stdout>"))
    });

    if let Err(e) = &result {
        error!("{}: {}", root.display(), e);
    }
    lifecycle.report(result.as_ref().err())
}
