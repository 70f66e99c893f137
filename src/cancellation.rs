//! Provides a token-based mechanism for graceful cancellation, and the registry
//! of temporary files that must be removed when the run is cut short.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// A token that can be used to signal cancellation to long-running operations.
///
/// This struct is a cloneable, thread-safe wrapper around an `Arc<AtomicBool>`.
///
/// # Examples
///
/// ```
/// use codecollect::CancellationToken;
///
/// let token = CancellationToken::new();
/// let token_clone = token.clone();
/// assert!(!token_clone.is_cancelled());
///
/// token.cancel();
/// assert!(token_clone.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a new `CancellationToken` in a non-cancelled state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AtomicBool::new(false)), // false means not cancelled
        }
    }

    /// Signals cancellation to this token and all of its clones.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    /// Checks if the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
struct RegistryState {
    files: HashSet<PathBuf>,
    closed: bool,
}

/// The set of temporary output files that currently exist on storage.
///
/// Every lifecycle registers its file right after persisting it and forgets it
/// once the file is deleted. On interrupt, [`CleanupRegistry::purge`] removes
/// whatever is still registered and closes the registry, so a lifecycle that
/// persists afterwards learns it must clean up on its own.
#[derive(Debug, Clone, Default)]
pub struct CleanupRegistry {
    inner: Arc<Mutex<RegistryState>>,
}

impl CleanupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means another pipeline panicked; the set is still usable.
    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Records a persisted file. Returns `false` if the registry was already purged.
    pub fn register(&self, path: &Path) -> bool {
        let mut state = self.lock();
        if state.closed {
            return false;
        }
        state.files.insert(path.to_path_buf());
        true
    }

    /// Forgets a file that its lifecycle has removed.
    pub fn forget(&self, path: &Path) {
        self.lock().files.remove(path);
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.lock().files.contains(path)
    }

    pub fn len(&self) -> usize {
        self.lock().files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deletes every registered file and closes the registry.
    ///
    /// Returns the paths that were actually removed. Missing files are ignored;
    /// other failures are logged and the file is left behind.
    pub fn purge(&self) -> Vec<PathBuf> {
        let mut state = self.lock();
        state.closed = true;
        let mut removed = Vec::new();
        for path in state.files.drain() {
            match fs::remove_file(&path) {
                Ok(()) => {
                    log::info!("Removed temporary file {}", path.display());
                    removed.push(path);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    log::error!("Could not remove {}: {}", path.display(), e);
                }
            }
        }
        removed
    }
}
