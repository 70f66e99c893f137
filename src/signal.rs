// src/signal.rs

//! Provides signal handling for cleanup before shutdown.

use crate::cancellation::{CancellationToken, CleanupRegistry};
use anyhow::{Context, Result};

/// Exit status used when the run is interrupted, matching the shell convention for SIGINT.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Sets up a handler for Ctrl+C (SIGINT) and termination signals.
///
/// When the signal is caught the returned token is cancelled, every temporary
/// file still in `registry` is deleted, and the process exits. The main thread
/// may be blocked waiting on an editor, so the handler does the cleanup itself
/// instead of relying on the pipeline to observe the token.
///
/// # Errors
/// Returns an error if the signal handler cannot be set.
pub fn setup_signal_handler(registry: CleanupRegistry) -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let handler_token = token.clone();

    ctrlc::set_handler(move || {
        log::info!("Interrupt received, removing temporary files before exit.");
        handler_token.cancel();
        let removed = registry.purge();
        log::debug!("Removed {} temporary file(s) on interrupt.", removed.len());
        std::process::exit(INTERRUPTED_EXIT_CODE);
    })
    .context("Failed to set Ctrl+C signal handler")?;

    Ok(token)
}

// Note: Testing signal handlers directly is complex; the cleanup they perform is
// covered by the `CleanupRegistry::purge` tests.
