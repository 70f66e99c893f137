// src/discovery/entry_processor.rs

use crate::config::FilterConfig;
use crate::core_types::ListedEntry;
use crate::filtering::{should_descend, should_include_path};
use log::{trace, warn};
use std::fs::DirEntry;
use std::io;
use std::path::Path;

/// Classifies a single directory entry from a listing.
///
/// Returns `Some(ListedEntry)` if the entry is visible under the filter policy,
/// `None` if it is filtered out or could not be inspected (the latter is logged).
/// The entry type is read without following symlinks, so a symlink is treated
/// as a file and is included only if its own name passes the file rules.
pub(super) fn process_direntry(
    entry_result: io::Result<DirEntry>,
    dir: &Path,
    filter: &FilterConfig,
) -> Option<ListedEntry> {
    // --- 1. Handle Listing Errors ---
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(e) => {
            warn!("Skipping unreadable entry in '{}': {}", dir.display(), e);
            return None;
        }
    };

    let path = entry.path();
    let name = entry.file_name().to_string_lossy().into_owned();

    // --- 2. Determine Type ---
    let is_dir = match entry.file_type() {
        Ok(file_type) => file_type.is_dir(),
        Err(e) => {
            warn!(
                "Skipping entry '{}' due to file type error: {}",
                path.display(),
                e
            );
            return None;
        }
    };

    // --- 3. Apply Filter Policy ---
    if is_dir {
        if !should_descend(&name, filter) {
            trace!("Skipping excluded directory: {}", path.display());
            return None;
        }
    } else if !should_include_path(&path, filter) {
        trace!("Skipping filtered file: {}", path.display());
        return None;
    }

    Some(ListedEntry { name, path, is_dir })
}
