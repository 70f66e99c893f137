//! Handles the content collection stage of the pipeline.
//!
//! This module walks a root directory through the shared listing, reads every
//! included file as UTF-8 and records it together with its display path.
//! Failures are contained: an unreadable file is skipped and an unlistable
//! directory truncates only its own subtree.

use crate::cancellation::CancellationToken;
use crate::config::Config;
use crate::core_types::AggregatedFile;
use crate::discovery::list_visible;
use crate::errors::{Error, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};

mod content_reader;

use content_reader::read_file_content;

/// Collects every included file below `root`, in traversal order.
///
/// Directories are visited depth-first in the order produced by
/// [`list_visible`], which is also the order the tree renderer uses. Each file's
/// `relative_path` is computed against `config.display_base`.
///
/// # Errors
/// Returns `Error::Interrupted` if `token` is cancelled. The token is checked
/// before each directory is listed. Read and listing failures are logged and
/// never returned.
///
/// # Examples
///
/// ```
/// use codecollect::{collect, CancellationToken, Config};
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::create_dir(temp.path().join("src"))?;
/// fs::write(temp.path().join("src/a.ts"), "export {}")?;
///
/// let mut config = Config::new_for_test();
/// config.display_base = temp.path().to_path_buf();
///
/// let files = collect(temp.path(), &config, &CancellationToken::new())?;
/// assert_eq!(files.len(), 1);
/// assert_eq!(files[0].to_entry(), format!("//src{}a.ts\nexport {{}}", std::path::MAIN_SEPARATOR));
/// # Ok(())
/// # }
/// ```
pub fn collect(
    root: &Path,
    config: &Config,
    token: &CancellationToken,
) -> Result<Vec<AggregatedFile>> {
    let mut files = Vec::new();
    collect_dir(root, config, token, &mut files)?;
    debug!(
        "Collected {} file(s) under {}",
        files.len(),
        root.display()
    );
    Ok(files)
}

fn collect_dir(
    dir: &Path,
    config: &Config,
    token: &CancellationToken,
    files: &mut Vec<AggregatedFile>,
) -> Result<()> {
    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }

    let entries = match list_visible(dir, &config.filter, config.listing_order) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot list directory '{}': {}", dir.display(), e);
            return Ok(());
        }
    };

    for entry in entries {
        if entry.is_dir {
            collect_dir(&entry.path, config, token, files)?;
            continue;
        }
        match read_file_content(&entry.path) {
            Ok(content) => files.push(AggregatedFile {
                relative_path: display_path(&entry.path, &config.display_base),
                content,
            }),
            Err(e) => warn!("Skipping file: {}", e),
        }
    }
    Ok(())
}

/// Path of `file` relative to `base`, or `file` itself when no relative form exists.
fn display_path(file: &Path, base: &Path) -> PathBuf {
    pathdiff::diff_paths(file, base).unwrap_or_else(|| file.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn config_for(base: &Path) -> Config {
        let mut config = Config::new_for_test();
        config.display_base = base.to_path_buf();
        config
    }

    fn paths(files: &[AggregatedFile]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.relative_path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_collect_depth_first_sorted() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path().join("proj");
        fs::create_dir_all(root.join("src/util"))?;
        fs::write(root.join("z.go"), "package z")?;
        fs::write(root.join("src/b.ts"), "b")?;
        fs::write(root.join("src/util/a.ts"), "a")?;
        fs::write(root.join("src/a.ts"), "a")?;

        let files = collect(&root, &config_for(temp.path()), &CancellationToken::new())?;
        assert_eq!(
            paths(&files),
            ["proj/src/a.ts", "proj/src/b.ts", "proj/src/util/a.ts", "proj/z.go"]
        );
        Ok(())
    }

    #[test]
    fn test_excluded_directory_contents_never_collected() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir_all(temp.path().join("node_modules/lib"))?;
        fs::write(temp.path().join("node_modules/lib/index.js"), "x")?;
        fs::write(temp.path().join("main.js"), "y")?;

        let files = collect(temp.path(), &config_for(temp.path()), &CancellationToken::new())?;
        assert_eq!(paths(&files), ["main.js"]);
        Ok(())
    }

    #[test]
    fn test_unreadable_file_is_skipped() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.js"), [0xff, 0xfe, 0x00])?;
        fs::write(temp.path().join("b.js"), "ok")?;

        let files = collect(temp.path(), &config_for(temp.path()), &CancellationToken::new())?;
        assert_eq!(paths(&files), ["b.js"]);
        assert_eq!(files[0].content, "ok");
        Ok(())
    }

    #[test]
    fn test_missing_root_yields_nothing() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let files = collect(
            &temp.path().join("gone"),
            &config_for(temp.path()),
            &CancellationToken::new(),
        )?;
        assert!(files.is_empty());
        Ok(())
    }

    #[test]
    fn test_cancelled_token_interrupts() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.js"), "a")?;
        let token = CancellationToken::new();
        token.cancel();

        let result = collect(temp.path(), &config_for(temp.path()), &token);
        assert!(matches!(result, Err(Error::Interrupted)));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_display_path_outside_base() {
        let path = display_path(Path::new("/srv/app/a.ts"), Path::new("/srv/other"));
        assert_eq!(path, PathBuf::from("../app/a.ts"));
    }
}
