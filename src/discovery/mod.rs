//! Lists the visible children of a directory.
//!
//! Both the tree renderer and the content aggregator obtain children only
//! through [`list_visible`], so they agree on what is excluded and in which
//! order entries appear.
use crate::config::{FilterConfig, ListingOrder};
use crate::core_types::ListedEntry;
use std::fs;
use std::io;
use std::path::Path;

mod entry_processor;

use entry_processor::process_direntry;

/// Reads `dir` and returns the children that pass the filter policy.
///
/// Excluded directories and non-included files are dropped. Entries that
/// cannot be inspected are logged and skipped; only a failure to open the
/// directory itself is returned as an error, which callers treat as a
/// truncated subtree.
///
/// With [`ListingOrder::Sorted`] the entries are ordered by name; with
/// [`ListingOrder::Native`] they keep the order the operating system reports.
///
/// # Examples
///
/// ```
/// use codecollect::config::{FilterConfig, ListingOrder};
/// use codecollect::discovery::list_visible;
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::write(temp.path().join("b.ts"), "")?;
/// fs::write(temp.path().join("a.js"), "")?;
/// fs::write(temp.path().join("notes.md"), "")?;
/// fs::create_dir(temp.path().join("node_modules"))?;
///
/// let entries = list_visible(temp.path(), &FilterConfig::default(), ListingOrder::Sorted)?;
/// let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, ["a.js", "b.ts"]);
/// # Ok(())
/// # }
/// ```
pub fn list_visible(
    dir: &Path,
    filter: &FilterConfig,
    order: ListingOrder,
) -> io::Result<Vec<ListedEntry>> {
    let mut entries: Vec<ListedEntry> = fs::read_dir(dir)?
        .filter_map(|entry_result| process_direntry(entry_result, dir, filter))
        .collect();

    if order == ListingOrder::Sorted {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
    }

    log::trace!(
        "Listed {} visible entries in {}",
        entries.len(),
        dir.display()
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::tempdir;

    fn names(entries: &[ListedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_sorted_listing_applies_policy() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        fs::create_dir(root.join("src"))?;
        fs::create_dir(root.join(".git"))?;
        fs::create_dir(root.join("dist"))?;
        fs::write(root.join("index.ts"), "")?;
        fs::write(root.join("App.test.js"), "")?;
        fs::write(root.join("postcss.config.js"), "")?;
        fs::write(root.join("README.md"), "")?;
        fs::write(root.join(".env"), "KEY=1")?;

        let entries = list_visible(root, &FilterConfig::default(), ListingOrder::Sorted)?;
        assert_eq!(names(&entries), [".env", "index.ts", "src"]);
        assert!(entries[2].is_dir);
        Ok(())
    }

    #[test]
    fn test_native_listing_has_same_members() -> anyhow::Result<()> {
        let temp = tempdir()?;
        for name in ["c.py", "a.py", "b.py"] {
            fs::write(temp.path().join(name), "")?;
        }

        let entries = list_visible(temp.path(), &FilterConfig::default(), ListingOrder::Native)?;
        let members: HashSet<&str> = names(&entries).into_iter().collect();
        assert_eq!(members, HashSet::from(["a.py", "b.py", "c.py"]));
        Ok(())
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp = tempdir().unwrap();
        let result = list_visible(
            &temp.path().join("gone"),
            &FilterConfig::default(),
            ListingOrder::Sorted,
        );
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_not_descended() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();
        fs::create_dir(root.join("real"))?;
        std::os::unix::fs::symlink(root, root.join("loop"))?;

        let entries = list_visible(root, &FilterConfig::default(), ListingOrder::Sorted)?;
        // The symlink is treated as a file named "loop" with no extension, so it is hidden.
        assert_eq!(names(&entries), ["real"]);
        Ok(())
    }
}
