// src/output/tree.rs

use crate::config::Config;
use crate::constants::{BLANK_INDENT, BRANCH, LAST_BRANCH, PIPE_INDENT};
use crate::discovery::list_visible;
use log::warn;
use std::path::Path;

/// Renders the filtered hierarchy below `root` as an indented ASCII tree.
///
/// The root itself has no line; its visible children start at column zero.
/// Every line ends with `\n`. `└── ` marks the last visible sibling, and the
/// children of an entry are indented with four spaces under a last sibling and
/// with `|   ` otherwise. A directory whose listing fails keeps its own line but
/// gets no children.
///
/// # Examples
///
/// ```
/// use codecollect::{render_tree, Config};
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempdir()?;
/// fs::create_dir(temp.path().join("src"))?;
/// fs::write(temp.path().join("src/a.ts"), "")?;
/// fs::write(temp.path().join("main.go"), "")?;
///
/// let tree = render_tree(temp.path(), &Config::new_for_test());
/// assert_eq!(tree, "├── main.go\n└── src\n    └── a.ts\n");
/// # Ok(())
/// # }
/// ```
pub fn render(root: &Path, config: &Config) -> String {
    let mut tree = String::new();
    render_dir(root, "", config, &mut tree);
    tree
}

fn render_dir(dir: &Path, prefix: &str, config: &Config, tree: &mut String) {
    let entries = match list_visible(dir, &config.filter, config.listing_order) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot list directory '{}' for the tree: {}", dir.display(), e);
            return;
        }
    };

    let count = entries.len();
    for (index, entry) in entries.iter().enumerate() {
        let is_last = index + 1 == count;
        tree.push_str(prefix);
        tree.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        tree.push_str(&entry.name);
        tree.push('\n');

        if entry.is_dir {
            let child_prefix = format!(
                "{}{}",
                prefix,
                if is_last { BLANK_INDENT } else { PIPE_INDENT }
            );
            render_dir(&entry.path, &child_prefix, config, tree);
        }
    }
}
