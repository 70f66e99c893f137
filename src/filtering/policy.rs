// src/filtering/policy.rs

use crate::config::FilterConfig;
use std::path::Path;

/// Returns `true` if the walk may enter a directory named `dir_name`.
pub fn should_descend(dir_name: &str, filter: &FilterConfig) -> bool {
    !filter.excluded_dir_names.contains(dir_name)
}

/// Decides whether a file is collected.
///
/// The rules are applied in this order:
///
/// 1.  **Extension:** the extension (compared case-insensitively) must be in
///     `allowed_extensions`, unless `file_name` is listed in `dotfile_exceptions`.
/// 2.  **Name:** `file_name` must not be in `excluded_file_names`.
/// 3.  **Pattern:** `file_name` must not contain any `excluded_name_patterns` substring.
///
/// # Examples
///
/// ```
/// use codecollect::config::FilterConfig;
/// use codecollect::filtering::should_include;
///
/// let filter = FilterConfig::default();
/// assert!(should_include("index.ts", Some("ts"), &filter));
/// assert!(!should_include("App.test.js", Some("js"), &filter)); // name contains "test"
/// assert!(!should_include("notes.md", Some("md"), &filter));    // extension not allowed
/// assert!(should_include(".env", None, &filter));               // dotfile exception
/// ```
pub fn should_include(file_name: &str, extension: Option<&str>, filter: &FilterConfig) -> bool {
    let extension_allowed = extension
        .map(|ext| filter.allowed_extensions.contains(&ext.to_lowercase()))
        .unwrap_or(false);
    if !extension_allowed && !filter.dotfile_exceptions.contains(file_name) {
        return false;
    }

    if filter.excluded_file_names.contains(file_name) {
        return false;
    }

    !filter
        .excluded_name_patterns
        .iter()
        .any(|pattern| file_name.contains(pattern.as_str()))
}

/// Applies [`should_include`] to the final component of `path`.
pub fn should_include_path(path: &Path, filter: &FilterConfig) -> bool {
    let Some(file_name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };
    let extension = path.extension().map(|e| e.to_string_lossy());
    should_include(&file_name, extension.as_deref(), filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn create_test_filter() -> FilterConfig {
        FilterConfig {
            allowed_extensions: set(&["ts", "js", "py"]),
            excluded_dir_names: set(&["node_modules", ".git"]),
            excluded_file_names: set(&["postcss.config.js"]),
            excluded_name_patterns: set(&["test"]),
            dotfile_exceptions: set(&[".env"]),
        }
    }

    #[test]
    fn test_should_descend() {
        let filter = create_test_filter();
        assert!(should_descend("src", &filter));
        assert!(!should_descend("node_modules", &filter));
        assert!(!should_descend(".git", &filter));
        // Exact name match only
        assert!(should_descend("node_modules_backup", &filter));
    }

    #[test]
    fn test_extension_allow_list() {
        let filter = create_test_filter();
        assert!(should_include("a.ts", Some("ts"), &filter));
        assert!(should_include("A.PY", Some("PY"), &filter)); // Case insensitive
        assert!(!should_include("style.css", Some("css"), &filter));
        assert!(!should_include("Makefile", None, &filter));
    }

    #[test]
    fn test_dotfile_exception_bypasses_extension_only() {
        let mut filter = create_test_filter();
        assert!(should_include(".env", None, &filter));
        assert!(!should_include(".envrc", None, &filter));

        // The exception does not override the name-pattern rule.
        filter.excluded_name_patterns.insert("env".to_string());
        assert!(!should_include(".env", None, &filter));
    }

    #[test]
    fn test_excluded_file_names() {
        let filter = create_test_filter();
        assert!(!should_include("postcss.config.js", Some("js"), &filter));
        assert!(should_include("tailwind.config.js", Some("js"), &filter));
    }

    #[test]
    fn test_excluded_name_patterns() {
        let filter = create_test_filter();
        assert!(!should_include("App.test.js", Some("js"), &filter));
        assert!(!should_include("test_utils.py", Some("py"), &filter));
        assert!(!should_include("latest.ts", Some("ts"), &filter)); // Substring match
        assert!(should_include("App.Test.js", Some("js"), &filter)); // Case sensitive
    }

    #[test]
    fn test_should_include_path() {
        let filter = create_test_filter();
        assert!(should_include_path(Path::new("/srv/app/src/index.ts"), &filter));
        assert!(should_include_path(Path::new("/srv/app/.env"), &filter));
        assert!(!should_include_path(Path::new("/srv/app/README.md"), &filter));
    }
}
