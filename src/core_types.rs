//! Defines core data structures used throughout the application pipeline.
//!
//! None of these values outlive the processing of one root path.

use std::path::PathBuf;

/// A visible child of a directory, as produced by `discovery::list_visible`.
///
/// # Examples
///
/// ```
/// use codecollect::core_types::ListedEntry;
/// use std::path::PathBuf;
///
/// let entry = ListedEntry {
///     name: "main.go".to_string(),
///     path: PathBuf::from("/srv/app/main.go"),
///     is_dir: false,
/// };
/// assert!(!entry.is_dir);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    /// The entry's file name, lossily converted to UTF-8.
    pub name: String,
    /// The absolute path of the entry.
    pub path: PathBuf,
    /// Whether the entry is a directory. Symlinks are never directories.
    pub is_dir: bool,
}

/// One collected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedFile {
    /// The file path relative to the display base (normally the working directory).
    pub relative_path: PathBuf,
    /// The full text of the file.
    pub content: String,
}

impl AggregatedFile {
    /// Renders the file as it appears in the document: a `//<path>` comment line
    /// followed by the raw content.
    ///
    /// ```
    /// use codecollect::core_types::AggregatedFile;
    /// use std::path::PathBuf;
    ///
    /// let file = AggregatedFile {
    ///     relative_path: PathBuf::from("src/a.ts"),
    ///     content: "export {}".to_string(),
    /// };
    /// assert_eq!(file.to_entry(), "//src/a.ts\nexport {}");
    /// ```
    pub fn to_entry(&self) -> String {
        format!(
            "{}{}\n{}",
            crate::constants::PATH_COMMENT_PREFIX,
            self.relative_path.display(),
            self.content
        )
    }
}

/// The assembled document for one root path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputDocument {
    pub body: String,
}
