// src/output/assemble.rs

use crate::constants::{CONTENT_SEPARATOR, TREE_HEADER};
use crate::core_types::{AggregatedFile, OutputDocument};

/// Joins the file entries with blank lines and appends the file tree.
///
/// The result is `contents.join("\n\n\n") + "\n\n// File Tree:\n" + tree`,
/// with `tree` copied verbatim.
///
/// ```
/// use codecollect::output::assemble;
///
/// let doc = assemble(&["//a.js\n1".to_string(), "//b.js\n2".to_string()], "├── a.js\n└── b.js\n");
/// assert_eq!(doc, "//a.js\n1\n\n\n//b.js\n2\n\n// File Tree:\n├── a.js\n└── b.js\n");
/// ```
pub fn assemble(contents: &[String], tree: &str) -> String {
    let mut document = contents.join(CONTENT_SEPARATOR);
    document.push_str(TREE_HEADER);
    document.push_str(tree);
    document
}

/// Builds the document for one root from its collected files and rendered tree.
pub fn assemble_document(files: &[AggregatedFile], tree: &str) -> OutputDocument {
    let contents: Vec<String> = files.iter().map(AggregatedFile::to_entry).collect();
    OutputDocument {
        body: assemble(&contents, tree),
    }
}
