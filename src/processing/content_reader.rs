// src/processing/content_reader.rs

use crate::errors::{io_error_with_path, Result};
use std::{fs, path::Path};

/// Reads the entire content of a file into a String.
///
/// Invalid UTF-8 is reported as an `InvalidData` I/O error, like any other read failure.
pub(super) fn read_file_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))
}
