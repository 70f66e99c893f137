// src/output/writer.rs

//! Writes assembled documents to their destination: a temporary output file,
//! or stdout for a dry run.

use crate::errors::{io_error_with_path, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Creates (or truncates) `path` and writes `body` to it.
///
/// # Errors
/// Returns `Error::Io` carrying `path` if the file cannot be created or written.
pub fn write_document(path: &Path, body: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(body.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| io_error_with_path(e, path))
}

/// Writes a dry-run rendition of one document to `writer`.
///
/// The document is framed by marker lines naming the file it would have been
/// written to.
pub fn write_dry_run_output(writer: &mut dyn Write, file_name: &str, body: &str) -> io::Result<()> {
    writeln!(writer, "--- Dry Run: {} ---", file_name)?;
    writer.write_all(body.as_bytes())?;
    if !body.ends_with('\n') {
        writeln!(writer)?;
    }
    writeln!(writer, "--- End Dry Run ---")?;
    writer.flush()
}
