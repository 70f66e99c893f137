// src/config/parsing.rs

use super::EditorCommand;
use crate::errors::{Error, Result};
use std::collections::HashSet;

/// Normalizes extension strings: trims, strips a leading dot, lowercases.
/// Empty entries are dropped.
pub(super) fn normalize_extensions<I, S>(exts: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    exts.into_iter()
        .map(|s| s.as_ref().trim().trim_start_matches('.').to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Collects names verbatim, dropping empty entries.
pub(super) fn collect_names<I, S>(names: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Splits an editor command line on whitespace into program and arguments.
pub(super) fn parse_editor_command(command: &str) -> Result<EditorCommand> {
    let mut parts = command.split_whitespace().map(String::from);
    let program = parts
        .next()
        .ok_or_else(|| Error::Config("Editor command is empty".to_string()))?;
    Ok(EditorCommand {
        program,
        args: parts.collect(),
    })
}
