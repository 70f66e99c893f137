//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the errors that can
//! end a root's pipeline, offering more context than a bare `std::io::Error`.
//! Errors that only truncate a walk (unreadable files, unlistable directories)
//! are logged where they happen and never reach this type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by clipboard operations.
///
/// `arboard::Error` is flattened to a string so this type does not depend on the
/// `clipboard` feature.
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The system clipboard could not be opened.
    #[error("Failed to initialize clipboard: {0}")]
    Initialization(String),
    /// The clipboard was opened but refused the text.
    #[error("Failed to set clipboard content: {0}")]
    SetContent(String),
    /// The crate was built without the `clipboard` feature.
    #[error("Clipboard support is not compiled in")]
    Unavailable,
}

/// Application-specific errors used throughout `codecollect`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A configuration file exists but is not valid TOML for this tool.
    #[error("Failed to parse configuration file '{}': {source}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The preview program could not be started.
    #[error("Failed to launch preview program '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A configured root path is missing or is not a directory.
    #[error("Root path '{}' is not a directory", .0.display())]
    InvalidRoot(PathBuf),

    /// A lifecycle step was requested from a state that does not allow it.
    #[error("Cannot {action} while the output is {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,

    /// Neither the command line nor the configuration file named a root path.
    #[error("No root paths configured.")]
    NoRoots,
}

/// Specialized `Result` for `codecollect` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.txt");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = io_error_with_path(source_error, &path);

        match error {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Error::Io"),
        }
    }

    #[test]
    fn test_io_error_display_mentions_path() {
        let error = io_error_with_path(
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
            "out/Output_app.txt",
        );
        let message = error.to_string();
        assert!(message.contains("out/Output_app.txt"));
        assert!(message.contains("Access denied"));
    }

    #[test]
    fn test_clipboard_error_messages() {
        assert_eq!(
            ClipboardError::Unavailable.to_string(),
            "Clipboard support is not compiled in"
        );
        assert!(ClipboardError::SetContent("busy".to_string())
            .to_string()
            .contains("busy"));
    }

    #[test]
    fn test_invalid_root_message_names_path() {
        let error = Error::InvalidRoot(PathBuf::from("/srv/gone"));
        assert_eq!(error.to_string(), "Root path '/srv/gone' is not a directory");
    }
}
