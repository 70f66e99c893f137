//! The `codecollect` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `codecollect` library.
//!
//! # Example
//!
//! ```
//! use codecollect::prelude::*;
//! use tempfile::tempdir;
//!
//! # fn main() -> Result<()> {
//! let temp = tempdir().unwrap();
//! let config = ConfigBuilder::new().root(temp.path()).dry_run(true).build()?;
//! let token = CancellationToken::new();
//!
//! let files = collect(&config.roots[0], &config, &token)?;
//! assert!(files.is_empty());
//! # Ok(())
//! # }
//! ```

pub use crate::cancellation::{CancellationToken, CleanupRegistry};
pub use crate::config::{Config, ConfigBuilder, FilterConfig, ListingOrder};
pub use crate::core_types::{AggregatedFile, ListedEntry, OutputDocument};
pub use crate::discovery::list_visible;
pub use crate::errors::{Error, Result};
pub use crate::filtering::{should_descend, should_include};
pub use crate::lifecycle::{
    LifecycleState, PlatformLauncher, PreviewExit, PreviewHandle, PreviewLauncher, RootReport,
};
pub use crate::output::{assemble, assemble_document, Clipboard, SystemClipboard};
pub use crate::{collect, render_tree, run};
