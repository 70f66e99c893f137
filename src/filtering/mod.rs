// src/filtering/mod.rs

//! Provides the filter policy: pure predicates deciding which directories are
//! entered and which files are collected.
//!
//! The tree renderer and the content aggregator both reach these functions
//! through `discovery::list_visible`, so the two outputs always agree on what
//! is excluded.

mod policy;

pub use policy::{should_descend, should_include, should_include_path};
