// src/output/mod.rs

//! Produces the output document: the ASCII file tree, the assembled body, and
//! the destinations it is delivered to.

mod assemble;
pub mod clipboard;
pub mod tree;
pub mod writer;

pub use assemble::{assemble, assemble_document};
pub use clipboard::{Clipboard, SystemClipboard};
