//! Storage layer for the brew document.
//!
//! This module provides:
//! - The `DocumentStore` trait the entry store persists through
//! - `FileDocument`, an atomically replaced JSON file
//! - `MemoryDocument`, a shared in-memory buffer for tests and embedding

mod file;
mod memory;
mod traits;

pub use file::{FileDocument, DEFAULT_FILENAME};
pub use memory::MemoryDocument;
pub use traits::DocumentStore;
