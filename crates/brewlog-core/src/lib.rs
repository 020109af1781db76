//! # Brewlog Core
//!
//! Core library for Brewlog - a personal coffee-brew log.
//!
//! This crate provides the entry model, its JSON document format, and the
//! store that keeps the in-memory history mirrored to disk, independent of
//! any front end.
//!
//! ## Architecture
//!
//! - **entry**: Brew entry model and the builder callers fill in
//! - **codec**: JSON document encoding and lenient decoding
//! - **storage**: Document store trait with file and in-memory backends
//! - **store**: The ordered entry collection with mutate-then-flush persistence
//! - **ratio**: Brew ratio arithmetic and common presets

pub mod codec;
pub mod entry;
pub mod error;
pub mod fs;
pub mod ratio;
pub mod storage;
pub mod store;
mod timestamp;

pub use entry::{BrewEntry, NewBrewEntry};
pub use error::{BrewLogError, Result};
pub use storage::{DocumentStore, FileDocument, MemoryDocument};
pub use store::{EntryStore, LoadOutcome, SyncState};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
