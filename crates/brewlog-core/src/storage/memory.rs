//! In-memory document store.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{BrewLogError, Result};
use crate::storage::traits::DocumentStore;

#[derive(Debug, Default)]
struct Shared {
    bytes: RefCell<Option<Vec<u8>>>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

/// A document held in memory.
///
/// Clones share the same buffer, so a second store opened over a clone sees
/// what the first one wrote, the same as reopening a file.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    shared: Rc<Shared>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `bytes` already present.
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        let doc = Self::new();
        doc.shared.bytes.replace(Some(bytes.into()));
        doc
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.shared.fail_writes.set(fail);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.shared.writes.get()
    }

    pub fn contents(&self) -> Option<Vec<u8>> {
        self.shared.bytes.borrow().clone()
    }
}

impl DocumentStore for MemoryDocument {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.contents())
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        if self.shared.fail_writes.get() {
            return Err(BrewLogError::Storage(
                "Simulated write failure".to_string(),
            ));
        }
        self.shared.bytes.replace(Some(bytes.to_vec()));
        self.shared.writes.set(self.shared.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_contents() {
        let doc = MemoryDocument::new();
        let other = doc.clone();

        doc.write(b"[]").unwrap();

        assert_eq!(other.read().unwrap().as_deref(), Some(&b"[]"[..]));
        assert_eq!(other.write_count(), 1);
    }

    #[test]
    fn test_failed_write_keeps_previous_contents() {
        let doc = MemoryDocument::with_contents("old");
        doc.fail_writes(true);

        assert!(doc.write(b"new").is_err());
        assert_eq!(doc.contents().as_deref(), Some(&b"old"[..]));
        assert_eq!(doc.write_count(), 0);
    }
}
