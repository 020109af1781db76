//! Document store trait definition.
//!
//! The entry store never touches the filesystem directly; it reads and
//! replaces one opaque document through this trait.

use crate::error::Result;

/// Backing storage for the serialized brew collection.
///
/// All implementations must ensure:
/// - `write` replaces the whole document or leaves the previous one intact
/// - `read` returns exactly the bytes of the last successful `write`
pub trait DocumentStore {
    /// Read the current document.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if no document has been written yet.
    ///
    /// # Errors
    ///
    /// Returns `BrewLogError::Storage` if the document exists but cannot be read.
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the document with `bytes`.
    ///
    /// # Errors
    ///
    /// Returns `BrewLogError::Storage` if:
    /// - The parent location cannot be created
    /// - The write or the final replace fails
    fn write(&self, bytes: &[u8]) -> Result<()>;

    /// Human-readable location for diagnostics.
    fn location(&self) -> String;
}

impl<D: DocumentStore + ?Sized> DocumentStore for &D {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        (**self).read()
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        (**self).write(bytes)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn(_store: &dyn DocumentStore) {}
    }
}
