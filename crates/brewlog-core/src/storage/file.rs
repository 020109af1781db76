//! File-backed document store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{BrewLogError, Result};
use crate::storage::traits::DocumentStore;

/// Fixed filename of the brew document inside the data directory.
pub const DEFAULT_FILENAME: &str = "coffees.json";

/// A JSON document at a fixed path, replaced atomically on every write.
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
}

impl FileDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Document named `coffees.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for FileDocument {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BrewLogError::Storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                err
            ))),
        }
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        crate::fs::write_atomic(&self.path, bytes).map_err(|e| {
            BrewLogError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let doc = FileDocument::in_dir(dir.path());
        assert!(doc.read().unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let doc = FileDocument::in_dir(dir.path());

        doc.write(b"[1]").unwrap();
        doc.write(b"[2]").unwrap();

        assert_eq!(doc.read().unwrap().as_deref(), Some(&b"[2]"[..]));
        assert!(doc.path().ends_with(DEFAULT_FILENAME));
    }

    #[test]
    fn test_reading_a_directory_is_a_storage_error() {
        let dir = tempdir().unwrap();
        let doc = FileDocument::new(dir.path());
        assert!(matches!(doc.read(), Err(BrewLogError::Storage(_))));
    }
}
