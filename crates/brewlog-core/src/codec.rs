//! JSON document codec.
//!
//! The document is a single JSON array of entry objects in display order.
//! Decoding ignores unknown keys and treats missing optional keys as absent,
//! so documents written by older or newer builds stay loadable. A missing
//! required key fails the whole decode.

use crate::entry::BrewEntry;
use crate::error::{BrewLogError, Result};

/// Serialize the full collection as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns `BrewLogError::Validation` if an entry holds a non-finite
/// `grams_used`. JSON has no such number and `serde_json` would write `null`,
/// which no longer decodes.
pub fn encode(entries: &[BrewEntry]) -> Result<Vec<u8>> {
    if let Some(entry) = entries.iter().find(|e| !e.grams_used.is_finite()) {
        return Err(BrewLogError::Validation(format!(
            "Entry {} has a non-finite gramsUsed ({})",
            entry.id, entry.grams_used
        )));
    }
    let mut bytes = serde_json::to_vec_pretty(entries)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Parse a document into entries, preserving order.
pub fn decode(bytes: &[u8]) -> Result<Vec<BrewEntry>> {
    serde_json::from_slice(bytes)
        .map_err(|e| BrewLogError::Validation(format!("Invalid brew document: {}", e)))
}
