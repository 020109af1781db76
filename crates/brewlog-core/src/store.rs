//! The entry store.
//!
//! `EntryStore` owns the ordered brew history and mirrors it to a
//! `DocumentStore`. Every public mutation ends with a full rewrite of the
//! document. Load and write failures never reach the caller: a bad document
//! yields an empty history, and a failed write is logged and recorded in
//! `SyncState` while the in-memory change stands.

use std::collections::{BTreeSet, HashSet};

use chrono::Utc;
use uuid::Uuid;

use crate::codec;
use crate::entry::{BrewEntry, NewBrewEntry};
use crate::error::{BrewLogError, Result};
use crate::storage::DocumentStore;

/// How the history was obtained at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Document decoded with this many entries
    Loaded(usize),
    /// No document existed yet
    Missing,
    /// Document was unreadable or invalid; started empty
    Recovered(String),
}

/// Whether the document matches the in-memory history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncState {
    Synced,
    /// The last write failed; memory holds changes the document lacks
    Diverged(String),
}

/// Ordered brew history with a durable mirror.
///
/// Entries are kept newest-first: `add` inserts at position 0.
pub struct EntryStore<D: DocumentStore> {
    document: D,
    entries: Vec<BrewEntry>,
    load_outcome: LoadOutcome,
    sync_state: SyncState,
}

impl<D: DocumentStore> EntryStore<D> {
    /// Load the history from `document`, starting empty if that fails.
    pub fn open(document: D) -> Self {
        let (entries, load_outcome) = match document.read() {
            Ok(None) => {
                tracing::debug!(location = %document.location(), "no brew document yet");
                (Vec::new(), LoadOutcome::Missing)
            }
            Ok(Some(bytes)) => match codec::decode(&bytes) {
                Ok(entries) => {
                    tracing::debug!(
                        location = %document.location(),
                        count = entries.len(),
                        "loaded brew document"
                    );
                    warn_on_duplicate_ids(&entries);
                    let count = entries.len();
                    (entries, LoadOutcome::Loaded(count))
                }
                Err(err) => {
                    tracing::warn!(
                        location = %document.location(),
                        error = %err,
                        "brew document is invalid; starting with an empty history"
                    );
                    (Vec::new(), LoadOutcome::Recovered(err.to_string()))
                }
            },
            Err(err) => {
                tracing::warn!(
                    location = %document.location(),
                    error = %err,
                    "brew document is unreadable; starting with an empty history"
                );
                (Vec::new(), LoadOutcome::Recovered(err.to_string()))
            }
        };

        Self {
            document,
            entries,
            load_outcome,
            sync_state: SyncState::Synced,
        }
    }

    /// Create an entry from `new`, put it first in the history, and flush.
    ///
    /// No validation happens here; see `NewBrewEntry::validate`.
    pub fn add(&mut self, new: NewBrewEntry) -> BrewEntry {
        let entry = new.into_entry(self.fresh_id(), Utc::now());
        self.entries.insert(0, entry.clone());
        tracing::info!(id = %entry.id, brew_type = %entry.brew_type, "added brew entry");
        self.flush();
        entry
    }

    /// Remove the entries at `positions` of the current history and flush.
    ///
    /// Returns the removed entries in history order. An empty set changes
    /// nothing and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns `BrewLogError::IndexOutOfRange` if any position is past the
    /// end; the history is left untouched.
    pub fn remove_at(&mut self, positions: &BTreeSet<usize>) -> Result<Vec<BrewEntry>> {
        let Some(&last) = positions.last() else {
            return Ok(Vec::new());
        };
        if last >= self.entries.len() {
            return Err(BrewLogError::IndexOutOfRange {
                index: last,
                len: self.entries.len(),
            });
        }

        let mut removed: Vec<BrewEntry> = positions
            .iter()
            .rev()
            .map(|&position| self.entries.remove(position))
            .collect();
        removed.reverse();

        tracing::info!(count = removed.len(), "removed brew entries");
        self.flush();
        Ok(removed)
    }

    /// Current history, newest first.
    pub fn entries(&self) -> &[BrewEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&BrewEntry> {
        self.entries.get(position)
    }

    /// Find an entry by id, with its current position.
    pub fn find(&self, id: &Uuid) -> Option<(usize, &BrewEntry)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.id == *id)
    }

    /// Resolve a full id or a unique id prefix to a position.
    ///
    /// # Errors
    ///
    /// Returns `BrewLogError::NotFound` if nothing matches and
    /// `BrewLogError::InvalidInput` if the prefix is empty or ambiguous.
    pub fn position_of_id_prefix(&self, prefix: &str) -> Result<usize> {
        let needle: String = prefix
            .trim()
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        if needle.is_empty() {
            return Err(BrewLogError::InvalidInput(
                "Entry id must not be empty".to_string(),
            ));
        }

        let mut matches = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.id.simple().to_string().starts_with(&needle))
            .map(|(position, _)| position);

        match (matches.next(), matches.next()) {
            (Some(position), None) => Ok(position),
            (Some(_), Some(_)) => Err(BrewLogError::InvalidInput(format!(
                "Entry id prefix \"{}\" is ambiguous",
                prefix
            ))),
            (None, _) => Err(BrewLogError::NotFound(format!("Entry \"{}\"", prefix))),
        }
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    pub fn sync_state(&self) -> &SyncState {
        &self.sync_state
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Serialize the whole history and replace the document.
    pub fn save(&self) -> Result<()> {
        let bytes = codec::encode(&self.entries)?;
        self.document.write(&bytes)
    }

    fn flush(&mut self) {
        match self.save() {
            Ok(()) => {
                self.sync_state = SyncState::Synced;
            }
            Err(err) => {
                tracing::error!(
                    location = %self.document.location(),
                    error = %err,
                    "failed to save brew document; in-memory history is ahead of disk"
                );
                self.sync_state = SyncState::Diverged(err.to_string());
            }
        }
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.find(&id).is_none() {
                return id;
            }
        }
    }
}

fn warn_on_duplicate_ids(entries: &[BrewEntry]) {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id) {
            tracing::warn!(id = %entry.id, "brew document contains a duplicate entry id");
        }
    }
}
