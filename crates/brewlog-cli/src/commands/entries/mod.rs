//! Entry command handlers.

mod add;
mod export;
mod list;
mod remove;
mod show;

pub use add::handle_add;
pub use export::handle_export;
pub use list::handle_list;
pub use remove::handle_remove;
pub use show::handle_show;

use brewlog_core::{DocumentStore, EntryStore, SyncState};

use crate::errors::CliError;
use crate::helpers::{parse_entry_ref, EntryRef};

/// Fail the command if the last write did not reach the document.
fn ensure_saved<D: DocumentStore>(store: &EntryStore<D>) -> anyhow::Result<()> {
    if let SyncState::Diverged(reason) = store.sync_state() {
        return Err(CliError::write_failed(
            format!(
                "Change could not be saved to {}: {}",
                store.document().location(),
                reason
            ),
            "Hint: Check that the directory exists and is writable, or pass --data.",
        )
        .into());
    }
    Ok(())
}

/// Resolve a position or id reference to a current list position.
fn resolve_position<D: DocumentStore>(store: &EntryStore<D>, target: &str) -> anyhow::Result<usize> {
    match parse_entry_ref(target) {
        EntryRef::Position(position) if position < store.len() => Ok(position),
        EntryRef::Position(position) => Err(CliError::not_found(
            format!("Entry {} not found (history has {} brews)", position, store.len()),
            "Hint: Run `brewlog list` to see positions.",
        )
        .into()),
        EntryRef::Id(prefix) => Ok(store.position_of_id_prefix(&prefix)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewlog_core::{MemoryDocument, NewBrewEntry};

    #[test]
    fn test_resolve_position_by_number_and_id() {
        let mut store = EntryStore::open(MemoryDocument::new());
        let first = store.add(NewBrewEntry::new("A", "V60", 3, 15.0, 30));
        store.add(NewBrewEntry::new("B", "V60", 3, 15.0, 30));

        assert_eq!(resolve_position(&store, "0").unwrap(), 0);
        assert_eq!(resolve_position(&store, &first.id.to_string()).unwrap(), 1);
        assert!(resolve_position(&store, "5").is_err());
    }

    #[test]
    fn test_ensure_saved_reports_divergence() {
        let doc = MemoryDocument::new();
        let mut store = EntryStore::open(doc.clone());
        doc.fail_writes(true);
        store.add(NewBrewEntry::new("A", "V60", 3, 15.0, 30));

        let err = ensure_saved(&store).unwrap_err();
        assert!(err.to_string().contains("could not be saved"));
    }
}
