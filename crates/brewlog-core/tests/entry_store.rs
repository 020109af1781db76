use std::collections::{BTreeSet, HashSet};
use std::fs;

use chrono::Utc;
use tempfile::tempdir;

use brewlog_core::storage::DEFAULT_FILENAME;
use brewlog_core::{EntryStore, FileDocument, LoadOutcome, NewBrewEntry, SyncState};

fn brew(name: &str) -> NewBrewEntry {
    NewBrewEntry::new(name, "V60", 3, 15.0, 30)
}

#[test]
fn test_add_records_exact_values() {
    let dir = tempdir().expect("tempdir");
    let mut store = EntryStore::open(FileDocument::in_dir(dir.path()));

    let before = Utc::now();
    store.add(NewBrewEntry::new("Pourover", "V60", 4, 18.5, 150).with_notes("floral"));
    let after = Utc::now();

    let entries = store.entries();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.brew_type, "Pourover");
    assert_eq!(entry.brew_method, "V60");
    assert_eq!(entry.rating, 4);
    assert_eq!(entry.grams_used, 18.5);
    assert_eq!(entry.pour_time_seconds, 150);
    assert_eq!(entry.notes.as_deref(), Some("floral"));
    assert!(!entry.id.is_nil());
    assert!(entry.created_at >= before && entry.created_at <= after);
}

#[test]
fn test_history_survives_restart_in_order() {
    let dir = tempdir().expect("tempdir");
    let original = {
        let mut store = EntryStore::open(FileDocument::in_dir(dir.path()));
        store.add(brew("A"));
        store.add(brew("B"));
        store.add(brew("C"));
        store.entries().to_vec()
    };

    let reopened = EntryStore::open(FileDocument::in_dir(dir.path()));

    assert_eq!(reopened.load_outcome(), &LoadOutcome::Loaded(3));
    assert_eq!(reopened.entries(), original.as_slice());
    let names: Vec<_> = reopened
        .entries()
        .iter()
        .map(|e| e.brew_type.as_str())
        .collect();
    assert_eq!(names, vec!["C", "B", "A"]);
}

#[test]
fn test_ids_stay_unique() {
    let dir = tempdir().expect("tempdir");
    let mut store = EntryStore::open(FileDocument::in_dir(dir.path()));
    for i in 0..50 {
        store.add(brew(&format!("brew {}", i)));
    }
    store
        .remove_at(&BTreeSet::from([3, 7, 11]))
        .expect("remove should succeed");
    for i in 0..10 {
        store.add(brew(&format!("more {}", i)));
    }

    let ids: HashSet<_> = store.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), store.len());
}

#[test]
fn test_removing_everything_persists_empty_array() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(DEFAULT_FILENAME);
    let mut store = EntryStore::open(FileDocument::new(&path));
    store.add(brew("A"));
    store.add(brew("B"));

    let all: BTreeSet<usize> = (0..store.len()).collect();
    store.remove_at(&all).expect("remove should succeed");

    assert!(store.is_empty());
    let on_disk: serde_json::Value =
        serde_json::from_slice(&fs::read(&path).expect("read")).expect("json");
    assert_eq!(on_disk, serde_json::json!([]));
}

#[test]
fn test_corrupt_document_restarts_empty() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(DEFAULT_FILENAME);
    {
        let mut store = EntryStore::open(FileDocument::new(&path));
        store.add(brew("A"));
    }
    fs::write(&path, b"[{\"id\": 12, \"trunc").expect("corrupt");

    let mut store = EntryStore::open(FileDocument::new(&path));

    assert!(store.is_empty());
    assert!(matches!(store.load_outcome(), LoadOutcome::Recovered(_)));

    // The next mutation overwrites the corrupt document.
    store.add(brew("B"));
    let reopened = EntryStore::open(FileDocument::new(&path));
    assert_eq!(reopened.len(), 1);
}

#[test]
fn test_optional_fields_round_trip_as_absent() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(DEFAULT_FILENAME);
    {
        let mut store = EntryStore::open(FileDocument::new(&path));
        store.add(brew("Plain"));
        store.add(
            brew("Full")
                .with_stop_time(Utc::now())
                .with_notes("")
                .with_origin("Colombia")
                .with_coffee_type("Caturra")
                .with_altitude_meters(0),
        );
    }

    let raw = fs::read_to_string(&path).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    let plain = value[1].as_object().expect("object");
    for key in ["stopTime", "notes", "origin", "coffeeType", "altitudeMeters"] {
        assert!(!plain.contains_key(key), "{} should be absent", key);
    }

    let store = EntryStore::open(FileDocument::new(&path));
    let full = &store.entries()[0];
    let plain = &store.entries()[1];
    assert!(plain.notes.is_none() && plain.altitude_meters.is_none());
    assert_eq!(full.notes.as_deref(), Some(""));
    assert_eq!(full.altitude_meters, Some(0));
    assert!(full.stop_time.is_some());
}

#[test]
fn test_unwritable_location_diverges_without_panicking() {
    let dir = tempdir().expect("tempdir");
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"file").expect("write blocker");
    let mut store = EntryStore::open(FileDocument::new(blocker.join(DEFAULT_FILENAME)));

    store.add(brew("A"));

    assert_eq!(store.len(), 1);
    assert!(matches!(store.sync_state(), SyncState::Diverged(_)));
}
