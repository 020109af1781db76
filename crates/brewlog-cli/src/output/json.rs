//! JSON output formatting for brews.

use brewlog_core::BrewEntry;

/// Convert a brew to JSON for output, tagged with its list position.
pub fn entry_json(position: usize, entry: &BrewEntry) -> serde_json::Value {
    serde_json::json!({
        "position": position,
        "id": entry.id,
        "createdAt": entry.created_at,
        "type": entry.brew_type,
        "brewMethod": entry.brew_method,
        "rating": entry.rating,
        "gramsUsed": entry.grams_used,
        "pourTimeSeconds": entry.pour_time_seconds,
        "stopTime": entry.stop_time,
        "notes": entry.notes,
        "origin": entry.origin,
        "coffeeType": entry.coffee_type,
        "altitudeMeters": entry.altitude_meters,
    })
}

/// Convert brews to a JSON array, numbering positions from zero.
pub fn entries_json(entries: &[BrewEntry]) -> Vec<serde_json::Value> {
    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| entry_json(position, entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewlog_core::{EntryStore, MemoryDocument, NewBrewEntry};

    #[test]
    fn test_entries_json_positions() {
        let mut store = EntryStore::open(MemoryDocument::new());
        store.add(NewBrewEntry::new("A", "V60", 3, 15.0, 30));
        store.add(NewBrewEntry::new("B", "V60", 3, 15.0, 30).with_origin("Peru"));

        let values = entries_json(store.entries());

        assert_eq!(values[0]["position"], 0);
        assert_eq!(values[0]["type"], "B");
        assert_eq!(values[0]["origin"], "Peru");
        assert_eq!(values[1]["type"], "A");
        assert!(values[1]["origin"].is_null());
    }
}
