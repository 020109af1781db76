//! Text and table output formatting for brews.

use brewlog_core::BrewEntry;

use crate::ui::{format_datetime, kv, simple_table, single_line, truncate, Column, UiContext};

const NOTES_WIDTH: usize = 40;

fn rating_stars(rating: u8, pretty: bool) -> String {
    if pretty {
        let filled = usize::from(rating.min(5));
        format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
    } else {
        rating.to_string()
    }
}

fn bean_details(entry: &BrewEntry) -> String {
    let mut parts = Vec::new();
    if let Some(origin) = entry.origin.as_deref().filter(|s| !s.is_empty()) {
        parts.push(origin.to_string());
    }
    if let Some(coffee_type) = entry.coffee_type.as_deref().filter(|s| !s.is_empty()) {
        parts.push(coffee_type.to_string());
    }
    if let Some(altitude) = entry.altitude_meters {
        parts.push(format!("{}m", altitude));
    }
    parts.join(", ")
}

/// Print the history list.
pub fn print_entry_list(ctx: &UiContext, entries: &[BrewEntry], total: usize) {
    if entries.is_empty() {
        if ctx.mode.is_pretty() {
            println!("No brews yet.");
            println!("{}", crate::ui::hint(ctx, "brewlog add <TYPE> <METHOD>"));
        }
        return;
    }

    let pretty = ctx.mode.is_pretty();
    let columns = [
        Column::new("#"),
        Column::new("ID"),
        Column::new("Created"),
        Column::new("Type"),
        Column::new("Method"),
        Column::new("Rating"),
        Column::new("Grams"),
        Column::new("Pour"),
        Column::new("Beans"),
        Column::new("Notes"),
    ];
    let rows: Vec<Vec<String>> = entries
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let notes = entry.notes.as_deref().map(single_line).unwrap_or_default();
            vec![
                position.to_string(),
                entry.short_id(),
                format_datetime(&entry.created_at, pretty),
                entry.brew_type.clone(),
                entry.brew_method.clone(),
                rating_stars(entry.rating, pretty),
                format!("{:.1}", entry.grams_used),
                format!("{}s", entry.pour_time_seconds),
                bean_details(entry),
                if pretty {
                    truncate(&notes, NOTES_WIDTH)
                } else {
                    notes
                },
            ]
        })
        .collect();

    println!("{}", simple_table(ctx, &columns, &rows));
    if pretty && entries.len() < total {
        println!("\nShowing {} of {} brews.", entries.len(), total);
    }
}

/// Print a single brew as key-value lines.
pub fn print_entry(ctx: &UiContext, position: usize, entry: &BrewEntry) {
    let pretty = ctx.mode.is_pretty();
    let mut lines = vec![
        kv(ctx, "Position", &position.to_string()),
        kv(ctx, "ID", &entry.id.to_string()),
        kv(ctx, "Created", &format_datetime(&entry.created_at, pretty)),
        kv(ctx, "Type", &entry.brew_type),
        kv(ctx, "Method", &entry.brew_method),
        kv(ctx, "Rating", &rating_stars(entry.rating, pretty)),
        kv(ctx, "Grams", &format!("{:.1}", entry.grams_used)),
        kv(ctx, "Pour", &format!("{}s", entry.pour_time_seconds)),
    ];
    if let Some(stop_time) = entry.stop_time {
        lines.push(kv(ctx, "Stopped", &format_datetime(&stop_time, pretty)));
    }
    if let Some(origin) = &entry.origin {
        lines.push(kv(ctx, "Origin", origin));
    }
    if let Some(coffee_type) = &entry.coffee_type {
        lines.push(kv(ctx, "Coffee Type", coffee_type));
    }
    if let Some(altitude) = entry.altitude_meters {
        lines.push(kv(ctx, "Altitude", &format!("{}m", altitude)));
    }
    if let Some(notes) = &entry.notes {
        lines.push(kv(ctx, "Notes", &single_line(notes)));
    }
    println!("{}", lines.join("\n"));
}
