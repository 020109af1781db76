//! Add brew command handler.

use brewlog_core::NewBrewEntry;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::helpers::{parse_datetime, validate_brew_form};
use crate::ui::{hint, receipt};

use super::ensure_saved;

/// Blank optional text counts as not given.
fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn build_new_entry(args: &AddArgs) -> anyhow::Result<NewBrewEntry> {
    let mut new_entry = NewBrewEntry::new(
        args.brew_type.trim(),
        args.brew_method.trim(),
        args.rating,
        args.grams,
        args.pour_secs,
    );
    if let Some(ref value) = args.stop_time {
        new_entry = new_entry.with_stop_time(parse_datetime(value)?);
    }
    if let Some(notes) = non_blank(&args.notes) {
        new_entry = new_entry.with_notes(notes);
    }
    if let Some(origin) = non_blank(&args.origin) {
        new_entry = new_entry.with_origin(origin);
    }
    if let Some(coffee_type) = non_blank(&args.coffee_type) {
        new_entry = new_entry.with_coffee_type(coffee_type);
    }
    // An altitude of zero means "not entered".
    if let Some(altitude) = args.altitude.filter(|a| *a != 0) {
        new_entry = new_entry.with_altitude_meters(altitude);
    }
    if let Some(ref value) = args.date {
        new_entry = new_entry.with_created_at(parse_datetime(value)?);
    }
    Ok(new_entry)
}

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let new_entry = build_new_entry(args)?;
    validate_brew_form(&new_entry).map_err(|e| CliError::invalid_input(e.to_string()))?;

    let mut store = ctx.open_store()?;
    let entry = store.add(new_entry);
    ensure_saved(&store)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        println!(
            "{}",
            receipt(
                &ui_ctx,
                "Brew logged",
                &[
                    ("ID", entry.short_id()),
                    ("Type", entry.brew_type.clone()),
                    ("Method", entry.brew_method.clone()),
                    ("Total", store.len().to_string()),
                ],
            )
        );
        if ui_ctx.mode.is_pretty() {
            println!("{}", hint(&ui_ctx, "brewlog list"));
        }
    }

    Ok(())
}
