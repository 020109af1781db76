use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{entry_json, print_entry};

use super::resolve_position;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let position = resolve_position(&store, &args.target)?;
    let entry = &store.entries()[position];

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&entry_json(position, entry))?
        );
        return Ok(());
    }

    print_entry(&ui_ctx, position, entry);
    Ok(())
}
