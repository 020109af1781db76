use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{entries_json, print_entry_list};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let limit = match args.limit {
        Some(limit) => Some(limit),
        None => ctx.default_limit()?,
    };

    let all = store.entries();
    let shown = match limit {
        Some(limit) => &all[..limit.min(all.len())],
        None => all,
    };

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entries_json(shown))?);
        return Ok(());
    }

    print_entry_list(&ui_ctx, shown, all.len());
    Ok(())
}
