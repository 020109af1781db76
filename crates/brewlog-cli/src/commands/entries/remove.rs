use std::collections::BTreeSet;

use crate::app::AppContext;
use crate::cli::RemoveArgs;
use crate::ui::receipt;

use super::ensure_saved;

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;

    let positions: BTreeSet<usize> = if args.id.is_empty() {
        args.positions.iter().copied().collect()
    } else {
        args.id
            .iter()
            .map(|id| store.position_of_id_prefix(id))
            .collect::<Result<_, _>>()?
    };

    let removed = store.remove_at(&positions)?;
    ensure_saved(&store)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let ids = removed
            .iter()
            .map(|entry| entry.short_id())
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "{}",
            receipt(
                &ui_ctx,
                &format!("Removed {} brew(s)", removed.len()),
                &[("Removed", ids), ("Remaining", store.len().to_string())],
            )
        );
    }

    Ok(())
}
