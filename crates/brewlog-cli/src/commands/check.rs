use brewlog_core::{DocumentStore, LoadOutcome};

use crate::app::{resolve_config_path, AppContext};
use crate::ui::{badge, kv, Badge};

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    let store = ctx.open_store()?;
    let ui_ctx = ctx.ui_context(false, None);

    let (kind, status) = match store.load_outcome() {
        LoadOutcome::Loaded(count) => (Badge::Ok, format!("loaded {} brews", count)),
        LoadOutcome::Missing => (Badge::Ok, "no history yet".to_string()),
        LoadOutcome::Recovered(reason) => (
            Badge::Warn,
            format!("unreadable, starting empty ({})", reason),
        ),
    };

    if ctx.quiet() && kind == Badge::Ok {
        return Ok(());
    }

    println!("{}", badge(&ui_ctx, kind, "Brew history"));
    println!("  {}", kv(&ui_ctx, "Document", &store.document().location()));
    println!(
        "  {}",
        kv(
            &ui_ctx,
            "Config",
            &if config_path.exists() {
                config_path.display().to_string()
            } else {
                format!("{} (not present)", config_path.display())
            }
        )
    );
    println!("  {}", kv(&ui_ctx, "Status", &status));
    Ok(())
}
