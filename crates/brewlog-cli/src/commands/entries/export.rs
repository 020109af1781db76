use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::errors::CliError;

/// Write the history to stdout in the same shape as the brew document.
pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(store.entries())?);
        }
        "jsonl" => {
            for entry in store.entries() {
                println!("{}", serde_json::to_string(entry)?);
            }
        }
        other => {
            return Err(CliError::invalid_input(format!(
                "Unsupported export format: {} (use json or jsonl)",
                other
            ))
            .into());
        }
    }
    Ok(())
}
