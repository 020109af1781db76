//! Brewlog CLI - A personal coffee-brew log
//!
//! This is the command-line interface for Brewlog. It records brews into the
//! history kept by `brewlog-core` and renders it back.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use brewlog_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{check, entries, misc, ratio};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let error_msg = format!("{}", e);
        let (message, hint) = split_hint(&error_msg);
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Split a trailing "Hint: ..." line off an error message.
fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => (&error[..idx], Some(&error[idx + 1..])),
        None => (error, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Add(args)) => {
            entries::handle_add(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            entries::handle_list(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            entries::handle_show(ctx, args)?;
        }
        Some(Commands::Remove(args)) => {
            entries::handle_remove(ctx, args)?;
        }
        Some(Commands::Export(args)) => {
            entries::handle_export(ctx, args)?;
        }
        Some(Commands::Ratio(args)) => {
            ratio::handle_ratio(ctx, args)?;
        }
        Some(Commands::Check) => {
            check::handle_check(ctx)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Brewlog v{}", VERSION);
            println!("\nQuickstart:");
            println!("  brewlog add Pourover V60 --rating 4 --grams 18.5 --pour-secs 150");
            println!("  brewlog list");
            println!("  brewlog remove 0");
            println!("  brewlog ratio --coffee 15 --preset V60");
            println!("\nRun `brewlog --help` for full usage.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hint() {
        assert_eq!(
            split_hint("Entry not found\nHint: run list"),
            ("Entry not found", Some("Hint: run list"))
        );
        assert_eq!(split_hint("plain failure"), ("plain failure", None));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_format_accepts_known_values_only() {
        use clap::Parser;

        let cli = Cli::try_parse_from(["brewlog", "list", "--format", "plain"]).unwrap();
        match cli.command {
            Some(Commands::List(args)) => assert_eq!(args.format.as_deref(), Some("plain")),
            _ => panic!("expected list command"),
        }

        let err = Cli::try_parse_from(["brewlog", "list", "--format", "jsn"])
            .err()
            .expect("unknown format should be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
