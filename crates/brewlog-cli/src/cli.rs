use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use brewlog_core::VERSION;

/// Brewlog - A personal coffee-brew log
#[derive(Parser)]
#[command(name = "brewlog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the brew document (JSON)
    #[arg(short, long, global = true, env = "BREWLOG_PATH")]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a new brew
    Add(AddArgs),

    /// List brew history (newest first)
    List(ListArgs),

    /// Show a single brew by position or id
    Show(ShowArgs),

    /// Remove brews by position or id
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Export the full history
    Export(ExportArgs),

    /// Brew ratio calculator
    Ratio(RatioArgs),

    /// Report where the history lives and whether it loaded cleanly
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Coffee type (e.g., "Pourover", "Flat white")
    #[arg(value_name = "TYPE")]
    pub brew_type: String,

    /// Brew method (e.g., "V60", "AeroPress")
    #[arg(value_name = "METHOD")]
    pub brew_method: String,

    /// Rating from 1 to 5
    #[arg(short, long, default_value_t = 3)]
    pub rating: u8,

    /// Grams of coffee used (5-50)
    #[arg(short, long, default_value_t = 15.0)]
    pub grams: f64,

    /// Pour time in seconds
    #[arg(short, long = "pour-secs", default_value_t = 30)]
    pub pour_secs: u32,

    /// Time the brew was stopped (ISO-8601, YYYY-MM-DD, or HH:MM today)
    #[arg(long)]
    pub stop_time: Option<String>,

    /// Tasting notes
    #[arg(short, long)]
    pub notes: Option<String>,

    /// Bean origin
    #[arg(long)]
    pub origin: Option<String>,

    /// Bean variety or roast
    #[arg(long)]
    pub coffee_type: Option<String>,

    /// Growing altitude in meters
    #[arg(long)]
    pub altitude: Option<i32>,

    /// Set custom creation date/time (ISO-8601)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT", value_parser = ["table", "plain"])]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Position in the list, or entry id (full or prefix)
    #[arg(value_name = "POSITION|ID")]
    pub target: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Positions as shown by `brewlog list`
    #[arg(value_name = "POSITION", required_unless_present = "id")]
    pub positions: Vec<usize>,

    /// Remove by entry id (full or prefix) instead of position
    #[arg(long, conflicts_with = "positions")]
    pub id: Vec<String>,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, default_value = "json")]
    pub format: String,
}

/// Arguments for the `ratio` command
#[derive(Args)]
pub struct RatioArgs {
    /// Coffee weight in grams
    #[arg(short, long, default_value_t = 15.0)]
    pub coffee: f64,

    /// Water weight in grams
    #[arg(short, long, conflicts_with = "preset")]
    pub water: Option<f64>,

    /// Use a named preset ratio to compute the water (e.g., "V60")
    #[arg(short, long)]
    pub preset: Option<String>,

    /// List the preset ratios
    #[arg(long)]
    pub list: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
