//! Brew ratio calculator command.

use brewlog_core::ratio::{self, PRESETS};

use crate::app::AppContext;
use crate::cli::RatioArgs;
use crate::errors::CliError;
use crate::ui::{kv, simple_table, Column};

const DEFAULT_WATER_GRAMS: f64 = 250.0;

/// Resolved inputs for one calculation.
#[derive(Debug, PartialEq)]
struct Calculation {
    coffee: f64,
    water: f64,
    ratio: f64,
    total: f64,
    matches: Vec<&'static str>,
}

fn calculate(args: &RatioArgs) -> anyhow::Result<Calculation> {
    if !args.coffee.is_finite() || args.coffee < 0.0 {
        return Err(CliError::invalid_input("Coffee weight must be zero or more").into());
    }
    let water = match (&args.preset, args.water) {
        (Some(name), _) => {
            let preset = ratio::preset(name).ok_or_else(|| {
                CliError::invalid_input(format!(
                    "Unknown preset \"{}\" (see `brewlog ratio --list`)",
                    name
                ))
            })?;
            ratio::water_for(args.coffee, preset.ratio)
        }
        (None, Some(water)) => water,
        (None, None) => DEFAULT_WATER_GRAMS,
    };
    let brew_ratio = ratio::brew_ratio(args.coffee, water);
    Ok(Calculation {
        coffee: args.coffee,
        water,
        ratio: brew_ratio,
        total: ratio::total_brew(args.coffee, water),
        matches: ratio::matching_presets(brew_ratio).map(|p| p.name).collect(),
    })
}

pub fn handle_ratio(ctx: &AppContext, args: &RatioArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);

    if args.list {
        if ui_ctx.mode.is_json() {
            let presets: Vec<_> = PRESETS
                .iter()
                .map(|p| serde_json::json!({ "name": p.name, "ratio": p.ratio }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&presets)?);
        } else {
            let rows: Vec<Vec<String>> = PRESETS
                .iter()
                .map(|p| vec![p.name.to_string(), format!("1:{:.1}", p.ratio)])
                .collect();
            println!(
                "{}",
                simple_table(&ui_ctx, &[Column::new("Preset"), Column::new("Ratio")], &rows)
            );
        }
        return Ok(());
    }

    let calc = calculate(args)?;
    if ui_ctx.mode.is_json() {
        let value = serde_json::json!({
            "coffeeGrams": calc.coffee,
            "waterGrams": calc.water,
            "ratio": calc.ratio,
            "totalGrams": calc.total,
            "matchingPresets": calc.matches,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let matches = if calc.matches.is_empty() {
        "-".to_string()
    } else {
        calc.matches.join(", ")
    };
    println!("{}", kv(&ui_ctx, "Coffee", &format!("{:.1} g", calc.coffee)));
    println!("{}", kv(&ui_ctx, "Water", &format!("{:.0} g", calc.water)));
    println!("{}", kv(&ui_ctx, "Ratio", &format!("1:{:.1}", calc.ratio)));
    println!("{}", kv(&ui_ctx, "Total Brew", &format!("{:.0} g", calc.total)));
    println!("{}", kv(&ui_ctx, "Matches", &matches));
    Ok(())
}
