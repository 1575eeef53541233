use comfy_table::{ContentArrangement, Table};

use colored::Colorize;
use te_core::Config;
use te_core::generator::max_chance;

use super::Context;

pub fn init(ctx: &Context, force: bool) -> Result<(), String> {
    let store = ctx.store();
    if store.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            store.path().display()
        ));
    }
    store.save(&Config::default()).map_err(|e| e.to_string())?;
    println!("  {} {}", "Created".bold(), store.path().display());
    Ok(())
}

pub fn show(ctx: &Context) -> Result<(), String> {
    let config = ctx.store().load().map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Substat", "Kind", "Values", "Max", "Max chance"]);

    for def in &config.substats {
        let values = def
            .values
            .iter()
            .map(|&v| value_text(v, def.is_percent))
            .collect::<Vec<_>>()
            .join(", ");
        let max = def
            .max_value()
            .map(|v| value_text(v, def.is_percent))
            .unwrap_or_default();
        let kind = if def.is_percent { "percent" } else { "flat" };
        let chance = format!("{:.1}%", max_chance(def) * 100.0);
        table.add_row(vec![def.name.clone(), kind.to_string(), values, max, chance]);
    }

    println!("{table}");

    let settings = &config.settings;
    let white_list = if settings.white_list.is_empty() {
        "(none)".to_string()
    } else {
        settings
            .white_list
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!();
    println!("  Daily limit:  {}", settings.daily_limit);
    println!("  Stats/roll:   {}", config.stats_per_roll());
    println!("  White list:   {white_list}");
    println!(
        "  Colors:       max {}  normal {}",
        settings.max_value_color.hex(),
        settings.normal_color.hex()
    );
    Ok(())
}

/// Same notation as the roll cards.
fn value_text(value: f64, is_percent: bool) -> String {
    if is_percent {
        format!("{value:?}%")
    } else {
        format!("{value}")
    }
}

pub fn path(ctx: &Context) -> Result<(), String> {
    println!("{}", ctx.store().path().display());
    Ok(())
}
