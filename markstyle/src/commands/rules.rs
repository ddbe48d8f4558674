// markstyle/src/commands/rules.rs
//! `rules` command implementation: list the effective rule set after
//! merging custom rules and resolving font slots.

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use log::info;

use markstyle_core::config::StyleSetting;

use crate::cli::RulesCommand;
use crate::commands::build_effective_config;

fn describe_setting(setting: &StyleSetting) -> String {
    match setting {
        StyleSetting::Font(font) => format!("font={font}"),
        StyleSetting::FontSize(size) => format!("fontSize={size}"),
        StyleSetting::FillColor(color) => format!("fillColor={color:?}"),
        StyleSetting::StrokeColor(color) => format!("strokeColor={color:?}"),
        StyleSetting::StrokeWidth(width) => format!("strokeWidth={width}"),
        StyleSetting::Tracking(tracking) => format!("tracking={tracking}"),
    }
}

/// The main operation runner for `markstyle rules`.
pub fn run(cmd: &RulesCommand) -> Result<()> {
    info!("Listing effective rules.");

    let config = build_effective_config(cmd.config.as_ref(), cmd.font_map.as_ref(), &[], &[])?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Rule", "Matcher", "Styles"]);

    for rule in &config.rules {
        let styles: Vec<String> = rule.styles.iter().map(describe_setting).collect();
        table.add_row(vec![
            rule.name.clone(),
            rule.pattern.clone().unwrap_or_else(|| "(none)".to_string()),
            styles.join(", "),
        ]);
    }

    println!("{table}");
    Ok(())
}
