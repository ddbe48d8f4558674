// markstyle/src/commands/scan.rs
//! `scan` command implementation: report which rules match and what they
//! captured, without rewriting anything.

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use log::info;

use markstyle_core::engine::StylingEngine;
use markstyle_core::engines::markdown::MarkdownEngine;

use crate::cli::ScanCommand;
use crate::commands::{build_effective_config, info_msg, read_input};

/// The main operation runner for `markstyle scan`.
pub fn run(cmd: &ScanCommand, quiet: bool) -> Result<()> {
    info!("Starting scan operation.");

    let input = read_input(cmd.input_file.as_deref())?;
    let config =
        build_effective_config(cmd.config.as_ref(), None, &cmd.enable, &cmd.disable)?;

    let engine = MarkdownEngine::new(config)?;
    let summary = engine.summarize(&input).context("Scan failed")?;

    if summary.is_empty() {
        if !quiet {
            info_msg("No rule matches found.");
        }
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Rule", "Matches", "Captured content"]);

    for item in &summary {
        table.add_row(vec![
            item.rule_name.clone(),
            item.occurrences.to_string(),
            item.contents.join(", "),
        ]);
    }

    println!("{table}");
    Ok(())
}
