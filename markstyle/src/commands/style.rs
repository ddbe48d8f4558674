// markstyle/src/commands/style.rs
//! `style` command implementation: parse markup and emit the cleaned text
//! or the full `{ text, transforms }` JSON document.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use log::{debug, info};

use markstyle_core::engine::StylingEngine;
use markstyle_core::engines::markdown::MarkdownEngine;

use crate::cli::{OutputFormat, StyleCommand};
use crate::commands::{build_effective_config, info_msg, read_input};

/// The main operation runner for `markstyle style`.
pub fn run(cmd: &StyleCommand, quiet: bool) -> Result<()> {
    info!("Starting style operation.");

    let input = read_input(cmd.input_file.as_deref())?;
    let config = build_effective_config(
        cmd.config.as_ref(),
        cmd.font_map.as_ref(),
        &cmd.enable,
        &cmd.disable,
    )?;

    let engine = MarkdownEngine::new(config)?;
    let parsed = engine.parse(&input).context("Parsing failed")?;
    debug!(
        "Parsed {} input characters into {} transforms.",
        input.chars().count(),
        parsed.transforms.len()
    );

    let rendered = match cmd.format {
        OutputFormat::Json => {
            let mut doc = parsed.to_json().context("Failed to serialize parse result")?;
            doc.push('\n');
            doc
        }
        OutputFormat::Text => {
            let mut text = parsed.text.clone();
            if !text.ends_with('\n') {
                text.push('\n');
            }
            text
        }
    };

    match &cmd.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            if !quiet {
                info_msg(format!(
                    "Wrote {} transforms to {}.",
                    parsed.transforms.len(),
                    path.display()
                ));
            }
        }
        None => {
            io::stdout()
                .write_all(rendered.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
