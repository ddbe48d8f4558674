// markstyle/src/commands/mod.rs
//! Command runners for the markstyle CLI, plus the input/config plumbing
//! they share.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use owo_colors::OwoColorize;

use markstyle_core::config::StyleConfig;
use markstyle_core::fonts::FontMap;
use markstyle_core::merge_rules;

pub mod rules;
pub mod scan;
pub mod style;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    if io::stderr().is_terminal() {
        eprintln!("{}", msg.as_ref().green());
    } else {
        eprintln!("{}", msg.as_ref());
    }
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    if io::stderr().is_terminal() {
        eprintln!("{}", msg.as_ref().red());
    } else {
        eprintln!("{}", msg.as_ref());
    }
}

/// Reads the whole input: from `path` when given, otherwise from stdin.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Builds the effective rule configuration for a CLI run: built-in rules,
/// merged with an optional user rule file, filtered by enable/disable
/// lists, with font slots resolved against the (optionally overridden)
/// font map.
pub fn build_effective_config(
    config_path: Option<&PathBuf>,
    font_map_path: Option<&PathBuf>,
    enable: &[String],
    disable: &[String],
) -> Result<StyleConfig> {
    let default_config = StyleConfig::load_default_rules()?;

    let user_config = match config_path {
        Some(path) => {
            let cfg = StyleConfig::load_from_file(path)?;
            info!("Merging {} custom rules.", cfg.rules.len());
            Some(cfg)
        }
        None => None,
    };
    let mut config = merge_rules(default_config, user_config);
    config.set_active_rules(enable, disable);

    let mut font_map = FontMap::defaults();
    if let Some(path) = font_map_path {
        font_map.merge(FontMap::load_from_file(path)?);
    }
    font_map.apply_to(&mut config);

    Ok(config)
}
