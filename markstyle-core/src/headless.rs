// markstyle-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive use of the core.
//! Builds the effective rule set (defaults merged with optional user rules
//! and font map) and runs the markdown engine in a single call.

use anyhow::Result;

use crate::config::{merge_rules, StyleConfig};
use crate::engine::StylingEngine;
use crate::engines::markdown::MarkdownEngine;
use crate::fonts::FontMap;
use crate::transform::Parsed;

/// Builds the effective configuration: built-in rules merged with optional
/// user rules, with font slots resolved against the default map merged with
/// an optional user map.
///
/// This is the rule-set-builder entry point shared by the library surface
/// and the CLI.
pub fn build_config(
    user_config: Option<StyleConfig>,
    user_font_map: Option<FontMap>,
) -> Result<StyleConfig> {
    let default_config = StyleConfig::load_default_rules()?;
    let mut config = merge_rules(default_config, user_config);

    let mut font_map = FontMap::defaults();
    if let Some(user_map) = user_font_map {
        font_map.merge(user_map);
    }
    font_map.apply_to(&mut config);

    Ok(config)
}

/// Fully parses a markup string: merged rules, stripped delimiters, and the
/// ordered transform list re-anchored to the cleaned text.
///
/// # Arguments
///
/// * `markup` - The markdown-flavored input string.
/// * `user_config` - Optional rule overrides/additions, merged by name.
/// * `user_font_map` - Optional font slot overrides.
pub fn parse_markup(
    markup: &str,
    user_config: Option<StyleConfig>,
    user_font_map: Option<FontMap>,
) -> Result<Parsed> {
    let config = build_config(user_config, user_font_map)?;
    let engine = MarkdownEngine::new(config)?;
    engine.parse(markup)
}
