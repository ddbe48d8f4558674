// markstyle-core/src/engines/markdown.rs
//! A `StylingEngine` implementation that matches inline markdown markup
//! with per-rule regular expressions, strips the delimiter syntax, and
//! emits style transforms re-anchored to the cleaned text.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::config::StyleConfig;
use crate::engine::StylingEngine;
use crate::rules::compiler::{get_or_compile_rules, CompiledRules};
use crate::transform::{MarkupMatch, MatchSummaryItem, Parsed, Transform};

/// The markdown match-and-remap engine.
///
/// Offsets throughout are character counts, not byte counts: the consumer
/// is a rich-text API that addresses codepoint ranges.
#[derive(Debug)]
pub struct MarkdownEngine {
    compiled_rules: Arc<CompiledRules>,
    config: StyleConfig,
}

impl MarkdownEngine {
    /// Builds an engine from a merged rule configuration.
    pub fn new(config: StyleConfig) -> Result<Self> {
        let compiled_rules = get_or_compile_rules(&config)
            .context("Failed to compile style rules for MarkdownEngine")?;

        Ok(Self { compiled_rules, config })
    }

    fn find_matches(&self, markup: &str) -> Vec<MarkupMatch> {
        let rule_flags: HashMap<&str, Option<bool>> = self
            .config
            .rules
            .iter()
            .map(|rule| (rule.name.as_str(), rule.enabled))
            .collect();

        let mut all_matches = Vec::new();

        for compiled_rule in &self.compiled_rules.rules {
            if let Some(Some(false)) = rule_flags.get(compiled_rule.name.as_str()) {
                continue;
            }
            for caps in compiled_rule.regex.captures_iter(markup) {
                // get(0) always exists for a successful match.
                let whole = match caps.get(0) {
                    Some(m) => m,
                    None => continue,
                };
                let content = match caps.get(1) {
                    Some(c) => c,
                    None => {
                        // Group 1 can fail to participate even in a valid
                        // single-group pattern (e.g. an alternation). Skip
                        // rather than emit a bogus range.
                        warn!(
                            "Rule '{}': match without a captured content group, skipping.",
                            compiled_rule.name
                        );
                        continue;
                    }
                };

                all_matches.push(MarkupMatch {
                    rule_name: compiled_rule.name.clone(),
                    start: markup[..whole.start()].chars().count(),
                    raw: whole.as_str().to_string(),
                    content: content.as_str().to_string(),
                });
            }
        }

        // Stable: matches sharing a start offset keep rule-list order, which
        // is the documented tie-break.
        all_matches.sort_by_key(|m| m.start);
        all_matches
    }
}

impl StylingEngine for MarkdownEngine {
    fn parse(&self, markup: &str) -> Result<Parsed> {
        let matches = self.find_matches(markup);
        debug!("Processing {} matches across all rules.", matches.len());

        let styles_by_rule: HashMap<&str, &[crate::config::StyleSetting]> = self
            .compiled_rules
            .rules
            .iter()
            .map(|rule| (rule.name.as_str(), rule.styles.as_slice()))
            .collect();

        let mut text = markup.to_string();
        let mut removed_chars = 0usize;
        let mut transforms = Vec::new();

        for m in &matches {
            // Overlapping matches from different rules are allowed to both
            // emit transforms; with the delimiters of an enclosing match
            // already stripped, a shifted start can only underflow in that
            // ambiguous-overlap case, so clamp rather than panic.
            let start = m.start.saturating_sub(removed_chars);
            let len = m.content.chars().count();

            for setting in styles_by_rule.get(m.rule_name.as_str()).copied().unwrap_or(&[]) {
                transforms.push(Transform {
                    setting: setting.clone(),
                    start,
                    len,
                });
            }

            removed_chars += m.removed_chars();
            // First occurrence only: the match closest to the front of the
            // working string is the one whose delimiters are still present.
            text = text.replacen(&m.raw, &m.content, 1);
        }

        Ok(Parsed { text, transforms })
    }

    fn scan(&self, markup: &str) -> Result<Vec<MarkupMatch>> {
        Ok(self.find_matches(markup))
    }

    fn summarize(&self, markup: &str) -> Result<Vec<MatchSummaryItem>> {
        let matches = self.find_matches(markup);
        let mut summary: Vec<MatchSummaryItem> = Vec::new();

        for m in matches {
            match summary.iter_mut().find(|item| item.rule_name == m.rule_name) {
                Some(item) => {
                    item.occurrences += 1;
                    item.contents.push(m.content);
                }
                None => summary.push(MatchSummaryItem {
                    rule_name: m.rule_name,
                    occurrences: 1,
                    contents: vec![m.content],
                }),
            }
        }

        Ok(summary)
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn config(&self) -> &StyleConfig {
        &self.config
    }
}
