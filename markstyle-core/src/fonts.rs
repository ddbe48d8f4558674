// markstyle-core/src/fonts.rs
//! Font-slot mapping for `markstyle-core`.
//!
//! Rule files refer to fonts through named slots (`%bold%`, `%italic%`, ...)
//! so a single font map swap restyles every rule that uses the slot. Tokens
//! without a mapping entry pass through unchanged.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::config::{StyleConfig, StyleSetting};

lazy_static! {
    static ref SLOT_TOKEN: Regex = Regex::new(r"%([A-Za-z0-9_-]+)%").unwrap();
}

/// Maps font slot names to concrete font names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct FontMap {
    slots: HashMap<String, String>,
}

impl FontMap {
    /// The built-in slot assignments (Menlo family).
    pub fn defaults() -> Self {
        let mut slots = HashMap::new();
        slots.insert("regular".to_string(), "Menlo-Regular".to_string());
        slots.insert("bold".to_string(), "Menlo-Bold".to_string());
        slots.insert("italic".to_string(), "Menlo-Italic".to_string());
        Self { slots }
    }

    /// Loads a font map from a YAML file of `slot: font-name` pairs.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading font map from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read font map file {}", path.display()))?;
        let map: FontMap = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse font map file {}", path.display()))?;
        Ok(map)
    }

    /// Shallow-merges `other` over `self`: slots in `other` win.
    pub fn merge(&mut self, other: FontMap) {
        for (slot, font) in other.slots {
            debug!("Font map override: slot '{}' -> '{}'", slot, font);
            self.slots.insert(slot, font);
        }
    }

    /// Looks up a slot by name.
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    /// Resolves every `%slot%` token in `value` that has a mapping entry.
    /// Unknown tokens are left as-is.
    pub fn resolve(&self, value: &str) -> String {
        SLOT_TOKEN
            .replace_all(value, |caps: &regex::Captures| {
                match self.slots.get(&caps[1]) {
                    Some(font) => font.clone(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Rewrites every `font` style value in `config` through this map.
    /// Call after merging rules and before compiling them.
    pub fn apply_to(&self, config: &mut StyleConfig) {
        for rule in &mut config.rules {
            for setting in &mut rule.styles {
                if let StyleSetting::Font(value) = setting {
                    let resolved = self.resolve(value);
                    if resolved != *value {
                        debug!("Rule '{}': font '{}' -> '{}'", rule.name, value, resolved);
                        *value = resolved;
                    }
                }
            }
        }
    }
}
