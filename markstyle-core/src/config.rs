//! Configuration management for `markstyle-core`.
//!
//! This module defines the core data structures for style rules and the
//! rule-set builder. It handles serialization/deserialization of YAML rule
//! files and provides utilities for loading, merging, and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use regex::Regex;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;

/// Maximum allowed length for a matcher pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// A style property supported by the host styling API.
///
/// This is the compiler-checked replacement for `"set" + capitalize(name)`
/// string dispatch: every property is an enumerated tag, and the wire-format
/// method name is derived from it, not the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Font,
    FontSize,
    FillColor,
    StrokeColor,
    StrokeWidth,
    Tracking,
}

impl StyleProperty {
    /// The `set<Capitalized>` method name used by downstream consumers.
    pub fn method_name(&self) -> &'static str {
        match self {
            StyleProperty::Font => "setFont",
            StyleProperty::FontSize => "setFontSize",
            StyleProperty::FillColor => "setFillColor",
            StyleProperty::StrokeColor => "setStrokeColor",
            StyleProperty::StrokeWidth => "setStrokeWidth",
            StyleProperty::Tracking => "setTracking",
        }
    }
}

/// One style property together with its value.
///
/// Serialized as a one-entry `property: value` mapping, so a rule's style
/// list reads naturally in YAML:
///
/// ```yaml
/// styles:
///   - font: "%bold%"
///   - fontSize: 72
/// ```
///
/// `Serialize`/`Deserialize` are hand-written below to keep exactly that
/// shape (the derived enum form would demand YAML tags like `!font`).
///
/// A rule holds these in a `Vec`, which preserves the declared property
/// order; that order is part of the transform-emission contract.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleSetting {
    Font(String),
    FontSize(f64),
    FillColor(Vec<f64>),
    StrokeColor(Vec<f64>),
    StrokeWidth(f64),
    Tracking(f64),
}

/// The recognized `property` keys, in [`StyleProperty`] order.
const STYLE_PROPERTY_KEYS: &[&str] = &[
    "font",
    "fontSize",
    "fillColor",
    "strokeColor",
    "strokeWidth",
    "tracking",
];

impl StyleSetting {
    /// The property tag this setting assigns, used for merge-by-property.
    pub fn property(&self) -> StyleProperty {
        match self {
            StyleSetting::Font(_) => StyleProperty::Font,
            StyleSetting::FontSize(_) => StyleProperty::FontSize,
            StyleSetting::FillColor(_) => StyleProperty::FillColor,
            StyleSetting::StrokeColor(_) => StyleProperty::StrokeColor,
            StyleSetting::StrokeWidth(_) => StyleProperty::StrokeWidth,
            StyleSetting::Tracking(_) => StyleProperty::Tracking,
        }
    }

    /// Shorthand for [`StyleProperty::method_name`].
    pub fn method_name(&self) -> &'static str {
        self.property().method_name()
    }
}

impl Serialize for StyleSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            StyleSetting::Font(v) => map.serialize_entry("font", v)?,
            StyleSetting::FontSize(v) => map.serialize_entry("fontSize", v)?,
            StyleSetting::FillColor(v) => map.serialize_entry("fillColor", v)?,
            StyleSetting::StrokeColor(v) => map.serialize_entry("strokeColor", v)?,
            StyleSetting::StrokeWidth(v) => map.serialize_entry("strokeWidth", v)?,
            StyleSetting::Tracking(v) => map.serialize_entry("tracking", v)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StyleSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StyleSettingVisitor;

        impl<'de> Visitor<'de> for StyleSettingVisitor {
            type Value = StyleSetting;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a single-entry map of one style property to its value")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let key: String = map
                    .next_key()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let setting = match key.as_str() {
                    "font" => StyleSetting::Font(map.next_value()?),
                    "fontSize" => StyleSetting::FontSize(map.next_value()?),
                    "fillColor" => StyleSetting::FillColor(map.next_value()?),
                    "strokeColor" => StyleSetting::StrokeColor(map.next_value()?),
                    "strokeWidth" => StyleSetting::StrokeWidth(map.next_value()?),
                    "tracking" => StyleSetting::Tracking(map.next_value()?),
                    other => return Err(de::Error::unknown_variant(other, STYLE_PROPERTY_KEYS)),
                };
                if map.next_key::<String>()?.is_some() {
                    return Err(de::Error::custom(
                        "a style setting must assign exactly one property",
                    ));
                }
                Ok(setting)
            }
        }

        deserializer.deserialize_map(StyleSettingVisitor)
    }
}

impl Hash for StyleSetting {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.property().hash(state);
        match self {
            StyleSetting::Font(v) => v.hash(state),
            StyleSetting::FontSize(v) | StyleSetting::StrokeWidth(v) | StyleSetting::Tracking(v) => {
                v.to_bits().hash(state);
            }
            StyleSetting::FillColor(v) | StyleSetting::StrokeColor(v) => {
                for c in v {
                    c.to_bits().hash(state);
                }
            }
        }
    }
}

/// Represents a single style rule used by the markdown engine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StyleRule {
    /// Unique identifier for the rule (e.g., "bold", "h1").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The matcher pattern string. Must capture exactly one group: the
    /// content to keep. In a user rule, `None` means "keep the built-in
    /// matcher" when merging over a rule of the same name.
    pub pattern: Option<String>,
    /// If true, enables multiline mode so `^` anchors at line starts
    /// (heading rules rely on this).
    pub multiline: bool,
    /// Style properties applied to the captured content, in emission order.
    pub styles: Vec<StyleSetting>,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl Hash for StyleRule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.description.hash(state);
        self.pattern.hash(state);
        self.multiline.hash(state);
        self.styles.hash(state);
        self.enabled.hash(state);
    }
}

impl Default for StyleRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: None,
            multiline: false,
            styles: Vec::new(),
            enabled: None,
        }
    }
}

/// Represents the top-level rule configuration for markstyle.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct StyleConfig {
    /// An ordered list of style rules.
    pub rules: Vec<StyleRule>,
}

impl StyleConfig {
    /// Loads style rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule file {}", path.display()))?;
        let config: StyleConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse rule file {}", path.display()))?;

        validate_rules(&config.rules)?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads the built-in rules (bold, italic, h1..h6) from the embedded
    /// configuration, in canonical order.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config: StyleConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default rules")?;

        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Filters active rules based on enable/disable lists provided via CLI.
    pub fn set_active_rules(&mut self, enable_rules: &[String], disable_rules: &[String]) {
        let enable_set: HashSet<&str> = enable_rules.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();

        debug!("Initial rules count before filtering: {}", self.rules.len());

        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in enable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `enable_rules` list does not exist.", rule_name);
        }

        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable_rules` list does not exist.", rule_name);
        }

        self.rules.retain(|rule| {
            let rule_name_str = rule.name.as_str();
            !disable_set.contains(rule_name_str)
                && (rule.enabled != Some(false) || enable_set.contains(rule_name_str))
        });

        debug!("Final active rules count after filtering: {}", self.rules.len());
    }
}

/// Merges user-defined rules with the built-in set.
///
/// Semantics, per rule name:
/// - A user rule matching a built-in rule overrides its matcher only if the
///   user rule supplies a `pattern`; otherwise the built-in matcher (and its
///   multiline flag) is kept.
/// - Styles are shallow-merged by property: user values win, properties the
///   user did not set are inherited. An empty user style list therefore
///   removes nothing (merge, not replace).
/// - User rules matching no built-in name are appended after all built-ins,
///   in their given order.
///
/// The result preserves built-in canonical order; this ordering is the
/// tie-break for matches sharing a start offset, so it is observable.
pub fn merge_rules(default_config: StyleConfig, user_config: Option<StyleConfig>) -> StyleConfig {
    debug!(
        "merge_rules called. Initial default rules count: {}",
        default_config.rules.len()
    );

    let mut user_rules = user_config.map(|c| c.rules).unwrap_or_default();
    let mut merged: Vec<StyleRule> = Vec::with_capacity(default_config.rules.len() + user_rules.len());

    for builtin in default_config.rules {
        if let Some(pos) = user_rules.iter().position(|r| r.name == builtin.name) {
            let custom = user_rules.remove(pos);
            debug!("Merging user rule '{}' over built-in.", builtin.name);
            merged.push(merge_rule(builtin, custom));
        } else {
            merged.push(builtin);
        }
    }

    // Whatever is left did not match a built-in name: append in input order.
    debug!("Appending {} user-only rules.", user_rules.len());
    merged.extend(user_rules);

    debug!("Final total rules after merge: {}", merged.len());
    StyleConfig { rules: merged }
}

fn merge_rule(builtin: StyleRule, custom: StyleRule) -> StyleRule {
    let (pattern, multiline) = if custom.pattern.is_some() {
        (custom.pattern, custom.multiline)
    } else {
        (builtin.pattern, builtin.multiline)
    };

    // Inherited/overridden properties keep the built-in position; properties
    // new in the user rule append after, in user order.
    let mut styles = builtin.styles;
    for setting in custom.styles {
        if let Some(slot) = styles.iter_mut().find(|s| s.property() == setting.property()) {
            *slot = setting;
        } else {
            styles.push(setting);
        }
    }

    StyleRule {
        name: builtin.name,
        description: custom.description.or(builtin.description),
        pattern,
        multiline,
        styles,
        enabled: custom.enabled.or(builtin.enabled),
    }
}

/// Validates rule integrity (names, matcher compilation, capture groups).
pub fn validate_rules(rules: &[StyleRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        // A missing pattern is legal in a user rule (it inherits the built-in
        // matcher on merge); only supplied patterns are checked here.
        let pattern = match &rule.pattern {
            Some(p) => p,
            None => continue,
        };

        if pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
            continue;
        }

        if pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.name,
                pattern.len(),
                MAX_PATTERN_LENGTH
            ));
            continue;
        }

        match Regex::new(pattern) {
            Ok(re) => {
                // captures_len() counts the implicit whole-match group 0.
                let groups = re.captures_len() - 1;
                if groups != 1 {
                    errors.push(format!(
                        "Rule '{}': matcher must define exactly one capture group (found {}).",
                        rule.name, groups
                    ));
                }
            }
            Err(e) => {
                errors.push(format!("Rule '{}' has an invalid matcher pattern: {}", rule.name, e));
            }
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Rule validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}
