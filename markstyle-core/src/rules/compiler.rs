//! compiler.rs - Manages the compilation and caching of style rules.
//!
//! This module provides a thread-safe, cached mechanism to convert a
//! `StyleConfig` into `CompiledRules`, which are optimized for efficient
//! scanning. It uses a global, shared cache to avoid redundant compilation.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{StyleConfig, StyleRule, StyleSetting, MAX_PATTERN_LENGTH};
use crate::errors::MarkStyleError;

/// Represents a single compiled style rule.
///
/// This struct holds a compiled matcher along with the style settings to
/// emit for each of its matches, ready for efficient application.
#[derive(Debug)]
pub struct CompiledRule {
    /// The unique name of the style rule.
    pub name: String,
    /// The compiled matcher. Capture group 1 is the content to keep.
    pub regex: Regex,
    /// Style properties to emit per match, in declaration order.
    pub styles: Vec<StyleSetting>,
}

/// Represents the full compiled rule set for one scan pass.
///
/// Rule order is preserved from the source configuration; it is the
/// tie-break order for matches sharing a start offset.
#[derive(Debug)]
pub struct CompiledRules {
    /// A vector of `CompiledRule` instances ready for application.
    pub rules: Vec<CompiledRule>,
}

lazy_static! {
    /// A thread-safe, global cache for compiled rules.
    /// The key is a hash of the `StyleConfig`.
    static ref COMPILED_RULES_CACHE: RwLock<HashMap<u64, Arc<CompiledRules>>> =
        RwLock::new(HashMap::new());
}

/// Hashes the `StyleConfig` to create a stable, unique key for the cache.
///
/// Rules are sorted by name before hashing so the key does not depend on
/// declaration order quirks between otherwise identical configs.
fn hash_config(config: &StyleConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    let mut rules_to_hash = config.rules.clone();

    rules_to_hash.sort_by(|a, b| a.name.cmp(&b.name));
    rules_to_hash.hash(&mut hasher);
    hasher.finish()
}

/// Compiles a list of `StyleRule`s into `CompiledRules` for efficient matching.
/// This is the low-level function that performs the actual regex compilation.
pub fn compile_rules(rules_to_compile: Vec<StyleRule>) -> Result<CompiledRules, MarkStyleError> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::new();
    let mut compilation_errors = Vec::new();

    for rule in rules_to_compile {
        let pattern = match rule.pattern.as_ref() {
            Some(pattern) => pattern,
            None => {
                warn!("Skipping rule '{}' because its pattern is missing.", &rule.name);
                continue;
            }
        };

        debug!("Attempting to compile rule: '{}' with pattern '{:?}'", &rule.name, pattern);

        if pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(MarkStyleError::PatternLengthExceeded(
                rule.name,
                pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let regex_result = RegexBuilder::new(pattern)
            .multi_line(rule.multiline)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build();

        match regex_result {
            Ok(regex) => {
                let groups = regex.captures_len() - 1;
                if groups != 1 {
                    compilation_errors.push(MarkStyleError::MissingCaptureGroup {
                        rule: rule.name,
                        groups,
                    });
                    continue;
                }
                debug!("Rule '{}' compiled successfully.", &rule.name);
                compiled_rules.push(CompiledRule {
                    name: rule.name,
                    regex,
                    styles: rule.styles,
                });
            }
            Err(e) => {
                compilation_errors.push(MarkStyleError::RuleCompilationError(rule.name, e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        // Collect errors into a single string for a concise error report
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(MarkStyleError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
        Ok(CompiledRules { rules: compiled_rules })
    }
}

/// Gets a `CompiledRules` instance from the cache or compiles them if not found.
///
/// This is the public entry point for retrieving compiled rules. It returns an
/// `Arc` to a `CompiledRules` instance, allowing for cheap sharing.
pub fn get_or_compile_rules(config: &StyleConfig) -> Result<Arc<CompiledRules>> {
    let cache_key = hash_config(config);

    // Attempt to acquire a read lock first.
    {
        let cache = COMPILED_RULES_CACHE.read().unwrap();
        if let Some(rules) = cache.get(&cache_key) {
            debug!("Serving compiled rules from cache for key: {}", &cache_key);
            return Ok(Arc::clone(rules));
        }
    } // Read lock is released here.

    // Not in cache, so we compile.
    debug!("Compiled rules not found in cache. Compiling now.");
    let compiled = compile_rules(config.rules.clone())?;
    let compiled_arc = Arc::new(compiled);

    // Acquire a write lock to insert the new rules.
    COMPILED_RULES_CACHE
        .write()
        .unwrap()
        .insert(cache_key, Arc::clone(&compiled_arc));

    debug!("Successfully compiled and cached rules for key: {}", &cache_key);
    Ok(compiled_arc)
}
