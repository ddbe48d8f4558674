// markstyle-core/src/plugins.rs
//! Post-parse plugin chain for `markstyle-core`.
//!
//! After the engine produces a `Parsed` value, a chain of named plugins may
//! each receive and return one, rewriting the text further. A plugin that
//! edits the text is responsible for keeping the transform offsets correct
//! relative to its own edits; the `helpers` submodule carries the offset
//! utilities most plugins need for that.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::debug;

use crate::transform::Parsed;

/// A named post-parse text/transform rewriter.
pub trait StylePlugin: Send + Sync {
    /// Unique plugin name, used in logs and error reports.
    fn name(&self) -> &str;

    /// Consumes a `Parsed` value and returns the rewritten one.
    ///
    /// The returned transforms must still address valid character ranges of
    /// the returned text.
    fn transform(&self, parsed: Parsed) -> Result<Parsed>;
}

/// Runs `parsed` through each plugin in order.
pub fn apply_plugins(mut parsed: Parsed, plugins: &[Box<dyn StylePlugin>]) -> Result<Parsed> {
    for plugin in plugins {
        debug!("Applying plugin '{}'.", plugin.name());
        parsed = plugin
            .transform(parsed)
            .with_context(|| format!("Plugin '{}' failed", plugin.name()))?;
    }
    Ok(parsed)
}

/// Offset utilities for plugin authors.
pub mod helpers {
    use crate::transform::Transform;

    /// Locates `needle` in `text` and returns its `(start, len)` character
    /// range, the way transforms address ranges.
    pub fn find_range(text: &str, needle: &str) -> Option<(usize, usize)> {
        let byte_start = text.find(needle)?;
        let start = text[..byte_start].chars().count();
        Some((start, needle.chars().count()))
    }

    /// Shifts the start of every transform beginning at or after `at` by
    /// `delta` characters. Useful after inserting or removing text at a
    /// single edit point. Starts are clamped at zero.
    pub fn shift_from(transforms: &mut [Transform], at: usize, delta: isize) {
        for transform in transforms.iter_mut() {
            if transform.start >= at {
                transform.start = if delta.is_negative() {
                    transform.start.saturating_sub(delta.unsigned_abs())
                } else {
                    transform.start + delta as usize
                };
            }
        }
    }
}
