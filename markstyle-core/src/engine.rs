// markstyle-core/src/engine.rs
//! Defines the core StylingEngine trait.
//!
//! The `StylingEngine` trait provides a pluggable interface for markup
//! engines. This module defines the contract that all such engines must
//! adhere to, ensuring a consistent and interchangeable core API for
//! `markstyle`.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;

use crate::config::StyleConfig;
use crate::rules::compiler::CompiledRules;
use crate::transform::{MarkupMatch, MatchSummaryItem, Parsed};

/// A trait that defines the core functionality of a markup styling engine.
///
/// This trait decouples the high-level application logic from the specific
/// markup dialect, allowing different engines to be used interchangeably.
pub trait StylingEngine: Send + Sync {
    /// Performs a full parse of the provided markup.
    ///
    /// Finds every rule match, strips all delimiter syntax, and emits one
    /// style transform per (match, style property) pair, with ranges
    /// re-anchored to the cleaned text. Transform order follows ascending
    /// match start position in the original text (ties keep rule order),
    /// then the rule's declared property order.
    fn parse(&self, markup: &str) -> Result<Parsed>;

    /// Finds all matches without rewriting anything.
    ///
    /// Returns the matches in global processing order: ascending original
    /// start offset, ties broken by rule position in the rule list.
    fn scan(&self, markup: &str) -> Result<Vec<MarkupMatch>>;

    /// Summarizes matches per rule, for reporting UIs. The original content
    /// is not modified.
    fn summarize(&self, markup: &str) -> Result<Vec<MatchSummaryItem>>;

    /// Returns a reference to the `CompiledRules` used by the engine.
    ///
    /// This is used by external components, such as the rules listing
    /// command, to access information about the rules without needing to
    /// recompile them.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns a reference to the engine's configuration.
    fn config(&self) -> &StyleConfig;
}
