// markstyle-core/src/lib.rs
//! # MarkStyle Core Library
//!
//! `markstyle-core` provides the fundamental, platform-independent logic for
//! converting lightweight inline markdown markup into a cleaned string plus
//! an ordered list of style transforms anchored to character ranges in that
//! string, ready for a downstream rich-text styling API.
//!
//! The library is designed to be pure and stateless, focusing solely on rule
//! matching and offset remapping, without concerns for I/O or
//! application-specific state management.
//!
//! ## Modules
//!
//! * `config`: Defines `StyleRule`s and `StyleConfig`, plus the rule-set
//!   builder that merges user rules over the built-ins by name.
//! * `rules`: Compiles rule matchers, enforcing the single-capture-group
//!   contract, with a process-wide compilation cache.
//! * `transform`: Defines `Transform`, `Parsed`, and match reporting types.
//! * `engine`: Defines the `StylingEngine` trait, enabling a modular design.
//! * `engines`: Contains concrete implementations of the `StylingEngine`
//!   trait (currently the markdown engine).
//! * `fonts`: Font slot maps resolving `%slot%` tokens in font values.
//! * `render`: The injected `StyleSink` contract and the ordered rendering
//!   fold, plus a recording sink.
//! * `plugins`: The post-parse plugin chain and offset helpers.
//! * `headless`: Convenience wrappers for one-shot, non-interactive use.
//!
//! ## Offset semantics
//!
//! All offsets and lengths are character (codepoint) counts, never byte
//! counts. A transform's range addresses the CLEANED text: the engine keeps
//! a running count of stripped delimiter characters and shifts every
//! subsequent range left by it. Transform order is observable: each style
//! call narrows sub-ranges of previously styled text, so the rendering fold
//! must apply them in list order.
//!
//! ## Usage Example
//!
//! ```rust
//! use markstyle_core::parse_markup;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let parsed = parse_markup("This should be *bold*", None, None)?;
//!
//!     assert_eq!(parsed.text, "This should be bold");
//!     assert_eq!(parsed.transforms.len(), 1);
//!     assert_eq!(parsed.transforms[0].method_name(), "setFont");
//!     assert_eq!(parsed.transforms[0].start, 15);
//!     assert_eq!(parsed.transforms[0].len, 4);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The library uses `anyhow::Error` for fallible operations and defines
//! specific error types like `MarkStyleError::MissingCaptureGroup` for
//! clearer error reporting. Sink-side failures surface as
//! `MarkStyleError::NotStyleable` and propagate uncaught.
//!
//! ## Design Principles
//!
//! * **Pluggable Architecture:** The `StylingEngine` trait allows different
//!   markup dialects to be swapped out seamlessly.
//! * **Stateless:** Each `parse` and merge call is a pure function of its
//!   inputs; nothing persists across calls except the compilation cache.
//! * **Explicit dispatch:** Style operations are enumerated tagged variants
//!   checked by the compiler, not string-built method names.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod fonts;
pub mod headless;
pub mod plugins;
pub mod render;
pub mod rules;
pub mod transform;

/// Re-exports the public configuration types and functions for managing
/// style rules.
pub use config::{
    merge_rules,
    validate_rules,
    StyleConfig,
    StyleProperty,
    StyleRule,
    StyleSetting,
    MAX_PATTERN_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::MarkStyleError;

/// Re-exports types related to the core styling engine trait.
pub use engine::StylingEngine;

/// Re-exports the concrete `MarkdownEngine` implementation.
pub use engines::markdown::MarkdownEngine;

/// Re-exports match and transform types.
pub use transform::{MarkupMatch, MatchSummaryItem, Parsed, Transform};

/// Re-exports font slot mapping.
pub use fonts::FontMap;

/// Re-exports the rendering contract and helpers.
pub use render::{apply_transform, render, render_with_base, StyleSink, TransformLog};

/// Re-exports the plugin chain.
pub use plugins::{apply_plugins, StylePlugin};

/// Re-exports functions for one-shot, non-interactive use.
pub use headless::{build_config, parse_markup};

// Re-export key types from the rules::compiler module for advanced usage.
pub use rules::compiler::{compile_rules, get_or_compile_rules, CompiledRule, CompiledRules};
